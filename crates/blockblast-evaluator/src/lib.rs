//! Scoring and planning for the 8×8 block-placement puzzle.
//!
//! The crate has two levels:
//!
//! 1. **Placement Evaluation** ([`placement_evaluator`]) - Scores the board left behind by a
//!    single placement, given the combo context before the move.
//! 2. **Turn Planning** ([`turn_planner`]) - Beam search over the order and position of every
//!    shape in the tray, accumulating placement scores.
//!
//! # Architecture
//!
//! ```text
//! Turn Planning (best placement sequence for a tray)
//!     ↓ uses
//! Placement Evaluation (score one placement)
//!     ↓ uses
//! Placement / Board Analysis (lazy board metrics)
//! ```
//!
//! # Supporting Modules
//!
//! - [`board_analysis`] - Lazily computed board metrics (holes, column heights, roughness,
//!   near-complete lines, catalog shapes that no longer fit)
//! - [`placement_analysis`] - A placement together with its line clears and the resulting board
//! - [`weights`] - Tunable constants of the heuristic
//!
//! # Example
//!
//! ```
//! use blockblast_engine::{BitBoard, Shape};
//! use blockblast_evaluator::turn_planner;
//!
//! let board = BitBoard::from_ascii("#######.");
//! let shapes = [
//!     Shape::from_offsets(&[(0, 0)]),
//!     Shape::from_offsets(&[(0, 0), (0, 1)]),
//! ];
//!
//! let plan = turn_planner::solve(&board, &shapes, 0);
//! assert_eq!(plan.len(), 2);
//! ```

pub mod board_analysis;
pub mod placement_analysis;
pub mod placement_evaluator;
pub mod turn_planner;
pub mod weights;
