//! Game-level state built on top of the [`core`](crate::core) value types.
//!
//! - [`GameField`] - Board plus the current tray of shapes, with checked placement
//! - [`ComboState`] - Consecutive-clear streak and the per-turn "secured" latch
//! - [`GameStats`] - Counters accumulated over a session
//! - [`ShapeDealer`] - Seeded generator dealing trays of catalog shapes
//! - [`DealSeed`] - Seed for deterministic dealing
//!
//! # Turn Flow
//!
//! 1. The dealer fills the tray with [`TRAY_SIZE`] shapes
//! 2. The player (or planner) places every shape, in any order
//! 3. Each placement clears complete rows and columns and updates the combo
//! 4. When the tray is empty a new one is dealt; the combo streak carries over
//! 5. The game ends when no tray shape fits anywhere
//!
//! # Example
//!
//! ```
//! use blockblast_engine::{Anchor, DealSeed, GameField, Placement, ShapeDealer};
//!
//! let mut dealer = ShapeDealer::with_seed(DealSeed::from_bytes([7; 16]));
//! let mut field = GameField::new();
//! field.deal(&mut dealer);
//!
//! let shape = field.tray()[0].unwrap();
//! let anchor = field.board().first_fit(&shape).unwrap();
//! field.apply_placement(Placement::new(0, anchor)).unwrap();
//! assert_eq!(field.stats().placed_shapes(), 1);
//! ```

pub use self::{combo::*, game_field::*, game_stats::*, shape_dealer::*};

mod combo;
mod game_field;
mod game_stats;
mod shape_dealer;
