//! Placement evaluation: scoring the board left behind by a single placement.
//!
//! The score is a sum of independent terms:
//!
//! 1. **Structure** - Penalties for enclosed holes and for height differences between
//!    adjacent columns
//! 2. **Survivability** - Penalties for every catalog shape that no longer fits anywhere,
//!    tiered by shape size
//! 3. **Mode** - While no line has been cleared this turn, a move that clears nothing gets a
//!    flat "hungry" bonus; otherwise near-complete rows and columns are rewarded as setup
//! 4. **Combo** - A clearing move earns `(streak + 1) × base`, multiplied again when it is the
//!    first clear of the turn
//!
//! The combo context is the one in effect *before* the move.
//!
//! # Usage
//!
//! ```
//! use blockblast_engine::{BitBoard, ComboState};
//! use blockblast_evaluator::placement_evaluator::ComboHeuristicEvaluator;
//!
//! let evaluator = ComboHeuristicEvaluator::default();
//!
//! // First clear of the turn with a streak of 2: (2 + 1) × 8000, doubled.
//! let score = evaluator.evaluate_board(&BitBoard::EMPTY, 1, ComboState::new(2));
//! assert_eq!(score, 48_000.0);
//! ```

use std::fmt;

use blockblast_engine::{BitBoard, ComboState};
use serde::Serialize;

use crate::{
    board_analysis::BoardAnalysis, placement_analysis::PlacementAnalysis,
    weights::HeuristicWeights,
};

/// Evaluates placements by assigning scores.
pub trait PlacementEvaluator: fmt::Debug + Send + Sync {
    /// Evaluates a placement and returns a score (higher is better).
    ///
    /// # Arguments
    /// * `analysis` - The placement and its post-clear board
    /// * `combo` - Combo context before the placement
    fn evaluate_placement(&self, analysis: &PlacementAnalysis, combo: ComboState) -> f64;
}

/// Which branch of the mode selection applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Nothing cleared yet this turn: any clear is worth more than a tidy board.
    Hungry,
    /// A clear is secured: build near-complete lines for the next one.
    Setup,
}

/// Per-term contributions of one evaluation. Penalty terms are negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationBreakdown {
    pub holes: f64,
    pub roughness: f64,
    pub survival: f64,
    pub mode: EvaluationMode,
    /// Hungry bonus or setup bonus, depending on `mode`.
    pub mode_bonus: f64,
    pub combo: f64,
}

impl EvaluationBreakdown {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.holes + self.roughness + self.survival + self.mode_bonus + self.combo
    }
}

/// The combo-oriented heuristic used by the planner.
#[derive(Debug, Clone, Default)]
pub struct ComboHeuristicEvaluator {
    weights: HeuristicWeights,
}

impl ComboHeuristicEvaluator {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Scores a post-clear board directly.
    ///
    /// # Arguments
    /// * `board` - Board after placement and line clearing
    /// * `cleared_lines` - Lines cleared by the move
    /// * `combo` - Combo context before the move
    #[must_use]
    pub fn evaluate_board(&self, board: &BitBoard, cleared_lines: usize, combo: ComboState) -> f64 {
        self.breakdown(&BoardAnalysis::from_board(board), cleared_lines, combo)
            .total()
    }

    /// Computes every term of the score separately.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn breakdown(
        &self,
        analysis: &BoardAnalysis,
        cleared_lines: usize,
        combo: ComboState,
    ) -> EvaluationBreakdown {
        let w = &self.weights;

        let holes = -f64::from(analysis.num_holes()) * w.hole_penalty;
        let roughness = -f64::from(analysis.roughness()) * w.roughness_penalty;
        let survival = -analysis
            .unplaceable_shapes()
            .iter()
            .map(|shape| w.survival.for_size(shape.size()))
            .sum::<f64>();

        let (mode, mode_bonus) = if cleared_lines == 0 && !combo.secured() {
            (EvaluationMode::Hungry, w.hungry_bonus)
        } else {
            let setup = analysis.lines_with_fill(6) as f64 * w.six_filled_bonus
                + analysis.lines_with_fill(7) as f64 * w.seven_filled_bonus;
            (EvaluationMode::Setup, setup)
        };

        let combo_bonus = if cleared_lines > 0 {
            let bonus = (f64::from(combo.streak()) + 1.0) * w.combo_base;
            if combo.secured() {
                bonus
            } else {
                bonus * w.save_multiplier
            }
        } else {
            0.0
        };

        EvaluationBreakdown {
            holes,
            roughness,
            survival,
            mode,
            mode_bonus,
            combo: combo_bonus,
        }
    }
}

impl PlacementEvaluator for ComboHeuristicEvaluator {
    #[inline]
    fn evaluate_placement(&self, analysis: &PlacementAnalysis, combo: ComboState) -> f64 {
        self.breakdown(analysis.board_analysis(), analysis.cleared_lines(), combo)
            .total()
    }
}
