//! Tunable constants of the combo heuristic
//! ([`ComboHeuristicEvaluator`](crate::placement_evaluator::ComboHeuristicEvaluator)).
//!
//! Every field has a default, and deserialization fills missing fields from it, so a
//! weights file only needs to list the values it changes:
//!
//! ```
//! use blockblast_evaluator::weights::HeuristicWeights;
//!
//! let weights: HeuristicWeights = serde_json::from_str(r#"{"hole_penalty": 900.0}"#).unwrap();
//! assert_eq!(weights.hole_penalty, 900.0);
//! assert_eq!(weights.roughness_penalty, 40.0);
//! ```

use serde::{Deserialize, Serialize};

/// Weights of the placement heuristic.
///
/// Penalties are stored as positive magnitudes and subtracted by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Subtracted per enclosed empty cell.
    pub hole_penalty: f64,
    /// Subtracted per unit of height difference between adjacent columns.
    pub roughness_penalty: f64,
    /// Penalties for catalog shapes that no longer fit anywhere.
    pub survival: SurvivalPenalties,
    /// Added when the move clears nothing and no clear has happened this turn yet.
    pub hungry_bonus: f64,
    /// Added per row or column with 6 of 8 cells filled.
    pub six_filled_bonus: f64,
    /// Added per row or column with 7 of 8 cells filled.
    pub seven_filled_bonus: f64,
    /// Multiplied by `streak + 1` when the move clears at least one line.
    pub combo_base: f64,
    /// Applied to the combo bonus when the move is the first clear of the turn.
    pub save_multiplier: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            hole_penalty: 600.0,
            roughness_penalty: 40.0,
            survival: SurvivalPenalties::default(),
            hungry_bonus: 500.0,
            six_filled_bonus: 50.0,
            seven_filled_bonus: 150.0,
            combo_base: 8000.0,
            save_multiplier: 2.0,
        }
    }
}

/// Penalty tiers for unplaceable shapes, keyed by cell count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalPenalties {
    /// Shapes with at least [`Self::HUGE_CELLS`] cells (the 3×3 block).
    pub huge: f64,
    /// Shapes with at least [`Self::LARGE_CELLS`] cells (five-cell lines and corners).
    pub large: f64,
    pub small: f64,
}

impl Default for SurvivalPenalties {
    fn default() -> Self {
        Self {
            huge: 5000.0,
            large: 2000.0,
            small: 100.0,
        }
    }
}

impl SurvivalPenalties {
    pub const HUGE_CELLS: usize = 9;
    pub const LARGE_CELLS: usize = 5;

    /// Returns the penalty for an unplaceable shape of `size` cells.
    #[must_use]
    pub fn for_size(&self, size: usize) -> f64 {
        if size >= Self::HUGE_CELLS {
            self.huge
        } else if size >= Self::LARGE_CELLS {
            self.large
        } else {
            self.small
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survival_tiers() {
        let penalties = SurvivalPenalties::default();
        assert_eq!(penalties.for_size(9), 5000.0);
        assert_eq!(penalties.for_size(6), 2000.0);
        assert_eq!(penalties.for_size(5), 2000.0);
        assert_eq!(penalties.for_size(4), 100.0);
        assert_eq!(penalties.for_size(2), 100.0);
    }

    #[test]
    fn test_nested_defaults() {
        let weights: HeuristicWeights =
            serde_json::from_str(r#"{"survival": {"huge": 1.0}}"#).unwrap();
        assert_eq!(weights.survival.huge, 1.0);
        assert_eq!(weights.survival.large, 2000.0);
        assert_eq!(weights.combo_base, 8000.0);
    }
}
