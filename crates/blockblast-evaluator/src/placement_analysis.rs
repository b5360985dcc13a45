//! Analysis of the board left behind by one placement.
//!
//! [`PlacementAnalysis`] combines:
//!
//! 1. **Line clears** - How many rows plus columns the placement completed
//! 2. **Board state** - Metrics of the post-clear board via [`BoardAnalysis`]
//!
//! The `BoardAnalysis` inside is lazy, so evaluators only pay for the metrics they read.

use blockblast_engine::{Anchor, BitBoard, Shape};

use crate::board_analysis::BoardAnalysis;

#[derive(Debug)]
pub struct PlacementAnalysis {
    shape: Shape,
    anchor: Anchor,
    cleared_lines: usize,
    board_analysis: BoardAnalysis,
}

impl PlacementAnalysis {
    /// Places `shape` at `anchor`, clears completed lines and analyzes the result.
    ///
    /// # Panics
    ///
    /// Panics if the placement is infeasible on `before_placement`.
    #[must_use]
    pub fn from_board(before_placement: &BitBoard, shape: &Shape, anchor: Anchor) -> Self {
        let (board, cleared_lines) = before_placement.place(shape, anchor).clear_lines();
        Self {
            shape: *shape,
            anchor,
            cleared_lines,
            board_analysis: BoardAnalysis::from_board(&board),
        }
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.cleared_lines
    }

    #[must_use]
    pub fn board_analysis(&self) -> &BoardAnalysis {
        &self.board_analysis
    }

    /// The board after placement and line clearing.
    #[must_use]
    pub fn board(&self) -> &BitBoard {
        self.board_analysis.board()
    }
}
