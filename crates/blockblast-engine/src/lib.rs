//! Board model and game rules for an 8×8 block-placement puzzle.
//!
//! - [`core`] holds the value types: [`BitBoard`], [`Shape`], [`Anchor`], [`Placement`]
//!   and the [`SHAPE_CATALOG`] of every piece the game can spawn.
//! - [`engine`] holds the game-level layer: the [`GameField`] a turn is played on,
//!   the seeded [`ShapeDealer`], combo tracking and [`GameStats`].

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Malformed board or shape input.
///
/// Input is rejected rather than normalized: a board must be exactly 8×8 with cells
/// in `{0, 1}`, and shape offsets must be unique, non-negative and inside the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidInputError {
    #[display("board must be 8x8, got {rows} rows with a row of width {cols}")]
    BoardDimensions { rows: usize, cols: usize },
    #[display("board cell ({row}, {col}) must be 0 or 1, got {value}")]
    CellValue { row: usize, col: usize, value: u8 },
    #[display("shape offset ({row}, {col}) is negative")]
    NegativeOffset { row: i32, col: i32 },
    #[display("shape offset ({row}, {col}) lies outside an 8x8 board")]
    OffsetOutOfRange { row: i32, col: i32 },
    #[display("shape offset ({row}, {col}) appears more than once")]
    DuplicateOffset { row: i32, col: i32 },
}

/// A placement that cannot be applied to a [`GameField`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("shape index {index} is out of range for a tray of {len}")]
    ShapeIndexOutOfRange { index: usize, len: usize },
    #[display("shape {index} has already been placed this turn")]
    ShapeAlreadyPlaced { index: usize },
    #[display("shape {index} does not fit at {anchor}")]
    Infeasible { index: usize, anchor: Anchor },
}
