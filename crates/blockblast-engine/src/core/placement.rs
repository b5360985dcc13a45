use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

/// Board position that a shape's `(0, 0)` offset is mapped to.
///
/// Anchors order row-major (row first, then column).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Anchor {
    row: u8,
    col: u8,
}

impl Anchor {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    #[must_use]
    pub fn col(self) -> usize {
        usize::from(self.col)
    }

    /// Iterates in row-major order over every anchor that keeps a
    /// `height × width` bounding box on the board.
    #[expect(clippy::cast_possible_truncation)]
    pub fn all_within(height: usize, width: usize) -> impl Iterator<Item = Self> {
        let max_row = BOARD_SIZE.saturating_sub(height) as u8;
        let max_col = BOARD_SIZE.saturating_sub(width) as u8;
        (0..=max_row).flat_map(move |row| (0..=max_col).map(move |col| Self::new(row, col)))
    }
}

/// One step of a solution: which input shape goes where.
///
/// Serialized as `{"shape_index": i, "row": r, "col": c}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    shape_index: usize,
    #[serde(flatten)]
    anchor: Anchor,
}

impl Placement {
    #[must_use]
    pub const fn new(shape_index: usize, anchor: Anchor) -> Self {
        Self {
            shape_index,
            anchor,
        }
    }

    /// Index into the caller's shape list.
    #[must_use]
    pub const fn shape_index(&self) -> usize {
        self.shape_index
    }

    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }
}
