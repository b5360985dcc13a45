use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

use super::BOARD_SIZE;

/// A polyomino given as cell offsets from its own origin.
///
/// Shapes are immutable values. Internally each shape is stored as one bitmask per
/// row of its bounding box, which makes collision checks against a
/// [`BitBoard`](crate::BitBoard) a handful of shifts and ands, and lets
/// the [`SHAPE_CATALOG`](crate::SHAPE_CATALOG) be built at compile time.
///
/// Offsets are `(row, col)` pairs with `row` growing downward. They are not
/// renormalized: a shape whose cells avoid `(0, 0)` keeps its offsets, and the
/// anchor of a placement is where `(0, 0)` lands.
///
/// [`Shape::EMPTY`] has no cells and stands for "no piece in this slot".
///
/// # Serialization
///
/// Serialized as a list of `[row, col]` pairs in row-major order. Deserialization
/// rejects negative, out-of-board and duplicate offsets.
///
/// # Example
///
/// ```
/// use blockblast_engine::Shape;
///
/// let ell = Shape::from_offsets(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
/// assert_eq!(ell.size(), 4);
/// assert_eq!((ell.height(), ell.width()), (3, 2));
///
/// let cells: Vec<_> = ell.cells().collect();
/// assert_eq!(cells, [(0, 0), (1, 0), (2, 0), (2, 1)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<(i32, i32)>", into = "Vec<(u8, u8)>")]
pub struct Shape {
    rows: [u8; BOARD_SIZE],
    height: u8,
    width: u8,
    size: u8,
}

impl Default for Shape {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl TryFrom<Vec<(i32, i32)>> for Shape {
    type Error = InvalidInputError;

    fn try_from(offsets: Vec<(i32, i32)>) -> Result<Self, Self::Error> {
        Self::try_from_offsets(&offsets)
    }
}

impl From<Shape> for Vec<(u8, u8)> {
    #[expect(clippy::cast_possible_truncation)]
    fn from(shape: Shape) -> Self {
        shape
            .cells()
            .map(|(row, col)| (row as u8, col as u8))
            .collect()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &mask in self.row_masks() {
            for col in 0..self.width() {
                let ch = if (mask >> col) & 1 != 0 { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Shape {
    /// The sentinel shape with no cells.
    pub const EMPTY: Self = Self {
        rows: [0; BOARD_SIZE],
        height: 0,
        width: 0,
        size: 0,
    };

    /// Builds a shape from trusted `(row, col)` offsets.
    ///
    /// Usable in const context; the catalog is built this way.
    ///
    /// # Panics
    ///
    /// Panics if an offset lies outside the 8×8 board or appears twice. Use
    /// [`try_from_offsets`](Self::try_from_offsets) for untrusted input.
    #[must_use]
    pub const fn from_offsets(offsets: &[(u8, u8)]) -> Self {
        let mut rows = [0; BOARD_SIZE];
        let mut height = 0;
        let mut width = 0;
        let mut size = 0;
        let mut i = 0;
        while i < offsets.len() {
            let (row, col) = offsets[i];
            assert!(
                (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
                "shape offset out of range"
            );
            assert!(rows[row as usize] & (1 << col) == 0, "duplicate shape offset");
            rows[row as usize] |= 1 << col;
            if row + 1 > height {
                height = row + 1;
            }
            if col + 1 > width {
                width = col + 1;
            }
            size += 1;
            i += 1;
        }
        Self {
            rows,
            height,
            width,
            size,
        }
    }

    /// Builds a shape from untrusted `(row, col)` offsets.
    ///
    /// An empty offset list yields [`Shape::EMPTY`].
    pub fn try_from_offsets(offsets: &[(i32, i32)]) -> Result<Self, InvalidInputError> {
        let mut seen = [0u8; BOARD_SIZE];
        let mut checked = Vec::with_capacity(offsets.len());
        for &(row, col) in offsets {
            if row < 0 || col < 0 {
                return Err(InvalidInputError::NegativeOffset { row, col });
            }
            let (Ok(r), Ok(c)) = (u8::try_from(row), u8::try_from(col)) else {
                return Err(InvalidInputError::OffsetOutOfRange { row, col });
            };
            if usize::from(r) >= BOARD_SIZE || usize::from(c) >= BOARD_SIZE {
                return Err(InvalidInputError::OffsetOutOfRange { row, col });
            }
            if seen[usize::from(r)] & (1 << c) != 0 {
                return Err(InvalidInputError::DuplicateOffset { row, col });
            }
            seen[usize::from(r)] |= 1 << c;
            checked.push((r, c));
        }
        Ok(Self::from_offsets(&checked))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size as usize
    }

    /// Bounding-box height (`max row offset + 1`).
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Bounding-box width (`max col offset + 1`).
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// One bitmask per bounding-box row; bit `c` is set when offset `(row, c)` is a cell.
    #[must_use]
    pub fn row_masks(&self) -> &[u8] {
        &self.rows[..self.height()]
    }

    /// Iterates over the cell offsets in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_masks()
            .iter()
            .enumerate()
            .flat_map(|(row, &mask)| {
                (0..BOARD_SIZE)
                    .filter(move |col| (mask >> col) & 1 != 0)
                    .map(move |col| (row, col))
            })
    }
}
