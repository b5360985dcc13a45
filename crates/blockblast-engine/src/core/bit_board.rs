use std::fmt;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

use super::{BOARD_SIZE, placement::Anchor, shape::Shape};

// All eight cells of a row (or a column mask) occupied.
const FULL_LINE: u8 = u8::MAX;

/// The 8×8 occupancy grid.
///
/// Each row is stored as a `u8` bitmask where bit `c` is set when column `c` is
/// occupied. Row 0 is the top of the board.
///
/// `BitBoard` is a small `Copy` value: every operation that changes the grid
/// ([`place`](Self::place), [`clear_lines`](Self::clear_lines)) returns a new board
/// and leaves the receiver untouched, so search branches never alias each other.
///
/// # Serialization
///
/// Serialized as an 8×8 matrix of `0`/`1` integers. Deserialization validates the
/// dimensions and cell values (see [`InvalidInputError`]).
///
/// # Example
///
/// ```
/// use blockblast_engine::{Anchor, BitBoard, Shape};
///
/// let board = BitBoard::EMPTY;
/// let domino = Shape::from_offsets(&[(0, 0), (0, 1)]);
/// let anchor = Anchor::new(3, 6);
///
/// assert!(board.can_place(&domino, anchor));
/// let placed = board.place(&domino, anchor);
/// assert!(placed.is_cell_occupied(3, 7));
/// assert!(board.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BitBoard {
    rows: [u8; BOARD_SIZE],
}

impl TryFrom<Vec<Vec<u8>>> for BitBoard {
    type Error = InvalidInputError;

    fn try_from(cells: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_cells(&cells)
    }
}

impl From<BitBoard> for Vec<Vec<u8>> {
    fn from(board: BitBoard) -> Self {
        board.to_cells().iter().map(|row| row.to_vec()).collect()
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = if self.is_cell_occupied(row, col) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl BitBoard {
    pub const SIZE: usize = BOARD_SIZE;

    pub const EMPTY: Self = Self {
        rows: [0; BOARD_SIZE],
    };
    pub const FULL: Self = Self {
        rows: [FULL_LINE; BOARD_SIZE],
    };

    /// Builds a board from per-row bitmasks (bit `c` of `rows[r]` is cell `(r, c)`).
    #[must_use]
    pub const fn from_row_masks(rows: [u8; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Builds a board from a binary occupancy matrix.
    ///
    /// The matrix must have exactly 8 rows of 8 cells, each `0` (empty) or `1` (filled).
    pub fn from_cells<R>(cells: &[R]) -> Result<Self, InvalidInputError>
    where
        R: AsRef<[u8]>,
    {
        if cells.len() != BOARD_SIZE {
            return Err(InvalidInputError::BoardDimensions {
                rows: cells.len(),
                cols: cells.first().map_or(0, |row| row.as_ref().len()),
            });
        }

        let mut rows = [0; BOARD_SIZE];
        for (y, (bits, cells)) in rows.iter_mut().zip(cells).enumerate() {
            let cells = cells.as_ref();
            if cells.len() != BOARD_SIZE {
                return Err(InvalidInputError::BoardDimensions {
                    rows: BOARD_SIZE,
                    cols: cells.len(),
                });
            }
            for (x, &value) in cells.iter().enumerate() {
                match value {
                    0 => {}
                    1 => *bits |= 1 << x,
                    _ => return Err(InvalidInputError::CellValue { row: y, col: x, value }),
                }
            }
        }
        Ok(Self { rows })
    }

    /// Returns the board as a binary occupancy matrix.
    #[must_use]
    pub fn to_cells(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (row, out) in cells.iter_mut().enumerate() {
            for (col, cell) in out.iter_mut().enumerate() {
                *cell = u8::from(self.is_cell_occupied(row, col));
            }
        }
        cells
    }

    #[must_use]
    pub fn row_mask(&self, row: usize) -> u8 {
        self.rows[row]
    }

    /// Returns the occupancy of a column as a bitmask (bit `r` is cell `(r, col)`).
    #[must_use]
    pub fn column_mask(&self, col: usize) -> u8 {
        self.rows
            .iter()
            .enumerate()
            .fold(0, |mask, (row, bits)| mask | (((bits >> col) & 1) << row))
    }

    #[must_use]
    pub fn is_cell_occupied(&self, row: usize, col: usize) -> bool {
        (self.rows[row] >> col) & 1 != 0
    }

    #[must_use]
    pub fn row_fill_count(&self, row: usize) -> u32 {
        self.rows[row].count_ones()
    }

    #[must_use]
    pub fn column_fill_count(&self, col: usize) -> u32 {
        self.column_mask(col).count_ones()
    }

    #[must_use]
    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }

    /// Returns `true` if at least one row or column is completely filled.
    #[must_use]
    pub fn has_complete_line(&self) -> bool {
        self.rows.contains(&FULL_LINE) || self.full_columns() != 0
    }

    fn full_columns(&self) -> u8 {
        self.rows.iter().fold(FULL_LINE, |acc, &row| acc & row)
    }

    /// Checks whether `shape` fits with its origin at `anchor`.
    ///
    /// The shape's bounding box is checked against the board edges first; only then
    /// are the individual cells tested against occupied cells. The empty shape never
    /// fits.
    #[must_use]
    pub fn can_place(&self, shape: &Shape, anchor: Anchor) -> bool {
        if shape.is_empty() {
            return false;
        }
        let (row, col) = (anchor.row(), anchor.col());
        if row + shape.height() > BOARD_SIZE || col + shape.width() > BOARD_SIZE {
            return false;
        }
        shape
            .row_masks()
            .iter()
            .zip(&self.rows[row..])
            .all(|(&mask, &bits)| (mask << col) & bits == 0)
    }

    /// Returns a new board with the shape's cells marked occupied.
    ///
    /// # Panics
    ///
    /// Panics if the placement is infeasible. Callers are expected to check
    /// [`can_place`](Self::can_place) (or take the anchor from
    /// [`valid_moves`](Self::valid_moves)) first.
    #[must_use]
    pub fn place(&self, shape: &Shape, anchor: Anchor) -> Self {
        assert!(
            self.can_place(shape, anchor),
            "shape cannot be placed at {anchor}:\n{shape}"
        );
        let mut rows = self.rows;
        for (&mask, bits) in shape.row_masks().iter().zip(&mut rows[anchor.row()..]) {
            *bits |= mask << anchor.col();
        }
        Self { rows }
    }

    /// Clears every complete row and column in a single pass.
    ///
    /// Completeness is decided on the board as it is before clearing, so a line
    /// that only becomes full (or stops being full) because of another line in the
    /// same pass is not affected. The returned count is the number of complete rows
    /// plus the number of complete columns; a cell on both a cleared row and a
    /// cleared column counts toward both.
    #[must_use]
    pub fn clear_lines(&self) -> (Self, usize) {
        let full_columns = self.full_columns();
        let full_rows = self.rows.iter().filter(|&&row| row == FULL_LINE).count();
        let cleared = full_rows + full_columns.count_ones() as usize;
        if cleared == 0 {
            return (*self, 0);
        }

        let rows = self.rows.map(|row| {
            if row == FULL_LINE {
                0
            } else {
                row & !full_columns
            }
        });
        (Self { rows }, cleared)
    }

    /// Iterates over every anchor where `shape` fits, in row-major order.
    ///
    /// Only anchors that keep the shape's bounding box on the board are visited.
    /// The iterator is lazy, so `valid_moves(shape).next()` is a first-fit search.
    pub fn valid_moves(&self, shape: &Shape) -> impl Iterator<Item = Anchor> {
        Anchor::all_within(shape.height(), shape.width())
            .filter(move |&anchor| self.can_place(shape, anchor))
    }

    /// Returns the first feasible anchor in row-major order, if any.
    #[must_use]
    pub fn first_fit(&self, shape: &Shape) -> Option<Anchor> {
        self.valid_moves(shape).next()
    }

    /// Creates a `BitBoard` from ASCII art.
    ///
    /// `#` is an occupied cell and `.` an empty one; other characters are ignored.
    /// Up to 8 rows of exactly 8 cells are read from the top; missing rows at the
    /// bottom stay empty.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let lines: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert!(
            lines.len() <= BOARD_SIZE,
            "Board must have at most {BOARD_SIZE} rows, got {}",
            lines.len()
        );

        let mut rows = [0; BOARD_SIZE];
        for (y, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                chars.len(),
                BOARD_SIZE,
                "Each row must have exactly {BOARD_SIZE} cells, got {} at row {y}",
                chars.len(),
            );
            for (x, &ch) in chars.iter().enumerate() {
                if ch == '#' {
                    rows[y] |= 1 << x;
                }
            }
        }
        Self { rows }
    }
}
