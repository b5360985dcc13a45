//! Lazily computed metrics of a single board.

use std::{array, cell::OnceCell, iter};

use arrayvec::ArrayVec;
use blockblast_engine::{BOARD_SIZE, BitBoard, SHAPE_CATALOG, SHAPE_CATALOG_LEN, Shape};

/// Metrics of a board, each computed on first access.
///
/// The survivability scan over [`SHAPE_CATALOG`] is by far the most expensive
/// metric, so callers that only need the cheap structural metrics never pay for it.
///
/// # Example
///
/// ```
/// use blockblast_engine::BitBoard;
/// use blockblast_evaluator::board_analysis::BoardAnalysis;
///
/// let board = BitBoard::from_ascii(
///     "
///     ........
///     ...#....
///     ..#.#...
///     ...#....
///     ",
/// );
/// let analysis = BoardAnalysis::from_board(&board);
/// assert_eq!(analysis.num_holes(), 1);
/// assert_eq!(analysis.column_heights(), &[0, 0, 6, 7, 6, 0, 0, 0]);
/// assert_eq!(analysis.roughness(), 14);
/// ```
#[derive(Debug)]
pub struct BoardAnalysis {
    board: BitBoard,
    column_heights: OnceCell<[u8; BOARD_SIZE]>,
    num_holes: OnceCell<u32>,
    roughness: OnceCell<u32>,
    row_fill_counts: OnceCell<[u8; BOARD_SIZE]>,
    column_fill_counts: OnceCell<[u8; BOARD_SIZE]>,
    unplaceable_shapes: OnceCell<ArrayVec<Shape, SHAPE_CATALOG_LEN>>,
}

impl BoardAnalysis {
    #[must_use]
    pub fn from_board(board: &BitBoard) -> Self {
        Self {
            board: *board,
            column_heights: OnceCell::new(),
            num_holes: OnceCell::new(),
            roughness: OnceCell::new(),
            row_fill_counts: OnceCell::new(),
            column_fill_counts: OnceCell::new(),
            unplaceable_shapes: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    /// Height of each column: `8 - (row of the topmost occupied cell)`, or 0 when empty.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn column_heights(&self) -> &[u8; BOARD_SIZE] {
        self.column_heights.get_or_init(|| {
            array::from_fn(|col| {
                // bit `r` of the column mask is row `r`, so the topmost cell is the lowest bit
                let top = self.board.column_mask(col).trailing_zeros();
                (BOARD_SIZE as u32 - top) as u8
            })
        })
    }

    /// Number of empty cells whose four orthogonal neighbors are all occupied.
    ///
    /// Cells beyond the board edge count as occupied, so an empty corner boxed in
    /// by its two on-board neighbors is a hole.
    #[must_use]
    pub fn num_holes(&self) -> u32 {
        *self.num_holes.get_or_init(|| {
            (0..BOARD_SIZE)
                .map(|row| {
                    let bits = self.board.row_mask(row);
                    let up = row
                        .checked_sub(1)
                        .map_or(u8::MAX, |r| self.board.row_mask(r));
                    let down = if row + 1 < BOARD_SIZE {
                        self.board.row_mask(row + 1)
                    } else {
                        u8::MAX
                    };
                    let left = (bits << 1) | 0b0000_0001;
                    let right = (bits >> 1) | 0b1000_0000;
                    (!bits & up & down & left & right).count_ones()
                })
                .sum()
        })
    }

    /// Sum of absolute height differences between adjacent columns.
    #[must_use]
    pub fn roughness(&self) -> u32 {
        *self.roughness.get_or_init(|| {
            let heights = self.column_heights();
            iter::zip(heights, &heights[1..])
                .map(|(&a, &b)| u32::from(a.abs_diff(b)))
                .sum()
        })
    }

    #[must_use]
    pub fn row_fill_counts(&self) -> &[u8; BOARD_SIZE] {
        self.row_fill_counts
            .get_or_init(|| array::from_fn(|row| fill_count(self.board.row_mask(row))))
    }

    #[must_use]
    pub fn column_fill_counts(&self) -> &[u8; BOARD_SIZE] {
        self.column_fill_counts
            .get_or_init(|| array::from_fn(|col| fill_count(self.board.column_mask(col))))
    }

    /// Number of rows plus columns with exactly `filled` occupied cells.
    #[must_use]
    pub fn lines_with_fill(&self, filled: u8) -> usize {
        self.row_fill_counts()
            .iter()
            .chain(self.column_fill_counts())
            .filter(|&&count| count == filled)
            .count()
    }

    /// Catalog shapes that have no feasible anchor anywhere on this board.
    #[must_use]
    pub fn unplaceable_shapes(&self) -> &[Shape] {
        self.unplaceable_shapes.get_or_init(|| {
            SHAPE_CATALOG
                .iter()
                .filter(|shape| self.board.first_fit(shape).is_none())
                .copied()
                .collect()
        })
    }
}

#[expect(clippy::cast_possible_truncation)]
fn fill_count(mask: u8) -> u8 {
    mask.count_ones() as u8
}
