use blockblast_engine::{BitBoard, Shape};
use serde::{Deserialize, Serialize};

/// Input of the `solve` command.
///
/// `board` is an 8×8 matrix of `0`/`1`; each shape is a list of `[row, col]`
/// offsets, and an empty list marks an already used slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub board: BitBoard,
    pub shapes: Vec<Shape>,
    /// Combo streak carried over from previous turns
    #[serde(default)]
    pub combo_streak: u32,
    /// Where the board is on screen, when the puzzle came from a screenshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<BoardGeometry>,
    /// Screen bounding box of each tray shape, parallel to `shapes`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shape_bounds: Vec<Option<ScreenRect>>,
}

/// Pixel position of the board's top-left corner and the size of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    pub x: u32,
    pub y: u32,
    pub cell_size: u32,
}

/// Axis-aligned screen rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoardGeometry {
    /// Screen rectangle of board cell `(row, col)`.
    ///
    /// Returns `None` when the pixel position does not fit in `u32`.
    pub fn cell_rect(&self, row: usize, col: usize) -> Option<ScreenRect> {
        let offset = |origin: u32, index: usize| {
            u32::try_from(index)
                .ok()?
                .checked_mul(self.cell_size)?
                .checked_add(origin)
        };
        Some(ScreenRect {
            x: offset(self.x, col)?,
            y: offset(self.y, row)?,
            width: self.cell_size,
            height: self.cell_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_puzzle() {
        let json = r#"{
            "board": [
                [0,0,0,0,0,0,0,0], [0,0,0,0,0,0,0,0], [0,0,0,0,0,0,0,0], [0,0,0,0,0,0,0,0],
                [0,0,0,0,0,0,0,0], [0,0,0,0,0,0,0,0], [0,0,0,0,0,0,0,0], [1,1,1,1,1,1,1,0]
            ],
            "shapes": [[[0,0]], [], [[0,0],[1,0]]]
        }"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle.board.row_fill_count(7), 7);
        assert_eq!(puzzle.shapes.len(), 3);
        assert!(puzzle.shapes[1].is_empty());
        assert_eq!(puzzle.combo_streak, 0);
        assert!(puzzle.geometry.is_none());
        assert!(puzzle.shape_bounds.is_empty());
    }

    #[test]
    fn test_malformed_puzzle_is_rejected() {
        let json = r#"{ "board": [[0,0]], "shapes": [] }"#;
        assert!(serde_json::from_str::<Puzzle>(json).is_err());
    }

    #[test]
    fn test_cell_rect() {
        let geometry = BoardGeometry {
            x: 45,
            y: 564,
            cell_size: 120,
        };
        assert_eq!(
            geometry.cell_rect(2, 3),
            Some(ScreenRect {
                x: 405,
                y: 804,
                width: 120,
                height: 120
            })
        );
    }

    #[test]
    fn test_cell_rect_overflow() {
        let geometry = BoardGeometry {
            x: u32::MAX - 10,
            y: 0,
            cell_size: 100,
        };
        assert!(geometry.cell_rect(0, 0).is_some());
        assert_eq!(geometry.cell_rect(7, 7), None);

        let geometry = BoardGeometry {
            x: 0,
            y: 0,
            cell_size: u32::MAX,
        };
        assert_eq!(geometry.cell_rect(1, 0), None);
    }
}
