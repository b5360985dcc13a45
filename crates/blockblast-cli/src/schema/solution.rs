use anyhow::Context as _;
use blockblast_engine::Placement;
use blockblast_evaluator::turn_planner::{DepthStats, PlanReport};
use serde::Serialize;

use super::puzzle::{BoardGeometry, Puzzle, ScreenRect};

/// Output of the `solve` command.
#[derive(Debug, Clone, Serialize)]
pub struct SolutionReport {
    /// Placements in the order they should be made; empty when no plan fits every shape
    pub placements: Vec<Placement>,
    /// Accumulated heuristic score of the plan
    pub score: Option<f64>,
    /// Per-level search statistics
    pub search: Vec<DepthStats>,
    /// On-screen drag instructions, present when the puzzle carries geometry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<Vec<GuidanceStep>>,
}

/// One drag: which tray shape to pick up and which board cells it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceStep {
    /// 1-based step number
    pub step: usize,
    pub shape_index: usize,
    /// Bounding box of the shape in the tray, if it was detected
    pub source: Option<ScreenRect>,
    /// Screen rectangles of the board cells the shape will occupy
    pub target_cells: Vec<ScreenRect>,
}

impl SolutionReport {
    /// Fails when the puzzle's screen geometry puts a target cell outside the `u32` range.
    pub fn new(puzzle: &Puzzle, report: &PlanReport) -> anyhow::Result<Self> {
        let guidance = puzzle
            .geometry
            .map(|geometry| {
                report
                    .placements()
                    .iter()
                    .enumerate()
                    .map(|(i, placement)| GuidanceStep::new(puzzle, geometry, i + 1, placement))
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .transpose()?;
        Ok(Self {
            placements: report.placements().to_vec(),
            score: report.score(),
            search: report.depths().to_vec(),
            guidance,
        })
    }
}

impl GuidanceStep {
    fn new(
        puzzle: &Puzzle,
        geometry: BoardGeometry,
        step: usize,
        placement: &Placement,
    ) -> anyhow::Result<Self> {
        let shape_index = placement.shape_index();
        let anchor = placement.anchor();
        let target_cells = puzzle.shapes[shape_index]
            .cells()
            .map(|(dr, dc)| {
                let (row, col) = (anchor.row() + dr, anchor.col() + dc);
                geometry.cell_rect(row, col).with_context(|| {
                    format!("Board geometry {geometry:?} overflows at cell ({row}, {col})")
                })
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(Self {
            step,
            shape_index,
            source: puzzle.shape_bounds.get(shape_index).copied().flatten(),
            target_cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use blockblast_engine::{Anchor, BitBoard, ComboState, Shape};
    use blockblast_evaluator::{
        placement_evaluator::ComboHeuristicEvaluator,
        turn_planner::{BeamPlanner, PlannerConfig},
    };

    use super::*;

    fn plan(puzzle: &Puzzle) -> PlanReport {
        BeamPlanner::new(
            Box::new(ComboHeuristicEvaluator::default()),
            PlannerConfig::default(),
        )
        .plan_with_report(
            &puzzle.board,
            &puzzle.shapes,
            ComboState::new(puzzle.combo_streak),
        )
    }

    #[test]
    fn test_guidance_follows_placements() {
        let puzzle = Puzzle {
            board: BitBoard::from_ascii("######.."),
            shapes: vec![Shape::EMPTY, Shape::from_offsets(&[(0, 0), (0, 1)])],
            combo_streak: 0,
            geometry: Some(BoardGeometry {
                x: 10,
                y: 20,
                cell_size: 100,
            }),
            shape_bounds: vec![
                None,
                Some(ScreenRect {
                    x: 300,
                    y: 1500,
                    width: 200,
                    height: 100,
                }),
            ],
        };
        let solution = SolutionReport::new(&puzzle, &plan(&puzzle)).unwrap();

        assert_eq!(solution.placements.len(), 1);
        let guidance = solution.guidance.unwrap();
        assert_eq!(guidance.len(), 1);
        assert_eq!(guidance[0].step, 1);
        assert_eq!(guidance[0].shape_index, 1);
        assert_eq!(guidance[0].source.map(|r| r.x), Some(300));
        // the domino completes row 0 at columns 6 and 7
        let xs: Vec<_> = guidance[0].target_cells.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(xs, [(610, 20), (710, 20)]);
    }

    #[test]
    fn test_no_guidance_without_geometry() {
        let puzzle = Puzzle {
            board: BitBoard::FULL,
            shapes: vec![Shape::from_offsets(&[(0, 0)])],
            combo_streak: 0,
            geometry: None,
            shape_bounds: vec![],
        };
        let solution = SolutionReport::new(&puzzle, &plan(&puzzle)).unwrap();
        assert!(solution.placements.is_empty());
        assert_eq!(solution.score, None);

        let json = serde_json::to_value(&solution).unwrap();
        assert!(json.get("guidance").is_none());
        assert_eq!(json["placements"], serde_json::json!([]));
    }

    #[test]
    fn test_overflowing_geometry_is_an_error() {
        let puzzle = Puzzle {
            board: BitBoard::EMPTY,
            shapes: vec![Shape::from_offsets(&[(0, 0)])],
            combo_streak: 0,
            geometry: Some(BoardGeometry {
                x: u32::MAX - 10,
                y: 0,
                cell_size: 100,
            }),
            shape_bounds: vec![],
        };
        // the single lands in the bottom-right corner, far past the origin
        let report = plan(&puzzle);
        assert_eq!(
            report.placements(),
            [Placement::new(0, Anchor::new(7, 7))]
        );
        let err = SolutionReport::new(&puzzle, &report).unwrap_err();
        assert!(err.to_string().contains("overflows at cell (7, 7)"));
    }
}
