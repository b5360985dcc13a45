//! Turn planning: choosing the order and position of every shape in the tray.
//!
//! # How It Works
//!
//! [`BeamPlanner`] runs a breadth-bounded best-first search. One search level places one
//! shape, so the depth equals the number of non-empty shapes:
//!
//! 1. **Expand** - For each surviving candidate and each shape it has not placed yet,
//!    enumerate the shape's valid anchors
//! 2. **Pre-prune** - If a shape has more than `max_moves_per_shape` anchors, keep only
//!    the best by a cheap priority: moves that complete a line come first while the
//!    candidate has not cleared anything this turn; otherwise anchors farther from the
//!    board center win, keeping the center open for large shapes
//! 3. **Score** - Apply the placement, clear lines, and add the
//!    [`PlacementEvaluator`] score (computed with the pre-move combo context) to the
//!    candidate's accumulated score
//! 4. **Select** - Keep the `beam_width` best candidates; equal scores keep the one
//!    generated first
//!
//! If some level produces no candidate at all, no full plan exists and the result is
//! empty.
//!
//! # Determinism
//!
//! Shapes are tried in input order, anchors in row-major order (or in descending priority
//! order after pre-pruning, ties going to the later row and then the later column), and
//! all ranking ties fall back to generation order. The same input always yields the same
//! plan.
//!
//! # Usage
//!
//! ```
//! use blockblast_engine::{Anchor, BitBoard, Placement, Shape};
//! use blockblast_evaluator::{
//!     placement_evaluator::ComboHeuristicEvaluator,
//!     turn_planner::{BeamPlanner, PlannerConfig},
//! };
//!
//! let planner = BeamPlanner::new(
//!     Box::new(ComboHeuristicEvaluator::default()),
//!     PlannerConfig::default(),
//! );
//!
//! let board = BitBoard::from_ascii("#######.");
//! let plan = planner.plan(&board, &[Shape::from_offsets(&[(0, 0)])], 0);
//! assert_eq!(plan, [Placement::new(0, Anchor::new(0, 7))]);
//! ```

use std::cmp::Ordering;

use blockblast_engine::{Anchor, BOARD_SIZE, BitBoard, ComboState, GameField, Placement, Shape};
use serde::{Deserialize, Serialize};

use crate::{
    placement_analysis::PlacementAnalysis,
    placement_evaluator::{ComboHeuristicEvaluator, PlacementEvaluator},
};

/// Search limits of [`BeamPlanner`].
///
/// Both limits are clamped to at least 1 when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Candidates kept after each search level.
    pub beam_width: usize,
    /// Anchors kept per (candidate, shape) pair after pre-pruning.
    pub max_moves_per_shape: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            beam_width: 20,
            max_moves_per_shape: 8,
        }
    }
}

/// Expansion counts of one search level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepthStats {
    pub depth: usize,
    /// Candidates produced by expanding the previous beam.
    pub generated: usize,
    /// Candidates kept for the next level.
    pub retained: usize,
}

/// Result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    placements: Vec<Placement>,
    score: Option<f64>,
    depths: Vec<DepthStats>,
}

impl PlanReport {
    fn empty(depths: Vec<DepthStats>) -> Self {
        Self {
            placements: vec![],
            score: None,
            depths,
        }
    }

    /// The best placement sequence; empty when no full plan exists.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    /// Accumulated score of the returned sequence, `None` when it is empty.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.score
    }

    #[must_use]
    pub fn depths(&self) -> &[DepthStats] {
        &self.depths
    }
}

#[derive(Debug, Clone)]
struct Candidate {
    board: BitBoard,
    path: Vec<Placement>,
    remaining: Vec<usize>,
    combo: ComboState,
    score: f64,
    seq: usize,
}

impl Candidate {
    // higher score first, then generation order
    fn rank(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Beam search over placement order and position.
#[derive(Debug)]
pub struct BeamPlanner<'a> {
    evaluator: Box<dyn PlacementEvaluator + 'a>,
    config: PlannerConfig,
}

impl<'a> BeamPlanner<'a> {
    #[must_use]
    pub fn new(evaluator: Box<dyn PlacementEvaluator + 'a>, config: PlannerConfig) -> Self {
        Self { evaluator, config }
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans placements for `shapes` at the start of a turn.
    ///
    /// Empty shapes are skipped and never appear in the result. Returns an empty
    /// sequence when every shape is empty or when no order places them all.
    #[must_use]
    pub fn plan(&self, board: &BitBoard, shapes: &[Shape], combo_streak: u32) -> Vec<Placement> {
        self.plan_with_report(board, shapes, ComboState::new(combo_streak))
            .into_placements()
    }

    /// Plans the remaining tray of a game field, continuing its combo state.
    #[must_use]
    pub fn play_turn(&self, field: &GameField) -> Vec<Placement> {
        self.plan_with_report(field.board(), &field.tray_shapes(), field.combo())
            .into_placements()
    }

    /// Like [`Self::plan`], but starts from an arbitrary combo state and reports
    /// the score and per-level statistics.
    #[must_use]
    pub fn plan_with_report(
        &self,
        board: &BitBoard,
        shapes: &[Shape],
        combo: ComboState,
    ) -> PlanReport {
        let remaining: Vec<usize> = shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| !shape.is_empty())
            .map(|(i, _)| i)
            .collect();
        let depth_count = remaining.len();
        if depth_count == 0 {
            return PlanReport::empty(vec![]);
        }

        let beam_width = self.config.beam_width.max(1);
        let mut beam = vec![Candidate {
            board: *board,
            path: Vec::with_capacity(depth_count),
            remaining,
            combo,
            score: 0.0,
            seq: 0,
        }];
        let mut depths = Vec::with_capacity(depth_count);

        for depth in 1..=depth_count {
            let mut candidates = self.expand(&beam, shapes);
            let generated = candidates.len();
            if candidates.is_empty() {
                depths.push(DepthStats {
                    depth,
                    generated,
                    retained: 0,
                });
                log::debug!("depth {depth}: no placement possible, giving up");
                return PlanReport::empty(depths);
            }

            if candidates.len() > beam_width {
                candidates.select_nth_unstable_by(beam_width - 1, Candidate::rank);
                candidates.truncate(beam_width);
            }
            candidates.sort_by(Candidate::rank);

            log::debug!(
                "depth {depth}: generated {generated} candidates, retained {}, best score {}",
                candidates.len(),
                candidates[0].score,
            );
            depths.push(DepthStats {
                depth,
                generated,
                retained: candidates.len(),
            });
            beam = candidates;
        }

        let Some(best) = beam.into_iter().next() else {
            return PlanReport::empty(depths);
        };
        PlanReport {
            placements: best.path,
            score: Some(best.score),
            depths,
        }
    }

    fn expand(&self, beam: &[Candidate], shapes: &[Shape]) -> Vec<Candidate> {
        let mut candidates = vec![];
        for state in beam {
            if state.remaining.is_empty() {
                candidates.push(Candidate {
                    seq: candidates.len(),
                    ..state.clone()
                });
                continue;
            }

            for &index in &state.remaining {
                let shape = &shapes[index];
                for anchor in self.candidate_moves(&state.board, shape, state.combo) {
                    let analysis = PlacementAnalysis::from_board(&state.board, shape, anchor);
                    let move_score = self.evaluator.evaluate_placement(&analysis, state.combo);

                    let mut path = Vec::with_capacity(state.path.len() + 1);
                    path.extend_from_slice(&state.path);
                    path.push(Placement::new(index, anchor));

                    candidates.push(Candidate {
                        board: *analysis.board(),
                        path,
                        remaining: state
                            .remaining
                            .iter()
                            .copied()
                            .filter(|&i| i != index)
                            .collect(),
                        combo: state.combo.after_clear(analysis.cleared_lines()),
                        score: state.score + move_score,
                        seq: candidates.len(),
                    });
                }
            }
        }
        candidates
    }

    /// Valid anchors for `shape`, pre-pruned to `max_moves_per_shape`.
    fn candidate_moves(&self, board: &BitBoard, shape: &Shape, combo: ComboState) -> Vec<Anchor> {
        let max_moves = self.config.max_moves_per_shape.max(1);
        let moves: Vec<Anchor> = board.valid_moves(shape).collect();
        if moves.len() <= max_moves {
            return moves;
        }

        let mut ranked: Vec<(usize, Anchor)> = moves
            .into_iter()
            .map(|anchor| (move_priority(board, shape, anchor, combo), anchor))
            .collect();
        let total = ranked.len();
        // descending on (priority, row, col)
        ranked.sort_unstable_by(|a, b| b.cmp(a));
        ranked.truncate(max_moves);
        log::trace!(
            "pruned {total} anchors to {max_moves}:\n{shape}kept {:?}",
            ranked.iter().map(|(_, anchor)| anchor).collect::<Vec<_>>()
        );
        ranked.into_iter().map(|(_, anchor)| anchor).collect()
    }
}

/// Pre-pruning priority of a move; higher is tried first.
fn move_priority(board: &BitBoard, shape: &Shape, anchor: Anchor, combo: ComboState) -> usize {
    if !combo.secured() && board.place(shape, anchor).has_complete_line() {
        return usize::MAX;
    }
    center_distance(anchor)
}

/// Manhattan distance of an anchor from the board center, doubled to stay integral.
fn center_distance(anchor: Anchor) -> usize {
    (2 * anchor.row()).abs_diff(BOARD_SIZE - 1) + (2 * anchor.col()).abs_diff(BOARD_SIZE - 1)
}

/// Plans with the default heuristic and limits.
///
/// `combo_streak` is the streak carried over from previous turns.
#[must_use]
pub fn solve(board: &BitBoard, shapes: &[Shape], combo_streak: u32) -> Vec<Placement> {
    BeamPlanner::new(
        Box::new(ComboHeuristicEvaluator::default()),
        PlannerConfig::default(),
    )
    .plan(board, shapes, combo_streak)
}

#[cfg(test)]
mod tests {
    use blockblast_engine::{DealSeed, SHAPE_CATALOG, ShapeDealer};

    use super::*;

    const SINGLE: Shape = Shape::from_offsets(&[(0, 0)]);
    const DOMINO: Shape = Shape::from_offsets(&[(0, 0), (0, 1)]);
    const BIG_SQUARE: Shape = Shape::from_offsets(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ]);

    fn default_planner() -> BeamPlanner<'static> {
        BeamPlanner::new(
            Box::new(ComboHeuristicEvaluator::default()),
            PlannerConfig::default(),
        )
    }

    /// Scores every placement the same, so only generation order decides.
    #[derive(Debug)]
    struct FlatEvaluator;

    impl PlacementEvaluator for FlatEvaluator {
        fn evaluate_placement(&self, _analysis: &PlacementAnalysis, _combo: ComboState) -> f64 {
            0.0
        }
    }

    fn assert_feasible(board: &BitBoard, shapes: &[Shape], plan: &[Placement]) {
        let mut field = GameField::with_board(*board, 0);
        field.set_tray(shapes.iter().copied());
        field.apply_solution(plan).unwrap();
        assert!(field.is_tray_empty());
    }

    #[test]
    fn test_all_empty_shapes_yield_empty_plan() {
        let report = default_planner().plan_with_report(
            &BitBoard::EMPTY,
            &[Shape::EMPTY, Shape::EMPTY],
            ComboState::new(0),
        );
        assert!(report.placements().is_empty());
        assert!(report.depths().is_empty());
        assert_eq!(report.score(), None);
        assert!(solve(&BitBoard::EMPTY, &[], 0).is_empty());
    }

    #[test]
    fn test_no_feasible_move_yields_empty_plan() {
        assert!(solve(&BitBoard::FULL, &[SINGLE], 0).is_empty());

        // the single fits in the gap, the 3x3 square never does
        let board = BitBoard::from_ascii(
            "
            ###.####
            ###.####
            ###.####
            ########
            ########
            ########
            ########
            ########
            ",
        );
        let report =
            default_planner().plan_with_report(&board, &[BIG_SQUARE, SINGLE], ComboState::new(0));
        assert!(report.placements().is_empty());
        assert_eq!(report.depths().len(), 2);
        assert_eq!(report.depths()[0].generated, 3);
        assert_eq!(report.depths()[1].generated, 0);
    }

    #[test]
    fn test_plan_covers_every_non_empty_shape_once() {
        let shapes = [DOMINO, Shape::EMPTY, SINGLE];
        let plan = solve(&BitBoard::EMPTY, &shapes, 0);
        let mut indices: Vec<_> = plan.iter().map(Placement::shape_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, [0, 2]);
        assert_feasible(&BitBoard::EMPTY, &shapes, &plan);
    }

    #[test]
    fn test_plan_is_deterministic_and_feasible() {
        let mut dealer = ShapeDealer::with_seed(DealSeed::from_bytes([42; 16]));
        let mut board = BitBoard::EMPTY;
        for _ in 0..5 {
            let shapes = dealer.deal();
            let first = solve(&board, &shapes, 0);
            let second = solve(&board, &shapes, 0);
            assert_eq!(first, second);
            if first.is_empty() {
                break;
            }
            assert_eq!(first.len(), shapes.len());
            assert_feasible(&board, &shapes, &first);

            let mut field = GameField::with_board(board, 0);
            field.set_tray(shapes);
            field.apply_solution(&first).unwrap();
            board = *field.board();
        }
    }

    #[test]
    fn test_prefers_completing_a_line() {
        let board = BitBoard::from_ascii("#######.");
        let plan = solve(&board, &[SINGLE], 0);
        assert_eq!(plan, [Placement::new(0, Anchor::new(0, 7))]);
    }

    #[test]
    fn test_beam_width_bounds_retained_candidates() {
        let report = default_planner().plan_with_report(
            &BitBoard::EMPTY,
            &[SINGLE, DOMINO, BIG_SQUARE],
            ComboState::new(0),
        );
        assert_eq!(report.placements().len(), 3);
        assert_eq!(report.depths().len(), 3);
        // three shapes, eight pre-pruned anchors each
        assert_eq!(report.depths()[0].generated, 24);
        for stats in report.depths() {
            assert!(stats.retained <= 20);
        }
        assert!(report.score().is_some());
    }

    #[test]
    fn test_report_score_matches_replayed_evaluation() {
        let board = BitBoard::from_ascii(
            "
            #######.
            ######..
            ",
        );
        let shapes = [SINGLE, DOMINO];
        let report = default_planner().plan_with_report(&board, &shapes, ComboState::new(3));

        let evaluator = ComboHeuristicEvaluator::default();
        let mut current = board;
        let mut combo = ComboState::new(3);
        let mut total = 0.0;
        for placement in report.placements() {
            let shape = &shapes[placement.shape_index()];
            let analysis = PlacementAnalysis::from_board(&current, shape, placement.anchor());
            total += evaluator.evaluate_placement(&analysis, combo);
            combo = combo.after_clear(analysis.cleared_lines());
            current = *analysis.board();
        }
        assert_eq!(report.score(), Some(total));
    }

    #[test]
    fn test_beam_ties_keep_first_generated() {
        // (7, 7) and (7, 0) both score 460; (7, 7) is generated first
        let report =
            default_planner().plan_with_report(&BitBoard::EMPTY, &[SINGLE], ComboState::new(0));
        assert_eq!(report.placements(), [Placement::new(0, Anchor::new(7, 7))]);
        assert_eq!(report.score(), Some(460.0));
    }

    #[test]
    fn test_beam_ties_beyond_width_keep_generation_order() {
        let planner = BeamPlanner::new(
            Box::new(FlatEvaluator),
            PlannerConfig {
                beam_width: 3,
                max_moves_per_shape: 8,
            },
        );
        let report =
            planner.plan_with_report(&BitBoard::EMPTY, &[SINGLE, SINGLE], ComboState::new(0));

        // 16 equal candidates at the first level, 3 kept
        assert_eq!(report.depths()[0].generated, 16);
        assert!(report.depths().iter().all(|stats| stats.retained == 3));
        // first shape at its first pruned anchor, then the second shape at the first
        // anchor still free
        assert_eq!(
            report.placements(),
            [
                Placement::new(0, Anchor::new(7, 7)),
                Placement::new(1, Anchor::new(7, 0)),
            ]
        );
        assert_eq!(report.score(), Some(0.0));
    }

    #[test]
    fn test_pruning_prefers_far_from_center() {
        let planner = default_planner();
        let moves = planner.candidate_moves(&BitBoard::EMPTY, &SINGLE, ComboState::new(0));
        let expected = [
            (7, 7),
            (7, 0),
            (0, 7),
            (0, 0),
            (7, 6),
            (7, 1),
            (6, 7),
            (6, 0),
        ]
        .map(|(r, c)| Anchor::new(r, c));
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_pruning_keeps_clearing_move_until_secured() {
        let board = BitBoard::from_ascii(
            "
            ........
            ........
            ........
            ###.####
            ",
        );
        let planner = default_planner();
        let clearing = Anchor::new(3, 3);

        let moves = planner.candidate_moves(&board, &SINGLE, ComboState::new(0));
        assert_eq!(moves[0], clearing);

        let secured = ComboState::new(0).after_clear(1);
        let moves = planner.candidate_moves(&board, &SINGLE, secured);
        assert!(!moves.contains(&clearing));
    }

    #[test]
    fn test_small_move_sets_keep_row_major_order() {
        let planner = default_planner();
        let board = BitBoard::from_ascii(
            "
            ........
            ########
            ########
            ########
            ########
            ########
            ########
            ########
            ",
        );
        let moves = planner.candidate_moves(&board, &DOMINO, ComboState::new(0));
        let expected: Vec<_> = (0..7).map(|col| Anchor::new(0, col)).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_limits_are_clamped() {
        let planner = BeamPlanner::new(
            Box::new(ComboHeuristicEvaluator::default()),
            PlannerConfig {
                beam_width: 0,
                max_moves_per_shape: 0,
            },
        );
        let report =
            planner.plan_with_report(&BitBoard::EMPTY, &[SINGLE, DOMINO], ComboState::new(0));
        assert_eq!(report.placements().len(), 2);
        assert_eq!(report.depths()[0].generated, 2);
        assert!(report.depths().iter().all(|stats| stats.retained == 1));
    }

    #[test]
    fn test_play_turn_continues_field_state() {
        let mut field = GameField::with_board(BitBoard::from_ascii("######.."), 0);
        field.set_tray([DOMINO, SINGLE, SINGLE]);
        field
            .apply_placement(Placement::new(0, Anchor::new(0, 6)))
            .unwrap();
        assert!(field.combo().secured());

        let plan = default_planner().play_turn(&field);
        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|p| p.shape_index() != 0));
        field.apply_solution(&plan).unwrap();
        assert!(field.is_tray_empty());
    }

    #[test]
    fn test_catalog_shapes_plan_on_empty_board() {
        for shape in SHAPE_CATALOG {
            let plan = solve(&BitBoard::EMPTY, &[shape], 0);
            assert_eq!(plan.len(), 1, "no plan for\n{shape}");
        }
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"beam_width": 5}"#).unwrap();
        assert_eq!(config.beam_width, 5);
        assert_eq!(config.max_moves_per_shape, 8);
    }
}
