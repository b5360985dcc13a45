use blockblast_engine::{BitBoard, DealSeed, GameStats, Placement, Shape};
use blockblast_evaluator::{turn_planner::PlannerConfig, weights::HeuristicWeights};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A headless self-play session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedSession {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed of the shape dealer
    pub seed: DealSeed,
    pub weights: HeuristicWeights,
    pub planner: PlannerConfig,
    /// `true` if the session ended because no plan placed the whole tray
    pub game_over: bool,
    pub final_stats: GameStats,
    pub turns: Vec<TurnRecord>,
}

/// One dealt tray and how it was played.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (0-indexed)
    pub turn: usize,
    /// Board before the first placement of the turn
    pub before: BitBoard,
    pub tray: Vec<Shape>,
    /// Combo streak carried into the turn
    pub combo_streak: u32,
    pub placements: Vec<Placement>,
    pub cleared_lines: usize,
    /// Accumulated heuristic score the planner assigned to the turn
    pub score: Option<f64>,
}
