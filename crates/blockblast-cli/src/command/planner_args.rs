use std::path::PathBuf;

use blockblast_evaluator::{
    placement_evaluator::ComboHeuristicEvaluator,
    turn_planner::{BeamPlanner, PlannerConfig},
    weights::HeuristicWeights,
};

use crate::util;

/// Planner options shared by every command that plans.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlannerArgs {
    /// Heuristic weights file (JSON); missing fields keep their defaults
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Candidates kept after each search level
    #[arg(long)]
    beam_width: Option<usize>,
    /// Anchors kept per shape after pre-pruning
    #[arg(long)]
    max_moves: Option<usize>,
}

/// Resolved planner settings.
#[derive(Debug, Clone)]
pub(crate) struct PlannerSettings {
    pub(crate) weights: HeuristicWeights,
    pub(crate) config: PlannerConfig,
}

impl PlannerArgs {
    pub(crate) fn load(&self) -> anyhow::Result<PlannerSettings> {
        let weights = match &self.weights {
            Some(path) => util::read_json_file("weights", path)?,
            None => HeuristicWeights::default(),
        };
        let defaults = PlannerConfig::default();
        let config = PlannerConfig {
            beam_width: self.beam_width.unwrap_or(defaults.beam_width),
            max_moves_per_shape: self.max_moves.unwrap_or(defaults.max_moves_per_shape),
        };
        log::debug!("planner settings: {config:?}, {weights:?}");
        Ok(PlannerSettings { weights, config })
    }
}

impl PlannerSettings {
    pub(crate) fn planner(&self) -> BeamPlanner<'static> {
        BeamPlanner::new(
            Box::new(ComboHeuristicEvaluator::new(self.weights.clone())),
            self.config,
        )
    }
}
