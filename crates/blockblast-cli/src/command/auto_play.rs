use std::path::PathBuf;

use anyhow::Context as _;
use blockblast_engine::{DealSeed, GameField, ShapeDealer};
use chrono::Utc;
use rand::Rng as _;

use crate::{
    schema::record::{RecordedSession, TurnRecord},
    util,
};

use super::planner_args::{PlannerArgs, PlannerSettings};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Dealer seed as 32 hex characters (random if omitted)
    #[arg(long)]
    seed: Option<DealSeed>,
    /// Stop after this many turns even if the game is not over
    #[arg(long, default_value_t = 1000)]
    max_turns: usize,
    #[clap(flatten)]
    planner: PlannerArgs,
    /// Output file path for the session recording (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        seed,
        max_turns,
        planner,
        output,
    } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let settings = planner.load()?;
    let session = play_session(seed, *max_turns, &settings)?;

    log::info!(
        "session finished after {} turns: {} lines cleared, best combo {}{}",
        session.final_stats.turns(),
        session.final_stats.total_cleared_lines(),
        session.final_stats.best_combo_streak(),
        if session.game_over { " (game over)" } else { "" },
    );
    util::write_json(&session, output.as_deref())
}

fn play_session(
    seed: DealSeed,
    max_turns: usize,
    settings: &PlannerSettings,
) -> anyhow::Result<RecordedSession> {
    log::info!("auto-play with seed {seed}");
    let planner = settings.planner();
    let mut dealer = ShapeDealer::with_seed(seed);
    let mut field = GameField::new();
    let mut turns = vec![];
    let mut game_over = false;

    for turn in 0..max_turns {
        field.deal(&mut dealer);
        let before = *field.board();
        let tray = field.tray_shapes();
        let combo = field.combo();

        let report = planner.plan_with_report(&before, &tray, combo);
        if report.placements().is_empty() {
            log::info!("turn {turn}: no plan places the whole tray");
            game_over = true;
            break;
        }
        let cleared_lines = field
            .apply_solution(report.placements())
            .with_context(|| format!("planned placement failed on turn {turn}"))?;
        log::debug!("turn {turn}: cleared {cleared_lines} lines\n{}", field.board());

        turns.push(TurnRecord {
            turn,
            before,
            tray,
            combo_streak: combo.streak(),
            placements: report.placements().to_vec(),
            cleared_lines,
            score: report.score(),
        });
    }

    Ok(RecordedSession {
        recorded_at: Utc::now(),
        seed,
        weights: settings.weights.clone(),
        planner: settings.config,
        game_over,
        final_stats: field.stats().clone(),
        turns,
    })
}

#[cfg(test)]
mod tests {
    use blockblast_evaluator::{turn_planner::PlannerConfig, weights::HeuristicWeights};

    use super::*;

    fn settings() -> PlannerSettings {
        PlannerSettings {
            weights: HeuristicWeights::default(),
            config: PlannerConfig::default(),
        }
    }

    #[test]
    fn test_session_is_reproducible() {
        let seed = DealSeed::from_bytes([9; 16]);
        let a = play_session(seed, 10, &settings()).unwrap();
        let b = play_session(seed, 10, &settings()).unwrap();
        assert_eq!(a.final_stats, b.final_stats);
        assert_eq!(a.turns.len(), b.turns.len());
        for (x, y) in a.turns.iter().zip(&b.turns) {
            assert_eq!(x.placements, y.placements);
        }
    }

    #[test]
    fn test_session_records_every_turn() {
        let session = play_session(DealSeed::from_bytes([1; 16]), 5, &settings()).unwrap();
        assert!(session.turns.len() <= 5);
        assert_eq!(session.game_over, session.turns.len() < 5);
        for record in &session.turns {
            assert_eq!(record.placements.len(), record.tray.len());
        }
        let placed: usize = session.turns.iter().map(|t| t.placements.len()).sum();
        assert_eq!(session.final_stats.placed_shapes(), placed);

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["seed"], "01010101010101010101010101010101");
    }
}
