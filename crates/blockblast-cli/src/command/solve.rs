use std::path::PathBuf;

use blockblast_engine::ComboState;

use crate::{
    schema::{puzzle::Puzzle, solution::SolutionReport},
    util,
};

use super::planner_args::PlannerArgs;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SolveArg {
    /// Puzzle file (JSON): board, shapes, and optionally combo streak and screen geometry
    puzzle: PathBuf,
    #[clap(flatten)]
    planner: PlannerArgs,
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SolveArg) -> anyhow::Result<()> {
    let SolveArg {
        puzzle,
        planner,
        output,
    } = arg;

    let puzzle: Puzzle = util::read_json_file("puzzle", puzzle)?;
    log::info!(
        "board has {} occupied cells, {} shapes, combo streak {}",
        puzzle.board.occupied_count(),
        puzzle.shapes.iter().filter(|shape| !shape.is_empty()).count(),
        puzzle.combo_streak,
    );

    let planner = planner.load()?.planner();
    let report = planner.plan_with_report(
        &puzzle.board,
        &puzzle.shapes,
        ComboState::new(puzzle.combo_streak),
    );
    match report.score() {
        Some(score) => log::info!(
            "found {} placements (score {score})",
            report.placements().len()
        ),
        None => log::warn!("no placement sequence fits every shape"),
    }

    let solution = SolutionReport::new(&puzzle, &report)?;
    util::write_json(&solution, output.as_deref())
}
