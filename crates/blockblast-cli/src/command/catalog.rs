use std::path::PathBuf;

use blockblast_engine::SHAPE_CATALOG;

use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CatalogArg {
    /// Output file path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &CatalogArg) -> anyhow::Result<()> {
    util::write_json(&SHAPE_CATALOG[..], arg.output.as_deref())
}
