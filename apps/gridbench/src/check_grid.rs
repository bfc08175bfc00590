//! check-grid — verify a grid file matches the harness input format.
//!
//! Checks shape and that every weight comes from the default pool.
//! Connectivity is not checked.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gb_grid::{load_grid_csv, DEFAULT_WEIGHT_POOL};

#[derive(Parser)]
#[command(name = "check-grid")]
#[command(about = "Validate a generated grid file")]
#[command(version)]
struct Args {
    /// Grid file to check
    file: PathBuf,
}

fn main() -> Result<()> {
    logging::init("check_grid");
    let args = Args::parse();

    let grid = load_grid_csv(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    grid.validate_weights(&DEFAULT_WEIGHT_POOL)
        .with_context(|| format!("checking {}", args.file.display()))?;

    let cells = grid.dimension * grid.dimension;
    info!(
        dimension = grid.dimension,
        blocked = grid.blocked_cells(),
        cells,
        "grid OK"
    );
    Ok(())
}
