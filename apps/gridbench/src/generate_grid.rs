//! generate-grid — write a random weighted grid for the benchmark harness.
//!
//! Run with: `cargo run -p gridbench --bin generate-grid -- --dimension 500`

mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gb_grid::{GridConfig, GridDimension, GridGenerator, GridObserver, NoopObserver, DEFAULT_OUTPUT_FILE};

#[derive(Parser)]
#[command(name = "generate-grid")]
#[command(about = "Generate a random weighted grid for pathfinding benchmarks")]
#[command(version)]
struct Args {
    /// Side length of the square grid
    #[arg(short, long, allow_hyphen_values = true)]
    dimension: GridDimension,

    /// Output grid file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Suppress the per-row progress line
    #[arg(short, long)]
    quiet: bool,
}

// ── Progress ──────────────────────────────────────────────────────────────────

/// Rewrites a single stderr line after each row.
struct ProgressPrinter;

impl GridObserver for ProgressPrinter {
    fn on_row_written(&mut self, row: usize, total: usize) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "\rWriting row {row} of {total}");
        let _ = err.flush();
    }

    fn on_grid_end(&mut self, _dimension: usize) {
        eprintln!();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init("generate_grid");
    let args = Args::parse();

    let config = GridConfig {
        output_path: args.output,
        seed:        args.seed,
        ..GridConfig::default()
    };
    let mut generator = GridGenerator::new(config)?;

    let (mut noop, mut progress) = (NoopObserver, ProgressPrinter);
    let observer: &mut dyn GridObserver = if args.quiet { &mut noop } else { &mut progress };
    let path = generator.generate(args.dimension.get(), observer)?;

    info!(
        "wrote {}×{} grid to {}",
        args.dimension,
        args.dimension,
        path.display()
    );
    Ok(())
}
