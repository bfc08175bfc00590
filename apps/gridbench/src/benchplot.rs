//! benchplot — scatter plot of optimal distance vs. nodes expanded.
//!
//! Writes an SVG file; open it in any browser.
//!
//! Run with: `cargo run -p gridbench --bin benchplot -- -f benchmark.csv`

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use gb_bench::load_records_csv;
use gb_core::Algorithm;
use gb_report::{PlotConfig, ScatterPlot, DEFAULT_SERIES};

#[derive(Parser)]
#[command(name = "benchplot")]
#[command(about = "Plot nodes expanded against optimal distance for each grid instance")]
#[command(version)]
struct Args {
    /// Filename with the benchmark data
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Output SVG file
    #[arg(short, long, default_value = "benchplot.svg")]
    output: PathBuf,

    /// Algorithms to plot (default: dijkstra, astar)
    #[arg(short, long, value_delimiter = ',')]
    series: Vec<Algorithm>,

    /// Plot title
    #[arg(short, long, default_value = "Benchmark")]
    title: String,
}

fn main() -> Result<()> {
    logging::init("benchplot");
    let args = Args::parse();

    let records = load_records_csv(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let series: &[Algorithm] = if args.series.is_empty() { &DEFAULT_SERIES } else { &args.series };
    let plot = ScatterPlot::from_records(&records, series, PlotConfig::default()).with_title(args.title);
    if plot.point_count() == 0 {
        warn!(file = %args.file.display(), "no benchmark records; plot has axes only");
    }
    for s in plot.series() {
        info!(algorithm = %s.algorithm, points = s.points.len(), "series");
    }
    plot.save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(())
}
