//! benchsummary — print per-algorithm totals for a benchmark CSV.
//!
//! Run with: `cargo run -p gridbench --bin benchsummary -- -f benchmark.csv`

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use gb_bench::{aggregate, load_records_csv};
use gb_report::{CsvReportWriter, ReportWriter, TextReportWriter};

#[derive(Parser)]
#[command(name = "benchsummary")]
#[command(about = "Summarize nodes expanded, time, and successes per algorithm")]
#[command(version)]
struct Args {
    /// Filename with the benchmark data
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Also write the totals as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init("benchsummary");
    let args = Args::parse();

    let records = load_records_csv(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let report = aggregate(&records);
    info!(records = report.record_count, "aggregated benchmark records");

    let mut text = TextReportWriter::new(std::io::stdout().lock());
    text.write_report(&report)?;
    text.finish()?;

    if let Some(path) = args.csv {
        let mut csv = CsvReportWriter::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        csv.write_report(&report)?;
        csv.finish()?;
        info!(path = %path.display(), "summary CSV written");
    }

    Ok(())
}
