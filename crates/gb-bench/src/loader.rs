//! Benchmark CSV loader.
//!
//! # CSV format
//!
//! One header line (ignored, whatever it says) followed by one line per grid
//! instance with exactly [`FIELD_COUNT`] fields in [`SCHEMA`] order:
//!
//! ```csv
//! dijkstra_dist,dijkstra_nodes,dijkstra_time,astar_dist,...
//! 10,120,0.52,10,40,0.21,12,35,0.19,10,18,0.05
//! ```
//!
//! A line with the wrong field count, or a field that does not convert to its
//! column's type, aborts the whole load.  Skipping bad lines would let a
//! partial aggregate pass for a complete one.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use gb_core::{GbError, GbResult};

use crate::schema::{AlgorithmResult, BenchmarkRecord, FIELD_COUNT, SCHEMA};

/// Load every record from a benchmark CSV file.
pub fn load_records_csv(path: &Path) -> GbResult<Vec<BenchmarkRecord>> {
    let file = std::fs::File::open(path)?;
    let records = load_records_reader(file)?;
    debug!(path = %path.display(), records = records.len(), "benchmark records loaded");
    Ok(records)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
///
/// An empty source, or one holding only the header, yields no records.
pub fn load_records_reader<R: Read>(reader: R) -> GbResult<Vec<BenchmarkRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut raw = StringRecord::new();
    loop {
        match csv_reader.read_record(&mut raw) {
            Ok(true) => records.push(parse_record(&raw)?),
            Ok(false) => break,
            Err(e) => return Err(csv_error(e)),
        }
    }
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(raw: &StringRecord) -> GbResult<BenchmarkRecord> {
    let line = raw.position().map_or(0, |p| p.line());
    if raw.len() != FIELD_COUNT {
        return Err(GbError::schema(
            line,
            format!("expected {FIELD_COUNT} fields, found {}", raw.len()),
        ));
    }

    let mut record = BenchmarkRecord::default();
    for cols in &SCHEMA {
        record.results[cols.algorithm.index()] = AlgorithmResult {
            distance:       field(raw, cols.distance, line)?,
            nodes_expanded: field(raw, cols.nodes, line)?,
            elapsed:        field(raw, cols.time, line)?,
        };
    }
    Ok(record)
}

fn field<T: FromStr>(raw: &StringRecord, col: usize, line: u64) -> GbResult<T> {
    let text = &raw[col];
    text.parse().map_err(|_| {
        GbError::schema(
            line,
            format!("column {col}: cannot convert {text:?} to {}", std::any::type_name::<T>()),
        )
    })
}

fn csv_error(e: csv::Error) -> GbError {
    if e.is_io_error() {
        return GbError::Io(std::io::Error::from(e));
    }
    let line = e.position().map_or(0, |p| p.line());
    GbError::schema(line, e.to_string())
}
