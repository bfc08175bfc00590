//! Grid file loader.
//!
//! Reads the format written by [`GridGenerator`][crate::GridGenerator] and
//! checks its shape: a square `width,height` header, a four-value placeholder
//! row, then exactly `dimension` rows of `dimension` integers.  Any deviation
//! aborts the load; no partially read grid is returned.
//!
//! Weights are not checked against a pool here (see
//! [`GridSpec::validate_weights`]) and connectivity is never checked.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use gb_core::{GbError, GbResult};

use crate::config::{GridDimension, PLACEHOLDER_LEN};
use crate::grid::GridSpec;

/// Load a grid from a CSV file.
pub fn load_grid_csv(path: &Path) -> GbResult<GridSpec> {
    let file = std::fs::File::open(path)?;
    let grid = load_grid_reader(file)?;
    debug!(path = %path.display(), dimension = grid.dimension, "grid loaded");
    Ok(grid)
}

/// Like [`load_grid_csv`] but accepts any `Read` source.
pub fn load_grid_reader<R: Read>(reader: R) -> GbResult<GridSpec> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let mut records = csv_reader.records();
    let mut last_line = 0u64;

    let mut next_line = |what: &str| -> GbResult<(u64, StringRecord)> {
        match records.next() {
            Some(Ok(rec)) => {
                let line = rec.position().map_or(last_line + 1, |p| p.line());
                last_line = line;
                Ok((line, rec))
            }
            Some(Err(e)) => Err(csv_error(e)),
            None => Err(GbError::schema(last_line + 1, format!("unexpected end of file, expected {what}"))),
        }
    };

    // ── Line 1: width,height ──────────────────────────────────────────────
    let (line, header) = next_line("dimension header")?;
    expect_len(&header, 2, line)?;
    let width = parse_dimension(&header[0])?;
    let height = parse_dimension(&header[1])?;
    if width != height {
        return Err(GbError::schema(
            line,
            format!("grid must be square, got width {width} and height {height}"),
        ));
    }
    let dimension = width.get();

    // ── Line 2: placeholder ───────────────────────────────────────────────
    let (line, placeholder) = next_line("placeholder row")?;
    expect_len(&placeholder, PLACEHOLDER_LEN, line)?;
    let mut placeholder_row = [0i32; PLACEHOLDER_LEN];
    for (slot, field) in placeholder_row.iter_mut().zip(placeholder.iter()) {
        *slot = parse_cell(field, line)?;
    }

    // ── Data rows ─────────────────────────────────────────────────────────
    let mut rows = Vec::with_capacity(dimension);
    for _ in 0..dimension {
        let (line, rec) = next_line("grid row")?;
        expect_len(&rec, dimension, line)?;
        let row = rec
            .iter()
            .map(|field| parse_cell(field, line))
            .collect::<GbResult<Vec<i32>>>()?;
        rows.push(row);
    }

    if let Some(extra) = records.next() {
        let line = match extra {
            Ok(rec) => rec.position().map_or(last_line + 1, |p| p.line()),
            Err(e) => return Err(csv_error(e)),
        };
        return Err(GbError::schema(
            line,
            format!("unexpected trailing row after {dimension} grid rows"),
        ));
    }

    Ok(GridSpec { dimension, placeholder_row, rows })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn expect_len(rec: &StringRecord, expected: usize, line: u64) -> GbResult<()> {
    if rec.len() != expected {
        return Err(GbError::schema(
            line,
            format!("expected {expected} fields, found {}", rec.len()),
        ));
    }
    Ok(())
}

fn parse_dimension(field: &str) -> GbResult<GridDimension> {
    field.parse()
}

fn parse_cell(field: &str, line: u64) -> GbResult<i32> {
    field
        .parse::<i32>()
        .map_err(|_| GbError::schema(line, format!("{field:?} is not an integer")))
}

fn csv_error(e: csv::Error) -> GbError {
    if e.is_io_error() {
        return GbError::Io(std::io::Error::from(e));
    }
    let line = e.position().map_or(0, |p| p.line());
    GbError::schema(line, e.to_string())
}
