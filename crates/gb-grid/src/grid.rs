//! `GridSpec` and the CSV helpers shared by the generator and `write_csv`.

use std::io::Write;

use csv::{Writer, WriterBuilder};

use gb_core::{GbError, GbResult};

use crate::config::PLACEHOLDER_LEN;

/// Cell value marking an impassable cell.  All other values are traversal costs.
pub const BLOCKED: i32 = -1;

/// A square weighted grid as written to, or read from, a grid file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub dimension:       usize,
    pub placeholder_row: [i32; PLACEHOLDER_LEN],
    /// `dimension` rows of `dimension` cells each, top to bottom.
    pub rows:            Vec<Vec<i32>>,
}

impl GridSpec {
    /// Number of impassable cells.
    pub fn blocked_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&v| v == BLOCKED).count())
            .sum()
    }

    /// Check every cell against `pool`.
    ///
    /// The first offending cell is reported as a schema violation on the file
    /// line it would occupy (data rows start on line 3).
    pub fn validate_weights(&self, pool: &[i32]) -> GbResult<()> {
        for (y, row) in self.rows.iter().enumerate() {
            if let Some((x, v)) = row.iter().enumerate().find(|(_, v)| !pool.contains(v)) {
                return Err(GbError::schema(
                    y as u64 + 3,
                    format!("cell {x} has weight {v}, not in pool {pool:?}"),
                ));
            }
        }
        Ok(())
    }

    /// Write the grid in the harness input format.
    pub fn write_csv<W: Write>(&self, sink: W) -> GbResult<()> {
        let mut w = grid_writer(sink);
        write_preamble(&mut w, self.dimension, &self.placeholder_row)?;
        for row in &self.rows {
            write_row(&mut w, row)?;
        }
        w.flush()?;
        Ok(())
    }
}

// ── CSV helpers ───────────────────────────────────────────────────────────────

/// Rows differ in length (2, 4, then `dimension`), so the writer is flexible.
pub(crate) fn grid_writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new().has_headers(false).flexible(true).from_writer(sink)
}

/// Lines 1 and 2: the dimension header and the placeholder row.
pub(crate) fn write_preamble<W: Write>(
    w: &mut Writer<W>,
    dimension: usize,
    placeholder: &[i32; PLACEHOLDER_LEN],
) -> GbResult<()> {
    let dim = dimension.to_string();
    w.write_record([dim.as_str(), dim.as_str()]).map_err(std::io::Error::from)?;
    write_row(w, placeholder)
}

pub(crate) fn write_row<W: Write>(w: &mut Writer<W>, row: &[i32]) -> GbResult<()> {
    w.write_record(row.iter().map(i32::to_string))
        .map_err(std::io::Error::from)?;
    Ok(())
}
