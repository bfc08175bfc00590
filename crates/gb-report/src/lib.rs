//! `gb-report` — rendering of benchmark aggregates.
//!
//! Two [`ReportWriter`] backends and one plot:
//!
//! | Type               | Output                                                  |
//! |--------------------|---------------------------------------------------------|
//! | `TextReportWriter` | console summary, one block per algorithm                |
//! | `CsvReportWriter`  | `algorithm,total_nodes,total_time,success_count`        |
//! | `ScatterPlot`      | SVG, optimal distance vs. nodes expanded per algorithm  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gb_report::{ReportWriter, TextReportWriter};
//!
//! let report = gb_bench::aggregate(&records);
//! let mut out = TextReportWriter::new(std::io::stdout().lock());
//! out.write_report(&report)?;
//! out.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod plot;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvReportWriter;
pub use error::{ReportError, ReportResult};
pub use plot::{PlotConfig, ScatterPlot, Series, DEFAULT_SERIES};
pub use text::TextReportWriter;
pub use writer::ReportWriter;
