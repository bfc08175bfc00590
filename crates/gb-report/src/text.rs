//! Console report backend.
//!
//! ```text
//! Dijkstra
//! ----------
//! Total nodes: 200
//! Total time: 2
//!
//! A*
//! ----------
//! Total nodes: 70
//! Total time: 1
//! Times succeeded: 1
//! ```
//!
//! Dijkstra has no success line; it defines the optimum.

use std::io::Write;

use gb_bench::AggregateReport;

use crate::writer::ReportWriter;
use crate::ReportResult;

const RULE: &str = "----------";

/// Writes the human-readable summary to any `io::Write` sink.
pub struct TextReportWriter<W: Write> {
    sink:     W,
    finished: bool,
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_report(&mut self, report: &AggregateReport) -> ReportResult<()> {
        for (i, totals) in report.iter().enumerate() {
            if i > 0 {
                writeln!(self.sink)?;
            }
            writeln!(self.sink, "{}", totals.algorithm.label())?;
            writeln!(self.sink, "{RULE}")?;
            writeln!(self.sink, "Total nodes: {}", totals.total_nodes)?;
            writeln!(self.sink, "Total time: {}", totals.total_time)?;
            if let Some(success) = totals.success_count {
                writeln!(self.sink, "Times succeeded: {success}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sink.flush()?;
        Ok(())
    }
}
