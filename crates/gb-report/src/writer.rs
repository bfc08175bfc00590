//! The `ReportWriter` trait implemented by all report backends.

use gb_bench::AggregateReport;

use crate::ReportResult;

/// Trait implemented by the text and CSV report writers.
pub trait ReportWriter {
    /// Write every algorithm's totals, in [`gb_core::Algorithm::ALL`] order.
    fn write_report(&mut self, report: &AggregateReport) -> ReportResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
