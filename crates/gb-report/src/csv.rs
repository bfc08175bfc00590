//! CSV report backend.
//!
//! One row per algorithm under a fixed header.  Dijkstra's `success_count`
//! cell is left empty.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ::csv::Writer;

use gb_bench::AggregateReport;

use crate::writer::ReportWriter;
use crate::ReportResult;

pub const HEADER: [&str; 4] = ["algorithm", "total_nodes", "total_time", "success_count"];

/// Writes aggregate totals as CSV.
pub struct CsvReportWriter<W: Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvReportWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> ReportResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvReportWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> ReportResult<Self> {
        let mut writer = Writer::from_writer(sink);
        writer.write_record(HEADER)?;
        Ok(Self { writer, finished: false })
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, report: &AggregateReport) -> ReportResult<()> {
        for totals in report.iter() {
            self.writer.write_record(&[
                totals.algorithm.as_str().to_owned(),
                totals.total_nodes.to_string(),
                totals.total_time.to_string(),
                totals.success_count.map(|s| s.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
