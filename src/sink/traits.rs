//! Report sink trait and the report type it accepts.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Rendered output of one analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the analyzer that produced the report.
    pub analyzer: String,

    /// Rendered report text.
    pub text: String,
}

impl Report {
    pub fn new<N: Into<String>, T: Into<String>>(analyzer: N, text: T) -> Self {
        Report {
            analyzer: analyzer.into(),
            text: text.into(),
        }
    }
}

/// A destination for rendered reports.
pub trait ReportSink: Send + std::fmt::Debug {
    /// Persist `report`, returning a human-readable location.
    fn write_report(&mut self, report: &Report) -> Result<String>;

    /// Flush anything buffered.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Write every report to `sink`, returning `(analyzer, location)` pairs.
pub fn write_reports(
    sink: &mut dyn ReportSink,
    reports: &[Report],
) -> Result<Vec<(String, String)>> {
    let mut written = Vec::with_capacity(reports.len());
    for report in reports {
        let location = sink.write_report(report)?;
        written.push((report.analyzer.clone(), location));
    }
    sink.flush()?;
    Ok(written)
}
