//! In-memory report sink for testing and embedding.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::sink::traits::{Report, ReportSink};

/// Keeps the latest report per analyzer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    reports: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report text for `analyzer`, if one was written.
    pub fn get(&self, analyzer: &str) -> Option<&str> {
        self.reports.get(analyzer).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn into_reports(self) -> BTreeMap<String, String> {
        self.reports
    }
}

impl ReportSink for MemorySink {
    fn write_report(&mut self, report: &Report) -> Result<String> {
        self.reports
            .insert(report.analyzer.clone(), report.text.clone());
        Ok(format!("memory:{}", report.analyzer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::traits::write_reports;

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::new();
        let reports = vec![Report::new("unique", "ab\n"), Report::new("summary", "x\n")];

        let written = write_reports(&mut sink, &reports).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get("unique"), Some("ab\n"));
        assert_eq!(sink.get("keyword"), None);
        assert_eq!(written[1], ("summary".to_string(), "memory:summary".to_string()));
    }
}
