//! File-based report sink.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::config::OutputConfig;
use crate::error::{Result, WordscopeError};
use crate::sink::traits::{Report, ReportSink};

/// Writes each report to `<dir>/<file for analyzer>`.
#[derive(Debug, Clone)]
pub struct FileSink {
    output: OutputConfig,
}

impl FileSink {
    /// Create a file sink for the given output layout.
    pub fn new(output: OutputConfig) -> Self {
        FileSink { output }
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl ReportSink for FileSink {
    fn write_report(&mut self, report: &Report) -> Result<String> {
        let path = self.output.path_for(&report.analyzer).ok_or_else(|| {
            WordscopeError::output_write(format!(
                "no output file configured for report {:?}",
                report.analyzer
            ))
        })?;

        Self::write_file(&path, &report.text).map_err(|e| {
            WordscopeError::output_write(format!("{}: {e}", path.display()))
        })?;

        info!("Wrote {} report to {}", report.analyzer, path.display());
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn output_in(dir: &Path) -> OutputConfig {
        OutputConfig {
            dir: dir.join("reports"),
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_writes_report_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(output_in(temp_dir.path()));

        let location = sink
            .write_report(&Report::new("token_count", "ab\t2\n"))
            .unwrap();

        let expected = temp_dir.path().join("reports").join("token_count.txt");
        assert_eq!(location, expected.display().to_string());
        assert_eq!(fs::read_to_string(expected).unwrap(), "ab\t2\n");
    }

    #[test]
    fn test_unknown_report() {
        let temp_dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(output_in(temp_dir.path()));

        let result = sink.write_report(&Report::new("mystery", "text"));
        assert!(matches!(result, Err(WordscopeError::OutputWrite(_))));
    }

    #[test]
    fn test_unwritable_destination() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut sink = FileSink::new(OutputConfig {
            dir: blocker,
            ..OutputConfig::default()
        });
        let result = sink.write_report(&Report::new("summary", "text"));
        assert!(matches!(result, Err(WordscopeError::OutputWrite(_))));
    }
}
