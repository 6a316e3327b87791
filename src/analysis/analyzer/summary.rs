//! Summary analyzer: total token count plus run metadata.

use crate::analysis::analyzer::analyzer::{Analyzer, RenderContext};
use crate::analysis::token::Token;
use crate::config::SummaryMetadata;

/// Timestamp layout used in the summary report.
const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Counts every token and renders a report header.
#[derive(Clone, Debug, Default)]
pub struct SummaryAnalyzer {
    metadata: SummaryMetadata,
    total: usize,
}

impl SummaryAnalyzer {
    /// Create a summary analyzer with the given report labels.
    pub fn new(metadata: SummaryMetadata) -> Self {
        SummaryAnalyzer { metadata, total: 0 }
    }

    /// Number of tokens processed.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The report labels.
    pub fn metadata(&self) -> &SummaryMetadata {
        &self.metadata
    }
}

impl Analyzer for SummaryAnalyzer {
    fn process_token(&mut self, _token: &Token) {
        self.total += 1;
    }

    fn render(&self, context: &RenderContext) -> String {
        format!(
            "Application: {}\nAuthor: {}\nEmail: {}\nInput File: {}\nAnalysis Timestamp: {}\nTotal Token Count: {}\n",
            self.metadata.application_name,
            self.metadata.author,
            self.metadata.author_email,
            context.document_path().display(),
            context.timestamp().format(TIMESTAMP_FORMAT),
            self.total,
        )
    }

    fn name(&self) -> &'static str {
        "summary"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
