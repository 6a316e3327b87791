//! Unique token analyzer.

use std::collections::BTreeSet;

use crate::analysis::analyzer::analyzer::{Analyzer, RenderContext};
use crate::analysis::token::Token;

/// Collects the distinct token texts of a document.
#[derive(Clone, Debug, Default)]
pub struct UniqueTokenAnalyzer {
    tokens: BTreeSet<String>,
}

impl UniqueTokenAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct tokens in ascending order.
    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }
}

/// One entry per line, in set order.
pub(crate) fn render_lines<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let mut out = String::new();
    for entry in entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

impl Analyzer for UniqueTokenAnalyzer {
    fn process_token(&mut self, token: &Token) {
        if !self.tokens.contains(&token.text) {
            self.tokens.insert(token.text.clone());
        }
    }

    fn render(&self, _context: &RenderContext) -> String {
        render_lines(&self.tokens)
    }

    fn name(&self) -> &'static str {
        "unique"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
