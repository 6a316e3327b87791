//! Token frequency analyzer.

use std::collections::BTreeMap;

use crate::analysis::analyzer::analyzer::{Analyzer, RenderContext};
use crate::analysis::token::Token;

/// Counts occurrences of each exact token text.
#[derive(Clone, Debug, Default)]
pub struct TokenCountAnalyzer {
    counts: BTreeMap<String, usize>,
}

impl TokenCountAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token → occurrence count, in ascending key order.
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Occurrences of `text` (0 if never seen).
    pub fn count(&self, text: &str) -> usize {
        self.counts.get(text).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Analyzer for TokenCountAnalyzer {
    fn process_token(&mut self, token: &Token) {
        match self.counts.get_mut(&token.text) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(token.text.clone(), 1);
            }
        }
    }

    fn render(&self, _context: &RenderContext) -> String {
        let mut out = String::new();
        for (token, count) in &self.counts {
            out.push_str(&format!("{token}\t{count}\n"));
        }
        out
    }

    fn name(&self) -> &'static str {
        "token_count"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut analyzer = TokenCountAnalyzer::new();
        for (i, text) in ["ab", "cd", "efg", "ab"].iter().enumerate() {
            analyzer.process_token(&Token::new(*text, i + 1));
        }

        assert_eq!(analyzer.count("ab"), 2);
        assert_eq!(analyzer.count("cd"), 1);
        assert_eq!(analyzer.count("zz"), 0);
        assert_eq!(analyzer.total(), 4);
        assert_eq!(
            analyzer.render(&RenderContext::new("doc.txt")),
            "ab\t2\ncd\t1\nefg\t1\n"
        );
    }

    #[test]
    fn test_case_sensitive_keys() {
        let mut analyzer = TokenCountAnalyzer::new();
        analyzer.process_token(&Token::new("The", 1));
        analyzer.process_token(&Token::new("the", 2));
        assert_eq!(analyzer.counts().len(), 2);
    }
}
