//! Big word analyzer: distinct tokens at or above a minimum length.

use std::collections::BTreeSet;

use crate::analysis::analyzer::analyzer::{Analyzer, RenderContext};
use crate::analysis::analyzer::unique::render_lines;
use crate::analysis::token::Token;

/// Collects distinct tokens whose length is at least `minimum_length`.
///
/// A minimum of 0 admits every token. There is no upper bound.
#[derive(Clone, Debug, Default)]
pub struct BigWordAnalyzer {
    minimum_length: usize,
    words: BTreeSet<String>,
}

impl BigWordAnalyzer {
    pub fn new(minimum_length: usize) -> Self {
        BigWordAnalyzer {
            minimum_length,
            words: BTreeSet::new(),
        }
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    /// Qualifying tokens in ascending order.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }
}

impl Analyzer for BigWordAnalyzer {
    fn process_token(&mut self, token: &Token) {
        if token.len() >= self.minimum_length && !self.words.contains(&token.text) {
            self.words.insert(token.text.clone());
        }
    }

    fn render(&self, _context: &RenderContext) -> String {
        render_lines(&self.words)
    }

    fn name(&self) -> &'static str {
        "big_words"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(analyzer: &mut BigWordAnalyzer, texts: &[&str]) {
        for (i, text) in texts.iter().enumerate() {
            analyzer.process_token(&Token::new(*text, i + 1));
        }
    }

    #[test]
    fn test_minimum_length_is_inclusive() {
        let mut analyzer = BigWordAnalyzer::new(3);
        feed(&mut analyzer, &["ab", "cd", "efg", "ab", "hijk", "efg"]);

        let words: Vec<&str> = analyzer.words().iter().map(String::as_str).collect();
        assert_eq!(words, vec!["efg", "hijk"]);
        assert_eq!(analyzer.render(&RenderContext::new("doc.txt")), "efg\nhijk\n");
    }

    #[test]
    fn test_zero_minimum_admits_everything() {
        let mut analyzer = BigWordAnalyzer::new(0);
        feed(&mut analyzer, &["a", "", "bc"]);
        assert_eq!(analyzer.words().len(), 3);
    }

    #[test]
    fn test_threshold_above_all_tokens() {
        let mut analyzer = BigWordAnalyzer::new(50);
        feed(&mut analyzer, &["short", "words", "only"]);
        assert!(analyzer.words().is_empty());
        assert_eq!(analyzer.render(&RenderContext::new("doc.txt")), "");
    }
}
