//! Token size analyzer with a scaled histogram.
//!
//! The report lists `size<TAB>count` for every observed token length, then a
//! histogram whose longest bar is exactly `max_bar_width` characters wide.
//! Every other bar is scaled by `max_bar_width / max_count` and rounded, with
//! a floor of one character: a size that occurred at least once always shows
//! a visible bar.
//!
//! # Examples
//!
//! ```
//! use wordscope::analysis::analyzer::{Analyzer, TokenSizeAnalyzer};
//! use wordscope::analysis::token::Token;
//!
//! let mut analyzer = TokenSizeAnalyzer::new(10);
//! for (i, text) in ["ab", "cd", "efg", "ab"].iter().enumerate() {
//!     analyzer.process_token(&Token::new(*text, i + 1));
//! }
//!
//! assert_eq!(analyzer.histogram(), vec![(2, 10), (3, 3)]);
//! ```

use std::collections::BTreeMap;

use crate::analysis::analyzer::analyzer::{Analyzer, RenderContext};
use crate::analysis::token::Token;

/// Glyph used to draw histogram bars.
pub const BAR_GLYPH: char = '*';

/// Counts tokens by character length.
#[derive(Clone, Debug)]
pub struct TokenSizeAnalyzer {
    max_bar_width: usize,
    sizes: BTreeMap<usize, usize>,
}

impl TokenSizeAnalyzer {
    /// Create an analyzer whose longest histogram bar is `max_bar_width` wide.
    pub fn new(max_bar_width: usize) -> Self {
        TokenSizeAnalyzer {
            max_bar_width,
            sizes: BTreeMap::new(),
        }
    }

    pub fn max_bar_width(&self) -> usize {
        self.max_bar_width
    }

    /// Token length → number of tokens with that length.
    pub fn sizes(&self) -> &BTreeMap<usize, usize> {
        &self.sizes
    }

    /// Largest count across all sizes, from the current state.
    pub fn max_count(&self) -> usize {
        self.sizes.values().copied().max().unwrap_or(0)
    }

    /// `max_bar_width / max_count`, or `None` when nothing was counted.
    pub fn scaling_factor(&self) -> Option<f64> {
        match self.max_count() {
            0 => None,
            max => Some(self.max_bar_width as f64 / max as f64),
        }
    }

    /// `(size, bar length)` rows in ascending size order.
    pub fn histogram(&self) -> Vec<(usize, usize)> {
        let Some(scaling_factor) = self.scaling_factor() else {
            return Vec::new();
        };

        self.sizes
            .iter()
            .map(|(&size, &count)| (size, bar_length(count, scaling_factor)))
            .collect()
    }
}

/// `round(count * scaling_factor)`, never less than one.
pub fn bar_length(count: usize, scaling_factor: f64) -> usize {
    let scaled = (count as f64 * scaling_factor).round() as usize;
    scaled.max(1)
}

impl Analyzer for TokenSizeAnalyzer {
    fn process_token(&mut self, token: &Token) {
        *self.sizes.entry(token.len()).or_insert(0) += 1;
    }

    fn render(&self, _context: &RenderContext) -> String {
        let mut out = String::new();
        for (size, count) in &self.sizes {
            out.push_str(&format!("{size}\t{count}\n"));
        }

        let histogram = self.histogram();
        if histogram.is_empty() {
            return out;
        }

        out.push('\n');
        for (size, length) in histogram {
            out.push_str(&format!("{size}\t"));
            out.extend(std::iter::repeat_n(BAR_GLYPH, length));
            out.push('\n');
        }
        out
    }

    fn name(&self) -> &'static str {
        "token_size"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer_with(width: usize, texts: &[&str]) -> TokenSizeAnalyzer {
        let mut analyzer = TokenSizeAnalyzer::new(width);
        for (i, text) in texts.iter().enumerate() {
            analyzer.process_token(&Token::new(*text, i + 1));
        }
        analyzer
    }

    #[test]
    fn test_sizes() {
        let analyzer = analyzer_with(10, &["ab", "cd", "efg", "ab"]);
        let sizes: Vec<(usize, usize)> = analyzer.sizes().iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(sizes, vec![(2, 3), (3, 1)]);
        assert_eq!(analyzer.max_count(), 3);
    }

    #[test]
    fn test_render() {
        let analyzer = analyzer_with(10, &["ab", "cd", "efg", "ab"]);
        assert_eq!(
            analyzer.render(&RenderContext::new("doc.txt")),
            "2\t3\n3\t1\n\n2\t**********\n3\t***\n"
        );
    }

    #[test]
    fn test_small_bucket_keeps_one_char_bar() {
        let mut texts = vec!["a"; 1000];
        texts.push("bb");
        let analyzer = analyzer_with(10, &texts);

        assert_eq!(analyzer.histogram(), vec![(1, 10), (2, 1)]);
    }

    #[test]
    fn test_bars_within_bounds() {
        let texts = [
            "a", "bb", "bb", "ccc", "ccc", "ccc", "dddd", "eeeee", "eeeee", "eeeee", "eeeee",
            "eeeee", "eeeee", "eeeee",
        ];
        let analyzer = analyzer_with(6, &texts);
        let max_count = analyzer.max_count();

        for (size, length) in analyzer.histogram() {
            assert!((1..=6).contains(&length), "size {size} has bar {length}");
            if analyzer.sizes()[&size] == max_count {
                assert_eq!(length, 6);
            }
        }
    }

    #[test]
    fn test_empty_histogram() {
        let analyzer = TokenSizeAnalyzer::new(10);
        assert_eq!(analyzer.scaling_factor(), None);
        assert!(analyzer.histogram().is_empty());
        assert_eq!(analyzer.render(&RenderContext::new("doc.txt")), "");
    }

    #[test]
    fn test_empty_token_counts_as_size_zero() {
        let analyzer = analyzer_with(4, &["", "ab"]);
        assert_eq!(analyzer.histogram(), vec![(0, 4), (2, 4)]);
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(3, 10.0 / 3.0), 10);
        assert_eq!(bar_length(1, 10.0 / 3.0), 3);
        assert_eq!(bar_length(1, 0.01), 1);
        assert_eq!(bar_length(1, 2.5), 3);
    }
}
