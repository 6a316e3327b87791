//! Keyword analyzer: occurrence positions of a fixed keyword list.
//!
//! The keyword set is fixed when the analyzer is built, from a list with one
//! keyword per line. Tokens that are not keywords are ignored; each keyword
//! occurrence appends the token's document position to that keyword's list.
//!
//! # Examples
//!
//! ```
//! use wordscope::analysis::analyzer::{Analyzer, KeywordAnalyzer};
//! use wordscope::analysis::token::Token;
//!
//! let mut analyzer = KeywordAnalyzer::from_keywords(["cd", "zz"], 8);
//! for (i, text) in ["ab", "cd", "efg", "ab"].iter().enumerate() {
//!     analyzer.process_token(&Token::new(*text, i + 1));
//! }
//!
//! assert_eq!(analyzer.positions("cd"), Some(&[2][..]));
//! assert_eq!(analyzer.positions("zz"), Some(&[][..]));
//! assert_eq!(analyzer.positions("ab"), None);
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use crate::analysis::analyzer::analyzer::{Analyzer, RenderContext};
use crate::analysis::token::Token;
use crate::error::Result;
use crate::input::read_lines;

/// Default number of positions per rendered line.
pub const DEFAULT_WRAP_WIDTH: usize = 8;

/// Records where each pre-declared keyword occurs.
#[derive(Clone, Debug)]
pub struct KeywordAnalyzer {
    index: BTreeMap<String, Vec<usize>>,
    wrap_width: usize,
}

impl KeywordAnalyzer {
    /// Create an analyzer over `keywords`.
    ///
    /// Surrounding whitespace is trimmed and blank entries are skipped.
    pub fn from_keywords<I, S>(keywords: I, wrap_width: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = keywords
            .into_iter()
            .filter_map(|keyword| {
                let keyword = keyword.as_ref().trim();
                (!keyword.is_empty()).then(|| (keyword.to_string(), Vec::new()))
            })
            .collect();

        KeywordAnalyzer { index, wrap_width }
    }

    /// Load the keyword list from `path`.
    pub fn load<P: AsRef<Path>>(path: P, wrap_width: usize) -> Result<Self> {
        let path = path.as_ref();
        let keywords = read_lines(path)?.collect::<Result<Vec<String>>>()?;
        let analyzer = Self::from_keywords(keywords, wrap_width);
        debug!(
            "Loaded {} keywords from {}",
            analyzer.index.len(),
            path.display()
        );
        Ok(analyzer)
    }

    /// Load the keyword list from `path`, falling back to an empty index.
    pub fn load_or_empty<P: AsRef<Path>>(path: P, wrap_width: usize) -> Self {
        let path = path.as_ref();
        Self::load(path, wrap_width).unwrap_or_else(|e| {
            warn!(
                "Could not load keyword list {}: {e}; keyword report will be empty",
                path.display()
            );
            Self::from_keywords(std::iter::empty::<&str>(), wrap_width)
        })
    }

    /// Keyword → positions, in keyword order.
    pub fn index(&self) -> &BTreeMap<String, Vec<usize>> {
        &self.index
    }

    /// Positions recorded for `keyword`, or `None` if it is not a keyword.
    pub fn positions(&self, keyword: &str) -> Option<&[usize]> {
        self.index.get(keyword).map(Vec::as_slice)
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }
}

/// Format positions as `[a, b, ...]`, at most `wrap_width` per line.
///
/// A wrapped line keeps its `", "` separator before the line break.
pub fn format_positions(positions: &[usize], wrap_width: usize) -> String {
    let lines: Vec<String> = positions
        .chunks(wrap_width.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();

    format!("[{}]", lines.join(", \n"))
}

impl Analyzer for KeywordAnalyzer {
    fn process_token(&mut self, token: &Token) {
        if let Some(positions) = self.index.get_mut(&token.text) {
            positions.push(token.position);
        }
    }

    fn render(&self, _context: &RenderContext) -> String {
        let mut out = String::new();
        for (keyword, positions) in &self.index {
            out.push_str(&format!(
                "{keyword} =\n{}\n\n",
                format_positions(positions, self.wrap_width)
            ));
        }
        out
    }

    fn name(&self) -> &'static str {
        "keyword"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
