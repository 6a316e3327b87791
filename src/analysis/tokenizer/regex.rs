//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, WordscopeError};

/// Maximal runs of word characters (ASCII letters, digits, underscore).
pub const WORD_PATTERN: &str = r"[A-Za-z0-9_]+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
///
/// The default tokenizer matches [`WORD_PATTERN`], which is the same as
/// splitting each line at every maximal run of non-word characters and
/// discarding the empty fragments. No case or accent normalization is done.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default word pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| WordscopeError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokenize into an owned vector.
    pub fn split(&self, text: &str) -> Vec<Token> {
        self.pattern
            .find_iter(text)
            .filter(|mat| !mat.as_str().is_empty())
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
