//! Tokenizer implementations for text analysis.
//!
//! A [`Tokenizer`] splits a single piece of text (one document line) into
//! tokens. [`DocumentTokens`] drives a tokenizer across every line of a
//! document and stamps each emitted token with its document-wide position.
//!
//! # Examples
//!
//! ```
//! use wordscope::analysis::tokenizer::Tokenizer;
//! use wordscope::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("ab cd, efg!").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Positions in the returned stream are 0-based and local to `text`.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod document;
pub mod regex;

pub use document::DocumentTokens;
pub use self::regex::RegexTokenizer;
