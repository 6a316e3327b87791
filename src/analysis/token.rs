//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from the tokenizer to every analyzer:
//! the token text paired with its occurrence position. Positions are assigned
//! once, upstream of the analyzers, and are never recomputed downstream.
//!
//! # Examples
//!
//! ```
//! use wordscope::analysis::token::Token;
//!
//! let token = Token::new("hello", 1);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 1);
//! assert_eq!(token.len(), 5);
//! ```

use std::fmt;

/// A single token: its text and its occurrence position.
///
/// Tokens produced by a [`Tokenizer`](crate::analysis::tokenizer::Tokenizer)
/// carry a line-local 0-based position. Tokens produced by
/// [`DocumentTokens`](crate::analysis::tokenizer::DocumentTokens) carry the
/// 1-based ordinal of the token within the whole document.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in its token stream
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Length of the token text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.text, self.position)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
