//! Text analysis module for Wordscope.
//!
//! This module provides tokenization and the statistical analyzers that
//! consume the resulting token stream.

pub mod analyzer;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use tokenizer::*;
