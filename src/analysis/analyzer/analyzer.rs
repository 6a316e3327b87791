//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the capability every
//! statistical analyzer implements, and the [`RenderContext`] handed to it
//! once the token stream has ended.
//!
//! # Role in the Pipeline
//!
//! ```text
//! Lines → Tokenizer → Token(text, position) ─┬→ Summary
//!                                            ├→ UniqueToken
//!                                            ├→ BigWord
//!                                            ├→ TokenCount
//!                                            ├→ TokenSize
//!                                            └→ Keyword
//! end of stream → render(context) on each → Report
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use wordscope::analysis::analyzer::{Analyzer, RenderContext};
//! use wordscope::analysis::token::Token;
//!
//! #[derive(Default)]
//! struct LongestToken(String);
//!
//! impl Analyzer for LongestToken {
//!     fn process_token(&mut self, token: &Token) {
//!         if token.len() > self.0.chars().count() {
//!             self.0 = token.text.clone();
//!         }
//!     }
//!
//!     fn render(&self, _context: &RenderContext) -> String {
//!         format!("{}\n", self.0)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "longest"
//!     }
//!
//!     fn as_any(&self) -> &dyn std::any::Any {
//!         self
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::analysis::token::Token;

/// Trait for analyzers that accumulate statistics over a token stream.
///
/// Analyzers are mutually independent: none observes another's state, so the
/// order in which a token reaches them does not matter.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so that a single token batch can be
/// fanned out to several analyzers concurrently.
pub trait Analyzer: Send + Sync {
    /// Fold one token into the analyzer state.
    ///
    /// Must accept any token, including empty or already-seen ones.
    fn process_token(&mut self, token: &Token);

    /// Render the final state as report text.
    ///
    /// Reads state only. An analyzer instance is meant for a single document.
    fn render(&self, context: &RenderContext) -> String;

    /// Stable report key (used to choose the report destination).
    fn name(&self) -> &'static str;

    /// Provide access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Static metadata available to analyzers at render time.
#[derive(Clone, Debug)]
pub struct RenderContext {
    document_path: PathBuf,
    timestamp: DateTime<Local>,
}

impl RenderContext {
    /// Create a context for `document_path`, capturing the current time.
    pub fn new<P: AsRef<Path>>(document_path: P) -> Self {
        Self::at(document_path, Local::now())
    }

    /// Create a context with an explicit timestamp.
    pub fn at<P: AsRef<Path>>(document_path: P, timestamp: DateTime<Local>) -> Self {
        RenderContext {
            document_path: document_path.as_ref().to_path_buf(),
            timestamp,
        }
    }

    /// Path of the analyzed document.
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Time at which rendering started.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}
