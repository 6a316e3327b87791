//! # Wordscope
//!
//! Tokenize a plain-text document and feed every token through a fixed set
//! of independent statistical analyzers, then render one report per analyzer.
//!
//! ## Features
//!
//! - Word-character tokenizer with document-wide 1-based positions
//! - Summary, unique token, big word, token count, token size (with a scaled
//!   histogram) and keyword position analyzers
//! - Sequential or parallel fan-out of tokens to analyzers
//! - Properties or JSON configuration
//! - Pluggable report sinks

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod sink;

pub mod prelude {
    pub use crate::analysis::analyzer::{
        Analyzer, BigWordAnalyzer, KeywordAnalyzer, RenderContext, SummaryAnalyzer,
        TokenCountAnalyzer, TokenSizeAnalyzer, UniqueTokenAnalyzer,
    };
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::{DocumentTokens, RegexTokenizer, Tokenizer};
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{Result, WordscopeError};
    pub use crate::pipeline::{AnalysisPipeline, FanOutMode};
    pub use crate::sink::{FileSink, MemorySink, Report, ReportSink};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
