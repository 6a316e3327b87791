//! Statistical analyzers fed by the token stream.

pub mod analyzer;
pub mod big_word;
pub mod keyword;
pub mod summary;
pub mod token_count;
pub mod token_size;
pub mod unique;

pub use analyzer::{Analyzer, RenderContext};
pub use big_word::BigWordAnalyzer;
pub use keyword::KeywordAnalyzer;
pub use summary::SummaryAnalyzer;
pub use token_count::TokenCountAnalyzer;
pub use token_size::TokenSizeAnalyzer;
pub use unique::UniqueTokenAnalyzer;
