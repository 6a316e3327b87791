//! Report sinks.
//!
//! Analyzers only render text; a [`ReportSink`] decides where that text ends
//! up. [`FileSink`] writes one file per report, [`MemorySink`] keeps reports
//! in memory for tests and embedding.

pub mod file;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use file::*;
pub use memory::*;
pub use traits::*;
