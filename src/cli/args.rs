//! Command line argument parsing for the Wordscope CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Wordscope - tokenize a document and write statistical token reports
#[derive(Parser, Debug, Clone)]
#[command(name = "wordscope")]
#[command(about = "Tokenize a plain-text document and write statistical token reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordscopeArgs {
    /// Document to analyze
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Configuration file (.properties or .json)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write reports here instead of the configured output directory
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Dispatch tokens to the analyzers in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl WordscopeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
