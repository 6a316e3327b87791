//! Command implementation for the Wordscope CLI.

use log::info;

use crate::cli::args::WordscopeArgs;
use crate::cli::output::output_result;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::pipeline::{FanOutMode, run};
use crate::sink::FileSink;

/// Load the configuration named on the command line and apply overrides.
pub fn load_config(args: &WordscopeArgs) -> Result<AnalysisConfig> {
    let mut config = AnalysisConfig::load(&args.config)?;

    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    if args.parallel {
        config.fan_out = FanOutMode::Parallel;
    }

    Ok(config)
}

/// Analyze the document and write every report.
pub fn execute_command(args: &WordscopeArgs) -> Result<()> {
    let config = load_config(args)?;

    if args.verbosity() > 1 {
        println!("Analyzing: {}", args.document.display());
    }

    let mut sink = FileSink::new(config.output.clone());
    let summary = run(&config, &args.document, &mut sink)?;
    info!(
        "Analyzed {} tokens in {} ms",
        summary.tokens, summary.duration_ms
    );

    output_result(&summary, args)
}
