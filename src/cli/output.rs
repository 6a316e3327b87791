//! Output formatting for the CLI.

use crate::cli::args::{OutputFormat, WordscopeArgs};
use crate::error::Result;
use crate::pipeline::RunSummary;

/// Print the outcome of a run in the requested format.
pub fn output_result(summary: &RunSummary, args: &WordscopeArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(summary, args),
        OutputFormat::Json => output_json(summary, args),
    }
}

/// Output in human-readable format.
fn output_human(summary: &RunSummary, args: &WordscopeArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }

    if args.verbosity() > 1 {
        println!("Document: {}", summary.document.display());
        println!("Tokens: {}", summary.tokens);
        for report in &summary.reports {
            println!("  {:<12} {}", report.analyzer, report.location);
        }
        println!("Duration: {} ms", summary.duration_ms);
    }

    println!("Files generated.");
    Ok(())
}

/// Output in JSON format.
fn output_json(summary: &RunSummary, args: &WordscopeArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(summary)?
    } else {
        serde_json::to_string(summary)?
    };

    println!("{json}");
    Ok(())
}
