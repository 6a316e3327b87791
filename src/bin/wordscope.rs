//! Wordscope CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use wordscope::cli::args::*;
use wordscope::cli::commands::*;

fn main() {
    // Wrong argument counts print the usage text and end the run normally
    let args = match WordscopeArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
