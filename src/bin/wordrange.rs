//! `wordrange <INPUT> <OUTPUT>`: inserts words and answers range counts, one command per line.

use std::process::ExitCode;

use clap::Parser;

use treepath::cli::{IoArgs, LogArgs};
use treepath::error::ExitCode as TreepathExitCode;
use treepath::{logging, wordrange, Result};

/// Count how many words fall between two words, inclusive.
///
/// INPUT holds one command per line: `i <word>` adds a word, `r <low> <high>` writes the number of
/// words between low and high to OUTPUT.
#[derive(Parser, Debug)]
#[command(name = "wordrange", version)]
struct Cli {
    #[command(flatten)]
    io: IoArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log.verbose, cli.log.log_level.as_deref()) {
        eprintln!("Warning: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::from(TreepathExitCode::Success as u8),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.io.open_input()?;
    let output = cli.io.create_output()?;

    let summary = wordrange::run(input, output)?;
    tracing::info!(
        inserted = summary.inserted,
        ranges = summary.ranges,
        "wordrange finished"
    );
    Ok(())
}
