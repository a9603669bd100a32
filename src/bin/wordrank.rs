//! `wordrank <INPUT> <OUTPUT>`: looks up corpus words by length and frequency rank.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use treepath::cli::{self, IoArgs, LogArgs};
use treepath::error::ExitCode as TreepathExitCode;
use treepath::wordrank::{self, Ranking};
use treepath::{logging, Result};

/// Find the word of a given length and frequency rank.
///
/// INPUT holds `LENGTH RANK` pairs. For each pair, OUTPUT gets the word of that length with that
/// rank (0 is the most frequent, ties broken alphabetically), or `-` if there is none.
#[derive(Parser, Debug)]
#[command(name = "wordrank", version)]
struct Cli {
    #[command(flatten)]
    io: IoArgs,

    /// Word corpus: one word per line
    #[arg(
        long,
        value_name = "PATH",
        env = "WORDRANK_CORPUS",
        default_value = "shakespeare-cleaned5.txt"
    )]
    corpus: PathBuf,

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
    let start = Instant::now();
    let ranking = Ranking::read(cli::open(&cli.corpus)?)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_corpus");

    let queries = cli.io.open_input()?;
    let output = cli.io.create_output()?;
    let answered = wordrank::run(&ranking, queries, output)?;
    tracing::info!(answered, elapsed = ?start.elapsed(), "wordrank finished");
    Ok(())
}
