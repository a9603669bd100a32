//! `sixdegrees <INPUT> <OUTPUT>`: finds the shortest chain of shared movies between actors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use treepath::cli::{self, IoArgs, LogArgs};
use treepath::error::ExitCode as TreepathExitCode;
use treepath::sixdegrees::{self, IdSequence};
use treepath::{logging, Result};

/// Find the shortest chain of movies linking two actors.
///
/// INPUT holds pairs of actor names. For each pair, OUTPUT gets the chain as
/// `actor -(movie)- actor ...`, the actor's name if both are the same, or `Not present`.
#[derive(Parser, Debug)]
#[command(name = "sixdegrees", version)]
struct Cli {
    #[command(flatten)]
    io: IoArgs,

    /// Movie corpus: one movie per line, title first, then the cast
    #[arg(
        long,
        value_name = "PATH",
        env = "SIXDEGREES_MOVIES",
        default_value = "cleaned_movielist.txt"
    )]
    movies: PathBuf,

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
    let movies = sixdegrees::parse_movies(cli::open(&cli.movies)?, &mut IdSequence::new())?;
    let graph = sixdegrees::build_graph(&movies);
    tracing::debug!(elapsed = ?start.elapsed(), "load_corpus");

    let queries = cli.io.open_input()?;
    let output = cli.io.create_output()?;
    let answered = sixdegrees::run(&graph, queries, output)?;
    tracing::info!(answered, elapsed = ?start.elapsed(), "sixdegrees finished");
    Ok(())
}
