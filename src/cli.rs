//! Command line arguments shared by the binaries.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Error, Result};

/// Logging flags, flattened into each binary's arguments.
#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level or filter directive, e.g. `trace` or `treepath::bfs=trace`
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Positional input and output files.
#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    /// File to read commands or queries from
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write answers to, one per line
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl IoArgs {
    /// Opens the input file for buffered reading.
    pub fn open_input(&self) -> Result<BufReader<File>> {
        open(&self.input)
    }

    /// Creates (or truncates) the output file for buffered writing.
    pub fn create_output(&self) -> Result<BufWriter<File>> {
        File::create(&self.output)
            .map(BufWriter::new)
            .map_err(|source| Error::File {
                path: self.output.clone(),
                source,
            })
    }
}

/// Opens `path` for buffered reading, naming the file in any error.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::File {
            path: path.to_path_buf(),
            source,
        })
}
