//! Error types and exit codes.
//!
//! Lookups that miss are not errors: they come back as `None`. The variants here cover misuse of
//! the tree API, malformed driver input and I/O.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A [`Handle`][crate::bst::Handle] was passed to a tree that no longer holds (or never held)
    /// the node it refers to.
    #[error("handle does not refer to a live node in this tree")]
    StaleHandle,

    /// A driver command was recognised but is missing an operand.
    #[error("line {line}: `{op}` is missing an operand")]
    MissingOperand {
        /// 1-based line number.
        line: usize,
        /// The command, e.g. `r`.
        op: String,
    },

    /// A query token that should have been a whole number was not.
    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// The corpus has more movies than there are ids.
    #[error("ran out of movie ids")]
    IdsExhausted,

    /// A file named on the command line could not be opened or created.
    #[error("{}: {source}", .path.display())]
    File {
        /// The file as given.
        path: PathBuf,
        /// Why opening it failed.
        source: std::io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Process exit codes used by the binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Everything was answered.
    Success = 0,
    /// I/O or setup failure.
    Failure = 1,
    /// The input files were malformed.
    Data = 3,
}

impl Error {
    /// The exit code a binary should terminate with after reporting this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::MissingOperand { .. } | Error::InvalidNumber { .. } => ExitCode::Data,
            Error::StaleHandle
            | Error::IdsExhausted
            | Error::File { .. }
            | Error::Logging(_)
            | Error::Io(_) => ExitCode::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_is_a_data_error() {
        let err = Error::MissingOperand {
            line: 3,
            op: "r".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "line 3: `r` is missing an operand");
    }

    #[test]
    fn bad_numbers_are_data_errors() {
        let err = Error::InvalidNumber {
            line: 2,
            token: "five".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(err.to_string(), "line 2: `five` is not a number");
    }

    #[test]
    fn file_errors_name_the_file() {
        let err = Error::File {
            path: PathBuf::from("movies.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "movies.txt: not found");
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn io_errors_are_generic_failures() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.exit_code(), ExitCode::Failure);
        assert_eq!(err.to_string(), "gone");
    }
}
