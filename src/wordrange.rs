//! The word range batch program: builds a set of words and answers how many of them fall between
//! two words, inclusive.
//!
//! Each input line is one command. Tokens are separated by spaces or tabs.
//!
//! - `i <word>` inserts the word unless it is already present.
//! - `r <low> <high>` writes the number of words `w` with `low <= w <= high` on its own line.
//!
//! Blank lines and unknown commands are skipped.
//!
//! # Examples
//!
//! ```
//! let input = "i dog\ni cat\ni dog\nr a e\nr cat cat\nr e z\n";
//! let mut output = Vec::new();
//!
//! let summary = treepath::wordrange::run(input.as_bytes(), &mut output)?;
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "2\n1\n0\n");
//! assert_eq!(summary.inserted, 2);
//! # Ok::<(), treepath::Error>(())
//! ```

use std::io::{BufRead, Write};

use crate::bst::Tree;
use crate::error::{Error, Result};

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `i <word>`
    Insert(String),
    /// `r <low> <high>`
    Range {
        /// Smallest word counted.
        low: String,
        /// Largest word counted.
        high: String,
    },
}

/// What a [`run`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Words inserted, not counting repeats.
    pub inserted: usize,
    /// Range queries answered.
    pub ranges: usize,
    /// Nodes freed when the tree was torn down at the end.
    pub freed: usize,
}

/// Parses one line. `line_number` is 1-based and only used for errors.
///
/// Returns `Ok(None)` for blank lines and for unknown commands, which are logged and skipped. Any
/// tokens past the ones a command needs are ignored.
///
/// # Errors
///
/// [`Error::MissingOperand`] when `i` or `r` lacks a word.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Command>> {
    let mut tokens = line.split([' ', '\t']).filter(|token| !token.is_empty());
    let Some(op) = tokens.next() else {
        return Ok(None);
    };
    let mut operand = || {
        tokens
            .next()
            .map(str::to_string)
            .ok_or_else(|| Error::MissingOperand {
                line: line_number,
                op: op.to_string(),
            })
    };

    match op {
        "i" => Ok(Some(Command::Insert(operand()?))),
        "r" => {
            let low = operand()?;
            let high = operand()?;
            Ok(Some(Command::Range { low, high }))
        }
        _ => {
            tracing::warn!(line = line_number, op, "skipping unknown command");
            Ok(None)
        }
    }
}

/// Runs every command in `input` against a fresh tree, writing range counts to `output`.
///
/// # Errors
///
/// Stops at the first malformed command or I/O failure.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<R, W>(input: R, mut output: W) -> Result<Summary>
where
    R: BufRead,
    W: Write,
{
    let mut tree: Tree<String> = Tree::new();
    let mut summary = Summary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        summary.lines += 1;
        match parse_line(&line, index + 1)? {
            Some(Command::Insert(word)) => {
                if tree.find(word.as_str()).is_none() {
                    tree.insert(word);
                    summary.inserted += 1;
                }
            }
            Some(Command::Range { low, high }) => {
                writeln!(output, "{}", tree.range_count(low.as_str(), high.as_str()))?;
                summary.ranges += 1;
            }
            None => {}
        }
    }
    output.flush()?;

    summary.freed = tree.clear();
    tracing::debug!(
        lines = summary.lines,
        inserted = summary.inserted,
        ranges = summary.ranges,
        freed = summary.freed,
        "wordrange_done"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(input: &str) -> Result<(String, Summary)> {
        let mut output = Vec::new();
        let summary = run(input.as_bytes(), &mut output)?;
        Ok((String::from_utf8(output).unwrap(), summary))
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_line("i apple", 1).unwrap(),
            Some(Command::Insert("apple".to_string()))
        );
        assert_eq!(
            parse_line("r\ta \t b extra", 1).unwrap(),
            Some(Command::Range {
                low: "a".to_string(),
                high: "b".to_string()
            })
        );
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("  \t ", 1).unwrap(), None);
        assert_eq!(parse_line("x what", 1).unwrap(), None);
    }

    #[test]
    fn missing_operands_are_errors() {
        assert!(matches!(
            parse_line("i", 4),
            Err(Error::MissingOperand { line: 4, ref op }) if op == "i"
        ));
        assert!(matches!(
            parse_line("r only", 7),
            Err(Error::MissingOperand { line: 7, ref op }) if op == "r"
        ));
    }

    #[test]
    fn repeated_words_are_inserted_once() {
        let (output, summary) = run_str("i m\ni f\ni t\ni a\ni m\nr a m\n").unwrap();

        assert_eq!(output, "3\n");
        assert_eq!(summary.inserted, 4);
        assert_eq!(summary.freed, 4);
    }

    #[test]
    fn ranges_are_inclusive_and_lexicographic() {
        let input = "i banana\ni apple\ni cherry\ni apricot\n\
                     r apple apricot\nr b c\nr apple cherry\nr z a\nr cherry cherry\n";
        let (output, summary) = run_str(input).unwrap();

        assert_eq!(output, "2\n1\n4\n0\n1\n");
        assert_eq!(summary.ranges, 5);
        assert_eq!(summary.lines, 9);
    }

    #[test]
    fn range_on_empty_set_is_zero() {
        let (output, _) = run_str("\nr a z\n").unwrap();
        assert_eq!(output, "0\n");
    }

    #[test]
    fn malformed_line_stops_the_run() {
        let err = run_str("i a\nr a\n").unwrap_err();
        assert!(matches!(err, Error::MissingOperand { line: 2, .. }));
    }
}
