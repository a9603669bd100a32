//! The word rank batch program: ranks the words of a corpus by how often they occur, separately
//! for each word length, and looks words up by length and rank.
//!
//! The corpus has one word per line. Within one length, words are ranked by decreasing frequency
//! and ties go to the lexicographically smaller word. Ranks start at 0.
//!
//! Queries are whitespace-separated whole numbers taken two at a time: `LENGTH RANK`. Each pair
//! gets one output line, the word at that rank or `-` if there is none.
//!
//! # Examples
//!
//! ```
//! use treepath::wordrank::{self, Ranking};
//!
//! let ranking = Ranking::read("to\nbe\nor\nnot\nto\nbe\n".as_bytes())?;
//!
//! let mut output = Vec::new();
//! wordrank::run(&ranking, "2 0\n2 1\n2 2\n2 3\n3 0\n".as_bytes(), &mut output)?;
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "be\nto\nor\n-\nnot\n");
//! # Ok::<(), treepath::Error>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Words grouped by length, each group in rank order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranking {
    by_length: BTreeMap<usize, Vec<String>>,
}

impl Ranking {
    /// Ranks `words`. Lengths are in bytes. Empty words are ignored.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            match counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.to_string(), 1);
                }
            }
        }

        let mut groups: BTreeMap<usize, Vec<(String, usize)>> = BTreeMap::new();
        for (word, count) in counts {
            groups.entry(word.len()).or_default().push((word, count));
        }

        let by_length = groups
            .into_iter()
            .map(|(length, mut words)| {
                words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
                (length, words.into_iter().map(|(word, _)| word).collect())
            })
            .collect();
        Self { by_length }
    }

    /// Reads a corpus with one word per line. Surrounding whitespace is trimmed and blank lines
    /// are skipped.
    pub fn read<R>(input: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut words = Vec::new();
        for line in input.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        let ranking = Self::new(&words);
        tracing::debug!(
            words = words.len(),
            distinct = ranking.distinct(),
            lengths = ranking.by_length.len(),
            "ranking_built"
        );
        Ok(ranking)
    }

    /// The word of `length` bytes at `rank`.
    pub fn word(&self, length: usize, rank: usize) -> Option<&str> {
        self.by_length
            .get(&length)
            .and_then(|words| words.get(rank))
            .map(String::as_str)
    }

    /// Every word of `length` bytes, best ranked first.
    pub fn words(&self, length: usize) -> &[String] {
        self.by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The number of distinct words.
    pub fn distinct(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    /// Answers a query given as raw numbers. Negative numbers never match.
    pub fn lookup(&self, length: i64, rank: i64) -> Option<&str> {
        let length = usize::try_from(length).ok()?;
        let rank = usize::try_from(rank).ok()?;
        self.word(length, rank)
    }
}

/// Answers every `LENGTH RANK` pair in `queries`, one line each. A trailing number without a
/// partner is ignored. Returns the number of queries answered.
///
/// # Errors
///
/// [`Error::InvalidNumber`] for a token that is not a whole number, or an I/O failure.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<R, W>(ranking: &Ranking, queries: R, mut output: W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut pending: Option<i64> = None;
    let mut answered = 0;

    for (index, line) in queries.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let number = token.parse::<i64>().map_err(|_| Error::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            match pending.take() {
                None => pending = Some(number),
                Some(length) => {
                    writeln!(output, "{}", ranking.lookup(length, number).unwrap_or("-"))?;
                    answered += 1;
                }
            }
        }
    }
    output.flush()?;

    if let Some(length) = pending {
        tracing::warn!(length, "ignoring length without a rank");
    }
    tracing::debug!(answered, "wordrank_done");
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(ranking: &Ranking, queries: &str) -> Result<String> {
        let mut output = Vec::new();
        run(ranking, queries.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn more_frequent_words_rank_first() {
        let ranking = Ranking::new(["cat", "dog", "dog", "ant", "dog", "cat"]);

        assert_eq!(ranking.words(3), ["dog", "cat", "ant"]);
        assert_eq!(ranking.distinct(), 3);
    }

    #[test]
    fn ties_go_to_the_smaller_word() {
        let ranking = Ranking::new(["pear", "kiwi", "plum", "kiwi", "plum", "fig"]);

        assert_eq!(ranking.words(4), ["kiwi", "plum", "pear"]);
        assert_eq!(ranking.word(3, 0), Some("fig"));
    }

    #[test]
    fn lengths_are_ranked_separately() {
        let ranking = Ranking::new(["a", "bb", "bb", "bb", "a", "c"]);

        assert_eq!(ranking.word(1, 0), Some("a"));
        assert_eq!(ranking.word(1, 1), Some("c"));
        assert_eq!(ranking.word(2, 0), Some("bb"));
        assert_eq!(ranking.word(2, 1), None);
    }

    #[test]
    fn out_of_range_queries_miss() {
        let ranking = Ranking::new(["one", "two"]);

        assert_eq!(ranking.lookup(3, 2), None);
        assert_eq!(ranking.lookup(9, 0), None);
        assert_eq!(ranking.lookup(0, 0), None);
        assert_eq!(ranking.lookup(-3, 0), None);
        assert_eq!(ranking.lookup(3, -1), None);
        assert!(ranking.words(7).is_empty());
    }

    #[test]
    fn read_skips_blank_lines_and_trims() {
        let ranking = Ranking::read("  to \n\nbe\r\nto\n\t\n".as_bytes()).unwrap();

        assert_eq!(ranking.words(2), ["to", "be"]);
        assert!(ranking.words(0).is_empty());
    }

    #[test]
    fn answers_queries() {
        let ranking = Ranking::new(["the", "the", "and", "of", "of", "to"]);

        assert_eq!(
            ask(&ranking, "3 0\n3 1\n3 2\n2 1\n-1 0\n100 100\n").unwrap(),
            "the\nand\n-\nto\n-\n-\n"
        );
    }

    #[test]
    fn queries_pair_up_across_lines() {
        let ranking = Ranking::new(["of", "the"]);

        assert_eq!(ask(&ranking, "3\n0 2\n0 5").unwrap(), "the\nof\n");
    }

    #[test]
    fn bad_numbers_stop_the_run() {
        let ranking = Ranking::new(["of"]);

        let err = ask(&ranking, "2 0\n2 zero\n").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNumber { line: 2, ref token } if token == "zero"
        ));
    }
}
