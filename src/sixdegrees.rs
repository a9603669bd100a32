//! The six degrees batch program: links actors who appeared in the same movie and answers, for
//! pairs of actors, the shortest chain of movies connecting them.
//!
//! The corpus has one movie per line: a title followed by the cast, separated by whitespace.
//! Queries are whitespace-separated actor names, taken two at a time. Each pair gets one output
//! line: `Not present` if either actor is unknown or no chain exists, the actor's name if both are
//! the same, and otherwise the chain, e.g. `Tom -(Up)- Ed -(Down)- Amy`.
//!
//! # Examples
//!
//! ```
//! use treepath::sixdegrees::{self, IdSequence};
//!
//! let corpus = "Up Tom Ed\nDown Ed Amy\nSolo Zed\n";
//! let movies = sixdegrees::parse_movies(corpus.as_bytes(), &mut IdSequence::new())?;
//! let graph = sixdegrees::build_graph(&movies);
//!
//! let mut output = Vec::new();
//! sixdegrees::run(&graph, "Tom Amy\nTom Zed\nEd Ed\n".as_bytes(), &mut output)?;
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "Tom -(Up)- Ed -(Down)- Amy\nNot present\nEd\n"
//! );
//! # Ok::<(), treepath::Error>(())
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::io::{BufRead, Write};

use crate::bfs::{self, Path};
use crate::error::{Error, Result};
use crate::graph::{Adjacency, Graph};

/// Identifies one line of the corpus. Two movies with the same title get different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MovieId(u32);

impl MovieId {
    /// The raw id.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Hands out [`MovieId`]s in increasing order, starting at 0.
#[derive(Debug, Default)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    /// Starts a sequence at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next id.
    ///
    /// # Errors
    ///
    /// [`Error::IdsExhausted`] once every `u32` below `u32::MAX` has been handed out.
    pub fn next_id(&mut self) -> Result<MovieId> {
        let next = self.next.checked_add(1).ok_or(Error::IdsExhausted)?;
        let id = MovieId(self.next);
        self.next = next;
        Ok(id)
    }
}

/// One line of the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Movie {
    /// Unique per line, even when titles repeat.
    pub id: MovieId,
    /// The first token on the line.
    pub title: String,
    /// Each actor once, in sorted order.
    pub cast: BTreeSet<String>,
}

/// The label on an edge between two actors: the movie they share. Displays as the title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Credit {
    /// The movie's id.
    pub movie: MovieId,
    /// The movie's title.
    pub title: String,
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Reads the corpus, one movie per non-blank line, assigning ids from `ids` in line order.
pub fn parse_movies<R>(input: R, ids: &mut IdSequence) -> Result<Vec<Movie>>
where
    R: BufRead,
{
    let mut movies = Vec::new();
    for line in input.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(title) = tokens.next() else {
            continue;
        };
        movies.push(Movie {
            id: ids.next_id()?,
            title: title.to_string(),
            cast: tokens.map(str::to_string).collect(),
        });
    }
    Ok(movies)
}

/// Links every pair of actors sharing a movie, in both directions.
///
/// Every actor becomes a vertex, even one who shares no movie with anybody. An actor's edges are
/// ordered by movie (in corpus order), then by co-star name.
pub fn build_graph(movies: &[Movie]) -> Graph<Credit> {
    let mut graph: Graph<Credit> = Graph::new();
    for movie in movies {
        let credit = Credit {
            movie: movie.id,
            title: movie.title.clone(),
        };
        for actor in &movie.cast {
            graph.add_vertex(actor);
            for co_star in movie.cast.iter().filter(|co_star| *co_star != actor) {
                graph.add_edge(actor, credit.clone(), co_star);
            }
        }
    }

    tracing::debug!(
        movies = movies.len(),
        actors = graph.vertex_count(),
        edges = graph.edge_count(),
        "actor_graph_built"
    );
    graph
}

/// The answer to one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    /// One of the actors is unknown or nothing connects them.
    NotPresent,
    /// Both actors are the same person.
    Same(String),
    /// The shortest chain of movies from the first actor to the second.
    Path(Path<Credit>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::NotPresent => f.write_str("Not present"),
            Answer::Same(actor) => f.write_str(actor),
            Answer::Path(path) => fmt::Display::fmt(path, f),
        }
    }
}

/// Answers a single query.
pub fn answer<A>(graph: &A, from: &str, to: &str) -> Answer
where
    A: Adjacency<Label = Credit> + ?Sized,
{
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return Answer::NotPresent;
    }
    if from == to {
        return Answer::Same(from.to_string());
    }
    match bfs::shortest_path(from, to, graph) {
        Some(path) => Answer::Path(path),
        None => Answer::NotPresent,
    }
}

/// Answers every pair of actors in `queries`, one line each. A trailing actor without a partner
/// is ignored. Returns the number of queries answered.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<A, R, W>(graph: &A, queries: R, mut output: W) -> Result<usize>
where
    A: Adjacency<Label = Credit> + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut pending: Option<String> = None;
    let mut answered = 0;

    for line in queries.lines() {
        let line = line?;
        for actor in line.split_whitespace() {
            match pending.take() {
                None => pending = Some(actor.to_string()),
                Some(from) => {
                    writeln!(output, "{}", answer(graph, &from, actor))?;
                    answered += 1;
                }
            }
        }
    }
    output.flush()?;

    if let Some(unpaired) = pending {
        tracing::warn!(actor = %unpaired, "ignoring actor without a partner");
    }
    tracing::debug!(answered, "sixdegrees_done");
    Ok(answered)
}
