//! Shortest paths, by number of edges, between two vertices of an [`Adjacency`].
//!
//! The search is a breadth-first traversal that records, for every vertex it reaches, the vertex
//! and edge it was first reached through. It stops as soon as the destination is reached and
//! then walks those records back to the source.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use treepath::bfs::shortest_path;
//! use treepath::graph::Edge;
//!
//! let mut cast = HashMap::new();
//! cast.insert("Tom".to_string(), vec![Edge::new("Up".to_string(), "Ed")]);
//! cast.insert(
//!     "Ed".to_string(),
//!     vec![Edge::new("Up".to_string(), "Tom"), Edge::new("Down".to_string(), "Amy")],
//! );
//! cast.insert("Amy".to_string(), vec![]);
//!
//! let path = shortest_path("Tom", "Amy", &cast).unwrap();
//! assert_eq!(path.to_string(), "Tom -(Up)- Ed -(Down)- Amy");
//! assert_eq!(path.len(), 2);
//!
//! // Edges are directed: nothing leaves Amy.
//! assert_eq!(shortest_path("Amy", "Tom", &cast), None);
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::graph::Adjacency;

/// One step of a [`Path`]: the label of the edge taken and the vertex it leads to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hop<L> {
    /// The label of the edge taken.
    pub label: L,
    /// Where the edge leads.
    pub vertex: String,
}

/// A path from a source vertex through zero or more labelled edges.
///
/// Displays as the vertices joined by their edge labels, e.g. `a -(x)- b -(y)- c`. A path with no
/// edges displays as just its source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<L> {
    source: String,
    hops: Vec<Hop<L>>,
}

impl<L> Path<L> {
    fn trivial(vertex: &str) -> Self {
        Self {
            source: vertex.to_string(),
            hops: Vec::new(),
        }
    }

    /// The vertex the path starts at.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The vertex the path ends at. For a path with no edges, the source.
    pub fn destination(&self) -> &str {
        self.hops.last().map_or(&self.source, |hop| &hop.vertex)
    }

    /// The steps after the source, in order.
    pub fn hops(&self) -> &[Hop<L>] {
        &self.hops
    }

    /// The number of edges on the path.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Whether the path has no edges, i.e. starts where it ends.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Every vertex on the path, source first.
    pub fn vertices(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.source.as_str()).chain(self.hops.iter().map(|hop| hop.vertex.as_str()))
    }

    /// Every edge label on the path, in order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.hops.iter().map(|hop| &hop.label)
    }
}

impl<L> fmt::Display for Path<L>
where
    L: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)?;
        for hop in &self.hops {
            write!(f, " -({})- {}", hop.label, hop.vertex)?;
        }
        Ok(())
    }
}

/// How the search first reached a vertex.
struct Predecessor<'a, L> {
    vertex: &'a str,
    label: &'a L,
}

/// Finds a path from `source` to `destination` with as few edges as possible.
///
/// Returns `None` when either vertex is missing from `adjacency` or when nothing connects them.
/// When both name the same vertex the path has no edges. Among several shortest paths, the one
/// whose vertices were discovered first wins, with each vertex's edges tried in the order
/// `adjacency` lists them.
pub fn shortest_path<'a, A>(
    source: &'a str,
    destination: &str,
    adjacency: &'a A,
) -> Option<Path<A::Label>>
where
    A: Adjacency + ?Sized,
    A::Label: Clone + 'a,
{
    if !adjacency.contains_vertex(source) || !adjacency.contains_vertex(destination) {
        tracing::trace!(source, destination, "bfs_vertex_not_present");
        return None;
    }
    if source == destination {
        return Some(Path::trivial(source));
    }

    let predecessors = search(source, destination, adjacency)?;
    Some(reconstruct(source, destination, &predecessors))
}

/// Runs the traversal and returns the predecessor map if `destination` was reached.
fn search<'a, A>(
    source: &'a str,
    destination: &str,
    adjacency: &'a A,
) -> Option<HashMap<&'a str, Predecessor<'a, A::Label>>>
where
    A: Adjacency + ?Sized,
    A::Label: 'a,
{
    let mut visited: HashSet<&'a str> = HashSet::from([source]);
    let mut predecessors = HashMap::new();
    let mut frontier = VecDeque::from([source]);
    let mut expanded = 0usize;

    while let Some(current) = frontier.pop_front() {
        expanded += 1;
        for edge in adjacency.edges(current) {
            let neighbor = edge.to.as_str();
            if !visited.insert(neighbor) {
                continue;
            }
            predecessors.insert(
                neighbor,
                Predecessor {
                    vertex: current,
                    label: &edge.label,
                },
            );
            if neighbor == destination {
                tracing::trace!(source, destination, expanded, visited = visited.len(), "bfs_found");
                return Some(predecessors);
            }
            frontier.push_back(neighbor);
        }
    }

    tracing::trace!(source, destination, expanded, visited = visited.len(), "bfs_exhausted");
    None
}

fn reconstruct<L>(
    source: &str,
    destination: &str,
    predecessors: &HashMap<&str, Predecessor<'_, L>>,
) -> Path<L>
where
    L: Clone,
{
    let mut hops = Vec::new();
    let mut current = destination;
    while current != source {
        let Some(predecessor) = predecessors.get(current) else {
            unreachable!("Every reached vertex but the source has a predecessor");
        };
        hops.push(Hop {
            label: predecessor.label.clone(),
            vertex: current.to_string(),
        });
        current = predecessor.vertex;
    }
    hops.reverse();

    Path {
        source: source.to_string(),
        hops,
    }
}
