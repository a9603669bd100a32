//! Read-only views of a graph whose vertices are named by strings and whose edges carry labels.
//!
//! Searches only ever ask two things of a graph: whether a vertex exists, and which labelled edges
//! leave it, in order. [`Adjacency`] is that interface. It is implemented for plain maps of edge
//! lists and for [`Graph`], which keeps edge lists in the order they were added.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// An edge leaving some vertex, labelled with `L` and pointing at the vertex named `to`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<L = String> {
    /// What the edge is labelled with, e.g. the movie two actors share.
    pub label: L,
    /// The vertex the edge points at.
    pub to: String,
}

impl<L> Edge<L> {
    /// Creates an edge to `to`.
    pub fn new(label: L, to: impl Into<String>) -> Self {
        Self {
            label,
            to: to.into(),
        }
    }
}

/// An adjacency relation: a mapping from vertex name to an ordered list of outgoing edges.
///
/// Implementations must not change while a search is borrowing them.
pub trait Adjacency {
    /// What the edges are labelled with.
    type Label;

    /// Whether `vertex` is part of the graph, with or without edges.
    fn contains_vertex(&self, vertex: &str) -> bool;

    /// The edges leaving `vertex`, in the order a search should try them. Unknown vertices have
    /// no edges.
    fn edges(&self, vertex: &str) -> &[Edge<Self::Label>];
}

impl<L, S> Adjacency for HashMap<String, Vec<Edge<L>>, S>
where
    S: BuildHasher,
{
    type Label = L;

    fn contains_vertex(&self, vertex: &str) -> bool {
        self.contains_key(vertex)
    }

    fn edges(&self, vertex: &str) -> &[Edge<L>] {
        self.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<L> Adjacency for BTreeMap<String, Vec<Edge<L>>> {
    type Label = L;

    fn contains_vertex(&self, vertex: &str) -> bool {
        self.contains_key(vertex)
    }

    fn edges(&self, vertex: &str) -> &[Edge<L>] {
        self.get(vertex).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A directed graph built up one vertex or edge at a time. Each vertex's edges stay in the order
/// they were added.
///
/// # Examples
///
/// ```
/// use treepath::graph::{Adjacency, Graph};
///
/// let mut graph: Graph = Graph::new();
/// graph.add_edge("Tom", "Up", "Ed");
/// graph.add_vertex("Amy");
///
/// assert!(graph.contains_vertex("Amy"));
/// assert!(graph.contains_vertex("Ed"));
/// assert_eq!(graph.edges("Tom").len(), 1);
/// assert!(graph.edges("Amy").is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Graph<L = String> {
    adjacency: HashMap<String, Vec<Edge<L>>>,
    edge_count: usize,
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> Graph<L> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Adds `vertex` with no edges. Adding a vertex that already exists keeps its edges.
    pub fn add_vertex(&mut self, vertex: &str) {
        if !self.adjacency.contains_key(vertex) {
            self.adjacency.insert(vertex.to_string(), Vec::new());
        }
    }

    /// Adds an edge from `from` to `to`, adding either vertex if it is new. The edge is tried
    /// after every edge already leaving `from`.
    pub fn add_edge(&mut self, from: &str, label: impl Into<L>, to: &str) {
        self.add_vertex(to);
        self.add_vertex(from);
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push(Edge::new(label.into(), to));
            self.edge_count += 1;
        }
    }

    /// The number of vertices, including ones with no edges.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<L> Adjacency for Graph<L> {
    type Label = L;

    fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_vertex(vertex)
    }

    fn edges(&self, vertex: &str) -> &[Edge<L>] {
        self.adjacency.edges(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_keep_insertion_order() {
        let mut graph: Graph = Graph::new();
        graph.add_edge("a", "x", "c");
        graph.add_edge("a", "y", "b");
        graph.add_edge("a", "z", "c");

        let targets: Vec<_> = graph.edges("a").iter().map(|e| e.to.as_str()).collect();
        assert_eq!(targets, ["c", "b", "c"]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn adding_a_vertex_twice_keeps_edges() {
        let mut graph: Graph = Graph::new();
        graph.add_edge("a", "x", "b");
        graph.add_vertex("a");

        assert_eq!(graph.edges("a"), [Edge::new("x".to_string(), "b")]);
    }

    #[test]
    fn unknown_vertices_have_no_edges() {
        let map: HashMap<String, Vec<Edge>> = HashMap::new();
        assert!(!map.contains_vertex("ghost"));
        assert!(map.edges("ghost").is_empty());

        let map: BTreeMap<String, Vec<Edge>> = BTreeMap::new();
        assert!(map.edges("ghost").is_empty());
    }
}
