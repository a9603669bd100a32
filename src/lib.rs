//! This crate answers batch queries over small in-memory structures: counting the words that
//! fall in a lexicographic range, finding the shortest chain of labelled edges between two
//! vertices of a graph, and looking up words by length and frequency rank.
//!
//! ## Binary Search Tree
//!
//! [`bst::Tree`] is a Binary Search Tree supporting operations to insert, find, and delete stored
//! keys, plus an inclusive range count. Its invariant is about order only:
//!
//! 1. For every node, all the nodes in its left subtree have a key less than or equal to its own.
//! 2. For every node, all the nodes in its right subtree have a key greater than its own.
//!
//! Nothing bounds the height. With `N` keys inserted in sorted order the tree is a single path of
//! `N` nodes, and every operation is `O(N)`. That is accepted rather than fixed here.
//!
//! ## Breadth-First Search
//!
//! [`bfs::shortest_path`] searches any [`graph::Adjacency`] for a path with the fewest edges
//! between two vertices, returning the vertices and the labels of the edges joining them.
//!
//! ## Drivers
//!
//! [`wordrange`] and [`sixdegrees`] turn input files into calls on the two structures above and
//! format the answers. [`wordrank`] ranks a word corpus by frequency. Each has a binary of the
//! same name.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bfs;
pub mod bst;
pub mod cli;
pub mod error;
pub mod graph;
pub mod logging;
pub mod sixdegrees;
pub mod wordrange;
pub mod wordrank;

mod util;


pub use error::{Error, Result};
