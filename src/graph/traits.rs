use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::algorithm::traversal;

/// Whether edges are stored once or mirrored in both endpoints' lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Directed,
    #[default]
    Undirected,
}

impl Direction {
    pub fn is_directed(self) -> bool {
        self == Direction::Directed
    }
}

/// Trait representing a read-only view of an adjacency-list graph
pub trait Graph<V>: Debug
where
    V: Clone + Eq + Hash + Debug,
{
    /// Returns whether edges are directed
    fn direction(&self) -> Direction;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges; an undirected edge counts once
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the vertices in insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the neighbors of a vertex in insertion order
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if `to` is in the neighbor list of `from`
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Depth-first traversal using call-stack recursion
    fn dfs_recursive(&self, start: &V) -> Vec<V> {
        traversal::dfs_recursive(self, start)
    }

    /// Depth-first traversal using an explicit stack. Same order as
    /// [`dfs_recursive`](Graph::dfs_recursive).
    fn dfs_iterative(&self, start: &V) -> Vec<V> {
        traversal::dfs_iterative(self, start)
    }

    fn dfs(&self, start: &V) -> Vec<V> {
        traversal::dfs_iterative(self, start)
    }

    /// Breadth-first traversal
    fn bfs(&self, start: &V) -> Vec<V> {
        traversal::bfs(self, start)
    }
}

/// Trait for mutations shared by weighted and unweighted graphs.
///
/// Operations referencing absent vertices do nothing and return false.
pub trait MutableGraph<V>: Graph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Adds a vertex with no neighbors. Returns false if it already exists.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex and every edge incident to it
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Removes the edge (both mirrored entries for undirected graphs).
    /// A missing edge is logged, not raised.
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;
}
