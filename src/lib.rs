//! Weighted Paths - adjacency-list graphs, traversals and shortest paths
//!
//! This library provides directed and undirected graphs keyed by arbitrary
//! hashable vertex labels, depth-first and breadth-first traversal, walk
//! enumeration, and Dijkstra's algorithm driven by an array-backed binary
//! heap priority queue.
//!
//! All mutation is permissive: edges between missing vertices are ignored,
//! removing a missing edge is logged, and an unreachable destination is
//! reported as an infinite distance rather than an error.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, floyd_warshall::FloydWarshall, ShortestPath, ShortestPathAlgorithm,
    ShortestPathResult,
};
pub use data_structures::{Frontier, HeapNode, HeapOrder, PriorityQueue};
/// Re-export main types for convenient use
pub use graph::{Direction, Graph, MutableGraph, UnweightedGraph, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Invalid adjacency map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
