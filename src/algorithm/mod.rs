pub mod dijkstra;
pub mod floyd_warshall;
pub mod traits;
pub mod traversal;

pub use traits::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
