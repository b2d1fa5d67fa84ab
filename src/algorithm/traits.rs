use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::WeightedGraph;
use crate::Result;

/// Distance and route between one pair of vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath<V, W> {
    /// Total weight; infinite when no route exists
    pub distance: W,

    /// Vertices from start to end
    pub path: Vec<V>,
}

impl<V, W: Float> ShortestPath<V, W> {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Source vertex
    pub source: V,

    /// Distance from source to every vertex; infinite when unreachable
    pub distances: HashMap<V, W>,

    /// Predecessor of each reached vertex in the shortest path tree
    pub predecessors: HashMap<V, V>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Finite distance to `target`, or `None` if unreachable or unknown
    pub fn distance_to(&self, target: &V) -> Option<W> {
        self.distances
            .get(target)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        self.distance_to(target)?;

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }
            let Some(pred) = self.predecessors.get(&current) else {
                // Reached a vertex with no predecessor that is not the source
                return None;
            };
            path.push(current);
            current = pred.clone();
        }

        path.push(self.source.clone());
        path.reverse();
        Some(path)
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &WeightedGraph<V, W>,
        source: &V,
    ) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
