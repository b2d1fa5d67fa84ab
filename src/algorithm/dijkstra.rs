use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{HeapNode, HeapOrder, PriorityQueue};
use crate::graph::{Graph, WeightedGraph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over a min-priority queue.
///
/// Improved distances are pushed as new queue entries rather than updating
/// existing ones, so the queue can hold stale duplicates of a vertex. Those
/// are skipped by default; with [`with_stale_skip(false)`](Dijkstra::with_stale_skip)
/// they are relaxed again, which cannot change any distance.
///
/// Negative weights give meaningless results.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    skip_stale: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

/// Distances and predecessors left behind by one search
struct SearchState<V, W> {
    distances: HashMap<V, W>,
    previous: HashMap<V, V>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { skip_stale: true }
    }

    /// Whether entries whose priority exceeds the vertex's current distance
    /// are discarded on extraction
    pub fn with_stale_skip(mut self, enabled: bool) -> Self {
        self.skip_stale = enabled;
        self
    }

    /// Shortest distance and path from `start` to `end`.
    ///
    /// Never fails: an unreachable `end` gives an infinite distance and the
    /// path `[start]`; a missing `start` or `end` gives an infinite distance
    /// and an empty path.
    pub fn shortest_path<V, W>(&self, graph: &WeightedGraph<V, W>, start: &V, end: &V) -> ShortestPath<V, W>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
    {
        if !graph.has_vertex(start) || !graph.has_vertex(end) {
            debug!("No shortest path query possible between {:?} and {:?}: vertex not in graph", start, end);
            return ShortestPath {
                distance: W::infinity(),
                path: Vec::new(),
            };
        }

        let state = self.search(graph, start, Some(end));
        let distance = state.distances.get(end).copied().unwrap_or_else(W::infinity);

        // Walk predecessors back from the end
        let mut path = Vec::new();
        let mut node = end.clone();
        let mut seen = HashSet::new();
        while let Some(prev) = state.previous.get(&node) {
            if !seen.insert(node.clone()) {
                warn!("Cycle detected in predecessor chain at vertex {:?}", node);
                break;
            }
            path.push(node);
            node = prev.clone();
        }
        path.push(start.clone());
        path.reverse();

        ShortestPath { distance, path }
    }

    fn search<V, W>(&self, graph: &WeightedGraph<V, W>, start: &V, target: Option<&V>) -> SearchState<V, W>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
    {
        let mut distances: HashMap<V, W> = graph
            .vertices()
            .map(|v| {
                let initial = if v == start { W::zero() } else { W::infinity() };
                (v.clone(), initial)
            })
            .collect();
        let mut previous: HashMap<V, V> = HashMap::new();

        // One entry per vertex, seeded with the initial distances
        let mut queue = PriorityQueue::with_capacity(HeapOrder::Min, graph.vertex_count());
        queue.enqueue_all(graph.vertices().map(|v| (v.clone(), distances[v])));

        let mut extractions = 0usize;
        let mut relaxations = 0usize;
        while let Some(HeapNode { value: u, priority }) = queue.dequeue() {
            extractions += 1;
            trace!("Extracted {:?} with priority {:?}", u, priority);

            if target == Some(&u) {
                break;
            }

            let dist_u = distances.get(&u).copied().unwrap_or_else(W::infinity);
            if self.skip_stale && priority > dist_u {
                continue;
            }

            for edge in graph.edges(&u) {
                let candidate = dist_u + edge.weight;
                let current = distances.get(&edge.target).copied().unwrap_or_else(W::infinity);
                if candidate < current {
                    distances.insert(edge.target.clone(), candidate);
                    previous.insert(edge.target.clone(), u.clone());
                    queue.enqueue(edge.target.clone(), candidate);
                    relaxations += 1;
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: {} extractions, {} relaxations, {} entries left",
            start,
            extractions,
            relaxations,
            queue.len()
        );

        SearchState { distances, previous }
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for Dijkstra
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &WeightedGraph<V, W>, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let SearchState { distances, previous } = self.search(graph, source, None);
        Ok(ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors: previous,
        })
    }
}
