use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPath;
use crate::graph::traits::{Direction, Graph, MutableGraph};
use crate::Result;

/// An entry in a vertex's neighbor list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V, W> {
    pub target: V,
    pub weight: W,
}

/// A weighted graph implementation using adjacency lists.
///
/// Weights are expected to be non-negative. This is not enforced on
/// insertion; see [`validate_non_negative`](WeightedGraph::validate_non_negative).
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    direction: Direction,

    /// Vertices in insertion order
    order: Vec<V>,

    /// vertex -> [(target, weight)], in insertion order
    adjacency: HashMap<V, Vec<WeightedEdge<V, W>>>,
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        Self::with_direction(Direction::Undirected)
    }

    pub fn undirected() -> Self {
        Self::with_direction(Direction::Undirected)
    }

    pub fn directed() -> Self {
        Self::with_direction(Direction::Directed)
    }

    pub fn with_direction(direction: Direction) -> Self {
        WeightedGraph {
            direction,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Builds a graph from `vertex -> [(neighbor, weight)]` entries.
    ///
    /// Every key becomes a vertex before any edge is added, so entries may
    /// reference keys that appear later. Neighbors that are not keys are
    /// ignored, as are repeated edges.
    pub fn from_adjacency_map<I, N>(direction: Direction, map: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, W)>,
    {
        let entries: Vec<(V, N)> = map.into_iter().collect();
        let mut graph = Self::with_direction(direction);
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone());
        }
        for (vertex, neighbors) in entries {
            for (neighbor, weight) in neighbors {
                graph.add_edge(&vertex, &neighbor, weight);
            }
        }
        graph
    }

    /// Parses a JSON object of objects, e.g. `{"A": {"B": 5, "C": 2}}`.
    ///
    /// Keys are loaded in sorted order.
    pub fn from_json(direction: Direction, json: &str) -> Result<Self>
    where
        V: DeserializeOwned + Ord,
        W: DeserializeOwned,
    {
        let map: BTreeMap<V, BTreeMap<V, W>> = serde_json::from_str(json)?;
        Ok(Self::from_adjacency_map(direction, map))
    }

    /// Adds a weighted edge between two existing vertices.
    ///
    /// If the pair already has an edge the original weight is kept. For
    /// undirected graphs each side is checked on its own. Returns true if
    /// any entry was added.
    pub fn add_edge(&mut self, from: &V, to: &V, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            debug!("Ignoring edge {:?} -> {:?}: vertex not in graph", from, to);
            return false;
        }

        let mut added = Self::push_edge(&mut self.adjacency, from, to, weight);
        if !self.direction.is_directed() {
            added |= Self::push_edge(&mut self.adjacency, to, from, weight);
        }
        if !added {
            debug!(
                "Edge {:?} -> {:?} already present, keeping original weight",
                from, to
            );
        }
        added
    }

    fn push_edge(
        adjacency: &mut HashMap<V, Vec<WeightedEdge<V, W>>>,
        from: &V,
        to: &V,
        weight: W,
    ) -> bool {
        let Some(edges) = adjacency.get_mut(from) else {
            return false;
        };
        if edges.iter().any(|edge| edge.target == *to) {
            return false;
        }
        edges.push(WeightedEdge {
            target: to.clone(),
            weight,
        });
        true
    }

    /// Outgoing edges of a vertex in insertion order; empty if absent
    pub fn edges(&self, vertex: &V) -> &[WeightedEdge<V, W>] {
        match self.adjacency.get(vertex) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.edges(from)
            .iter()
            .find(|edge| edge.target == *to)
            .map(|edge| edge.weight)
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .all(|edge| edge.weight >= W::zero())
    }

    /// Shortest distance and path from `start` to `end`.
    ///
    /// An unreachable `end` yields an infinite distance and the path
    /// `[start]`. If either vertex is missing the distance is infinite and
    /// the path empty.
    pub fn dijkstra(&self, start: &V, end: &V) -> ShortestPath<V, W> {
        Dijkstra::new().shortest_path(self, start, end)
    }
}

impl<V, W> Graph<V> for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn direction(&self) -> Direction {
        self.direction
    }

    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|edges| edges.len()).sum();
        match self.direction {
            Direction::Directed => entries,
            Direction::Undirected => {
                let loops = self
                    .adjacency
                    .iter()
                    .filter(|(vertex, edges)| edges.iter().any(|edge| edge.target == **vertex))
                    .count();
                (entries + loops) / 2
            }
        }
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.order.iter())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.edges(vertex).iter().map(|edge| &edge.target))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edges(from).iter().any(|edge| edge.target == *to)
    }
}

impl<V, W> MutableGraph<V> for WeightedGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.order.push(vertex.clone());
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(edges) = self.adjacency.remove(vertex) else {
            return false;
        };

        match self.direction {
            Direction::Undirected => {
                for edge in edges {
                    if let Some(list) = self.adjacency.get_mut(&edge.target) {
                        list.retain(|e| e.target != *vertex);
                    }
                }
            }
            Direction::Directed => {
                for list in self.adjacency.values_mut() {
                    list.retain(|e| e.target != *vertex);
                }
            }
        }
        self.order.retain(|v| v != vertex);
        debug!("Removed vertex {:?}", vertex);
        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }
        if !self.has_edge(from, to) {
            warn!("No edge found between {:?} and {:?}", from, to);
            return false;
        }

        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.retain(|edge| edge.target != *to);
        }
        if !self.direction.is_directed() {
            if let Some(edges) = self.adjacency.get_mut(to) {
                edges.retain(|edge| edge.target != *from);
            }
        }
        true
    }
}
