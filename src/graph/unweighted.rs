use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, warn};

use crate::algorithm::traversal;
use crate::graph::traits::{Direction, Graph, MutableGraph};

/// An unweighted graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct UnweightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    direction: Direction,

    /// Vertices in insertion order
    order: Vec<V>,

    /// vertex -> [neighbor], in insertion order
    adjacency: HashMap<V, Vec<V>>,
}

impl<V> Default for UnweightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> UnweightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
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
        UnweightedGraph {
            direction,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Adds an edge between two existing vertices.
    ///
    /// Does nothing if either vertex is missing or the edge is already
    /// present. Returns true if any neighbor entry was added.
    pub fn add_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            debug!("Ignoring edge {:?} -> {:?}: vertex not in graph", from, to);
            return false;
        }

        let mut added = false;
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if !neighbors.contains(to) {
                neighbors.push(to.clone());
                added = true;
            }
        }
        if !self.direction.is_directed() {
            if let Some(neighbors) = self.adjacency.get_mut(to) {
                if !neighbors.contains(from) {
                    neighbors.push(from.clone());
                    added = true;
                }
            }
        }
        added
    }

    /// Enumerates every walk from `start` to `destination`.
    ///
    /// # Caveat
    ///
    /// Vertices are not excluded from revisiting within a single walk, so a
    /// cycle reachable from `start` makes this run forever. Every undirected
    /// edge is such a cycle. Only call it on acyclic directed graphs.
    pub fn find_all_paths(&self, start: &V, destination: &V) -> Vec<Vec<V>> {
        traversal::find_all_paths(self, start, destination)
    }
}

impl<V> Graph<V> for UnweightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
{
    fn direction(&self) -> Direction {
        self.direction
    }

    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|neighbors| neighbors.len()).sum();
        match self.direction {
            Direction::Directed => entries,
            Direction::Undirected => {
                // Self-loops are stored once
                let loops = self
                    .adjacency
                    .iter()
                    .filter(|(vertex, neighbors)| neighbors.contains(vertex))
                    .count();
                (entries + loops) / 2
            }
        }
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.order.iter())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        match self.adjacency.get(vertex) {
            Some(neighbors) => Box::new(neighbors.iter()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |neighbors| neighbors.contains(to))
    }
}

impl<V> MutableGraph<V> for UnweightedGraph<V>
where
    V: Clone + Eq + Hash + Debug,
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
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return false;
        };

        match self.direction {
            Direction::Undirected => {
                for neighbor in neighbors {
                    if let Some(list) = self.adjacency.get_mut(&neighbor) {
                        list.retain(|v| v != vertex);
                    }
                }
            }
            // Incoming edges can sit in any list
            Direction::Directed => {
                for list in self.adjacency.values_mut() {
                    list.retain(|v| v != vertex);
                }
            }
        }
        self.order.retain(|v| v != vertex);
        true
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let position = self
            .adjacency
            .get(from)
            .and_then(|neighbors| neighbors.iter().position(|v| v == to));
        let Some(position) = position else {
            warn!("No edge found between {:?} and {:?}", from, to);
            return false;
        };

        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.remove(position);
        }
        if !self.direction.is_directed() && from != to {
            if let Some(neighbors) = self.adjacency.get_mut(to) {
                neighbors.retain(|v| v != from);
            }
        }
        true
    }
}
