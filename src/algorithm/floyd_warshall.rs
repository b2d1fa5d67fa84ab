use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, WeightedGraph};
use crate::{Error, Result};

/// All-pairs shortest paths in O(n^3), used as a reference for Dijkstra
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

/// Distance and predecessor matrices indexed by vertex insertion order
#[derive(Debug, Clone)]
pub struct AllPairs<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    dist: Vec<Vec<W>>,
    /// prev[i][j] is the vertex before j on the best i -> j path
    prev: Vec<Vec<Option<usize>>>,
}

impl<V, W> AllPairs<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Shortest distance, infinite when unreachable; `None` for unknown vertices
    pub fn distance(&self, from: &V, to: &V) -> Option<W> {
        let (&i, &j) = (self.index.get(from)?, self.index.get(to)?);
        Some(self.dist[i][j])
    }

    /// One shortest path, or `None` when unreachable or unknown
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        let (&i, &j) = (self.index.get(from)?, self.index.get(to)?);
        if !self.dist[i][j].is_finite() {
            return None;
        }

        let mut path = vec![self.vertices[j].clone()];
        let mut current = j;
        while current != i {
            current = self.prev[i][current]?;
            path.push(self.vertices[current].clone());
            if path.len() > self.vertices.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }
}

impl FloydWarshall {
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes every pairwise distance. Negative weights are rejected.
    pub fn all_pairs<V, W>(&self, graph: &WeightedGraph<V, W>) -> Result<AllPairs<V, W>>
    where
        V: Clone + Eq + Hash + Debug,
        W: Float + Debug,
    {
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        let index: HashMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let n = vertices.len();

        let mut dist = vec![vec![W::infinity(); n]; n];
        let mut prev = vec![vec![None; n]; n];
        for i in 0..n {
            dist[i][i] = W::zero();
        }

        for (i, vertex) in vertices.iter().enumerate() {
            for edge in graph.edges(vertex) {
                if edge.weight < W::zero() {
                    return Err(Error::NegativeWeight(edge.weight.to_f64().unwrap_or(f64::NAN)));
                }
                let Some(&j) = index.get(&edge.target) else {
                    continue;
                };
                if edge.weight < dist[i][j] {
                    dist[i][j] = edge.weight;
                    prev[i][j] = Some(i);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if !dist[i][k].is_finite() {
                    continue;
                }
                for j in 0..n {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                        prev[i][j] = prev[k][j];
                    }
                }
            }
        }

        Ok(AllPairs {
            vertices,
            index,
            dist,
            prev,
        })
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for FloydWarshall
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn compute_shortest_paths(&self, graph: &WeightedGraph<V, W>, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let all_pairs = self.all_pairs(graph)?;
        let s = all_pairs.index[source];
        let mut distances = HashMap::with_capacity(all_pairs.vertices.len());
        let mut predecessors = HashMap::new();
        for (j, vertex) in all_pairs.vertices.iter().enumerate() {
            distances.insert(vertex.clone(), all_pairs.dist[s][j]);
            if j != s {
                if let Some(p) = all_pairs.prev[s][j] {
                    predecessors.insert(vertex.clone(), all_pairs.vertices[p].clone());
                }
            }
        }

        Ok(ShortestPathResult {
            source: source.clone(),
            distances,
            predecessors,
        })
    }
}
