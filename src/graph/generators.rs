use crate::graph::{Direction, MutableGraph, WeightedGraph};
use rand::prelude::*;

/// Generates a random weighted graph with `n` vertices labelled `0..n` and
/// roughly `edge_factor * n` edges with weights in `[1, 100)`.
///
/// The same seed always produces the same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
    direction: Direction,
) -> WeightedGraph<usize, f64> {
    let mut graph = WeightedGraph::with_direction(direction);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(&u, &v, weight);
        }
    }

    graph
}

/// Generates an undirected `width x height` grid with unit weights and
/// 4-connectivity. Vertex `(x, y)` is labelled `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<usize, f64> {
    let mut graph = WeightedGraph::undirected();

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph.add_edge(&current, &(current + 1), 1.0);
            }
            if y + 1 < height {
                graph.add_edge(&current, &(current + width), 1.0);
            }
        }
    }

    graph
}
