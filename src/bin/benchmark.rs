use std::env;
use std::time::{Duration, Instant};

use rand::prelude::*;
use rayon::prelude::*;
use weighted_paths::graph::generators::generate_random_graph;
use weighted_paths::{Direction, FloydWarshall, Graph, WeightedGraph};

/// Benchmark settings, overridable by positional arguments:
/// `benchmark [vertices] [edge_factor] [seed] [queries]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    vertices: usize,
    edge_factor: f64,
    seed: u64,
    queries: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            vertices: 10_000,
            edge_factor: 4.0,
            seed: 42,
            queries: 64,
        }
    }
}

impl BenchmarkConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let defaults = Self::default();
        BenchmarkConfig {
            vertices: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.vertices),
            edge_factor: args.get(2).and_then(|a| a.parse().ok()).unwrap_or(defaults.edge_factor),
            seed: args.get(3).and_then(|a| a.parse().ok()).unwrap_or(defaults.seed),
            queries: args.get(4).and_then(|a| a.parse().ok()).unwrap_or(defaults.queries),
        }
    }
}

// Runs the queries in parallel; each query only reads the graph
fn run_queries(graph: &WeightedGraph<usize, f64>, pairs: &[(usize, usize)]) -> (Duration, usize) {
    let start = Instant::now();
    let reachable = pairs
        .par_iter()
        .filter(|(from, to)| graph.dijkstra(from, to).is_reachable())
        .count();
    (start.elapsed(), reachable)
}

// Cross-checks a handful of queries against Floyd-Warshall on a small graph
fn verify_small(seed: u64) -> bool {
    let graph = generate_random_graph(60, 3.0, seed, Direction::Directed);
    let all_pairs = match FloydWarshall::new().all_pairs(&graph) {
        Ok(all_pairs) => all_pairs,
        Err(e) => {
            log::error!("Reference computation failed: {}", e);
            return false;
        }
    };
    (0..60).all(|from| {
        (0..60).all(|to| {
            let expected = all_pairs.distance(&from, &to).unwrap_or(f64::INFINITY);
            let actual = graph.dijkstra(&from, &to).distance;
            expected == actual || (expected - actual).abs() < 1e-9
        })
    })
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = BenchmarkConfig::from_args();

    println!("=====================================================");
    println!("Benchmark: point-to-point Dijkstra");
    println!("Configuration: {:?}", config);
    println!("=====================================================");

    println!("Verifying against Floyd-Warshall on a small graph...");
    if verify_small(config.seed) {
        println!("  - All distances agree");
    } else {
        println!("  - MISMATCH between Dijkstra and Floyd-Warshall");
        std::process::exit(1);
    }

    for direction in [Direction::Directed, Direction::Undirected] {
        println!("\nGenerating {:?} graph with {} vertices...", direction, config.vertices);
        let graph = generate_random_graph(config.vertices, config.edge_factor, config.seed, direction);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let mut rng = StdRng::seed_from_u64(config.seed);
        let queries = if config.vertices == 0 { 0 } else { config.queries };
        let pairs: Vec<(usize, usize)> = (0..queries)
            .map(|_| (rng.gen_range(0..config.vertices), rng.gen_range(0..config.vertices)))
            .collect();

        let (elapsed, reachable) = run_queries(&graph, &pairs);
        println!("  - {} of {} queries reachable in {:?}", reachable, pairs.len(), elapsed);
        if !pairs.is_empty() {
            println!("  - {:.3} ms per query", elapsed.as_secs_f64() * 1000.0 / pairs.len() as f64);
        }
    }
}
