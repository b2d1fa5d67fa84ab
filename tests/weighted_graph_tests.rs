use rand::prelude::*;
use weighted_paths::graph::{Direction, Graph, MutableGraph, WeightedGraph};
use weighted_paths::Error;

fn assert_symmetric(graph: &WeightedGraph<u8, f64>) {
    for v in graph.vertices() {
        for edge in graph.edges(v) {
            assert!(graph.has_vertex(&edge.target));
            assert_eq!(
                graph.edge_weight(&edge.target, v),
                Some(edge.weight),
                "edge {} - {} is not mirrored with equal weight",
                v,
                edge.target
            );
        }
    }
}

#[test]
fn test_duplicate_edge_keeps_original_weight() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex("A");
    graph.add_vertex("B");

    assert!(graph.add_edge(&"A", &"B", 4.0));
    assert!(!graph.add_edge(&"A", &"B", 10.0));
    assert!(!graph.add_edge(&"B", &"A", 1.0));
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(4.0));
    assert_eq!(graph.edge_weight(&"B", &"A"), Some(4.0));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_directed_weighted_edges() {
    let mut graph = WeightedGraph::directed();
    graph.add_vertex(1);
    graph.add_vertex(2);
    graph.add_edge(&1, &2, 3.5);

    assert_eq!(graph.edge_weight(&1, &2), Some(3.5));
    assert_eq!(graph.edge_weight(&2, &1), None);
    assert!(graph.add_edge(&2, &1, 7.0));
    assert_eq!(graph.edge_weight(&2, &1), Some(7.0));
}

#[test]
fn test_edges_to_absent_vertices_are_ignored() {
    let mut graph: WeightedGraph<&str, f64> = WeightedGraph::new();
    graph.add_vertex("A");
    assert!(!graph.add_edge(&"A", &"B", 1.0));
    assert!(graph.edges(&"A").is_empty());
    assert!(graph.edges(&"B").is_empty());
}

#[test]
fn test_remove_edge_and_vertex() {
    let mut graph = WeightedGraph::new();
    for v in ["A", "B", "C"] {
        graph.add_vertex(v);
    }
    graph.add_edge(&"A", &"B", 1.0);
    graph.add_edge(&"B", &"C", 2.0);
    graph.add_edge(&"A", &"C", 5.0);

    assert!(graph.remove_edge(&"A", &"C"));
    assert!(!graph.has_edge(&"C", &"A"));
    assert!(!graph.remove_edge(&"A", &"C"));

    assert!(graph.remove_vertex(&"B"));
    assert!(graph.edges(&"A").is_empty());
    assert!(graph.edges(&"C").is_empty());
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_from_adjacency_map() {
    let graph = WeightedGraph::from_adjacency_map(
        Direction::Undirected,
        vec![
            ("A", vec![("B", 5.0), ("D", 3.0)]),
            ("B", vec![("A", 5.0), ("D", 1.0)]),
            ("D", vec![("A", 3.0), ("B", 1.0), ("X", 9.0)]),
        ],
    );

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edge_weight(&"D", &"B"), Some(1.0));
    assert!(!graph.has_vertex(&"X"));
}

#[test]
fn test_from_json() {
    let json = r#"{"A": {"B": 4, "C": 2}, "B": {"A": 4}, "C": {"A": 2}}"#;
    let graph: WeightedGraph<String, f64> = WeightedGraph::from_json(Direction::Undirected, json).unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_weight(&"A".to_string(), &"C".to_string()), Some(2.0));
    let names: Vec<&String> = graph.vertices().collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let result: weighted_paths::Result<WeightedGraph<String, f64>> =
        WeightedGraph::from_json(Direction::Directed, r#"{"A": ["B"]}"#);
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_validate_non_negative() {
    let mut graph = WeightedGraph::directed();
    graph.add_vertex(0);
    graph.add_vertex(1);
    graph.add_edge(&0, &1, 2.0);
    assert!(graph.validate_non_negative());

    // Accepted on insertion, flagged on validation
    graph.add_edge(&1, &0, -1.0);
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_weighted_traversals() {
    let mut graph = WeightedGraph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    graph.add_edge(&"A", &"B", 1.0);
    graph.add_edge(&"A", &"C", 1.0);
    graph.add_edge(&"B", &"D", 1.0);

    assert_eq!(graph.dfs(&"A"), vec!["A", "B", "D", "C"]);
    assert_eq!(graph.bfs(&"A"), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_random_mutations_keep_weighted_symmetry() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut graph = WeightedGraph::new();

    for _ in 0..1_000 {
        let a = rng.gen_range(0..10u8);
        let b = rng.gen_range(0..10u8);
        match rng.gen_range(0..5) {
            0 => {
                graph.add_vertex(a);
            }
            1 | 2 => {
                graph.add_edge(&a, &b, rng.gen_range(0.0..10.0));
            }
            3 => {
                graph.remove_edge(&a, &b);
            }
            _ => {
                graph.remove_vertex(&a);
            }
        }
        assert_symmetric(&graph);
    }
}
