use weighted_paths::graph::{Graph, MutableGraph};
use weighted_paths::{Dijkstra, ShortestPathAlgorithm, WeightedGraph};

fn main() {
    // Create a simple undirected graph
    let mut graph = WeightedGraph::new();

    for vertex in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(vertex);
    }

    // Add edges with weights
    graph.add_edge(&"A", &"B", 4.0);
    graph.add_edge(&"A", &"C", 2.0);
    graph.add_edge(&"B", &"E", 3.0);
    graph.add_edge(&"C", &"D", 2.0);
    graph.add_edge(&"C", &"F", 4.0);
    graph.add_edge(&"D", &"E", 3.0);
    graph.add_edge(&"D", &"F", 1.0);
    graph.add_edge(&"E", &"F", 1.0);

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
    println!("DFS from A: {:?}", graph.dfs(&"A"));
    println!("BFS from A: {:?}", graph.bfs(&"A"));

    let route = graph.dijkstra(&"A", &"E");
    println!("\nShortest distance from A to E is {} via {:?}", route.distance, route.path);

    // Every distance from A
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &"A").unwrap();

    println!("\n{} algorithm results:", ShortestPathAlgorithm::<&str, f64>::name(&dijkstra));
    for vertex in graph.vertices() {
        match result.distance_to(vertex) {
            None => println!("  No path to {}", vertex),
            Some(dist) => println!(
                "  Vertex {}: distance = {:.1}, path = {:?}",
                vertex,
                dist,
                result.path_to(vertex).unwrap_or_default()
            ),
        }
    }
}
