//! Unweighted traversals over any [`Graph`].
//!
//! Neighbors are always followed in insertion order. A start vertex that is
//! not in the graph yields an empty result.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::Frontier;
use crate::graph::Graph;

/// Depth-first traversal using call-stack recursion
pub fn dfs_recursive<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    if graph.has_vertex(start) {
        visit(graph, start, &mut visited, &mut order);
    }
    order
}

fn visit<V, G>(graph: &G, vertex: &V, visited: &mut HashSet<V>, order: &mut Vec<V>)
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    if !visited.insert(vertex.clone()) {
        return;
    }
    order.push(vertex.clone());
    for neighbor in graph.neighbors(vertex) {
        visit(graph, neighbor, visited, order);
    }
}

/// Visits every vertex reachable from `start` once, in the order the
/// frontier hands them out.
///
/// A vertex is marked when it is taken, not when it is put, so the frontier
/// may briefly hold duplicates. With a stack this reproduces the recursive
/// depth-first order exactly; with a queue it is breadth-first.
pub fn traverse<V, G, F>(graph: &G, start: &V, mut frontier: F) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
    F: Frontier<V>,
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    if !graph.has_vertex(start) {
        return order;
    }

    frontier.put(start.clone());
    while let Some(current) = frontier.take() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let pending: Vec<V> = graph
            .neighbors(&current)
            .filter(|neighbor| !visited.contains(*neighbor))
            .cloned()
            .collect();
        order.push(current);
        frontier.put_batch(pending);
    }
    order
}

/// Depth-first traversal with an explicit stack
pub fn dfs_iterative<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    traverse(graph, start, Vec::new())
}

/// Breadth-first traversal with a queue
pub fn bfs<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    traverse(graph, start, VecDeque::new())
}

/// Every walk from `start` to `destination`, in depth-first discovery order.
///
/// Uses an explicit stack of pending neighbor lists, one per vertex on the
/// current walk. Walks are not checked for repeated vertices: on a graph
/// with a cycle reachable from `start` this never returns.
pub fn find_all_paths<V, G>(graph: &G, start: &V, destination: &V) -> Vec<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    let mut paths = Vec::new();
    if !graph.has_vertex(start) {
        return paths;
    }

    let mut current_path = vec![start.clone()];
    if start == destination {
        paths.push(current_path);
        return paths;
    }

    let mut stack = vec![pending_neighbors(graph, start)];
    while let Some(pending) = stack.last_mut() {
        match pending.next() {
            Some(next) => {
                if next == *destination {
                    current_path.push(next);
                    paths.push(current_path.clone());
                    current_path.pop();
                } else {
                    stack.push(pending_neighbors(graph, &next));
                    current_path.push(next);
                }
            }
            None => {
                stack.pop();
                current_path.pop();
            }
        }
    }
    paths
}

fn pending_neighbors<V, G>(graph: &G, vertex: &V) -> std::vec::IntoIter<V>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    graph.neighbors(vertex).cloned().collect::<Vec<_>>().into_iter()
}

/// Recursive form of [`find_all_paths`]; same output, same caveat
pub fn find_all_paths_recursive<V, G>(graph: &G, start: &V, destination: &V) -> Vec<Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    let mut paths = Vec::new();
    let mut current_path = Vec::new();
    if graph.has_vertex(start) {
        walk(graph, start, destination, &mut current_path, &mut paths);
    }
    paths
}

fn walk<V, G>(graph: &G, vertex: &V, destination: &V, current_path: &mut Vec<V>, paths: &mut Vec<Vec<V>>)
where
    V: Clone + Eq + Hash + Debug,
    G: Graph<V> + ?Sized,
{
    current_path.push(vertex.clone());
    if vertex == destination {
        paths.push(current_path.clone());
    } else {
        for neighbor in graph.neighbors(vertex) {
            walk(graph, neighbor, destination, current_path, paths);
        }
    }
    current_path.pop();
}
