use rand::prelude::*;
use weighted_paths::{HeapOrder, PriorityQueue};

#[test]
fn test_enqueue_all_then_dequeue_in_priority_order() {
    let mut queue = PriorityQueue::min();
    queue.enqueue_all([("x", 5), ("y", 1), ("z", 3)]);
    assert_eq!(queue.size(), 3);

    assert_eq!(queue.dequeue().map(|node| node.value), Some("y"));
    assert_eq!(queue.dequeue().map(|node| node.value), Some("z"));
    assert_eq!(queue.dequeue().map(|node| node.value), Some("x"));
    assert!(queue.dequeue().is_none());
}

#[test]
fn test_max_heap_mirrors_min_heap() {
    let mut queue = PriorityQueue::max();
    queue.enqueue_all([("x", 5), ("y", 1), ("z", 3), ("w", 8)]);

    let order: Vec<&str> = std::iter::from_fn(|| queue.dequeue().map(|node| node.value)).collect();
    assert_eq!(order, vec!["w", "x", "z", "y"]);
}

#[test]
fn test_empty_queue_returns_none() {
    let mut queue: PriorityQueue<u32, f64> = PriorityQueue::min();
    assert!(queue.is_empty());
    assert!(queue.peek().is_none());
    assert!(queue.dequeue().is_none());
    assert!(queue.dequeue_at(3).is_none());
}

#[test]
fn test_dequeue_out_of_bounds_leaves_queue_untouched() {
    let mut queue = PriorityQueue::min();
    queue.enqueue_all([(1, 1), (2, 2)]);
    assert!(queue.dequeue_at(2).is_none());
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_duplicates_are_kept() {
    let mut queue = PriorityQueue::min();
    queue.enqueue("a", 4.0);
    queue.enqueue("a", 2.0);
    queue.enqueue("a", 9.0);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue().map(|node| node.priority), Some(2.0));
    assert_eq!(queue.dequeue().map(|node| node.priority), Some(4.0));
}

#[test]
fn test_sift_down_tie_prefers_left_child() {
    let mut queue = PriorityQueue::min();
    queue.enqueue_all([("root", 0), ("left", 1), ("right", 1), ("leaf", 5)]);
    assert_eq!(queue.dequeue().map(|node| node.value), Some("root"));

    // "leaf" moved to the root and both children tie at 1
    let values: Vec<&str> = queue.nodes().iter().map(|node| node.value).collect();
    assert_eq!(values, vec!["left", "leaf", "right"]);
}

#[test]
fn test_sift_down_takes_strictly_smaller_right_child() {
    let mut queue = PriorityQueue::min();
    queue.enqueue_all([("root", 0), ("left", 2), ("right", 1), ("leaf", 5)]);
    queue.dequeue();

    let values: Vec<&str> = queue.nodes().iter().map(|node| node.value).collect();
    assert_eq!(values, vec!["right", "left", "leaf"]);
}

#[test]
fn test_dequeue_at_returns_stored_node() {
    let mut queue = PriorityQueue::min();
    queue.enqueue_all([("a", 1), ("b", 4), ("c", 2), ("d", 7), ("e", 5)]);

    let slot = queue.position(|node| node.value == "b").unwrap();
    let removed = queue.dequeue_at(slot).unwrap();
    assert_eq!(removed.value, "b");
    assert_eq!(removed.priority, 4);
    assert_eq!(queue.len(), 4);
    assert!(queue.is_valid_heap());
}

#[test]
fn test_dequeue_at_sifts_relocated_node_up() {
    // Level order: 0, 10, 1, 11, 12, 2, 3
    let mut queue = PriorityQueue::min();
    queue.enqueue_all([(0, 0), (10, 10), (1, 1), (11, 11), (12, 12), (2, 2), (3, 3)]);
    let slot = queue.position(|node| node.value == 11).unwrap();

    // The last node (3) replaces 11 and must rise above 10
    queue.dequeue_at(slot);
    assert!(queue.is_valid_heap());
    let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue().map(|node| node.priority)).collect();
    assert_eq!(drained, vec![0, 1, 2, 3, 10, 12]);
}

fn check_random_interleaving(order: HeapOrder, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut queue = PriorityQueue::new(order);
    let mut reference: Vec<i64> = Vec::new();

    for step in 0..2_000 {
        match rng.gen_range(0..10) {
            0..=5 => {
                let priority = rng.gen_range(-50..50);
                queue.enqueue(step, priority);
                reference.push(priority);
            }
            6..=8 => {
                let expected = match order {
                    HeapOrder::Min => reference.iter().min().copied(),
                    HeapOrder::Max => reference.iter().max().copied(),
                };
                let got = queue.dequeue().map(|node| node.priority);
                assert_eq!(got, expected, "root mismatch at step {}", step);
                if let Some(p) = got {
                    let at = reference.iter().position(|&r| r == p).unwrap();
                    reference.swap_remove(at);
                }
            }
            _ => {
                if !queue.is_empty() {
                    let slot = rng.gen_range(0..queue.len());
                    let removed = queue.dequeue_at(slot).unwrap();
                    let at = reference.iter().position(|&r| r == removed.priority).unwrap();
                    reference.swap_remove(at);
                }
            }
        }
        assert!(queue.is_valid_heap(), "heap order broken at step {}", step);
        assert_eq!(queue.len(), reference.len());
    }
}

#[test]
fn test_min_heap_random_interleavings() {
    for seed in 0..5 {
        check_random_interleaving(HeapOrder::Min, seed);
    }
}

#[test]
fn test_max_heap_random_interleavings() {
    for seed in 0..5 {
        check_random_interleaving(HeapOrder::Max, seed);
    }
}
