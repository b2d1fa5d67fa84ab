use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Which end of the priority range sits at the root of the heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeapOrder {
    /// Smallest priority first
    #[default]
    Min,
    /// Largest priority first
    Max,
}

impl HeapOrder {
    /// Returns true if `a` must sit strictly closer to the root than `b`
    fn outranks<P: PartialOrd>(self, a: &P, b: &P) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

/// A value stored in the queue together with its priority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeapNode<V, P> {
    pub value: V,
    pub priority: P,
}

/// Array-backed binary heap keyed by a numeric priority.
///
/// Children of slot `i` live at `2i + 1` and `2i + 2`, its parent at
/// `(i - 1) / 2`. The backing vector never has gaps. Nodes are identified
/// by position only: enqueuing the same value twice stores two nodes.
///
/// Priorities only need `PartialOrd`; a NaN priority leaves the heap order
/// unspecified.
#[derive(Debug, Clone)]
pub struct PriorityQueue<V, P> {
    order: HeapOrder,
    nodes: Vec<HeapNode<V, P>>,
}

impl<V, P> Default for PriorityQueue<V, P>
where
    P: PartialOrd,
{
    fn default() -> Self {
        Self::min()
    }
}

impl<V, P> PriorityQueue<V, P>
where
    P: PartialOrd,
{
    /// Creates an empty queue with the given ordering
    pub fn new(order: HeapOrder) -> Self {
        PriorityQueue {
            order,
            nodes: Vec::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` nodes
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        PriorityQueue {
            order,
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates an empty min-priority queue
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Creates an empty max-priority queue
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns the number of nodes in the queue
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Alias of [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the root node without removing it
    pub fn peek(&self) -> Option<&HeapNode<V, P>> {
        self.nodes.first()
    }

    /// All nodes in backing (level) order
    pub fn nodes(&self) -> &[HeapNode<V, P>] {
        &self.nodes
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Linear search for the first slot whose node matches `predicate`
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&HeapNode<V, P>) -> bool,
    {
        self.nodes.iter().position(predicate)
    }

    /// Appends a node at the next leaf and sifts it toward the root
    pub fn enqueue(&mut self, value: V, priority: P) {
        self.nodes.push(HeapNode { value, priority });
        self.sift_up(self.nodes.len() - 1);
    }

    /// Enqueues every pair in order. Equivalent to sequential `enqueue` calls.
    pub fn enqueue_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (V, P)>,
    {
        for (value, priority) in pairs {
            self.enqueue(value, priority);
        }
    }

    /// Removes and returns the root node
    pub fn dequeue(&mut self) -> Option<HeapNode<V, P>> {
        self.dequeue_at(0)
    }

    /// Removes and returns the node stored at slot `start`.
    ///
    /// The last node is moved into the vacated slot and sifted down. When
    /// `start` is not the root the relocated node may instead belong higher
    /// up, in which case it is sifted up. Returns `None` when `start` is out
    /// of bounds.
    pub fn dequeue_at(&mut self, start: usize) -> Option<HeapNode<V, P>> {
        let len = self.nodes.len();
        if start >= len {
            return None;
        }
        if start == len - 1 {
            return self.nodes.pop();
        }

        let removed = self.nodes.swap_remove(start);
        let settled = self.sift_down(start);
        if settled == start {
            self.sift_up(start);
        }
        Some(removed)
    }

    /// Checks the heap-order invariant over every parent/child pair
    pub fn is_valid_heap(&self) -> bool {
        (1..self.nodes.len()).all(|child| {
            let parent = (child - 1) / 2;
            !self
                .order
                .outranks(&self.nodes[child].priority, &self.nodes[parent].priority)
        })
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self
                .order
                .outranks(&self.nodes[index].priority, &self.nodes[parent].priority)
            {
                self.nodes.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Returns the slot the node ended up in
    fn sift_down(&mut self, mut index: usize) -> usize {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            if left >= len {
                break;
            }

            let current = &self.nodes[index].priority;
            let left_wins = self.order.outranks(&self.nodes[left].priority, current);
            let right_wins =
                right < len && self.order.outranks(&self.nodes[right].priority, current);
            if !left_wins && !right_wins {
                break;
            }

            // Ties between the children go to the left one
            let child = if right < len
                && self
                    .order
                    .outranks(&self.nodes[right].priority, &self.nodes[left].priority)
            {
                right
            } else {
                left
            };
            self.nodes.swap(index, child);
            index = child;
        }
        index
    }
}
