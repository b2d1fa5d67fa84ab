use std::collections::VecDeque;

/// Container of discovered-but-unprocessed items driving a traversal.
///
/// A stack gives depth-first order, a queue breadth-first order. Any type
/// implementing this trait can be handed to
/// [`traverse`](crate::algorithm::traversal::traverse).
pub trait Frontier<T> {
    /// Adds a single item
    fn put(&mut self, item: T);

    /// Removes the next item to process
    fn take(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds a batch so that the items come back out of [`take`](Frontier::take)
    /// in the order given, relative to each other.
    fn put_batch(&mut self, items: Vec<T>) {
        for item in items {
            self.put(item);
        }
    }
}

/// Last-in-first-out
impl<T> Frontier<T> for Vec<T> {
    fn put(&mut self, item: T) {
        self.push(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn put_batch(&mut self, items: Vec<T>) {
        // Reversed so the first item ends on top
        self.extend(items.into_iter().rev());
    }
}

/// First-in-first-out
impl<T> Frontier<T> for VecDeque<T> {
    fn put(&mut self, item: T) {
        self.push_back(item);
    }

    fn take(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
