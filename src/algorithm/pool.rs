use rand::Rng;

/// Unordered pool with O(1) insertion and O(1) uniform random removal
///
/// Removal swaps the chosen element with the last one and shrinks the pool,
/// so draining it yields the inserted elements in a uniformly random order.
#[derive(Clone, Debug)]
pub struct RandomPool<T> {
    items: Vec<T>,
}

impl<T> RandomPool<T> {
    /// Create an empty pool
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty pool with room for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Add an item
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return a uniformly selected item, or `None` when empty
    pub fn remove_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.items.len());
        Some(self.items.swap_remove(index))
    }

    /// Number of pending items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if no items are pending
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pending items, in no meaningful order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drop all pending items
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for RandomPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RandomPool<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
