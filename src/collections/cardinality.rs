//! Frequency counting over hashable elements.
//!
//! [`CardinalityCounter`] tracks how many times each element was added and
//! can report one of the most frequent elements at any time. Every
//! operation runs in constant average time: alongside the element → count
//! map, the counter keeps the reverse count → elements index and the
//! current maximum count.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Counts occurrences of hashable elements.
///
/// # Example
///
/// ```rust
/// # use fixedint::collections::CardinalityCounter;
/// let mut counter = CardinalityCounter::new();
/// counter.add("a");
/// counter.add("b");
/// counter.add("a");
///
/// assert_eq!(counter.num_occurrences(&"a"), 2);
/// assert_eq!(counter.most_frequent(), Some(&"a"));
/// ```
#[derive(Clone, Debug)]
pub struct CardinalityCounter<T> {
    counts: HashMap<T, usize>,
    by_count: HashMap<usize, HashSet<T>>,
    max_count: usize,
}

impl<T> CardinalityCounter<T>
where
    T: Hash + Eq + Clone,
{
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            by_count: HashMap::new(),
            max_count: 0,
        }
    }

    /// Increments the count of `item`.
    pub fn add(&mut self, item: T) {
        let count = self.shift(&item, true);

        if count > self.max_count {
            self.max_count = count;
        }
    }

    /// Decrements the count of `item`.
    ///
    /// Does nothing if `item` is not currently counted. An element whose
    /// count drops to zero is forgotten entirely.
    pub fn remove(&mut self, item: &T) {
        if !self.counts.contains_key(item) {
            return;
        }

        let count = self.shift(item, false);

        if count + 1 == self.max_count && self.bucket_is_empty(self.max_count) {
            self.max_count = count;
        }

        if count == 0 {
            self.counts.remove(item);
            self.by_count.remove(&0);
        }
    }

    /// Returns how many times `item` is currently counted, 0 if never added.
    pub fn num_occurrences(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Returns the number of distinct elements with a non-zero count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns one of the elements with the highest count, or `None` when
    /// the counter is empty. Ties are broken arbitrarily.
    pub fn most_frequent(&self) -> Option<&T> {
        self.by_count
            .get(&self.max_count)
            .and_then(|bucket| bucket.iter().next())
    }

    /// Moves `item` one count up or down, keeping both maps in sync.
    /// Returns the new count.
    fn shift(&mut self, item: &T, up: bool) -> usize {
        let count = self.counts.entry(item.clone()).or_insert(0);
        let old_count = *count;

        if let Some(bucket) = self.by_count.get_mut(&old_count) {
            bucket.remove(item);
            if bucket.is_empty() {
                self.by_count.remove(&old_count);
            }
        }

        let new_count = if up { old_count + 1 } else { old_count - 1 };
        *count = new_count;

        self.by_count
            .entry(new_count)
            .or_default()
            .insert(item.clone());

        new_count
    }

    fn bucket_is_empty(&self, count: usize) -> bool {
        self.by_count.get(&count).is_none_or(HashSet::is_empty)
    }
}

impl<T> Default for CardinalityCounter<T>
where
    T: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
