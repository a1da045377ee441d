// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-capacity, newest-first history buffers.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;

/// A bounded history of samples, ordered newest first.
///
/// Pushing onto a full ring evicts the oldest sample, so `len() <= capacity()`
/// holds after every operation.
#[derive(Clone, Debug)]
pub struct HistoryRing<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> HistoryRing<T> {
    /// Creates an empty ring holding at most `capacity` samples.
    ///
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Pushes `value` as the newest sample, returning the evicted oldest
    /// sample if the ring was full.
    pub fn push_front(&mut self, value: T) -> Option<T> {
        self.items.push_front(value);
        if self.items.len() > self.capacity {
            self.items.pop_back()
        } else {
            None
        }
    }

    /// Returns the most recently pushed sample.
    pub fn newest(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the oldest retained sample.
    pub fn oldest(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns the sample `age` pushes ago (`0` is the newest).
    pub fn get(&self, age: usize) -> Option<&T> {
        self.items.get(age)
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no samples are retained.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of retained samples.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates samples newest first.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Drops every sample.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> HistoryRing<T> {
    /// Creates a ring already filled to capacity with copies of `value`.
    pub fn filled(capacity: usize, value: T) -> Self {
        let mut ring = Self::new(capacity);
        ring.refill(value);
        ring
    }

    /// Replaces the contents with `capacity()` copies of `value`.
    pub fn refill(&mut self, value: T) {
        self.items.clear();
        self.items.resize(self.capacity, value);
    }
}

impl<'a, T> IntoIterator for &'a HistoryRing<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn push_evicts_oldest_once_full() {
        let mut ring = HistoryRing::new(3);
        assert_eq!(ring.push_front(1), None);
        assert_eq!(ring.push_front(2), None);
        assert_eq!(ring.push_front(3), None);
        assert_eq!(ring.push_front(4), Some(1), "oldest sample is evicted");
        assert_eq!(ring.len(), 3);
        assert_eq!(ring.newest(), Some(&4));
        assert_eq!(ring.oldest(), Some(&2));
    }

    #[test]
    fn length_settles_at_capacity_under_sustained_pushes() {
        let mut ring = HistoryRing::new(20);
        for i in 0..1000 {
            ring.push_front(i);
            assert!(ring.len() <= ring.capacity(), "ring grew past capacity");
        }
        assert_eq!(ring.len(), 20);
    }

    #[test]
    fn iteration_is_newest_first() {
        let mut ring = HistoryRing::new(4);
        for i in 0..6 {
            ring.push_front(i);
        }
        let seen: std::vec::Vec<_> = ring.iter().copied().collect();
        assert_eq!(seen, [5, 4, 3, 2]);
        assert_eq!(ring.get(1), Some(&4));
    }

    #[test]
    fn filled_ring_is_at_capacity() {
        let mut ring = HistoryRing::filled(5, 0.0_f64);
        assert_eq!(ring.len(), 5);
        ring.push_front(1.0);
        assert_eq!(ring.len(), 5);
        ring.refill(2.0);
        assert!(ring.iter().all(|v| *v == 2.0), "refill overwrites everything");
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut ring = HistoryRing::new(0);
        ring.push_front('a');
        ring.push_front('b');
        assert_eq!(ring.capacity(), 1);
        assert_eq!(ring.newest(), Some(&'b'));
    }
}
