//! Bounded FIFO of generation digests.
//!
//! Keeps insertion order in a ring buffer and per-digest occurrence counts in
//! a map, so membership is O(1) regardless of retention.

use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone)]
pub struct DigestHistory {
    entries: VecDeque<u64>,
    counts: HashMap<u64, u32>,
    retention: usize,
}

impl DigestHistory {
    /// `retention` must be at least 1.
    pub fn new(retention: usize) -> Self {
        debug_assert!(retention >= 1);
        DigestHistory {
            entries: VecDeque::with_capacity(retention),
            counts: HashMap::with_capacity(retention),
            retention,
        }
    }

    pub fn retention(&self) -> usize {
        self.retention
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, digest: u64) -> bool {
        self.counts.contains_key(&digest)
    }

    /// Append a digest, evicting the oldest entries until `len() <= retention`.
    pub fn push(&mut self, digest: u64) {
        self.entries.push_back(digest);
        *self.counts.entry(digest).or_insert(0) += 1;

        while self.entries.len() > self.retention {
            if let Some(evicted) = self.entries.pop_front() {
                self.forget(evicted);
            }
        }
    }

    /// Digests oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    fn forget(&mut self, digest: u64) {
        if let Some(count) = self.counts.get_mut(&digest) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&digest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_retention() {
        let mut history = DigestHistory::new(4);
        assert!(history.is_empty());

        history.push(10);
        history.push(20);
        assert_eq!(history.len(), 2);
        assert!(history.contains(10));
        assert!(history.contains(20));
        assert!(!history.contains(30));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = DigestHistory::new(3);
        for d in 1..=5 {
            history.push(d);
        }
        assert_eq!(history.to_vec(), vec![3, 4, 5]);
        assert!(!history.contains(1));
        assert!(!history.contains(2));
    }

    #[test]
    fn test_duplicate_survives_partial_eviction() {
        let mut history = DigestHistory::new(3);
        history.push(7);
        history.push(8);
        history.push(7);
        history.push(9); // evicts the first 7

        assert_eq!(history.to_vec(), vec![8, 7, 9]);
        assert!(history.contains(7));

        history.push(1); // evicts 8
        history.push(2); // evicts the second 7
        assert!(!history.contains(7));
        assert_eq!(history.to_vec(), vec![9, 1, 2]);
    }

    #[test]
    fn test_retention_one() {
        let mut history = DigestHistory::new(1);
        history.push(5);
        history.push(6);
        assert_eq!(history.to_vec(), vec![6]);
        assert!(!history.contains(5));
    }
}
