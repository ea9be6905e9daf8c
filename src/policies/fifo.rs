//! Implements the first-in first-out policy.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::CachePolicy;
use crate::common::Counters;
use crate::error::CacheError;

/// First-in first-out cache.
///
/// Keys are evicted in arrival order once the cache is full; lookups do not
/// disturb that order, and replacing a present key's value does not renew its
/// position. A `VecDeque` keeps the arrival queue with the newest key at the
/// front.
pub struct FifoCache<K, V> {
    max_size: usize,
    map: HashMap<K, V>,
    queue: VecDeque<K>,
    stats: Counters,
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates a cache holding at most `size` keys.
    pub fn new(size: usize) -> Result<Self, CacheError> {
        if size < 1 {
            return Err(CacheError::invalid("size should be > 0"));
        }
        Ok(Self {
            max_size: size,
            map: HashMap::new(),
            queue: VecDeque::new(),
            stats: Counters::default(),
        })
    }
}

impl<K, V> CachePolicy<K, V> for FifoCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key) {
            Some(value) => {
                self.stats.hit();
                Some(value)
            }
            None => {
                self.stats.miss();
                None
            }
        }
    }

    fn put(&mut self, key: K, value: V) {
        if !self.map.contains_key(&key) {
            if self.map.len() >= self.max_size {
                if let Some(oldest) = self.queue.pop_back() {
                    trace!(key = ?oldest, "fifo evicting oldest key");
                    self.map.remove(&oldest);
                }
            }
            self.queue.push_front(key.clone());
        }
        self.map.insert(key, value);
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.queue.clear();
        self.stats.reset();
    }

    fn current_size(&self) -> usize {
        self.map.len()
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.max_size)
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
