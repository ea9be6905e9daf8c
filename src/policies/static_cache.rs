//! Implements the unbounded static store.

use std::collections::HashMap;
use std::hash::Hash;

use super::common::CachePolicy;
use crate::common::Counters;

/// Unbounded key/value store with no eviction.
///
/// Keys stay until [`CachePolicy::clear`]; `max_size` reports `None`.
pub struct StaticCache<K, V> {
    map: HashMap<K, V>,
    stats: Counters,
}

impl<K, V> StaticCache<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty store. There is nothing to validate.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            stats: Counters::default(),
        }
    }
}

impl<K, V> Default for StaticCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> CachePolicy<K, V> for StaticCache<K, V>
where
    K: Eq + Hash,
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
        self.map.insert(key, value);
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.stats.reset();
    }

    fn current_size(&self) -> usize {
        self.map.len()
    }

    fn max_size(&self) -> Option<usize> {
        None
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
