//! Implements the simple 2Q policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::{CachePolicy, NodeEntry};
use crate::common::Counters;
use crate::error::CacheError;
use crate::list::LinkedList;

/// Simple 2Q cache.
///
/// New keys land in a FIFO secondary queue and only graduate into the LRU
/// primary queue when hit there, which keeps one-shot keys from washing hot
/// entries out of primary. Each queue evicts independently when full: the
/// secondary in arrival order, the primary by recency.
pub struct TwoQCache<K, V> {
    primary_size: usize,
    secondary_size: usize,
    primary_map: HashMap<K, NodeEntry<V>>,
    secondary_map: HashMap<K, NodeEntry<V>>,
    primary_store: LinkedList<K>,
    secondary_store: LinkedList<K>,
    stats: Counters,
}

impl<K, V> TwoQCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates a cache with the given queue capacities. Total capacity is
    /// their sum.
    pub fn new(primary_size: usize, secondary_size: usize) -> Result<Self, CacheError> {
        if primary_size < 1 {
            return Err(CacheError::invalid("primary_size should be > 0"));
        }
        if secondary_size < 1 {
            return Err(CacheError::invalid("secondary_size should be > 0"));
        }
        Ok(Self {
            primary_size,
            secondary_size,
            primary_map: HashMap::new(),
            secondary_map: HashMap::new(),
            primary_store: LinkedList::new(),
            secondary_store: LinkedList::new(),
            stats: Counters::default(),
        })
    }

    /// Links `key` into primary, evicting primary's LRU key first when full.
    fn promote_to_primary(&mut self, key: K, value: V) {
        if self.primary_map.len() >= self.primary_size {
            if let Some(victim) = self.primary_store.pop_back() {
                trace!(key = ?victim, "2q evicting primary lru key");
                self.primary_map.remove(&victim);
            }
        }
        let node = self.primary_store.push_front(key.clone());
        self.primary_map.insert(key, NodeEntry { value, node });
    }
}

impl<K, V> CachePolicy<K, V> for TwoQCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        // Primary is the hot queue, so probe it first.
        if let Some(node) = self.primary_map.get(key).map(|entry| entry.node) {
            self.stats.hit();
            self.primary_store.move_to_front(node);
            return self.primary_map.get(key).map(|e| &e.value);
        }
        if let Some(entry) = self.secondary_map.remove(key) {
            self.stats.hit();
            self.secondary_store.remove(entry.node);
            self.promote_to_primary(key.clone(), entry.value);
            return self.primary_map.get(key).map(|e| &e.value);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.primary_map.get_mut(&key) {
            entry.value = value;
            self.primary_store.move_to_front(entry.node);
        } else if let Some(entry) = self.secondary_map.get_mut(&key) {
            entry.value = value;
            self.secondary_store.move_to_front(entry.node);
        } else {
            if self.secondary_map.len() >= self.secondary_size {
                if let Some(victim) = self.secondary_store.pop_back() {
                    trace!(key = ?victim, "2q evicting secondary fifo key");
                    self.secondary_map.remove(&victim);
                }
            }
            let node = self.secondary_store.push_front(key.clone());
            self.secondary_map.insert(key, NodeEntry { value, node });
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.primary_map.contains_key(key) || self.secondary_map.contains_key(key)
    }

    fn clear(&mut self) {
        self.primary_map.clear();
        self.secondary_map.clear();
        self.primary_store.clear();
        self.secondary_store.clear();
        self.stats.reset();
    }

    fn current_size(&self) -> usize {
        self.primary_map.len() + self.secondary_map.len()
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.primary_size + self.secondary_size)
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
