//! Implements the full 2Q policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::{CachePolicy, NodeEntry};
use crate::common::Counters;
use crate::error::CacheError;
use crate::list::LinkedList;

/// Full 2Q cache.
///
/// Three disjoint queues: an LRU primary, a FIFO secondary "in" for fresh
/// arrivals, and a FIFO secondary "out" holding keys that aged out of "in".
/// A read hit in "in" leaves the key exactly where it is; only keys that
/// survive into "out" and get referenced again graduate to primary. Values in
/// "out" are kept, so the promotion restores them without recomputation.
pub struct TwoQFullCache<K, V> {
    primary_size: usize,
    secondary_in_size: usize,
    secondary_out_size: usize,
    primary_map: HashMap<K, NodeEntry<V>>,
    secondary_in_map: HashMap<K, NodeEntry<V>>,
    secondary_out_map: HashMap<K, NodeEntry<V>>,
    primary_store: LinkedList<K>,
    secondary_in_store: LinkedList<K>,
    secondary_out_store: LinkedList<K>,
    stats: Counters,
}

impl<K, V> TwoQFullCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates a cache with the given queue capacities. Total capacity is
    /// their sum.
    pub fn new(
        primary_size: usize,
        secondary_in_size: usize,
        secondary_out_size: usize,
    ) -> Result<Self, CacheError> {
        if primary_size < 1 {
            return Err(CacheError::invalid("primary_size should be > 0"));
        }
        if secondary_in_size < 1 {
            return Err(CacheError::invalid("secondary_in_size should be > 0"));
        }
        if secondary_out_size < 1 {
            return Err(CacheError::invalid("secondary_out_size should be > 0"));
        }
        Ok(Self {
            primary_size,
            secondary_in_size,
            secondary_out_size,
            primary_map: HashMap::new(),
            secondary_in_map: HashMap::new(),
            secondary_out_map: HashMap::new(),
            primary_store: LinkedList::new(),
            secondary_in_store: LinkedList::new(),
            secondary_out_store: LinkedList::new(),
            stats: Counters::default(),
        })
    }

    /// Links `key` into primary, evicting primary's LRU key first when full.
    fn promote_to_primary(&mut self, key: K, value: V) {
        if self.primary_map.len() >= self.primary_size {
            if let Some(victim) = self.primary_store.pop_back() {
                trace!(key = ?victim, "2q-full evicting primary lru key");
                self.primary_map.remove(&victim);
            }
        }
        let node = self.primary_store.push_front(key.clone());
        self.primary_map.insert(key, NodeEntry { value, node });
    }

    /// Spills secondary-in's oldest key into secondary-out, evicting
    /// secondary-out's oldest first when that queue is full.
    fn spill_in_to_out(&mut self) {
        if let Some(aged) = self.secondary_in_store.pop_back() {
            if let Some(entry) = self.secondary_in_map.remove(&aged) {
                if self.secondary_out_map.len() >= self.secondary_out_size {
                    if let Some(victim) = self.secondary_out_store.pop_back() {
                        trace!(key = ?victim, "2q-full evicting secondary-out fifo key");
                        self.secondary_out_map.remove(&victim);
                    }
                }
                let node = self.secondary_out_store.push_front(aged.clone());
                self.secondary_out_map.insert(
                    aged,
                    NodeEntry {
                        value: entry.value,
                        node,
                    },
                );
            }
        }
    }
}

impl<K, V> CachePolicy<K, V> for TwoQFullCache<K, V>
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
        // A read hit in secondary-in stays in place.
        if self.secondary_in_map.contains_key(key) {
            self.stats.hit();
            return self.secondary_in_map.get(key).map(|e| &e.value);
        }
        if let Some(entry) = self.secondary_out_map.remove(key) {
            self.stats.hit();
            self.secondary_out_store.remove(entry.node);
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
        } else if let Some(entry) = self.secondary_in_map.get_mut(&key) {
            // Write hits renew the key's position in "in"; read hits do not.
            entry.value = value;
            self.secondary_in_store.move_to_front(entry.node);
        } else if let Some(entry) = self.secondary_out_map.remove(&key) {
            self.secondary_out_store.remove(entry.node);
            self.promote_to_primary(key, value);
        } else {
            if self.secondary_in_map.len() >= self.secondary_in_size {
                self.spill_in_to_out();
            }
            let node = self.secondary_in_store.push_front(key.clone());
            self.secondary_in_map.insert(key, NodeEntry { value, node });
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.primary_map.contains_key(key)
            || self.secondary_in_map.contains_key(key)
            || self.secondary_out_map.contains_key(key)
    }

    fn clear(&mut self) {
        self.primary_map.clear();
        self.secondary_in_map.clear();
        self.secondary_out_map.clear();
        self.primary_store.clear();
        self.secondary_in_store.clear();
        self.secondary_out_store.clear();
        self.stats.reset();
    }

    fn current_size(&self) -> usize {
        self.primary_map.len() + self.secondary_in_map.len() + self.secondary_out_map.len()
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.primary_size + self.secondary_in_size + self.secondary_out_size)
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
