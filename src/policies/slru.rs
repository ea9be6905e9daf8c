//! Implements the segmented least recently used policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::{CachePolicy, NodeEntry};
use crate::common::Counters;
use crate::error::CacheError;
use crate::list::LinkedList;

/// Segmented least recently used cache.
///
/// Two disjoint LRU segments: new keys enter the probationary segment, and a
/// hit there promotes the key into the protected segment. A full protected
/// segment demotes its least recently used key back into probationary, where
/// the slot the promotion just freed guarantees the demotion fits. Only the
/// probationary segment ever evicts outright.
pub struct SlruCache<K, V> {
    protected_size: usize,
    probationary_size: usize,
    protected_map: HashMap<K, NodeEntry<V>>,
    probationary_map: HashMap<K, NodeEntry<V>>,
    protected_store: LinkedList<K>,
    probationary_store: LinkedList<K>,
    stats: Counters,
}

impl<K, V> SlruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates a cache with the given segment capacities. Total capacity is
    /// their sum.
    pub fn new(protected_size: usize, probationary_size: usize) -> Result<Self, CacheError> {
        if protected_size < 1 {
            return Err(CacheError::invalid("protected_size should be > 0"));
        }
        if probationary_size < 1 {
            return Err(CacheError::invalid("probationary_size should be > 0"));
        }
        Ok(Self {
            protected_size,
            probationary_size,
            protected_map: HashMap::new(),
            probationary_map: HashMap::new(),
            protected_store: LinkedList::new(),
            probationary_store: LinkedList::new(),
            stats: Counters::default(),
        })
    }

    /// Links `key` into protected, demoting protected's LRU key first when
    /// the segment is full.
    fn promote_to_protected(&mut self, key: K, value: V) {
        if self.protected_map.len() >= self.protected_size {
            if let Some(demoted) = self.protected_store.pop_back() {
                if let Some(entry) = self.protected_map.remove(&demoted) {
                    trace!(key = ?demoted, "slru demoting protected lru key");
                    let node = self.probationary_store.push_front(demoted.clone());
                    self.probationary_map.insert(
                        demoted,
                        NodeEntry {
                            value: entry.value,
                            node,
                        },
                    );
                }
            }
        }
        let node = self.protected_store.push_front(key.clone());
        self.protected_map.insert(key, NodeEntry { value, node });
    }
}

impl<K, V> CachePolicy<K, V> for SlruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        // Protected is the hot segment, so probe it first.
        if let Some(node) = self.protected_map.get(key).map(|entry| entry.node) {
            self.stats.hit();
            self.protected_store.move_to_front(node);
            return self.protected_map.get(key).map(|e| &e.value);
        }
        if let Some(entry) = self.probationary_map.remove(key) {
            self.stats.hit();
            self.probationary_store.remove(entry.node);
            self.promote_to_protected(key.clone(), entry.value);
            return self.protected_map.get(key).map(|e| &e.value);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.protected_map.get_mut(&key) {
            entry.value = value;
            self.protected_store.move_to_front(entry.node);
        } else if let Some(entry) = self.probationary_map.remove(&key) {
            self.probationary_store.remove(entry.node);
            self.promote_to_protected(key, value);
        } else {
            if self.probationary_map.len() >= self.probationary_size {
                if let Some(victim) = self.probationary_store.pop_back() {
                    trace!(key = ?victim, "slru evicting probationary lru key");
                    self.probationary_map.remove(&victim);
                }
            }
            let node = self.probationary_store.push_front(key.clone());
            self.probationary_map.insert(key, NodeEntry { value, node });
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.protected_map.contains_key(key) || self.probationary_map.contains_key(key)
    }

    fn clear(&mut self) {
        self.protected_map.clear();
        self.probationary_map.clear();
        self.protected_store.clear();
        self.probationary_store.clear();
        self.stats.reset();
    }

    fn current_size(&self) -> usize {
        self.protected_map.len() + self.probationary_map.len()
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.protected_size + self.probationary_size)
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
