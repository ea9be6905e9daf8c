//! Implements the not most recently used policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::CachePolicy;
use crate::common::Counters;
use crate::error::CacheError;

/// Not most recently used cache.
///
/// A single distinguished slot shields the most recently touched key; every
/// other entry sits in an unordered map. Touching a key outside the slot swaps
/// it with the slot occupant, and admission when full evicts an arbitrary
/// entry from the map, never the slot. With a capacity of one only the slot
/// is used.
pub struct NmruCache<K, V> {
    max_size: usize,
    store: HashMap<K, V>,
    mru: Option<(K, V)>,
    stats: Counters,
}

impl<K, V> NmruCache<K, V>
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
            store: HashMap::new(),
            mru: None,
            stats: Counters::default(),
        })
    }

    /// Moves the slot occupant (if any) back into the unordered map.
    fn displace_mru(&mut self) {
        if let Some((old_key, old_value)) = self.mru.take() {
            self.store.insert(old_key, old_value);
        }
    }
}

impl<K, V> CachePolicy<K, V> for NmruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        if self.mru.as_ref().is_some_and(|(k, _)| k == key) {
            self.stats.hit();
            return self.mru.as_ref().map(|(_, v)| v);
        }
        if let Some(value) = self.store.remove(key) {
            self.stats.hit();
            self.displace_mru();
            self.mru = Some((key.clone(), value));
            return self.mru.as_ref().map(|(_, v)| v);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        if let Some((k, v)) = self.mru.as_mut() {
            if *k == key {
                *v = value;
                return;
            }
        }
        if self.store.remove(&key).is_some() {
            self.displace_mru();
            self.mru = Some((key, value));
            return;
        }
        if self.max_size > 1 {
            // The slot accounts for one of the capacity's keys.
            if self.store.len() + 1 >= self.max_size {
                if let Some(victim) = self.store.keys().next().cloned() {
                    trace!(key = ?victim, "nmru evicting arbitrary non-mru key");
                    self.store.remove(&victim);
                }
            }
            self.displace_mru();
        }
        self.mru = Some((key, value));
    }

    fn contains(&self, key: &K) -> bool {
        self.mru.as_ref().is_some_and(|(k, _)| k == key) || self.store.contains_key(key)
    }

    fn clear(&mut self) {
        self.store.clear();
        self.mru = None;
        self.stats.reset();
    }

    fn current_size(&self) -> usize {
        if self.mru.is_none() {
            0
        } else {
            self.store.len() + 1
        }
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
