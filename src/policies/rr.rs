//! Implements the random replacement policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;
use tracing::trace;

use super::common::CachePolicy;
use crate::common::Counters;
use crate::error::CacheError;

/// A cached value plus the position of its key in the slot vector.
struct SlotEntry<V> {
    value: V,
    slot: usize,
}

/// Random replacement cache.
///
/// No ordering is maintained: admission when full evicts a uniformly random
/// entry. Keys are mirrored in a slot vector so the victim draw and its
/// `swap_remove` are O(1); the entry displaced by the swap has its slot
/// re-recorded.
pub struct RrCache<K, V> {
    max_size: usize,
    map: HashMap<K, SlotEntry<V>>,
    slots: Vec<K>,
    stats: Counters,
}

impl<K, V> RrCache<K, V>
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
            slots: Vec::new(),
            stats: Counters::default(),
        })
    }
}

impl<K, V> CachePolicy<K, V> for RrCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key) {
            Some(entry) => {
                self.stats.hit();
                Some(&entry.value)
            }
            None => {
                self.stats.miss();
                None
            }
        }
    }

    fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.map.get_mut(&key) {
            entry.value = value;
            return;
        }
        if self.map.len() >= self.max_size {
            let drawn = rand::thread_rng().gen_range(0..self.slots.len());
            let victim = self.slots.swap_remove(drawn);
            trace!(key = ?victim, "rr evicting random key");
            self.map.remove(&victim);
            if drawn < self.slots.len() {
                // swap_remove moved the former last key into the vacated slot.
                let moved = self.slots[drawn].clone();
                if let Some(entry) = self.map.get_mut(&moved) {
                    entry.slot = drawn;
                }
            }
        }
        let slot = self.slots.len();
        self.slots.push(key.clone());
        self.map.insert(key, SlotEntry { value, slot });
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
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
