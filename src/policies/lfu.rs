//! Implements the least frequently used policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::{CachePolicy, FreqEntry};
use crate::common::Counters;
use crate::error::CacheError;
use crate::freq_list::FreqList;

/// Least frequently used cache.
///
/// Each entry records the frequency bucket currently holding its key; every
/// access promotes the key one count forward in the frequency list. Admission
/// when full evicts some key from the lowest-count bucket, chosen arbitrarily
/// among keys sharing that count.
pub struct LfuCache<K, V> {
    max_size: usize,
    map: HashMap<K, FreqEntry<V>>,
    freq_list: FreqList<K>,
    stats: Counters,
}

impl<K, V> LfuCache<K, V>
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
            freq_list: FreqList::new(),
            stats: Counters::default(),
        })
    }
}

impl<K, V> CachePolicy<K, V> for LfuCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(entry) = self.map.get_mut(key) {
            self.stats.hit();
            entry.bucket = self.freq_list.promote(entry.bucket, key);
            return Some(&entry.value);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.map.get_mut(&key) {
            entry.value = value;
            entry.bucket = self.freq_list.promote(entry.bucket, &key);
        } else {
            if self.map.len() >= self.max_size {
                if let Some(victim) = self.freq_list.pop_front() {
                    trace!(key = ?victim, "lfu evicting least frequently used key");
                    self.map.remove(&victim);
                }
            }
            let bucket = self.freq_list.insert(key.clone());
            self.map.insert(key, FreqEntry { value, bucket });
        }
        debug_assert_eq!(self.map.len(), self.freq_list.len());
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.freq_list.clear();
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
