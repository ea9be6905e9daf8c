//! Implements the most frequently used policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::{CachePolicy, FreqEntry};
use crate::common::Counters;
use crate::error::CacheError;
use crate::freq_list::FreqList;

/// Most frequently used cache.
///
/// Shares the frequency-list structure with LFU but evicts from the opposite
/// end: admission when full takes some key from the highest-count bucket.
pub struct MfuCache<K, V> {
    max_size: usize,
    map: HashMap<K, FreqEntry<V>>,
    freq_list: FreqList<K>,
    stats: Counters,
}

impl<K, V> MfuCache<K, V>
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

impl<K, V> CachePolicy<K, V> for MfuCache<K, V>
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
                if let Some(victim) = self.freq_list.pop_back() {
                    trace!(key = ?victim, "mfu evicting most frequently used key");
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
