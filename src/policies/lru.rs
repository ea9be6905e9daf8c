//! Implements the least recently used policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::{CachePolicy, NodeEntry};
use crate::common::Counters;
use crate::error::CacheError;
use crate::list::LinkedList;

/// Least recently used cache.
///
/// Every access moves the key to the front of a recency list; once the cache
/// is full, the key at the back, untouched the longest, is evicted. The index
/// stores each entry's list handle so reordering is O(1).
pub struct LruCache<K, V> {
    max_size: usize,
    map: HashMap<K, NodeEntry<V>>,
    queue: LinkedList<K>,
    stats: Counters,
}

impl<K, V> LruCache<K, V>
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
            queue: LinkedList::new(),
            stats: Counters::default(),
        })
    }
}

impl<K, V> CachePolicy<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(entry) = self.map.get(key) {
            self.stats.hit();
            self.queue.move_to_front(entry.node);
            return Some(&entry.value);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.map.get_mut(&key) {
            entry.value = value;
            self.queue.move_to_front(entry.node);
        } else {
            if self.map.len() >= self.max_size {
                if let Some(coldest) = self.queue.pop_back() {
                    trace!(key = ?coldest, "lru evicting least recently used key");
                    self.map.remove(&coldest);
                }
            }
            let node = self.queue.push_front(key.clone());
            self.map.insert(key, NodeEntry { value, node });
        }
        debug_assert_eq!(self.map.len(), self.queue.len());
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
