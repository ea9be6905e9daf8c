//! Implements the time-aware least recently used policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::CachePolicy;
use crate::common::{CacheClock, Counters};
use crate::config::TlruConfig;
use crate::error::CacheError;
use crate::list::{ExpiryEntry, LinkedList};

/// A cached value plus its handles in the size list (bounded caches only) and
/// the expiry list.
struct TlruEntry<V> {
    value: V,
    queue_node: Option<usize>,
    expiry_node: usize,
}

/// Time-aware least recently used cache.
///
/// Entries expire after a configured window of inactivity on top of the usual
/// LRU bound. Two lists are kept: a recency list driving size-based eviction
/// (absent when the cache is unbounded) and an expiry list ordered so the
/// stalest deadline sits at the tail, which every operation sweeps before
/// touching the index. With `reset_on_access` an access renews the deadline;
/// without it the deadline runs from insertion.
///
/// The clock advances by one per operation in access mode and reads wall time
/// otherwise; `expire_time` counts operations or seconds accordingly.
pub struct TlruCache<K, V> {
    max_size: Option<usize>,
    expire_ticks: u64,
    reset_on_access: bool,
    clock: CacheClock,
    map: HashMap<K, TlruEntry<V>>,
    queue: Option<LinkedList<K>>,
    expiry_queue: LinkedList<ExpiryEntry<K>>,
    stats: Counters,
}

impl<K, V> TlruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates a cache from `config`.
    pub fn new(config: TlruConfig) -> Result<Self, CacheError> {
        if config.expire_time < 1 {
            return Err(CacheError::invalid("expire_time should be > 0"));
        }
        if config.size.is_some_and(|size| size < 1) {
            return Err(CacheError::invalid("size should be > 0 or absent"));
        }
        let clock = CacheClock::new(config.access_based);
        let expire_ticks = clock.window_ticks(config.expire_time);
        Ok(Self {
            max_size: config.size,
            expire_ticks,
            reset_on_access: config.reset_on_access,
            clock,
            map: HashMap::new(),
            queue: config.size.map(|_| LinkedList::new()),
            expiry_queue: LinkedList::new(),
            stats: Counters::default(),
        })
    }

    /// Drops every entry whose deadline passed before `now`, from the stale
    /// end of the expiry list inward.
    fn sweep_expired(&mut self, now: u64) {
        loop {
            match self.expiry_queue.back() {
                Some(entry) if entry.expires_at < now => {}
                _ => break,
            }
            if let Some(expired) = self.expiry_queue.pop_back() {
                trace!(key = ?expired.key, "tlru expiring idle key");
                if let Some(entry) = self.map.remove(&expired.key) {
                    if let (Some(queue), Some(node)) = (self.queue.as_mut(), entry.queue_node) {
                        queue.remove(node);
                    }
                }
            }
        }
    }
}

impl<K, V> CachePolicy<K, V> for TlruCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.tick();
        self.sweep_expired(now);
        if let Some(entry) = self.map.get(key) {
            self.stats.hit();
            if let (Some(queue), Some(node)) = (self.queue.as_mut(), entry.queue_node) {
                queue.move_to_front(node);
            }
            if self.reset_on_access {
                self.expiry_queue.get_mut(entry.expiry_node).expires_at = now + self.expire_ticks;
                self.expiry_queue.move_to_front(entry.expiry_node);
            }
            return Some(&entry.value);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        let now = self.clock.tick();
        self.sweep_expired(now);
        if let Some(entry) = self.map.get_mut(&key) {
            entry.value = value;
            if let (Some(queue), Some(node)) = (self.queue.as_mut(), entry.queue_node) {
                queue.move_to_front(node);
            }
            if self.reset_on_access {
                self.expiry_queue.get_mut(entry.expiry_node).expires_at = now + self.expire_ticks;
                self.expiry_queue.move_to_front(entry.expiry_node);
            }
            return;
        }
        if let Some(max) = self.max_size {
            if self.map.len() >= max {
                if let Some(queue) = self.queue.as_mut() {
                    if let Some(victim) = queue.pop_back() {
                        trace!(key = ?victim, "tlru evicting least recently used key");
                        if let Some(entry) = self.map.remove(&victim) {
                            self.expiry_queue.remove(entry.expiry_node);
                        }
                    }
                }
            }
        }
        let queue_node = self.queue.as_mut().map(|queue| queue.push_front(key.clone()));
        let expiry_node = self.expiry_queue.push_front(ExpiryEntry {
            key: key.clone(),
            expires_at: now + self.expire_ticks,
        });
        self.map.insert(
            key,
            TlruEntry {
                value,
                queue_node,
                expiry_node,
            },
        );
    }

    fn contains(&self, key: &K) -> bool {
        match self.map.get(key) {
            Some(entry) => self.expiry_queue.get(entry.expiry_node).expires_at >= self.clock.peek(),
            None => false,
        }
    }

    fn clear(&mut self) {
        self.map.clear();
        self.expiry_queue.clear();
        if let Some(queue) = self.queue.as_mut() {
            queue.clear();
        }
        self.stats.reset();
        self.clock.reset();
    }

    fn current_size(&self) -> usize {
        self.map.len()
    }

    fn max_size(&self) -> Option<usize> {
        self.max_size
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
