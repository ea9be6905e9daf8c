//! Implements the multi-queue policy.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use super::common::CachePolicy;
use crate::common::{CacheClock, Counters};
use crate::config::MqConfig;
use crate::error::CacheError;
use crate::list::{ExpiryEntry, LinkedList};

/// Maps an access count to a queue level; the cache clamps the result to the
/// configured number of queues.
pub type QueueFunc = Box<dyn Fn(u64) -> usize + Send>;

/// `⌊log₂(frequency)⌋`, the level function from the multi-queue paper.
fn default_queue_func(frequency: u64) -> usize {
    if frequency == 0 {
        0
    } else {
        (63 - frequency.leading_zeros()) as usize
    }
}

/// A cached value plus its access count and the queue/node currently holding
/// its key. `queue` tracks where the key really is, since demotions move keys
/// below the level their count alone would suggest.
struct MqEntry<V> {
    value: V,
    frequency: u64,
    queue: usize,
    node: usize,
}

/// Multi-queue cache.
///
/// Keys live in one of several LRU queues leveled by access count, so hot
/// keys rise out of reach of the churn in the lower levels. A key idle past
/// its expiry window sinks one level per sweep instead of being dropped, and
/// keys squeezed out of the main store land in a FIFO history buffer: hitting
/// one there revives it with its old count intact. Every operation advances
/// the clock, by one in access mode and from wall time otherwise.
pub struct MqCache<K, V> {
    max_size: usize,
    buffer_size: usize,
    expire_ticks: u64,
    num_queues: usize,
    queue_func: QueueFunc,
    clock: CacheClock,
    map: HashMap<K, MqEntry<V>>,
    buffer_map: HashMap<K, MqEntry<V>>,
    queues: Vec<LinkedList<ExpiryEntry<K>>>,
    buffer_queue: LinkedList<ExpiryEntry<K>>,
    stats: Counters,
}

impl<K, V> MqCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates a cache from `config` with the default `⌊log₂(freq)⌋` level
    /// function.
    pub fn new(config: MqConfig) -> Result<Self, CacheError> {
        Self::with_queue_func(config, default_queue_func)
    }

    /// Creates a cache from `config` with a caller-supplied level function.
    pub fn with_queue_func<F>(config: MqConfig, queue_func: F) -> Result<Self, CacheError>
    where
        F: Fn(u64) -> usize + Send + 'static,
    {
        if config.size < 1 {
            return Err(CacheError::invalid("size should be > 0"));
        }
        if config.buffer_size < 1 {
            return Err(CacheError::invalid("buffer_size should be > 0"));
        }
        if config.expire_time < 1 {
            return Err(CacheError::invalid("expire_time should be > 0"));
        }
        if config.num_queues < 1 {
            return Err(CacheError::invalid("num_queues should be > 0"));
        }
        let clock = CacheClock::new(config.access_based);
        let expire_ticks = clock.window_ticks(config.expire_time);
        Ok(Self {
            max_size: config.size,
            buffer_size: config.buffer_size,
            expire_ticks,
            num_queues: config.num_queues,
            queue_func: Box::new(queue_func),
            clock,
            map: HashMap::new(),
            buffer_map: HashMap::new(),
            queues: (0..config.num_queues).map(|_| LinkedList::new()).collect(),
            buffer_queue: LinkedList::new(),
            stats: Counters::default(),
        })
    }

    fn level_for(&self, frequency: u64) -> usize {
        (self.queue_func)(frequency).min(self.num_queues - 1)
    }

    /// Counts the access and links `key` into the queue its new count earns,
    /// with a fresh expiry.
    fn link(&mut self, key: K, mut item: MqEntry<V>, now: u64) {
        item.frequency += 1;
        let level = self.level_for(item.frequency);
        item.queue = level;
        item.node = self.queues[level].push_front(ExpiryEntry {
            key: key.clone(),
            expires_at: now + self.expire_ticks,
        });
        self.map.insert(key, item);
    }

    /// Moves the LRU key of the lowest non-empty queue into the history
    /// buffer, dropping the buffer's oldest key first when it is full.
    fn spill_victim(&mut self, now: u64) {
        let level = match self.queues.iter().position(|queue| !queue.is_empty()) {
            Some(level) => level,
            None => return,
        };
        if self.buffer_map.len() >= self.buffer_size {
            if let Some(dropped) = self.buffer_queue.pop_back() {
                trace!(key = ?dropped.key, "mq evicting history buffer key");
                self.buffer_map.remove(&dropped.key);
            }
        }
        if let Some(victim) = self.queues[level].pop_back() {
            trace!(key = ?victim.key, queue = level, "mq spilling key into history buffer");
            if let Some(mut item) = self.map.remove(&victim.key) {
                item.node = self.buffer_queue.push_front(ExpiryEntry {
                    key: victim.key.clone(),
                    expires_at: now + self.expire_ticks,
                });
                self.buffer_map.insert(victim.key, item);
            }
        }
    }

    /// Sinks keys idle past their window one level down, renewing their
    /// expiry so they keep sinking only while the idleness lasts.
    fn demote(&mut self, now: u64) {
        for level in 1..self.num_queues {
            loop {
                let stale = matches!(
                    self.queues[level].back(),
                    Some(entry) if entry.expires_at < now
                );
                if !stale {
                    break;
                }
                if let Some(expired) = self.queues[level].pop_back() {
                    trace!(key = ?expired.key, queue = level, "mq demoting idle key");
                    let node = self.queues[level - 1].push_front(ExpiryEntry {
                        key: expired.key.clone(),
                        expires_at: now + self.expire_ticks,
                    });
                    if let Some(item) = self.map.get_mut(&expired.key) {
                        item.queue = level - 1;
                        item.node = node;
                    }
                } else {
                    break;
                }
            }
        }
    }
}

impl<K, V> CachePolicy<K, V> for MqCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    fn get(&mut self, key: &K) -> Option<&V> {
        let now = self.clock.tick();
        if let Some(item) = self.map.remove(key) {
            self.stats.hit();
            self.queues[item.queue].remove(item.node);
            self.link(key.clone(), item, now);
            self.demote(now);
            return self.map.get(key).map(|item| &item.value);
        }
        if let Some(item) = self.buffer_map.remove(key) {
            self.stats.hit();
            self.buffer_queue.remove(item.node);
            // A key resident in history means the main store is full.
            self.spill_victim(now);
            self.link(key.clone(), item, now);
            self.demote(now);
            return self.map.get(key).map(|item| &item.value);
        }
        self.stats.miss();
        None
    }

    fn put(&mut self, key: K, value: V) {
        let now = self.clock.tick();
        let item = if let Some(mut item) = self.map.remove(&key) {
            self.queues[item.queue].remove(item.node);
            item.value = value;
            item
        } else if let Some(mut item) = self.buffer_map.remove(&key) {
            self.buffer_queue.remove(item.node);
            item.value = value;
            self.spill_victim(now);
            item
        } else {
            if self.map.len() >= self.max_size {
                self.spill_victim(now);
            }
            MqEntry {
                value,
                frequency: 0,
                queue: 0,
                node: 0,
            }
        };
        self.link(key, item, now);
        self.demote(now);
    }

    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key) || self.buffer_map.contains_key(key)
    }

    fn clear(&mut self) {
        self.map.clear();
        self.buffer_map.clear();
        for queue in &mut self.queues {
            queue.clear();
        }
        self.buffer_queue.clear();
        self.stats.reset();
        self.clock.reset();
    }

    fn current_size(&self) -> usize {
        self.map.len() + self.buffer_map.len()
    }

    fn max_size(&self) -> Option<usize> {
        Some(self.max_size + self.buffer_size)
    }

    fn hits(&self) -> u64 {
        self.stats.hits
    }

    fn misses(&self) -> u64 {
        self.stats.misses
    }
}
