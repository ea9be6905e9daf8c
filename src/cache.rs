//! Code of the `Cache` and `AsyncCache` structs which provide the
//! thread-safe fronts over an eviction policy.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::common::CacheInfo;
use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::policies::common::CachePolicy;

/// A thread-safe key-value cache with a configurable eviction policy.
///
/// The policy instance sits behind one blocking mutex; every operation holds
/// it for its whole duration, so operations on a single cache are atomic and
/// observe each other in some total order. Callers on other threads block on
/// contention. `get` clones the value out of the critical section, which is
/// what lets the lock be released before the caller looks at it.
pub struct Cache<K, V> {
    policy: Mutex<Box<dyn CachePolicy<K, V> + Send>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + 'static,
    V: Send + 'static,
{
    /// Creates a cache from the given policy configuration.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        Ok(Self {
            policy: Mutex::new(config.build()?),
        })
    }

    /// Creates a cache around a caller-supplied policy instance.
    pub fn with_policy<P>(policy: P) -> Self
    where
        P: CachePolicy<K, V> + Send + 'static,
    {
        Self {
            policy: Mutex::new(Box::new(policy)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Box<dyn CachePolicy<K, V> + Send>> {
        // State only mutates inside the critical section, so a caller that
        // panicked mid-operation cannot have left a half-linked structure
        // behind its own policy calls; ignore poisoning.
        self.policy.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Retrieves the value associated with `key`, if cached and fresh.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    /// Inserts a new key-value pair, evicting per the policy when full.
    pub fn put(&self, key: K, value: V) {
        self.lock().put(key, value);
    }

    /// Checks if `key` is already cached, without reordering or counting.
    pub fn contains_key(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    /// Empties the cache and resets its statistics.
    pub fn clear(&self) {
        debug!("clearing cache");
        self.lock().clear();
    }

    /// Returns the number of keys in the cache at the moment.
    pub fn current_size(&self) -> usize {
        self.lock().current_size()
    }

    /// Returns the capacity in keys, or `None` when unbounded.
    pub fn max_size(&self) -> Option<usize> {
        self.lock().max_size()
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.lock().hits()
    }

    /// Number of lookups that missed.
    pub fn misses(&self) -> u64 {
        self.lock().misses()
    }

    /// Snapshot of the cache statistics.
    pub fn info(&self) -> CacheInfo {
        self.lock().info()
    }
}

/// The async front over the same policy objects, for use from tasks that must
/// not block a runtime worker while waiting on a contended cache.
///
/// The policies themselves never suspend; the only await point is the mutex.
pub struct AsyncCache<K, V> {
    policy: tokio::sync::Mutex<Box<dyn CachePolicy<K, V> + Send>>,
}

impl<K, V> AsyncCache<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + 'static,
    V: Send + 'static,
{
    /// Creates a cache from the given policy configuration.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        Ok(Self {
            policy: tokio::sync::Mutex::new(config.build()?),
        })
    }

    /// Creates a cache around a caller-supplied policy instance.
    pub fn with_policy<P>(policy: P) -> Self
    where
        P: CachePolicy<K, V> + Send + 'static,
    {
        Self {
            policy: tokio::sync::Mutex::new(Box::new(policy)),
        }
    }

    /// Retrieves the value associated with `key`, if cached and fresh.
    pub async fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.policy.lock().await.get(key).cloned()
    }

    /// Inserts a new key-value pair, evicting per the policy when full.
    pub async fn put(&self, key: K, value: V) {
        self.policy.lock().await.put(key, value);
    }

    /// Checks if `key` is already cached, without reordering or counting.
    pub async fn contains_key(&self, key: &K) -> bool {
        self.policy.lock().await.contains(key)
    }

    /// Empties the cache and resets its statistics.
    pub async fn clear(&self) {
        debug!("clearing cache");
        self.policy.lock().await.clear();
    }

    /// Returns the number of keys in the cache at the moment.
    pub async fn current_size(&self) -> usize {
        self.policy.lock().await.current_size()
    }

    /// Returns the capacity in keys, or `None` when unbounded.
    pub async fn max_size(&self) -> Option<usize> {
        self.policy.lock().await.max_size()
    }

    /// Number of lookups answered from the cache.
    pub async fn hits(&self) -> u64 {
        self.policy.lock().await.hits()
    }

    /// Number of lookups that missed.
    pub async fn misses(&self) -> u64 {
        self.policy.lock().await.misses()
    }

    /// Snapshot of the cache statistics.
    pub async fn info(&self) -> CacheInfo {
        self.policy.lock().await.info()
    }
}
