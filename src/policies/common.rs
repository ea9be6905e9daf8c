//! Traits and structs shared by the policy implementations.

use crate::common::CacheInfo;

/// The uniform contract every eviction policy implements.
///
/// A policy owns its key index, its ordered structure(s) and its hit/miss
/// counters; all methods take `&mut self` and the thread-safe fronts in
/// [`crate::cache`] serialize access. `None` from [`CachePolicy::get`] is the
/// miss sentinel, so any value, including one a caller might consider
/// "empty", can be cached and returned on a hit.
pub trait CachePolicy<K, V> {
    /// Looks up `key`.
    ///
    /// A hit bumps `hits` and applies the policy's reorder/promotion; a miss
    /// (including an expired entry) bumps `misses` and returns `None`.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Inserts or replaces `key`.
    ///
    /// A present key has its value replaced and takes the policy's on-access
    /// reordering. An absent key is admitted after evicting exactly enough
    /// entries to respect the size bound.
    fn put(&mut self, key: K, value: V);

    /// Membership probe: no reordering, no counter updates, and expired
    /// entries report absent.
    fn contains(&self, key: &K) -> bool;

    /// Empties all structures and resets counters and any internal clock.
    fn clear(&mut self);

    /// Number of keys currently held.
    fn current_size(&self) -> usize;

    /// Capacity in keys, `None` when unbounded.
    fn max_size(&self) -> Option<usize>;

    /// Number of lookups answered from the cache since the last clear.
    fn hits(&self) -> u64;

    /// Number of lookups that missed since the last clear.
    fn misses(&self) -> u64;

    /// Snapshot of the four statistics.
    fn info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits(),
            misses: self.misses(),
            current_size: self.current_size(),
            max_size: self.max_size(),
        }
    }

    /// Names of extra operations a policy wants a memoizing front to expose.
    ///
    /// An extension seam; none of the shipped policies use it.
    fn dynamic_methods(&self) -> &[&'static str] {
        &[]
    }
}

/// A cached value plus the handle of its node in an ordered list.
#[derive(Clone, Debug)]
pub(crate) struct NodeEntry<V> {
    pub value: V,
    pub node: usize,
}

/// A cached value plus the handle of its frequency bucket.
#[derive(Clone, Debug)]
pub(crate) struct FreqEntry<V> {
    pub value: V,
    pub bucket: usize,
}
