//! Contains code of some common structs used across the library.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of a cache's statistics.
///
/// Returned by [`crate::cache::Cache::info`] and
/// [`crate::policies::common::CachePolicy::info`]. `max_size` is `None` for
/// unbounded stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    /// Number of lookups answered from the cache.
    pub hits: u64,
    /// Number of lookups not answered from the cache.
    pub misses: u64,
    /// Number of keys currently held.
    pub current_size: usize,
    /// Capacity in keys, or `None` when the store is unbounded.
    pub max_size: Option<usize>,
}

/// Hit/miss counters kept by every policy.
///
/// Counters only grow until [`Counters::reset`], which zeroes both.
#[derive(Clone, Debug, Default)]
pub(crate) struct Counters {
    pub hits: u64,
    pub misses: u64,
}

impl Counters {
    pub fn hit(&mut self) {
        self.hits += 1;
    }

    pub fn miss(&mut self) {
        self.misses += 1;
    }

    pub fn reset(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}

/// Clock driving the time-aware policies.
///
/// In `Logical` mode the clock advances by one per operation, which makes
/// expiry deterministic under test. In `Wall` mode it reads elapsed
/// milliseconds from a fixed origin, so readings are monotonic and cheap to
/// compare as plain integers.
#[derive(Debug)]
pub(crate) enum CacheClock {
    Logical(u64),
    Wall(Instant),
}

impl CacheClock {
    pub fn new(access_based: bool) -> Self {
        if access_based {
            CacheClock::Logical(0)
        } else {
            CacheClock::Wall(Instant::now())
        }
    }

    /// Advances (or re-reads) the clock and returns the current tick.
    pub fn tick(&mut self) -> u64 {
        match self {
            CacheClock::Logical(now) => {
                *now += 1;
                *now
            }
            CacheClock::Wall(origin) => origin.elapsed().as_millis() as u64,
        }
    }

    /// Current reading without advancing. Used by membership probes.
    pub fn peek(&self) -> u64 {
        match self {
            CacheClock::Logical(now) => *now,
            CacheClock::Wall(origin) => origin.elapsed().as_millis() as u64,
        }
    }

    pub fn reset(&mut self) {
        match self {
            CacheClock::Logical(now) => *now = 0,
            CacheClock::Wall(origin) => *origin = Instant::now(),
        }
    }

    /// Scales a configured expiry window to this clock's tick unit.
    ///
    /// Logical clocks count operations, wall clocks count milliseconds while
    /// the configured window is in seconds.
    pub fn window_ticks(&self, expire_time: u64) -> u64 {
        match self {
            CacheClock::Logical(_) => expire_time,
            CacheClock::Wall(_) => expire_time * 1000,
        }
    }
}
