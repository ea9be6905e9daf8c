//! Contains code to define the configurations building a `Cache` or
//! `AsyncCache`.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;
use crate::policies::{
    common::CachePolicy, fifo::FifoCache, lfu::LfuCache, lru::LruCache, mfu::MfuCache,
    mq::MqCache, mru::MruCache, nmru::NmruCache, rr::RrCache, slru::SlruCache,
    static_cache::StaticCache, tlru::TlruCache, two_q::TwoQCache, two_q_full::TwoQFullCache,
};

/// Configuration of the time-aware LRU policy.
///
/// `expire_time` counts accesses when `access_based` is set and seconds
/// otherwise. `size` of `None` leaves the cache unbounded, expiring on time
/// alone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TlruConfig {
    pub expire_time: u64,
    pub size: Option<usize>,
    pub access_based: bool,
    pub reset_on_access: bool,
}

impl TlruConfig {
    /// Unbounded, wall-clock based, deadline renewed on access.
    pub fn new(expire_time: u64) -> Self {
        Self {
            expire_time,
            size: None,
            access_based: false,
            reset_on_access: true,
        }
    }
}

/// Configuration of the multi-queue policy.
///
/// `expire_time` counts accesses when `access_based` is set and seconds
/// otherwise. The overall capacity is `size + buffer_size`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MqConfig {
    pub size: usize,
    pub buffer_size: usize,
    pub expire_time: u64,
    pub num_queues: usize,
    pub access_based: bool,
}

impl MqConfig {
    /// Eight queues, access-based clock.
    pub fn new(size: usize, buffer_size: usize, expire_time: u64) -> Self {
        Self {
            size,
            buffer_size,
            expire_time,
            num_queues: 8,
            access_based: true,
        }
    }
}

/// Lists all supported policies with their parameters.
///
/// A config builds into a boxed policy via [`CacheConfig::build`]; parameter
/// bounds are checked there, by the policy constructors.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CacheConfig {
    Fifo { size: usize },
    Lru { size: usize },
    Mru { size: usize },
    Nmru { size: usize },
    Lfu { size: usize },
    Mfu { size: usize },
    Rr { size: usize },
    Slru { protected_size: usize, probationary_size: usize },
    TwoQ { primary_size: usize, secondary_size: usize },
    TwoQFull {
        primary_size: usize,
        secondary_in_size: usize,
        secondary_out_size: usize,
    },
    Tlru(TlruConfig),
    Mq(MqConfig),
    Static,
}

impl CacheConfig {
    /// Builds the configured policy instance.
    pub fn build<K, V>(self) -> Result<Box<dyn CachePolicy<K, V> + Send>, CacheError>
    where
        K: Eq + Hash + Clone + Debug + Send + 'static,
        V: Send + 'static,
    {
        Ok(match self {
            Self::Fifo { size } => Box::new(FifoCache::new(size)?),
            Self::Lru { size } => Box::new(LruCache::new(size)?),
            Self::Mru { size } => Box::new(MruCache::new(size)?),
            Self::Nmru { size } => Box::new(NmruCache::new(size)?),
            Self::Lfu { size } => Box::new(LfuCache::new(size)?),
            Self::Mfu { size } => Box::new(MfuCache::new(size)?),
            Self::Rr { size } => Box::new(RrCache::new(size)?),
            Self::Slru {
                protected_size,
                probationary_size,
            } => Box::new(SlruCache::new(protected_size, probationary_size)?),
            Self::TwoQ {
                primary_size,
                secondary_size,
            } => Box::new(TwoQCache::new(primary_size, secondary_size)?),
            Self::TwoQFull {
                primary_size,
                secondary_in_size,
                secondary_out_size,
            } => Box::new(TwoQFullCache::new(
                primary_size,
                secondary_in_size,
                secondary_out_size,
            )?),
            Self::Tlru(config) => Box::new(TlruCache::new(config)?),
            Self::Mq(config) => Box::new(MqCache::new(config)?),
            Self::Static => Box::new(StaticCache::new()),
        })
    }
}
