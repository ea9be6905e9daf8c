//! This module provides the eviction policies backing the cache engine.
//!
//! Each policy is a complete bounded store: it owns its key index, its
//! ordered structure(s) and its statistics, and implements the
//! [`common::CachePolicy`] contract. Different policies prioritize different
//! eviction criteria, from plain arrival order (FIFO) through recency (LRU,
//! MRU, NMRU, SLRU, TLRU), frequency (LFU, MFU, MQ), the 2Q hybrids, random
//! replacement and an unbounded store.

pub mod common; // CachePolicy trait and structs shared by the policies
pub mod fifo;
pub mod lfu;
pub mod lru;
pub mod mfu;
pub mod mq;
pub mod mru;
pub mod nmru;
pub mod rr;
pub mod slru;
pub mod static_cache;
pub mod tlru;
pub mod two_q;
pub mod two_q_full;

#[cfg(test)]
mod tests;

pub use common::CachePolicy;
pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use mfu::MfuCache;
pub use mq::MqCache;
pub use mru::MruCache;
pub use nmru::NmruCache;
pub use rr::RrCache;
pub use slru::SlruCache;
pub use static_cache::StaticCache;
pub use tlru::TlruCache;
pub use two_q::TwoQCache;
pub use two_q_full::TwoQFullCache;
