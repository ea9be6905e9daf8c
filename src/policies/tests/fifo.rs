//! Unit tests regarding the FIFO policy.

use crate::error::CacheError;
use crate::policies::common::CachePolicy;
use crate::policies::fifo::FifoCache;

#[test]
fn test_invalid_size() {
    let result = FifoCache::<String, i32>::new(0);
    assert_eq!(
        result.err(),
        Some(CacheError::InvalidConfiguration {
            reason: "size should be > 0"
        })
    );
}

/// Test basic functionality of putting and getting items from the cache.
#[test]
fn test_basic_get_put() {
    let mut cache = FifoCache::new(2).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert_eq!(cache.get(&"K1".to_string()), Some(&1));
    assert_eq!(cache.get(&"K2".to_string()), Some(&2));
    assert_eq!(cache.current_size(), 2);
    assert_eq!(cache.max_size(), Some(2));
}

/// Test that keys are evicted in arrival order and that gets do not renew
/// a key's position.
#[test]
fn test_evicts_in_arrival_order() {
    let mut cache = FifoCache::new(2).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    // A hit must not save K1 from being the first out.
    assert_eq!(cache.get(&"K1".to_string()), Some(&1));

    cache.put("K3".to_string(), 3);
    cache.put("K4".to_string(), 4);

    assert_eq!(cache.get(&"K1".to_string()), None);
    assert_eq!(cache.get(&"K2".to_string()), None);
    assert_eq!(cache.get(&"K3".to_string()), Some(&3));
    assert_eq!(cache.get(&"K4".to_string()), Some(&4));
}

/// Test that replacing a present key's value does not renew its position
/// or change the size.
#[test]
fn test_put_existing_key() {
    let mut cache = FifoCache::new(2).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);
    cache.put("K1".to_string(), 10);
    assert_eq!(cache.current_size(), 2);

    cache.put("K3".to_string(), 3);

    // K1 was still the oldest arrival.
    assert_eq!(cache.get(&"K1".to_string()), None);
    assert_eq!(cache.get(&"K2".to_string()), Some(&2));
    assert_eq!(cache.get(&"K3".to_string()), Some(&3));
}

/// Test hit and miss counting.
#[test]
fn test_hits_and_misses() {
    let mut cache = FifoCache::new(2).unwrap();

    cache.put("K1".to_string(), 1);
    cache.get(&"K1".to_string());
    cache.get(&"K1".to_string());
    cache.get(&"K2".to_string());

    assert_eq!(cache.hits(), 2);
    assert_eq!(cache.misses(), 1);
}

/// Test that clear empties the cache and resets the statistics.
#[test]
fn test_clear() {
    let mut cache = FifoCache::new(2).unwrap();

    cache.put("K1".to_string(), 1);
    cache.get(&"K1".to_string());
    cache.get(&"K2".to_string());
    cache.clear();

    assert_eq!(cache.current_size(), 0);
    assert_eq!(cache.hits(), 0);
    assert_eq!(cache.misses(), 0);
    assert_eq!(cache.get(&"K1".to_string()), None);

    // Clearing twice is the same as clearing once.
    cache.clear();
    assert_eq!(cache.current_size(), 0);
    assert_eq!(cache.misses(), 0);
}

/// Test that a size-1 cache replaces its only occupant on a new put.
#[test]
fn test_size_one() {
    let mut cache = FifoCache::new(1).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert_eq!(cache.get(&"K1".to_string()), None);
    assert_eq!(cache.get(&"K2".to_string()), Some(&2));
    assert_eq!(cache.current_size(), 1);
}
