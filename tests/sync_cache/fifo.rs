use polycache::{Cache, CacheConfig};

/// Test basic functionality of putting and getting items from the cache.
#[test]
fn test_basic_get_put() {
    // Create a new cache with FIFO eviction policy and capacity of 2
    let cache = Cache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert_eq!(cache.get(&"K1".to_string()), Some(1));
    assert_eq!(cache.get(&"K2".to_string()), Some(2));
}

/// Test FIFO eviction when inserting more items than the cache capacity.
#[test]
fn test_fifo_eviction() {
    let cache = Cache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);
    // Replacing a value must not renew K1's arrival position.
    cache.put("K1".to_string(), 10);
    cache.put("K3".to_string(), 3);

    assert_eq!(cache.get(&"K1".to_string()), None);
    assert_eq!(cache.get(&"K2".to_string()), Some(2));
    assert_eq!(cache.get(&"K3".to_string()), Some(3));

    cache.put("K4".to_string(), 4);
    assert_eq!(cache.get(&"K4".to_string()), Some(4));
    assert_eq!(cache.get(&"K2".to_string()), None);
}

/// Test checking if a key exists in the cache.
#[test]
fn test_contains_key() {
    let cache = Cache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert!(cache.contains_key(&"K1".to_string()));
    assert!(!cache.contains_key(&"K3".to_string()));
}

/// Test getting the current size of the cache.
#[test]
fn test_size() {
    let cache = Cache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert_eq!(cache.current_size(), 2);
    assert_eq!(cache.max_size(), Some(2));
}
