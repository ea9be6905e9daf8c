use polycache::{Cache, CacheConfig};

/// Test basic functionality of putting and getting items from the cache.
#[test]
fn test_basic_get_put() {
    // Create a new cache with LRU eviction policy and capacity of 2
    let cache = Cache::new(CacheConfig::Lru { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert_eq!(cache.get(&"K1".to_string()), Some(1));
    assert_eq!(cache.get(&"K2".to_string()), Some(2));
}

/// Test LRU eviction when inserting more items than the cache capacity.
#[test]
fn test_lru_eviction() {
    let cache = Cache::new(CacheConfig::Lru { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);
    cache.put("K3".to_string(), 3);

    // Assert that the least recently used item "K1" has been evicted
    assert_eq!(cache.get(&"K1".to_string()), None);
    assert_eq!(cache.get(&"K2".to_string()), Some(2));
    assert_eq!(cache.get(&"K3".to_string()), Some(3));
}

/// Test the statistics snapshot tracks hits, misses and sizes.
#[test]
fn test_info() {
    let cache = Cache::new(CacheConfig::Lru { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.get(&"K1".to_string());
    cache.get(&"K1".to_string());
    cache.get(&"K2".to_string());

    let info = cache.info();
    assert_eq!(info.hits, 2);
    assert_eq!(info.misses, 1);
    assert_eq!(info.current_size, 1);
    assert_eq!(info.max_size, Some(2));
}

/// Test that clear empties the cache and resets the statistics.
#[test]
fn test_clear() {
    let cache = Cache::new(CacheConfig::Lru { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.get(&"K1".to_string());
    cache.clear();

    assert_eq!(cache.current_size(), 0);
    assert_eq!(cache.hits(), 0);
    assert_eq!(cache.misses(), 0);
    assert_eq!(cache.get(&"K1".to_string()), None);
}
