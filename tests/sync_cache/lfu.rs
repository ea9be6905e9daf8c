use polycache::{Cache, CacheConfig};

/// Test basic functionality of putting and getting items from the cache.
#[test]
fn test_basic_get_put() {
    // Create a new cache with LFU eviction policy and capacity of 2
    let cache = Cache::new(CacheConfig::Lfu { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    assert_eq!(cache.get(&"K1".to_string()), Some(1));
    assert_eq!(cache.get(&"K2".to_string()), Some(2));
}

/// Test LFU eviction when inserting more items than the cache capacity.
#[test]
fn test_lfu_eviction() {
    let cache = Cache::new(CacheConfig::Lfu { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2);

    // K2 climbs past K1.
    assert_eq!(cache.get(&"K2".to_string()), Some(2));

    cache.put("K3".to_string(), 3);

    assert_eq!(cache.get(&"K1".to_string()), None);
    assert_eq!(cache.get(&"K2".to_string()), Some(2));
    assert_eq!(cache.get(&"K3".to_string()), Some(3));

    cache.put("K2".to_string(), 20);
    cache.put("K4".to_string(), 4);

    assert_eq!(cache.get(&"K3".to_string()), None);
    assert_eq!(cache.get(&"K4".to_string()), Some(4));
    assert_eq!(cache.get(&"K2".to_string()), Some(20));
}
