use polycache::{AsyncCache, CacheConfig, TlruConfig};

/// Test time-based expiry through the async front with the access clock.
#[tokio::test]
async fn test_access_based_expiry() {
    let config = TlruConfig {
        access_based: true,
        ..TlruConfig::new(2)
    };
    let cache = AsyncCache::new(CacheConfig::Tlru(config)).unwrap();

    cache.put("K1".to_string(), 1).await; // t=1, deadline 3

    // Burn the window down with unrelated misses.
    assert_eq!(cache.get(&"X1".to_string()).await, None); // t=2
    assert_eq!(cache.get(&"X2".to_string()).await, None); // t=3

    assert_eq!(cache.get(&"K1".to_string()).await, None); // t=4, expired
    assert_eq!(cache.current_size().await, 0);
}

/// Test that an unbounded TLRU reports no capacity.
#[tokio::test]
async fn test_unbounded_max_size() {
    let config = TlruConfig {
        access_based: true,
        ..TlruConfig::new(100)
    };
    let cache = AsyncCache::<String, i32>::new(CacheConfig::Tlru(config)).unwrap();

    assert_eq!(cache.max_size().await, None);

    cache.put("K1".to_string(), 1).await;
    assert_eq!(cache.get(&"K1".to_string()).await, Some(1));
}
