use polycache::{AsyncCache, CacheConfig};

/// Test basic functionality of putting and getting items from the cache.
#[tokio::test]
async fn test_basic_get_put() {
    let cache = AsyncCache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1).await;
    cache.put("K2".to_string(), 2).await;

    assert_eq!(cache.get(&"K1".to_string()).await, Some(1));
    assert_eq!(cache.get(&"K2".to_string()).await, Some(2));
}

/// Test FIFO eviction when inserting more items than the cache capacity.
#[tokio::test]
async fn test_fifo_eviction() {
    let cache = AsyncCache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1).await;
    cache.put("K2".to_string(), 2).await;
    cache.put("K1".to_string(), 10).await;
    cache.put("K3".to_string(), 3).await;

    assert_eq!(cache.get(&"K1".to_string()).await, None);
    assert_eq!(cache.get(&"K2".to_string()).await, Some(2));
    assert_eq!(cache.get(&"K3".to_string()).await, Some(3));
}

/// Test checking if a key exists in the cache.
#[tokio::test]
async fn test_contains_key() {
    let cache = AsyncCache::new(CacheConfig::Fifo { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1).await;

    assert!(cache.contains_key(&"K1".to_string()).await);
    assert!(!cache.contains_key(&"K2".to_string()).await);
}
