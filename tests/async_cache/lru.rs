use std::sync::Arc;

use polycache::{AsyncCache, CacheConfig};

/// Test basic functionality of putting and getting items from the cache.
#[tokio::test]
async fn test_basic_get_put() {
    let cache = AsyncCache::new(CacheConfig::Lru { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1).await;
    cache.put("K2".to_string(), 2).await;

    assert_eq!(cache.get(&"K1".to_string()).await, Some(1));
    assert_eq!(cache.get(&"K2".to_string()).await, Some(2));
}

/// Test LRU eviction when inserting more items than the cache capacity.
#[tokio::test]
async fn test_lru_eviction() {
    let cache = AsyncCache::new(CacheConfig::Lru { size: 2 }).unwrap();

    cache.put("K1".to_string(), 1).await;
    cache.put("K2".to_string(), 2).await;
    cache.put("K3".to_string(), 3).await;

    assert_eq!(cache.get(&"K1".to_string()).await, None);
    assert_eq!(cache.get(&"K2".to_string()).await, Some(2));
    assert_eq!(cache.get(&"K3".to_string()).await, Some(3));
}

/// Test the cache shared across tasks behind an Arc.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_across_tasks() {
    let cache = Arc::new(AsyncCache::new(CacheConfig::Lru { size: 64 }).unwrap());

    let mut handles = Vec::new();
    for t in 0..4 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move {
            for i in 0..16 {
                cache.put(format!("T{t}-{i}"), i).await;
                assert_eq!(cache.get(&format!("T{t}-{i}")).await, Some(i));
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(cache.current_size().await, 64);
    let info = cache.info().await;
    assert_eq!(info.hits, 64);
    assert_eq!(info.misses, 0);
}
