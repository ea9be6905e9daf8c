use std::sync::Arc;
use std::thread;

use polycache::policies::StaticCache;
use polycache::{Cache, CacheConfig, CachePolicy};

/// Test that the cache can be shared across threads behind an Arc.
#[test]
fn test_shared_across_threads() {
    let cache = Arc::new(Cache::new(CacheConfig::Lru { size: 64 }).unwrap());

    let mut handles = Vec::new();
    for t in 0..4 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..16 {
                cache.put(format!("T{t}-{i}"), i);
                assert_eq!(cache.get(&format!("T{t}-{i}")), Some(i));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    // 64 distinct keys into a 64-slot cache: everything stays resident.
    assert_eq!(cache.current_size(), 64);
    assert_eq!(cache.hits(), 64);
}

/// Test that a caller-supplied policy instance can back the front.
#[test]
fn test_with_policy() {
    let cache: Cache<String, i32> = Cache::with_policy(StaticCache::new());

    cache.put("K1".to_string(), 1);
    assert_eq!(cache.get(&"K1".to_string()), Some(1));
    assert_eq!(cache.max_size(), None);
}

/// Test that eviction tracing does not disturb cache behavior.
#[test]
fn test_runs_under_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();

    let cache = Cache::new(CacheConfig::Lru { size: 1 }).unwrap();
    cache.put("K1".to_string(), 1);
    cache.put("K2".to_string(), 2); // the eviction emits a trace event

    assert_eq!(cache.get(&"K2".to_string()), Some(2));
    assert_eq!(cache.get(&"K1".to_string()), None);
}

/// Test the statistics counters observed through the trait object.
#[test]
fn test_policy_contract_through_box() {
    let mut policy = CacheConfig::Fifo { size: 2 }.build::<String, i32>().unwrap();

    policy.put("K1".to_string(), 1);
    assert_eq!(policy.get(&"K1".to_string()), Some(&1));
    assert_eq!(policy.get(&"K2".to_string()), None);

    let info = policy.info();
    assert_eq!(info.hits, 1);
    assert_eq!(info.misses, 1);
    assert_eq!(info.current_size, 1);
    assert!(policy.dynamic_methods().is_empty());
}
