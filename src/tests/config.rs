//! Unit tests regarding configuration building and the serializable surface.

use crate::common::CacheInfo;
use crate::config::{CacheConfig, MqConfig, TlruConfig};
use crate::error::CacheError;
use crate::policies::common::CachePolicy;

/// Test that every sized variant rejects a zero bound at build time.
#[test]
fn test_invalid_configs_do_not_build() {
    let configs = [
        CacheConfig::Fifo { size: 0 },
        CacheConfig::Lru { size: 0 },
        CacheConfig::Mru { size: 0 },
        CacheConfig::Nmru { size: 0 },
        CacheConfig::Lfu { size: 0 },
        CacheConfig::Mfu { size: 0 },
        CacheConfig::Rr { size: 0 },
        CacheConfig::Slru {
            protected_size: 0,
            probationary_size: 1,
        },
        CacheConfig::TwoQ {
            primary_size: 1,
            secondary_size: 0,
        },
        CacheConfig::TwoQFull {
            primary_size: 1,
            secondary_in_size: 1,
            secondary_out_size: 0,
        },
        CacheConfig::Tlru(TlruConfig::new(0)),
        CacheConfig::Mq(MqConfig::new(1, 1, 0)),
    ];

    for config in configs {
        let result = config.build::<String, i32>();
        assert!(matches!(
            result.err(),
            Some(CacheError::InvalidConfiguration { .. })
        ));
    }
}

/// Test that valid variants build and report their capacity.
#[test]
fn test_valid_configs_build() {
    let policy = CacheConfig::Lru { size: 3 }.build::<String, i32>().unwrap();
    assert_eq!(policy.max_size(), Some(3));

    let policy = CacheConfig::Slru {
        protected_size: 2,
        probationary_size: 3,
    }
    .build::<String, i32>()
    .unwrap();
    assert_eq!(policy.max_size(), Some(5));

    let policy = CacheConfig::Static.build::<String, i32>().unwrap();
    assert_eq!(policy.max_size(), None);
}

/// Test the defaulting constructors.
#[test]
fn test_config_defaults() {
    let tlru = TlruConfig::new(30);
    assert_eq!(tlru.expire_time, 30);
    assert_eq!(tlru.size, None);
    assert!(!tlru.access_based);
    assert!(tlru.reset_on_access);

    let mq = MqConfig::new(16, 4, 60);
    assert_eq!(mq.num_queues, 8);
    assert!(mq.access_based);
}

/// Test that configs round-trip through serde.
#[test]
fn test_config_round_trips_through_serde() {
    let config = CacheConfig::Mq(MqConfig::new(16, 4, 60));
    let json = serde_json::to_string(&config).unwrap();
    let back: CacheConfig = serde_json::from_str(&json).unwrap();

    let policy = back.build::<String, i32>().unwrap();
    assert_eq!(policy.max_size(), Some(20));
}

/// Test the statistics snapshot serializes with `null` for unbounded.
#[test]
fn test_info_serializes() {
    let info = CacheInfo {
        hits: 3,
        misses: 1,
        current_size: 2,
        max_size: None,
    };
    let json = serde_json::to_string(&info).unwrap();
    assert_eq!(
        json,
        r#"{"hits":3,"misses":1,"current_size":2,"max_size":null}"#
    );

    let back: CacheInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}
