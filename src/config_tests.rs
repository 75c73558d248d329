//! Tests for `config` module

use crate::config::*;
use crate::error::Error;

#[test]
fn test_default_values() {
    let config = InternConfig::default();

    assert_eq!(config.min_capacity, 16);
    assert_eq!(config.load_numerator, 7);
    assert_eq!(config.load_denominator, 8);
    assert!(config.validate().is_ok());
}

#[test]
fn test_with_min_capacity_keeps_default_load_factor() {
    let config = InternConfig::with_min_capacity(1024);

    assert_eq!(config.min_capacity, 1024);
    assert_eq!(config.load_numerator, DEFAULT_LOAD_NUMERATOR);
    assert_eq!(config.load_denominator, DEFAULT_LOAD_DENOMINATOR);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_non_power_of_two_capacity() {
    for bad in [0, 1, 3, 24, 100, MAX_CAPACITY + 1] {
        let config = InternConfig::with_min_capacity(bad);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidCapacity { requested: bad }),
            "capacity {bad} should be rejected"
        );
    }
}

#[test]
fn test_accepts_max_capacity() {
    let config = InternConfig::with_min_capacity(MAX_CAPACITY);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rejects_degenerate_load_factor() {
    let cases = [(0, 8), (8, 8), (9, 8)];

    for (numerator, denominator) in cases {
        let config = InternConfig {
            min_capacity: 16,
            load_numerator: numerator,
            load_denominator: denominator,
        };
        assert_eq!(
            config.validate(),
            Err(Error::InvalidLoadFactor {
                numerator,
                denominator
            }),
            "load factor {numerator}/{denominator} should be rejected"
        );
    }
}

#[test]
fn test_rejects_zero_growth_threshold() {
    // 2 * 1 / 8 and 4 * 1 / 8 both round to zero entries before growth.
    for min_capacity in [2, 4] {
        let config = InternConfig {
            min_capacity,
            load_numerator: 1,
            load_denominator: 8,
        };
        assert_eq!(
            config.validate(),
            Err(Error::DegenerateLoadFactor {
                min_capacity,
                numerator: 1,
                denominator: 8,
            }),
            "capacity {min_capacity} at 1/8 should be rejected"
        );
    }

    // 8 * 1 / 8 == 1: the smallest acceptable threshold.
    let config = InternConfig {
        min_capacity: 8,
        load_numerator: 1,
        load_denominator: 8,
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_serde_round_trip() {
    let config = InternConfig {
        min_capacity: 256,
        load_numerator: 3,
        load_denominator: 4,
    };

    let json = serde_json::to_string(&config).unwrap();
    let deserialized: InternConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, deserialized);
}

#[test]
fn test_serde_missing_fields_use_defaults() {
    let deserialized: InternConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(deserialized, InternConfig::default());

    let partial: InternConfig = serde_json::from_str(r#"{"min_capacity": 64}"#).unwrap();
    assert_eq!(partial.min_capacity, 64);
    assert_eq!(partial.load_numerator, DEFAULT_LOAD_NUMERATOR);
}
