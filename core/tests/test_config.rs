//! Tests for building generators from configuration

use stable_random_core::{
    ConfigError, Generator, GeneratorConfig, RandomEngine, SplitMix64, Xoroshiro128,
};

#[test]
fn test_splitmix_config() {
    let config =
        GeneratorConfig::from_json(r#"{"algorithm": "splitmix64", "seed": 42}"#).unwrap();
    assert_eq!(config, GeneratorConfig::Splitmix64 { seed: 42 });
    assert_eq!(config.build().unwrap(), Generator::SplitMix64(SplitMix64::new(42)));
}

#[test]
fn test_xoroshiro_seed_config() {
    let config =
        GeneratorConfig::from_json(r#"{"algorithm": "xoroshiro128", "seed": 42}"#).unwrap();
    let mut rng = config.build().unwrap();
    assert_eq!(rng.next(), 0xe6c7_1559_e252_5f98);
}

#[test]
fn test_xoroshiro_state_config() {
    let config =
        GeneratorConfig::from_json(r#"{"algorithm": "xoroshiro128", "state": [1, 2]}"#).unwrap();
    assert_eq!(
        config.build().unwrap(),
        Generator::Xoroshiro128(Xoroshiro128::from_state(1, 2))
    );
}

#[test]
fn test_full_width_seed_survives_json() {
    let config = GeneratorConfig::from_json(
        r#"{"algorithm": "splitmix64", "seed": 18446744073709551615}"#,
    )
    .unwrap();
    assert_eq!(config, GeneratorConfig::Splitmix64 { seed: u64::MAX });
}

#[test]
fn test_build_any_matches_build() {
    let config = GeneratorConfig::Splitmix64 { seed: 9 };
    let mut concrete = config.build().unwrap();
    let mut erased = config.build_any().unwrap();
    for _ in 0..20 {
        assert_eq!(concrete.next(), erased.next());
    }
}

#[test]
fn test_missing_seed_rejected() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": "xoroshiro128"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSeed { algorithm: "xoroshiro128" }));
}

#[test]
fn test_seed_and_state_rejected() {
    let err = GeneratorConfig::from_json(
        r#"{"algorithm": "xoroshiro128", "seed": 1, "state": [1, 2]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingSeed { .. }));
}

#[test]
fn test_zero_state_rejected() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": "xoroshiro128", "state": [0, 0]}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::ZeroState));

    let config = GeneratorConfig::Xoroshiro128 {
        seed: None,
        state: Some([0, 0]),
    };
    assert!(matches!(config.build(), Err(ConfigError::ZeroState)));
}

#[test]
fn test_unknown_algorithm_rejected() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": "mt19937", "seed": 1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid generator config JSON"));
}

#[test]
fn test_config_round_trips_through_json() {
    let config = GeneratorConfig::Xoroshiro128 {
        seed: None,
        state: Some([3, 4]),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
}
