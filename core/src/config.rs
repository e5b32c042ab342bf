//! Generator configuration
//!
//! Describes which generator to build, and from which seed, in a form that
//! can live in JSON next to the rest of a host system's configuration.
//!
//! # Example
//! ```
//! use stable_random_core::{GeneratorConfig, RandomEngine};
//!
//! let config = GeneratorConfig::from_json(r#"{"algorithm": "xoroshiro128", "seed": 42}"#)?;
//! let mut rng = config.build()?;
//! assert_eq!(rng.next(), 0xe6c7_1559_e252_5f98);
//! # Ok::<(), stable_random_core::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::{AnyRng, RandomEngine, SplitMix64, Xoroshiro128};

/// Errors that can occur while reading or validating a generator config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{algorithm} requires either a seed or an explicit state")]
    MissingSeed { algorithm: &'static str },

    #[error("{algorithm} accepts a seed or an explicit state, not both")]
    ConflictingSeed { algorithm: &'static str },

    #[error("xoroshiro128 state must not be all zero")]
    ZeroState,

    #[error("Invalid generator config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which generator to build
///
/// Internally tagged by `"algorithm"`:
///
/// - `{"algorithm": "splitmix64", "seed": 7}`
/// - `{"algorithm": "xoroshiro128", "seed": 7}`
/// - `{"algorithm": "xoroshiro128", "state": [1, 2]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum GeneratorConfig {
    Splitmix64 {
        seed: u64,
    },
    Xoroshiro128 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state: Option<[u64; 2]>,
    },
}

impl GeneratorConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that exactly one way of seeding is given and the state is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            GeneratorConfig::Splitmix64 { .. } => Ok(()),
            GeneratorConfig::Xoroshiro128 { seed, state } => match (seed, state) {
                (None, None) => Err(ConfigError::MissingSeed {
                    algorithm: "xoroshiro128",
                }),
                (Some(_), Some(_)) => Err(ConfigError::ConflictingSeed {
                    algorithm: "xoroshiro128",
                }),
                (None, Some([0, 0])) => Err(ConfigError::ZeroState),
                _ => Ok(()),
            },
        }
    }

    /// Build the configured generator
    pub fn build(&self) -> Result<Generator, ConfigError> {
        self.validate()?;

        let generator = match *self {
            GeneratorConfig::Splitmix64 { seed } => Generator::SplitMix64(SplitMix64::new(seed)),
            GeneratorConfig::Xoroshiro128 {
                seed: Some(seed), ..
            } => Generator::Xoroshiro128(Xoroshiro128::new(seed)),
            GeneratorConfig::Xoroshiro128 {
                state: Some([s0, s1]),
                ..
            } => Generator::Xoroshiro128(Xoroshiro128::from_state(s0, s1)),
            GeneratorConfig::Xoroshiro128 { .. } => {
                return Err(ConfigError::MissingSeed {
                    algorithm: "xoroshiro128",
                })
            }
        };

        log::debug!("built {} generator from config", generator.algorithm());
        Ok(generator)
    }

    /// Build the configured generator behind a type-erased handle
    pub fn build_any(&self) -> Result<AnyRng<'static>, ConfigError> {
        Ok(AnyRng::new(self.build()?))
    }
}

/// One of the built-in 64-bit generators, chosen at runtime
///
/// Statically dispatched; use [`AnyRng`] when user-defined generators must
/// be mixed in as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    SplitMix64(SplitMix64),
    Xoroshiro128(Xoroshiro128),
}

impl Generator {
    /// Name of the algorithm, as used in configs and snapshots
    pub fn algorithm(&self) -> &'static str {
        match self {
            Generator::SplitMix64(_) => "splitmix64",
            Generator::Xoroshiro128(_) => "xoroshiro128",
        }
    }
}

impl RandomEngine for Generator {
    type Output = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    #[inline]
    fn next(&mut self) -> u64 {
        match self {
            Generator::SplitMix64(rng) => rng.next(),
            Generator::Xoroshiro128(rng) => rng.next(),
        }
    }
}

impl From<SplitMix64> for Generator {
    fn from(rng: SplitMix64) -> Self {
        Generator::SplitMix64(rng)
    }
}

impl From<Xoroshiro128> for Generator {
    fn from(rng: Xoroshiro128) -> Self {
        Generator::Xoroshiro128(rng)
    }
}
