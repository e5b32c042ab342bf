//! Checkpoint - Save/Load Generator State
//!
//! Captures the exact state of a generator so a long-running computation can
//! be paused and resumed without changing a single later draw.
//!
//! # Critical Invariants
//!
//! - **Determinism**: A restored generator continues the identical sequence
//! - **Integrity**: A checkpoint is only accepted if its state hash matches
//! - **Validity**: An all-zero xoroshiro128 state is never restored

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::Generator;
use crate::rng::{RandomEngine, SplitMix64, Xoroshiro128};

/// Errors that can occur while loading a checkpoint
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("State hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("xoroshiro128 snapshot has an all-zero state")]
    ZeroState,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Exact state of one of the built-in generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum GeneratorSnapshot {
    Splitmix64 { state: u64 },
    Xoroshiro128 { s0: u64, s1: u64 },
}

impl GeneratorSnapshot {
    /// Rebuild the generator this snapshot was taken from
    pub fn restore(&self) -> Result<Generator, SnapshotError> {
        let generator = match *self {
            GeneratorSnapshot::Splitmix64 { state } => {
                Generator::SplitMix64(SplitMix64::new(state))
            }
            GeneratorSnapshot::Xoroshiro128 { s0: 0, s1: 0 } => {
                return Err(SnapshotError::ZeroState)
            }
            GeneratorSnapshot::Xoroshiro128 { s0, s1 } => {
                Generator::Xoroshiro128(Xoroshiro128::from_state(s0, s1))
            }
        };
        log::debug!("restored {} generator from snapshot", generator.algorithm());
        Ok(generator)
    }
}

impl Generator {
    /// Capture the current state
    ///
    /// # Example
    /// ```
    /// use stable_random_core::{Generator, RandomEngine, Xoroshiro128};
    ///
    /// let mut rng = Generator::from(Xoroshiro128::new(9));
    /// rng.next();
    ///
    /// let mut resumed = rng.snapshot().restore().unwrap();
    /// assert_eq!(rng.next(), resumed.next());
    /// ```
    pub fn snapshot(&self) -> GeneratorSnapshot {
        match self {
            Generator::SplitMix64(rng) => GeneratorSnapshot::Splitmix64 { state: rng.state() },
            Generator::Xoroshiro128(rng) => {
                let (s0, s1) = rng.state();
                GeneratorSnapshot::Xoroshiro128 { s0, s1 }
            }
        }
    }
}

/// A snapshot plus bookkeeping, ready to be written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Generator state at time of checkpoint (CRITICAL for determinism)
    pub snapshot: GeneratorSnapshot,

    /// Number of draws made before the checkpoint, as counted by the caller
    pub draws: u64,

    /// SHA256 hash of the snapshot (for validation)
    pub state_hash: String,
}

impl Checkpoint {
    /// Create a checkpoint of `generator` after `draws` draws
    pub fn new(generator: &Generator, draws: u64) -> Result<Self, SnapshotError> {
        let snapshot = generator.snapshot();
        let state_hash = compute_state_hash(&snapshot)?;
        Ok(Self {
            snapshot,
            draws,
            state_hash,
        })
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a checkpoint and validate it
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let checkpoint: Self = serde_json::from_str(json)?;
        validate_checkpoint(&checkpoint)?;
        Ok(checkpoint)
    }

    /// Validate, then rebuild the generator
    pub fn restore(&self) -> Result<Generator, SnapshotError> {
        validate_checkpoint(self)?;
        self.snapshot.restore()
    }
}

// ============================================================================
// Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of a snapshot
///
/// Field order is fixed by the struct definitions, so the JSON form is
/// already canonical.
pub fn compute_state_hash(snapshot: &GeneratorSnapshot) -> Result<String, SnapshotError> {
    let json = serde_json::to_string(snapshot)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

/// SHA256 fingerprint of the next `draws` outputs of `rng`
///
/// Hashes each output as 8 little-endian bytes. Publishing the fingerprint
/// of a few thousand draws pins a whole sequence in one short string.
///
/// # Example
/// ```
/// use stable_random_core::{stream_fingerprint, SplitMix64};
///
/// let fingerprint = stream_fingerprint(&mut SplitMix64::new(42), 1000);
/// assert_eq!(
///     fingerprint,
///     "1647dd30713a0c2d5758a74e804a445d91420baec1e9e70690439d3944f15e44"
/// );
/// ```
pub fn stream_fingerprint<E>(rng: &mut E, draws: usize) -> String
where
    E: RandomEngine<Output = u64>,
{
    let mut hasher = Sha256::new();
    for _ in 0..draws {
        hasher.update(rng.next().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validate checkpoint integrity
///
/// Checks that the stored hash matches the snapshot and that the snapshot
/// describes a usable generator state.
pub fn validate_checkpoint(checkpoint: &Checkpoint) -> Result<(), SnapshotError> {
    let actual = compute_state_hash(&checkpoint.snapshot)?;
    if actual != checkpoint.state_hash {
        log::warn!("rejecting checkpoint after {} draws: state hash mismatch", checkpoint.draws);
        return Err(SnapshotError::HashMismatch {
            expected: checkpoint.state_hash.clone(),
            actual,
        });
    }

    if checkpoint.snapshot == (GeneratorSnapshot::Xoroshiro128 { s0: 0, s1: 0 }) {
        log::warn!("rejecting checkpoint after {} draws: all-zero state", checkpoint.draws);
        return Err(SnapshotError::ZeroState);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = GeneratorSnapshot::Xoroshiro128 { s0: 1, s1: 2 };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"algorithm":"xoroshiro128","s0":1,"s1":2}"#);
    }

    #[test]
    fn test_hash_is_lowercase_hex_sha256() {
        let hash = compute_state_hash(&GeneratorSnapshot::Splitmix64 { state: 0 }).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_zero_fingerprint_draws_is_empty_hash() {
        let fingerprint = stream_fingerprint(&mut SplitMix64::new(1), 0);
        assert_eq!(
            fingerprint,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
