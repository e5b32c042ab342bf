//! Stable Random Core - Reproducible Randomness
//!
//! Deterministic pseudo-random number generation and a shuffle whose output
//! is identical on every platform and toolchain.
//!
//! # Architecture
//!
//! - **rng**: Generators (SplitMix64, Xoroshiro128) and the type-erased `AnyRng`
//! - **sampling**: Rejection-sampled bounded draws and the deterministic shuffle
//! - **config**: Building generators from serialized configuration
//! - **checkpoint**: Save/restore of generator state and stream fingerprints
//!
//! # Critical Invariants
//!
//! 1. Same seed → same sequence, on every platform
//! 2. The shuffle draws exactly one bounded sample per position, back to front
//! 3. Generators are single-owner; sharing requires external synchronization
//!
//! # Limitations
//!
//! None of these generators are cryptographically secure.

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use checkpoint::{
    stream_fingerprint, validate_checkpoint, Checkpoint, GeneratorSnapshot, SnapshotError,
};
pub use config::{ConfigError, Generator, GeneratorConfig};
pub use rng::{AnyRng, IndependentBits, RandomEngine, SplitMix64, Word, Xoroshiro128};
pub use sampling::{bounded_rand, shuffle, StableShuffle};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn stable_random_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::shuffle, m)?)?;
    Ok(())
}
