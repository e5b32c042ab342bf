//! Deterministic random number generation
//!
//! Small-state 64-bit generators plus a type-erased handle that accepts any
//! unsigned generator. CRITICAL: output sequences are part of the public
//! contract. Changing any constant here changes every seeded result downstream.

mod any_rng;
mod engine;
mod splitmix;
mod xoroshiro;

pub use any_rng::{AnyRng, IndependentBits};
pub use engine::{RandomEngine, Word};
pub use splitmix::SplitMix64;
pub use xoroshiro::Xoroshiro128;
