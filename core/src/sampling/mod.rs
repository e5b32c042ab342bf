//! Sampling primitives with a fixed, portable consumption of random draws
//!
//! Library shuffles and integer distributions are free to call the
//! generator a different number of times on different platforms. Everything
//! here documents exactly which draws it makes, in which order.

mod bounded;
mod shuffle;

pub use bounded::bounded_rand;
pub use shuffle::{shuffle, StableShuffle};
