//! Rejection sampling from `[0, upper_bound)`
//!
//! Uses rejection sampling instead of `next() % upper_bound`, which would
//! favor low values whenever the bound does not divide the generator range.
//!
//! # Full-range generators
//!
//! The threshold is computed in wrapping 64-bit arithmetic. For generators
//! spanning all of `u64`, `range + 1` wraps to zero, the threshold becomes
//! `u64::MAX` and nothing is ever rejected. Seeded output must keep matching
//! historical sequences, so this must not change.
//!
//! Known limitation: the lowest `2^64 mod upper_bound` results each get one
//! extra preimage out of about `2^64 / upper_bound`. Negligible for practical
//! bounds; near `2^63` those low results are about twice as likely.
//!
//! # Iteration count
//!
//! Narrower generators are rejected exactly. The loop has no hard cap; a
//! proposal is rejected with probability below `upper_bound / span`.
//! Capping it would reintroduce bias.

use crate::rng::RandomEngine;

/// Draw a value from `[0, upper_bound)`
///
/// Proposals `next() - MIN` are accepted when they are at most
/// `threshold = range - (range + 1) mod upper_bound`, with
/// `range = MAX - MIN` and `range + 1` wrapping on overflow; the accepted
/// proposal is reduced modulo `upper_bound`.
///
/// The generator's range must be at least `upper_bound` values wide. Wrap
/// narrow generators in [`crate::AnyRng`] first.
///
/// # Panics
/// Panics if `upper_bound` is zero.
///
/// # Example
/// ```
/// use stable_random_core::{bounded_rand, Xoroshiro128};
///
/// let mut rng = Xoroshiro128::new(42);
/// let roll = bounded_rand(&mut rng, 6);
/// assert_eq!(roll, 2);
/// ```
pub fn bounded_rand<E: RandomEngine>(rng: &mut E, upper_bound: u64) -> u64 {
    assert!(upper_bound > 0, "upper_bound must be positive");

    let min: u64 = E::MIN.into();
    let max: u64 = E::MAX.into();
    let random_max = max - min;
    debug_assert!(
        random_max == u64::MAX || random_max + 1 >= upper_bound,
        "generator range is narrower than upper_bound {}",
        upper_bound
    );

    // wraps to 0 % upper_bound for full-range generators
    let threshold = random_max - random_max.wrapping_add(1) % upper_bound;

    loop {
        // proposal is in the range [0, random_max]
        let draw: u64 = rng.next().into();
        let proposal = draw - min;
        if proposal <= threshold {
            return proposal % upper_bound;
        }
    }
}
