//! Deterministic in-place shuffle
//!
//! THERE IS A REASON this does not delegate to a library shuffle: those are
//! allowed to draw a different number of random values, in a different
//! order, depending on platform and version. The draw pattern below is the
//! reproducibility contract and must never change:
//!
//! for `i` in `0..len`: `idx = bounded_rand(rng, len - i)`, then swap
//! positions `len - 1 - i` and `idx`.

use crate::rng::RandomEngine;
use crate::sampling::bounded_rand;

/// Shuffle `items` in place
///
/// Makes exactly `items.len()` calls to [`bounded_rand`], with bounds
/// `len, len - 1, ..., 1`.
///
/// # Panics
/// Panics if `items` is empty.
///
/// # Example
/// ```
/// use stable_random_core::{shuffle, Xoroshiro128};
///
/// let mut items = [0, 1, 2, 3, 4];
/// shuffle(&mut items, &mut Xoroshiro128::new(42));
/// assert_eq!(items, [1, 3, 0, 2, 4]);
/// ```
pub fn shuffle<T, E: RandomEngine>(items: &mut [T], rng: &mut E) {
    let len = items.len();
    assert!(len > 0, "cannot shuffle an empty sequence");

    for i in 0..len {
        let idx = bounded_rand(rng, (len - i) as u64) as usize;
        items.swap(len - 1 - i, idx);
    }
}

/// Extension trait adding the deterministic shuffle to slices
///
/// # Example
/// ```
/// use stable_random_core::{SplitMix64, StableShuffle};
///
/// let mut items = vec![0, 1, 2, 3, 4];
/// items.stable_shuffle(&mut SplitMix64::new(42));
/// assert_eq!(items, vec![1, 2, 0, 4, 3]);
/// ```
pub trait StableShuffle {
    /// Shuffle in place with [`shuffle`]
    fn stable_shuffle<E: RandomEngine>(&mut self, rng: &mut E);
}

impl<T> StableShuffle for [T] {
    fn stable_shuffle<E: RandomEngine>(&mut self, rng: &mut E) {
        shuffle(self, rng);
    }
}
