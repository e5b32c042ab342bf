//! Widening and type erasure for arbitrary generators
//!
//! [`IndependentBits`] turns any [`RandomEngine`] into a full-range 64-bit
//! generator by concatenating several narrower draws. [`AnyRng`] boxes that
//! adapter so heterogeneous generators can live behind one concrete type.
//!
//! # Packing order
//!
//! Chunks are packed most-significant first: the first underlying draw
//! lands in the highest bits. A full-range 32-bit engine therefore yields
//! `(first << 32) | second`, and a full-range 64-bit engine passes through
//! one draw unchanged.

use std::fmt;

use super::engine::RandomEngine;

const OUTPUT_BITS: u32 = u64::BITS;

/// How many draws of which width make up one 64-bit output
///
/// Derived once per engine type following the independent-bits algorithm:
/// `short_draws` chunks of `short_bits` bits, then the remaining draws with
/// one extra bit each. A draw is rejected unless it falls below the chunk's
/// limit, so every chunk is exactly uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BitsPlan {
    draws: u32,
    short_draws: u32,
    short_bits: u32,
    short_limit: u128,
    long_limit: u128,
}

impl BitsPlan {
    fn for_span(span: u128) -> Self {
        assert!(span >= 2, "engine range must contain at least two values");

        // floor(log2(span)): bits every single draw can contribute
        let bits_per_draw = u128::BITS - 1 - span.leading_zeros();
        let draws = OUTPUT_BITS.div_ceil(bits_per_draw);

        let plan = Self::with_draws(span, draws);
        if span - plan.short_limit > plan.short_limit / u128::from(draws) {
            Self::with_draws(span, draws + 1)
        } else {
            plan
        }
    }

    fn with_draws(span: u128, draws: u32) -> Self {
        let short_bits = OUTPUT_BITS / draws;
        Self {
            draws,
            short_draws: draws - OUTPUT_BITS % draws,
            short_bits,
            short_limit: (span >> short_bits) << short_bits,
            long_limit: (span >> (short_bits + 1)) << (short_bits + 1),
        }
    }
}

/// Full-range 64-bit adapter over any generator
///
/// # Example
/// ```
/// use stable_random_core::{IndependentBits, RandomEngine};
///
/// struct Counter(u32);
///
/// impl RandomEngine for Counter {
///     type Output = u32;
///     const MIN: u32 = 0;
///     const MAX: u32 = u32::MAX;
///
///     fn next(&mut self) -> u32 {
///         self.0 += 1;
///         self.0
///     }
/// }
///
/// let mut wide = IndependentBits::new(Counter(0));
/// assert_eq!(wide.next(), 0x0000_0001_0000_0002);
/// ```
#[derive(Debug, Clone)]
pub struct IndependentBits<E> {
    engine: E,
    plan: BitsPlan,
}

impl<E: RandomEngine> IndependentBits<E> {
    /// Wrap `engine`
    ///
    /// # Panics
    /// Panics if the engine's range holds fewer than two values.
    pub fn new(engine: E) -> Self {
        let span = u128::from(Self::span_max()) + 1;
        Self {
            engine,
            plan: BitsPlan::for_span(span),
        }
    }

    /// Number of underlying draws composed into one output (before rejections)
    pub fn draws_per_output(&self) -> u32 {
        self.plan.draws
    }

    /// Borrow the wrapped engine
    pub fn get_ref(&self) -> &E {
        &self.engine
    }

    /// Unwrap, returning the engine in its current state
    pub fn into_inner(self) -> E {
        self.engine
    }

    fn span_max() -> u64 {
        let min: u64 = E::MIN.into();
        let max: u64 = E::MAX.into();
        max - min
    }

    fn chunk(&mut self, limit: u128, bits: u32) -> u128 {
        let min: u64 = E::MIN.into();
        loop {
            let draw: u64 = self.engine.next().into();
            let u = u128::from(draw - min);
            if u < limit {
                return u & ((1u128 << bits) - 1);
            }
        }
    }
}

impl<E: RandomEngine> RandomEngine for IndependentBits<E> {
    type Output = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    fn next(&mut self) -> u64 {
        let plan = self.plan;
        let mut result: u128 = 0;
        for k in 0..plan.draws {
            let (limit, bits) = if k < plan.short_draws {
                (plan.short_limit, plan.short_bits)
            } else {
                (plan.long_limit, plan.short_bits + 1)
            };
            result = (result << bits) | self.chunk(limit, bits);
        }
        result as u64
    }
}

/// Type-erased 64-bit generator
///
/// Owns any [`RandomEngine`] (or a `&mut` to one, for the lifetime `'a`)
/// and always reports the range `[0, u64::MAX]`. Narrow engines are widened
/// with [`IndependentBits`], so one call may consume several underlying
/// draws.
///
/// Prefer generic `E: RandomEngine` parameters; reach for `AnyRng` when a
/// single type must hold generators chosen at runtime.
///
/// # Example
/// ```
/// use stable_random_core::{AnyRng, RandomEngine, SplitMix64, Xoroshiro128};
///
/// let mut generators = vec![
///     AnyRng::new(SplitMix64::new(42)),
///     AnyRng::new(Xoroshiro128::new(42)),
/// ];
/// assert_eq!(generators[0].next(), 0xbdd7_3226_2feb_6e95);
/// assert_eq!(generators[1].next(), 0xe6c7_1559_e252_5f98);
/// ```
pub struct AnyRng<'a> {
    wrapped: Box<dyn FnMut() -> u64 + 'a>,
}

impl<'a> AnyRng<'a> {
    /// Wrap `engine`, widening its output to 64 bits when needed
    pub fn new<E: RandomEngine + 'a>(engine: E) -> Self {
        let mut bits = IndependentBits::new(engine);
        log::trace!(
            "AnyRng wrapping {}: {} draw(s) per output",
            std::any::type_name::<E>(),
            bits.draws_per_output()
        );
        Self {
            wrapped: Box::new(move || bits.next()),
        }
    }
}

impl RandomEngine for AnyRng<'_> {
    type Output = u64;
    const MIN: u64 = 0;
    const MAX: u64 = u64::MAX;

    #[inline]
    fn next(&mut self) -> u64 {
        (self.wrapped)()
    }
}

impl fmt::Debug for AnyRng<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyRng").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_full_64_bit_range_is_single_draw() {
        let plan = BitsPlan::for_span(1u128 << 64);
        assert_eq!(plan.draws, 1);
        assert_eq!(plan.short_draws, 1);
        assert_eq!(plan.short_bits, 64);
        assert_eq!(plan.short_limit, 1u128 << 64);
    }

    #[test]
    fn test_plan_full_32_bit_range_is_two_draws() {
        let plan = BitsPlan::for_span(1u128 << 32);
        assert_eq!(plan.draws, 2);
        assert_eq!(plan.short_draws, 2);
        assert_eq!(plan.short_bits, 32);
    }

    #[test]
    fn test_plan_non_power_of_two_range() {
        // Range of a die: 6 values, 2 bits per draw would waste too much
        // of the range, so one extra draw is added.
        let plan = BitsPlan::for_span(6);
        assert_eq!(
            plan,
            BitsPlan {
                draws: 33,
                short_draws: 2,
                short_bits: 1,
                short_limit: 6,
                long_limit: 4,
            }
        );
    }

    #[test]
    fn test_plan_bits_add_up_to_64() {
        for span in [2u128, 3, 6, 7, 255, 256, 1000, 1 << 16, (1 << 31) + 5, 1 << 40] {
            let plan = BitsPlan::for_span(span);
            let long_draws = plan.draws - plan.short_draws;
            let total = plan.short_draws * plan.short_bits + long_draws * (plan.short_bits + 1);
            assert_eq!(total, 64, "span {} packs {} bits", span, total);
        }
    }

    #[test]
    #[should_panic(expected = "at least two values")]
    fn test_plan_rejects_constant_engine() {
        BitsPlan::for_span(1);
    }

    #[test]
    fn test_debug_does_not_expose_closure() {
        let rng = AnyRng::new(crate::rng::SplitMix64::new(1));
        assert_eq!(format!("{:?}", rng), "AnyRng { .. }");
    }
}
