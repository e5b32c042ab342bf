//! The generator contract shared by every engine in this crate
//!
//! A generator is anything that produces unsigned words inside a fixed
//! inclusive range `[MIN, MAX]`. Sampling and shuffling are written against
//! this trait only, so user-supplied generators plug in unchanged.

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned output word of a generator.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`; every word widens
/// losslessly into `u64`.
pub trait Word: private::Sealed + Copy + Into<u64> {}

impl Word for u8 {}
impl Word for u16 {}
impl Word for u32 {}
impl Word for u64 {}

/// A seeded source of uniformly distributed unsigned words
///
/// # Contract
///
/// - `MIN < MAX`, both inclusive and fixed per type
/// - every value returned by `next` lies in `[MIN, MAX]`
/// - `next` is the only way state advances
///
/// # Example
/// ```
/// use stable_random_core::{RandomEngine, SplitMix64};
///
/// fn draw<E: RandomEngine>(rng: &mut E) -> u64 {
///     rng.next().into()
/// }
///
/// let mut rng = SplitMix64::new(42);
/// assert_eq!(draw(&mut rng), 0xbdd7_3226_2feb_6e95);
/// ```
pub trait RandomEngine {
    /// Native output word
    type Output: Word;

    /// Smallest value `next` can return
    const MIN: Self::Output;

    /// Largest value `next` can return
    const MAX: Self::Output;

    /// Draw one value, advancing the generator state
    fn next(&mut self) -> Self::Output;
}

impl<E: RandomEngine> RandomEngine for &mut E {
    type Output = E::Output;
    const MIN: Self::Output = E::MIN;
    const MAX: Self::Output = E::MAX;

    #[inline]
    fn next(&mut self) -> Self::Output {
        (**self).next()
    }
}
