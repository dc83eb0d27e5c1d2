//! The Random Source capability consumed by the table builders.

/// A stateful source of uniformly distributed integers.
///
/// Implementations must return a value `v` with `low <= v <= high`,
/// uniformly distributed over that inclusive range, and must advance their
/// internal state by exactly one step per call. Given a fixed seed and a
/// fixed sequence of calls, the returned values must be deterministic.
///
/// Callers always pass `low <= high`.
///
/// # Examples
///
/// ```rust
/// use anstable_core::rng::RandomSource;
///
/// /// Always returns the lower bound.
/// struct Floor;
///
/// impl RandomSource for Floor {
///     fn draw(&mut self, low: u64, _high: u64) -> u64 {
///         low
///     }
/// }
///
/// let mut rng = Floor;
/// assert_eq!(rng.draw(3, 10), 3);
/// ```
pub trait RandomSource {
    /// Draws an integer uniformly from the inclusive range `[low, high]`.
    fn draw(&mut self, low: u64, high: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        (**self).draw(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        (**self).draw(low, high)
    }
}
