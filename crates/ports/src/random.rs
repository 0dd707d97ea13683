// crates/ports/src/random.rs

/// Port for the host-provided uniform pseudo-random integer generator.
///
/// Bounds are `i64` so that callers sampling an inclusive `i32` interval can
/// pass `max + 1` without overflowing at `i32::MAX`.
pub trait UniformIntSource {
    /// Returns a value uniformly distributed in `[low, high_exclusive)`.
    ///
    /// Must return `low` when `high_exclusive <= low`.
    fn next_in(&mut self, low: i64, high_exclusive: i64) -> i64;
}

impl<S: UniformIntSource + ?Sized> UniformIntSource for &mut S {
    #[inline]
    fn next_in(&mut self, low: i64, high_exclusive: i64) -> i64 {
        (**self).next_in(low, high_exclusive)
    }
}
