//! Jitter Sampling
//!
//! Uniform delay sampling for throttle middleware.

use rand::Rng;

/// Sample a delay in milliseconds from the inclusive range `[min_ms, max_ms]`.
///
/// A single-point range returns `min_ms` without touching the RNG, so a
/// fixed configuration stays deterministic.
pub fn uniform_ms<R: Rng + ?Sized>(rng: &mut R, min_ms: u64, max_ms: u64) -> u64 {
    if min_ms >= max_ms {
        return min_ms;
    }
    rng.random_range(min_ms..=max_ms)
}
