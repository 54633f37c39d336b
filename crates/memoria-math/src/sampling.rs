//! Uniform-sampling helpers over an injected RNG.
//!
//! Generators take `&mut impl Rng` rather than owning a random source, so a
//! seeded `ChaCha8Rng` makes every generation pass reproducible in tests.

use rand::Rng;

/// Sample uniformly from `[min, max)`.
///
/// A degenerate range (`max <= min`) returns `min` rather than panicking;
/// callers treat collapsed placement windows as a single valid position.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    rng.random_range(min..max)
}

/// Sample a symmetric offset in `[-magnitude, +magnitude]`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, magnitude: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * 2.0 * magnitude
}
