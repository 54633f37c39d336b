//! Procedural star field generation with density and opacity tapering.
//!
//! Stars fill the band from the top of the canvas down to the sky limit.
//! Near the bottom of the band both the acceptance probability and the
//! opacity of candidates fall off, so the field fades out instead of ending
//! at a hard line. Rejection sampling with a bounded attempt budget keeps
//! generation terminating even under aggressive taper exponents.

use rand::Rng;
use serde::{Deserialize, Serialize};

use memoria_math::uniform;

/// A single decorative star.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Star {
    pub id: u32,
    /// Horizontal position as a percentage of canvas width, `[0, 100)`.
    pub x_percent: f64,
    /// Absolute vertical position within the scrollable canvas (px).
    pub y: f64,
    /// Pixel size class, `1..=size_classes`.
    pub size: u32,
    /// Final opacity after tapering, `[min_opacity, 1.0]`.
    pub opacity: f64,
    /// Twinkle animation duration (s).
    pub twinkle_duration: f64,
    /// Twinkle animation start stagger (s).
    pub twinkle_delay: f64,
    /// Horizontal drift animation duration (s).
    pub drift_duration: f64,
    /// Drift animation start stagger (s).
    pub drift_delay: f64,
}

/// Star field generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldParams {
    /// Number of stars to aim for; the result may fall short if the
    /// attempt budget runs out under heavy tapering.
    pub star_count: u32,
    /// Lower edge of the star band (px); stars never appear below it.
    pub band_limit: f64,
    /// Total canvas height (px); caps the band if smaller.
    pub visual_height: f64,
    /// Height of the fade-out region above `band_limit` (px).
    pub taper_height: f64,
    /// Shaping exponent for the taper curve. Values below 1 are clamped to
    /// 1 (linear) with a warning.
    pub taper_exponent: f64,
    /// Opacity floor applied after tapering.
    pub min_opacity: f64,
    /// Range for the pre-taper base opacity.
    pub base_opacity_range: (f64, f64),
    /// Number of integer size classes (sizes are `1..=size_classes`).
    pub size_classes: u32,
    /// Twinkle duration range (s).
    pub twinkle_duration_range: (f64, f64),
    /// Twinkle delay range (s).
    pub twinkle_delay_range: (f64, f64),
    /// Drift duration range (s).
    pub drift_duration_range: (f64, f64),
    /// Drift delay range (s).
    pub drift_delay_range: (f64, f64),
}

impl Default for StarFieldParams {
    fn default() -> Self {
        Self {
            star_count: 550,
            band_limit: 6000.0,
            visual_height: 12000.0,
            taper_height: 4000.0,
            taper_exponent: 2.0,
            min_opacity: 0.01,
            base_opacity_range: (0.5, 1.0),
            size_classes: 3,
            twinkle_duration_range: (2.0, 5.0),
            twinkle_delay_range: (0.0, 5.0),
            drift_duration_range: (15.0, 35.0),
            drift_delay_range: (0.0, 10.0),
        }
    }
}

/// Result of one star field generation pass.
#[derive(Clone, Debug)]
pub struct StarFieldOutput {
    pub stars: Vec<Star>,
    /// Candidate positions sampled, including rejected ones.
    pub attempts: u32,
}

/// Generates a star field by rejection sampling over the sky band.
#[derive(Clone, Debug, Default)]
pub struct StarFieldGenerator {
    params: StarFieldParams,
}

impl StarFieldGenerator {
    /// Create a generator with the given parameters.
    pub fn new(params: StarFieldParams) -> Self {
        Self { params }
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &StarFieldParams {
        &self.params
    }

    /// Generate a fresh star field. Deterministic for a given RNG state.
    ///
    /// Falling short of `star_count` is a soft degradation, reported at
    /// warn level, never an error.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> StarFieldOutput {
        let p = &self.params;

        let exponent = if p.taper_exponent < 1.0 {
            log::warn!(
                "star taper exponent {} is below 1; using 1 (linear)",
                p.taper_exponent
            );
            1.0
        } else {
            p.taper_exponent
        };

        let band_limit = p.band_limit.min(p.visual_height);
        let taper_start = (band_limit - p.taper_height).max(0.0);
        let max_attempts = (p.star_count as f64 * (exponent * 3.0 + 2.0)) as u32;

        let mut stars = Vec::with_capacity(p.star_count as usize);
        let mut attempts = 0u32;

        while stars.len() < p.star_count as usize && attempts < max_attempts {
            attempts += 1;
            let y = rng.random::<f64>() * band_limit;
            let mut opacity = uniform(rng, p.base_opacity_range.0, p.base_opacity_range.1);

            if y > taper_start && p.taper_height > 0.0 {
                let linear = 1.0 - (y - taper_start) / p.taper_height;
                let aggressive = linear.powf(exponent);
                // Density taper: accept with probability equal to the factor.
                if rng.random::<f64>() > aggressive {
                    continue;
                }
                opacity *= aggressive;
            }

            stars.push(Star {
                id: stars.len() as u32,
                x_percent: rng.random::<f64>() * 100.0,
                y,
                size: rng.random_range(1..=p.size_classes.max(1)),
                opacity: opacity.max(p.min_opacity),
                twinkle_duration: uniform(
                    rng,
                    p.twinkle_duration_range.0,
                    p.twinkle_duration_range.1,
                ),
                twinkle_delay: uniform(rng, p.twinkle_delay_range.0, p.twinkle_delay_range.1),
                drift_duration: uniform(rng, p.drift_duration_range.0, p.drift_duration_range.1),
                drift_delay: uniform(rng, p.drift_delay_range.0, p.drift_delay_range.1),
            });
        }

        if stars.len() < p.star_count as usize {
            log::warn!(
                "star generation hit attempt cap ({max_attempts}) at {} of {} stars",
                stars.len(),
                p.star_count
            );
        }

        StarFieldOutput { stars, attempts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generate(params: StarFieldParams, seed: u64) -> StarFieldOutput {
        StarFieldGenerator::new(params).generate(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_stars_stay_within_band() {
        let out = generate(StarFieldParams::default(), 1);
        for star in &out.stars {
            assert!(star.y >= 0.0 && star.y <= 6000.0, "star outside band: {}", star.y);
            assert!((0.0..100.0).contains(&star.x_percent));
        }
    }

    #[test]
    fn test_opacity_bounds() {
        let params = StarFieldParams::default();
        let out = generate(params.clone(), 2);
        for star in &out.stars {
            assert!(
                star.opacity >= params.min_opacity && star.opacity <= 1.0,
                "opacity out of bounds: {}",
                star.opacity
            );
        }
    }

    #[test]
    fn test_count_never_exceeds_target() {
        let out = generate(StarFieldParams::default(), 3);
        assert!(out.stars.len() <= 550);
        assert!(out.attempts <= 550 * 8); // exponent 2 -> cap factor 8
    }

    #[test]
    fn test_exponent_below_one_behaves_linear() {
        let below = StarFieldParams {
            taper_exponent: 0.25,
            ..StarFieldParams::default()
        };
        let linear = StarFieldParams {
            taper_exponent: 1.0,
            ..StarFieldParams::default()
        };
        let a = generate(below, 9);
        let b = generate(linear, 9);
        assert_eq!(a.stars, b.stars);
    }

    #[test]
    fn test_no_taper_reaches_full_count() {
        let params = StarFieldParams {
            taper_height: 0.0,
            ..StarFieldParams::default()
        };
        let out = generate(params, 4);
        assert_eq!(out.stars.len(), 550);
        assert_eq!(out.attempts, 550);
    }

    #[test]
    fn test_no_taper_density_is_uniform() {
        // With tapering disabled every candidate is accepted, so positions
        // should spread evenly across the band. Bucket a large sample and
        // check no bucket strays far from the expected share.
        let params = StarFieldParams {
            star_count: 20_000,
            taper_height: 0.0,
            taper_exponent: 1.0,
            ..StarFieldParams::default()
        };
        let out = generate(params, 5);
        let mut buckets = [0u32; 10];
        for star in &out.stars {
            let idx = ((star.y / 6000.0) * 10.0).min(9.0) as usize;
            buckets[idx] += 1;
        }
        let expected = 20_000.0 / 10.0;
        for (i, &count) in buckets.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.1, "bucket {i} deviates {deviation:.3} from uniform");
        }
    }

    #[test]
    fn test_taper_thins_the_lower_band() {
        let params = StarFieldParams {
            star_count: 5_000,
            ..StarFieldParams::default()
        };
        let out = generate(params, 6);
        let upper = out.stars.iter().filter(|s| s.y < 2000.0).count();
        let lower = out.stars.iter().filter(|s| s.y >= 4000.0).count();
        assert!(
            lower < upper / 2,
            "taper did not thin the band: upper={upper} lower={lower}"
        );
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let a = generate(StarFieldParams::default(), 42);
        let b = generate(StarFieldParams::default(), 42);
        assert_eq!(a.stars, b.stars);
        assert_eq!(a.attempts, b.attempts);
    }

    #[test]
    fn test_band_capped_by_visual_height() {
        let params = StarFieldParams {
            band_limit: 6000.0,
            visual_height: 3000.0,
            taper_height: 0.0,
            ..StarFieldParams::default()
        };
        let out = generate(params, 7);
        for star in &out.stars {
            assert!(star.y <= 3000.0);
        }
    }
}
