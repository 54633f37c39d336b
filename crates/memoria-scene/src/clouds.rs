//! Procedural cloud field generation for the sky band.
//!
//! Each cloud is a base ellipse with a handful of randomly offset puffs
//! composited on top for irregularity. Placement is constrained so the
//! whole cloud stays inside the sky band; clouds too tall for the band are
//! skipped rather than squeezed.

use rand::Rng;
use serde::{Deserialize, Serialize};

use memoria_math::uniform;

/// A sub-shape composited within a cloud, sized and offset relative to its
/// parent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Puff {
    /// Fraction of the parent cloud's base size.
    pub size_ratio: f64,
    /// Vertical offset as a percentage of the parent's height.
    pub top_percent: f64,
    /// Horizontal offset as a percentage of the parent's width.
    pub left_percent: f64,
}

/// A single cloud descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Cloud {
    pub id: u32,
    /// Vertical position of the cloud's top edge (px).
    pub top: f64,
    /// Base size driving width and puff sizing (px).
    pub base_size: f64,
    /// Derived height, `base_size * height_ratio` (px).
    pub height: f64,
    pub opacity: f64,
    /// Drift animation duration (s).
    pub duration: f64,
    /// Drift animation start stagger (s).
    pub delay: f64,
    /// Paint order. Fractional so layers interleave; ties only affect the
    /// paint order of near-identical decoration.
    pub z_index: f64,
    pub puffs: Vec<Puff>,
}

/// Cloud field generation parameters.
///
/// The puff offset ranges are tuning constants with no deeper rationale
/// than the resulting look, so they stay configurable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudFieldParams {
    /// Number of clouds to attempt; infeasible ones are skipped.
    pub cloud_count: u32,
    /// Base size range (px).
    pub base_size_range: (f64, f64),
    /// Height as a fraction of base size.
    pub height_ratio: f64,
    /// Inclusive puff count range per cloud.
    pub puff_count_range: (u32, u32),
    /// Puff size as a fraction of the parent's base size.
    pub puff_size_ratio_range: (f64, f64),
    /// Puff vertical offset range (percent of parent height).
    pub puff_top_range: (f64, f64),
    /// Puff horizontal offset range (percent of parent width).
    pub puff_left_range: (f64, f64),
    pub opacity_range: (f64, f64),
    /// Drift duration range (s).
    pub duration_range: (f64, f64),
    /// Base z-index; each cloud adds a uniform fraction for interleaving.
    pub base_z_index: f64,
}

impl Default for CloudFieldParams {
    fn default() -> Self {
        Self {
            cloud_count: 25,
            base_size_range: (80.0, 300.0),
            height_ratio: 0.6,
            puff_count_range: (2, 5),
            puff_size_ratio_range: (0.4, 0.9),
            puff_top_range: (-25.0, 50.0),
            puff_left_range: (-20.0, 60.0),
            opacity_range: (0.3, 0.9),
            duration_range: (20.0, 80.0),
            base_z_index: 1.0,
        }
    }
}

/// Generates the cloud field for a vertical band of the canvas.
#[derive(Clone, Debug, Default)]
pub struct CloudFieldGenerator {
    params: CloudFieldParams,
}

impl CloudFieldGenerator {
    /// Create a generator with the given parameters.
    pub fn new(params: CloudFieldParams) -> Self {
        Self { params }
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &CloudFieldParams {
        &self.params
    }

    /// Generate clouds constrained to `[band_start, band_end]`.
    ///
    /// An inverted band is a configuration violation: it is logged and
    /// yields an empty field, since decorative generation must never block
    /// the scene. Individual clouds too tall for the band are skipped, so
    /// the result may hold fewer clouds than requested.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        band_start: f64,
        band_end: f64,
        rng: &mut R,
    ) -> Vec<Cloud> {
        let p = &self.params;

        if band_start >= band_end {
            log::error!("cloud band is inverted: start {band_start} >= end {band_end}");
            return Vec::new();
        }

        let mut clouds = Vec::with_capacity(p.cloud_count as usize);

        for id in 0..p.cloud_count {
            let base_size = uniform(rng, p.base_size_range.0, p.base_size_range.1);
            let height = base_size * p.height_ratio;
            let duration = uniform(rng, p.duration_range.0, p.duration_range.1);

            let max_top = band_end - height;
            if band_start >= max_top {
                log::warn!(
                    "cloud {id} skipped: height {height:.0}px exceeds band of {:.0}px",
                    band_end - band_start
                );
                continue;
            }
            let top = uniform(rng, band_start, max_top);

            let puff_count =
                rng.random_range(p.puff_count_range.0..=p.puff_count_range.1.max(p.puff_count_range.0));
            let puffs = (0..puff_count)
                .map(|_| Puff {
                    size_ratio: uniform(rng, p.puff_size_ratio_range.0, p.puff_size_ratio_range.1),
                    top_percent: uniform(rng, p.puff_top_range.0, p.puff_top_range.1),
                    left_percent: uniform(rng, p.puff_left_range.0, p.puff_left_range.1),
                })
                .collect();

            clouds.push(Cloud {
                id,
                top,
                base_size,
                height,
                opacity: uniform(rng, p.opacity_range.0, p.opacity_range.1),
                duration,
                delay: uniform(rng, 0.0, (p.duration_range.0 + p.duration_range.1) / 2.0),
                z_index: p.base_z_index + rng.random::<f64>(),
                puffs,
            });
        }

        if clouds.len() < p.cloud_count as usize {
            log::warn!(
                "generated {} of {} requested clouds",
                clouds.len(),
                p.cloud_count
            );
        }

        clouds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generate(params: CloudFieldParams, start: f64, end: f64, seed: u64) -> Vec<Cloud> {
        CloudFieldGenerator::new(params).generate(start, end, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_clouds_fit_inside_band() {
        let clouds = generate(CloudFieldParams::default(), 4000.0, 6000.0, 1);
        for cloud in &clouds {
            assert!(cloud.top >= 4000.0, "cloud above band: {}", cloud.top);
            assert!(
                cloud.top + cloud.height <= 6000.0,
                "cloud extends past band: top={} height={}",
                cloud.top,
                cloud.height
            );
        }
    }

    #[test]
    fn test_count_never_exceeds_request() {
        let clouds = generate(CloudFieldParams::default(), 4000.0, 6000.0, 2);
        assert!(clouds.len() <= 25);
    }

    #[test]
    fn test_inverted_band_yields_empty_field() {
        let clouds = generate(CloudFieldParams::default(), 6000.0, 4000.0, 3);
        assert!(clouds.is_empty());
    }

    #[test]
    fn test_too_tall_clouds_are_skipped_not_fatal() {
        // A 40px band cannot hold any default-sized cloud: the minimum
        // height is 80 * 0.6 = 48px.
        let clouds = generate(CloudFieldParams::default(), 4000.0, 4040.0, 4);
        assert!(clouds.is_empty());
    }

    #[test]
    fn test_narrow_band_keeps_only_short_clouds() {
        let clouds = generate(CloudFieldParams::default(), 4000.0, 4100.0, 5);
        assert!(clouds.len() < 25, "some clouds should be skipped");
        for cloud in &clouds {
            assert!(cloud.height < 100.0);
        }
    }

    #[test]
    fn test_puff_counts_and_offsets_within_ranges() {
        let params = CloudFieldParams::default();
        let clouds = generate(params.clone(), 4000.0, 6000.0, 6);
        for cloud in &clouds {
            let n = cloud.puffs.len() as u32;
            assert!((2..=5).contains(&n), "puff count out of range: {n}");
            for puff in &cloud.puffs {
                assert!((0.4..0.9).contains(&puff.size_ratio));
                assert!((-25.0..50.0).contains(&puff.top_percent));
                assert!((-20.0..60.0).contains(&puff.left_percent));
            }
        }
    }

    #[test]
    fn test_z_index_interleaves_above_base() {
        let clouds = generate(CloudFieldParams::default(), 4000.0, 6000.0, 7);
        for cloud in &clouds {
            assert!(cloud.z_index >= 1.0 && cloud.z_index < 2.0);
        }
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let a = generate(CloudFieldParams::default(), 4000.0, 6000.0, 42);
        let b = generate(CloudFieldParams::default(), 4000.0, 6000.0, 42);
        assert_eq!(a, b);
    }
}
