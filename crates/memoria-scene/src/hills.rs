//! Stacked hill silhouette generation for the underground depth range.
//!
//! Layers are spaced so that consecutive silhouettes overlap by a
//! configured fraction, leaving no gaps when composited back-to-front.
//! Amplitude and color both progress with depth: outlines get rougher and
//! the fill fades from surface green through earth brown to near black.

use rand::Rng;
use serde::{Deserialize, Serialize};

use memoria_math::Rgb;

use crate::path::HillPath;

/// One horizon-line layer of the hill stack.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HillLayer {
    pub id: u32,
    /// Vertical offset of the layer's bounding box within the canvas (px).
    pub offset_top: f64,
    /// Paint order; deeper layers stack on top for correct occlusion.
    pub z_index: u32,
    /// Serialized silhouette outline for the rendering surface.
    pub path_data: String,
    pub color: Rgb,
    /// Bounding-box height of the layer (px).
    pub height: f64,
}

/// Hill stack generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillStackParams {
    /// Height of each layer's bounding box (px).
    pub layer_height: f64,
    /// Fraction of `layer_height` by which consecutive layers overlap,
    /// in `[0, 1)`.
    pub overlap_fraction: f64,
    /// Fill color of the shallowest layer.
    pub start_color: Rgb,
    /// Fill color at the halfway point of the stack.
    pub mid_color: Rgb,
    /// Fill color of the deepest layer.
    pub end_color: Rgb,
    /// Baseline y for the silhouette curve within a layer's box (px).
    pub path_base_y: f64,
    /// Curve amplitude of the shallowest layer (px).
    pub min_randomness: f64,
    /// Curve amplitude of the deepest layer (px).
    pub max_randomness: f64,
    /// Downward shift of the curve baseline at full depth (px).
    pub depth_bias: f64,
    /// Fraction of `layer_height` by which the first layer rises above the
    /// band start, so the first wave sits on the surface line.
    pub base_offset_fraction: f64,
}

impl Default for HillStackParams {
    fn default() -> Self {
        Self {
            layer_height: 500.0,
            overlap_fraction: 0.75,
            start_color: Rgb::new(0x90, 0xee, 0x90), // light green
            mid_color: Rgb::new(0xa0, 0x52, 0x2d),   // saddle brown
            end_color: Rgb::new(0x15, 0x10, 0x10),   // near black
            path_base_y: 80.0,
            min_randomness: 20.0,
            max_randomness: 120.0,
            depth_bias: 30.0,
            base_offset_fraction: 0.2,
        }
    }
}

/// Generates the overlapping stack of hill silhouette layers.
#[derive(Clone, Debug, Default)]
pub struct HillStackGenerator {
    params: HillStackParams,
}

impl HillStackGenerator {
    /// Create a generator with the given parameters.
    pub fn new(params: HillStackParams) -> Self {
        Self { params }
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &HillStackParams {
        &self.params
    }

    /// Vertical spacing between consecutive layer offsets (px).
    pub fn layer_spacing(&self) -> f64 {
        self.params.layer_height * (1.0 - self.params.overlap_fraction)
    }

    /// Number of layers needed to cover `total_depth`, with two extra for
    /// edge slack.
    pub fn layer_count(&self, total_depth: f64) -> u32 {
        (total_depth / self.layer_spacing()).ceil() as u32 + 2
    }

    /// Generate the layer stack covering `total_depth` below `band_start`.
    ///
    /// A non-positive spacing (overlap fraction >= 1) is a configuration
    /// violation: it is logged and yields an empty stack.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        band_start: f64,
        total_depth: f64,
        rng: &mut R,
    ) -> Vec<HillLayer> {
        let p = &self.params;
        let spacing = self.layer_spacing();

        if spacing <= 0.0 {
            log::error!(
                "hill overlap fraction {} leaves non-positive layer spacing",
                p.overlap_fraction
            );
            return Vec::new();
        }

        let count = self.layer_count(total_depth);
        let base_offset = p.layer_height * p.base_offset_fraction;

        let mut layers = Vec::with_capacity(count as usize);
        for i in 0..count {
            let progression = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.0
            };

            let randomness =
                p.min_randomness + (p.max_randomness - p.min_randomness) * progression;
            let base_y = p.path_base_y + p.depth_bias * progression;
            let path = HillPath::generate(base_y, randomness, p.layer_height, rng);

            // Two-stage blend: start -> mid over the shallow half of the
            // stack, mid -> end over the deep half.
            let color = if progression < 0.5 {
                Rgb::lerp(p.start_color, p.mid_color, progression / 0.5)
            } else {
                Rgb::lerp(p.mid_color, p.end_color, (progression - 0.5) / 0.5)
            };

            layers.push(HillLayer {
                id: i,
                offset_top: band_start - base_offset + i as f64 * spacing,
                z_index: i + 1,
                path_data: path.to_svg_path(),
                color,
                height: p.layer_height,
            });
        }

        layers
    }
}
