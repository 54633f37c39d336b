//! Vertical zone partitioning of the tribute canvas.
//!
//! The canvas is a 1-D coordinate space of `visual_height` pixels split into
//! five half-open bands by four ascending thresholds. Classification drives
//! which default icon a tribute marker receives.

use serde::{Deserialize, Serialize};

/// One of the five vertical bands of the tribute canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Space,
    Sky,
    Surface,
    Roots,
    Deep,
}

impl Zone {
    /// Default marker icon for a tribute placed in this zone.
    ///
    /// The zone set is closed, so the mapping is exhaustive by construction;
    /// there is no fallback token to reach.
    pub const fn default_icon(self) -> &'static str {
        match self {
            Zone::Space => "rocket",
            Zone::Sky => "cloud",
            Zone::Surface => "tree",
            Zone::Roots => "root",
            Zone::Deep => "cave",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Space => "space",
            Zone::Sky => "sky",
            Zone::Surface => "surface",
            Zone::Roots => "roots",
            Zone::Deep => "deep",
        };
        f.write_str(name)
    }
}

/// Errors produced when validating zone thresholds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoneBoundsError {
    /// Thresholds must be strictly increasing and positive.
    #[error("zone limits must be strictly ascending, got {0} then {1}")]
    NonAscending(f64, f64),

    /// The deepest threshold must stay within the canvas.
    #[error("roots limit {roots_limit} exceeds visual height {visual_height}")]
    ExceedsHeight { roots_limit: f64, visual_height: f64 },
}

/// Ascending thresholds partitioning the canvas into zones.
///
/// Zones are half-open intervals `[prev, limit)`; everything at or below
/// `roots_limit` is the unbounded deep zone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneBounds {
    /// End of the space band (px).
    pub space_limit: f64,
    /// End of the sky band (px).
    pub sky_limit: f64,
    /// End of the surface band (px).
    pub surface_limit: f64,
    /// End of the roots band (px); the deep zone extends below it.
    pub roots_limit: f64,
    /// Total canvas height (px).
    pub visual_height: f64,
}

impl Default for ZoneBounds {
    fn default() -> Self {
        Self {
            space_limit: 4000.0,
            sky_limit: 6000.0,
            surface_limit: 8000.0,
            roots_limit: 10000.0,
            visual_height: 12000.0,
        }
    }
}

impl ZoneBounds {
    /// Check that the thresholds are strictly ascending and fit the canvas.
    pub fn validate(&self) -> Result<(), ZoneBoundsError> {
        let limits = [
            0.0,
            self.space_limit,
            self.sky_limit,
            self.surface_limit,
            self.roots_limit,
        ];
        for pair in limits.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ZoneBoundsError::NonAscending(pair[0], pair[1]));
            }
        }
        if self.roots_limit > self.visual_height {
            return Err(ZoneBoundsError::ExceedsHeight {
                roots_limit: self.roots_limit,
                visual_height: self.visual_height,
            });
        }
        Ok(())
    }

    /// Classify a vertical coordinate into its zone.
    pub fn classify(&self, y: f64) -> Zone {
        if y < self.space_limit {
            Zone::Space
        } else if y < self.sky_limit {
            Zone::Sky
        } else if y < self.surface_limit {
            Zone::Surface
        } else if y < self.roots_limit {
            Zone::Roots
        } else {
            Zone::Deep
        }
    }

    /// Lower boundary of the given zone's end as a fraction of the canvas.
    ///
    /// Used by the renderer to size the banded backdrop; the deep zone runs
    /// to the bottom of the canvas, so its fraction is 1.0.
    pub fn end_fraction(&self, zone: Zone) -> f64 {
        let limit = match zone {
            Zone::Space => self.space_limit,
            Zone::Sky => self.sky_limit,
            Zone::Surface => self.surface_limit,
            Zone::Roots => self.roots_limit,
            Zone::Deep => self.visual_height,
        };
        limit / self.visual_height
    }
}
