//! Smooth multi-segment silhouette paths.
//!
//! A hill outline is a chain of cubic Bezier segments over fixed horizontal
//! anchors: the first segment carries two explicit control points, each
//! following segment carries one and reflects the previous tangent. The
//! structured form keeps jitter and clamping independent of whatever path
//! description the rendering surface wants; serialization happens last.

use rand::Rng;
use serde::Serialize;

use memoria_math::jitter;

/// Horizontal anchor positions for the curve segments, in path units.
/// Denser anchors toward the right keep long flat stretches from forming.
const ANCHOR_XS: [f64; 8] = [0.0, 150.0, 300.0, 450.0, 600.0, 750.0, 850.0, 1000.0];

/// Vertical clamp inset: jittered points keep this distance from the top
/// and bottom of the path's bounding box.
const EDGE_INSET: f64 = 5.0;

/// A point in path space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// One segment of a smooth path.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PathSegment {
    /// Full cubic Bezier with both control points explicit (first segment).
    Cubic {
        control1: PathPoint,
        control2: PathPoint,
        end: PathPoint,
    },
    /// Cubic whose first control point is the reflection of the previous
    /// segment's last control point (SVG `S` semantics).
    Smooth { control: PathPoint, end: PathPoint },
}

impl PathSegment {
    /// The segment's endpoint.
    pub fn end(&self) -> PathPoint {
        match self {
            PathSegment::Cubic { end, .. } | PathSegment::Smooth { end, .. } => *end,
        }
    }
}

/// A fillable hill silhouette: an open smooth curve across the full width,
/// closed along the bottom of its bounding box.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HillPath {
    pub start: PathPoint,
    pub segments: Vec<PathSegment>,
    /// Bounding-box width in path units.
    pub width: f64,
    /// Bounding-box height in path units; the closing edge runs along it.
    pub height: f64,
}

impl HillPath {
    /// Synthesize a jittered silhouette curve.
    ///
    /// Endpoint heights vary by `0.8 * randomness` around `base_y`, control
    /// heights by the full `randomness`; everything is clamped to
    /// `[EDGE_INSET, height - EDGE_INSET]` so the curve stays inside its
    /// box. The first segment places its controls at 1/3 and 2/3 of the
    /// span, each smooth segment places its explicit control at 2/3.
    pub fn generate<R: Rng + ?Sized>(base_y: f64, randomness: f64, height: f64, rng: &mut R) -> Self {
        let clamp_y = |y: f64| y.clamp(EDGE_INSET, height - EDGE_INSET);

        let anchor_ys: Vec<f64> = ANCHOR_XS
            .iter()
            .map(|_| clamp_y(base_y + jitter(rng, randomness * 0.8)))
            .collect();

        let start = PathPoint {
            x: ANCHOR_XS[0],
            y: anchor_ys[0],
        };

        let mut segments = Vec::with_capacity(ANCHOR_XS.len() - 1);

        let span = ANCHOR_XS[1] - ANCHOR_XS[0];
        segments.push(PathSegment::Cubic {
            control1: PathPoint {
                x: ANCHOR_XS[0] + span * 0.33,
                y: clamp_y(base_y + jitter(rng, randomness)),
            },
            control2: PathPoint {
                x: ANCHOR_XS[0] + span * 0.66,
                y: clamp_y(base_y + jitter(rng, randomness)),
            },
            end: PathPoint {
                x: ANCHOR_XS[1],
                y: anchor_ys[1],
            },
        });

        for i in 1..ANCHOR_XS.len() - 1 {
            let span = ANCHOR_XS[i + 1] - ANCHOR_XS[i];
            segments.push(PathSegment::Smooth {
                control: PathPoint {
                    x: ANCHOR_XS[i] + span * 0.66,
                    y: clamp_y(base_y + jitter(rng, randomness)),
                },
                end: PathPoint {
                    x: ANCHOR_XS[i + 1],
                    y: anchor_ys[i + 1],
                },
            });
        }

        Self {
            start,
            segments,
            width: ANCHOR_XS[ANCHOR_XS.len() - 1],
            height,
        }
    }

    /// Every y-coordinate in the curve: start, endpoints, and controls.
    pub fn y_values(&self) -> Vec<f64> {
        let mut ys = vec![self.start.y];
        for segment in &self.segments {
            match segment {
                PathSegment::Cubic {
                    control1,
                    control2,
                    end,
                } => ys.extend([control1.y, control2.y, end.y]),
                PathSegment::Smooth { control, end } => ys.extend([control.y, end.y]),
            }
        }
        ys
    }

    /// Serialize to an SVG path description, closed along the bottom edge.
    pub fn to_svg_path(&self) -> String {
        let mut d = format!("M {:.1} {:.1}", self.start.x, self.start.y);
        for segment in &self.segments {
            match segment {
                PathSegment::Cubic {
                    control1,
                    control2,
                    end,
                } => {
                    d.push_str(&format!(
                        " C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
                        control1.x, control1.y, control2.x, control2.y, end.x, end.y
                    ));
                }
                PathSegment::Smooth { control, end } => {
                    d.push_str(&format!(
                        " S {:.1} {:.1}, {:.1} {:.1}",
                        control.x, control.y, end.x, end.y
                    ));
                }
            }
        }
        d.push_str(&format!(
            " L {:.1} {:.1} L 0.0 {:.1} Z",
            self.width, self.height, self.height
        ));
        d
    }
}
