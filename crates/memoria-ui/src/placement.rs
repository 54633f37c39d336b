//! Edge-aware popup panel placement.
//!
//! Panels open below-and-right of the pointer anchor by default. If that
//! would push the panel past a viewport edge (minus margin), the panel
//! flips to the opposite side of the anchor; if even the flipped position
//! violates the near margin, it clamps there. Each axis resolves
//! independently, so a panel larger than the viewport degrades to a
//! margin-clamped position instead of erroring.

use serde::Serialize;

/// Host viewport dimensions (px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Size of the panel being placed (px).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

/// Resolved top-left screen coordinates for a panel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

/// Stateless solver for popup panel positions.
///
/// Pure function of its inputs; safe to call concurrently for independent
/// anchors. It does not avoid overlap with a second open panel -- the UI
/// layer keeps at most one placement active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlacementSolver {
    /// Minimum distance from every viewport edge (px).
    pub edge_margin: f64,
    /// Offset away from the anchor point (px).
    pub cursor_offset: f64,
}

impl PlacementSolver {
    /// Create a solver with the given margins.
    pub fn new(edge_margin: f64, cursor_offset: f64) -> Self {
        Self {
            edge_margin,
            cursor_offset,
        }
    }

    /// Resolve a panel position for a pointer anchor.
    pub fn place(
        &self,
        anchor_x: f64,
        anchor_y: f64,
        panel: PanelSize,
        viewport: Viewport,
    ) -> Placement {
        Placement {
            x: self.resolve_axis(anchor_x, panel.width, viewport.width),
            y: self.resolve_axis(anchor_y, panel.height, viewport.height),
        }
    }

    /// One-dimensional placement rule shared by both axes.
    fn resolve_axis(&self, anchor: f64, panel_extent: f64, viewport_extent: f64) -> f64 {
        let overflows_far =
            anchor + self.cursor_offset + panel_extent > viewport_extent - self.edge_margin;
        let position = if overflows_far {
            // Flip to the near side of the anchor.
            anchor - panel_extent - self.cursor_offset
        } else {
            anchor + self.cursor_offset
        };
        // Clamp to the near margin as a last resort, even if the panel then
        // hangs past the far edge.
        position.max(self.edge_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
    };

    #[test]
    fn test_default_placement_below_right() {
        let solver = PlacementSolver::new(0.0, 10.0);
        let panel = PanelSize {
            width: 300.0,
            height: 455.0,
        };
        let placement = solver.place(100.0, 200.0, panel, VIEWPORT);
        assert_eq!(placement, Placement { x: 110.0, y: 210.0 });
    }

    #[test]
    fn test_right_overflow_flips_left() {
        let solver = PlacementSolver::new(0.0, 0.0);
        let panel = PanelSize {
            width: 300.0,
            height: 455.0,
        };
        let placement = solver.place(1900.0, 100.0, panel, VIEWPORT);
        assert_eq!(placement, Placement { x: 1600.0, y: 100.0 });
    }

    #[test]
    fn test_bottom_overflow_flips_above() {
        let solver = PlacementSolver::new(0.0, 0.0);
        let panel = PanelSize {
            width: 300.0,
            height: 455.0,
        };
        let placement = solver.place(100.0, 1000.0, panel, VIEWPORT);
        assert_eq!(placement, Placement { x: 100.0, y: 545.0 });
    }

    #[test]
    fn test_flip_still_overflowing_clamps_to_margin() {
        let solver = PlacementSolver::new(8.0, 0.0);
        let panel = PanelSize {
            width: 300.0,
            height: 455.0,
        };
        // Anchor near the right edge but panel wider than the space on
        // either side once flipped.
        let placement = solver.place(200.0, 1075.0, panel, VIEWPORT);
        // Vertical: 1075 + 455 > 1072, flipped to 620; horizontal fits.
        assert_eq!(placement, Placement { x: 200.0, y: 620.0 });

        let cramped = solver.place(100.0, 540.0, PanelSize { width: 1900.0, height: 455.0 }, VIEWPORT);
        assert_eq!(cramped.x, 8.0, "flip past the left edge clamps to margin");
    }

    #[test]
    fn test_panel_larger_than_viewport_degrades_to_margin() {
        let solver = PlacementSolver::new(16.0, 4.0);
        let panel = PanelSize {
            width: 2500.0,
            height: 1500.0,
        };
        let placement = solver.place(960.0, 540.0, panel, VIEWPORT);
        assert_eq!(placement, Placement { x: 16.0, y: 16.0 });
    }

    #[test]
    fn test_fit_invariant_when_panel_fits() {
        let solver = PlacementSolver::new(12.0, 6.0);
        let panel = PanelSize {
            width: 300.0,
            height: 455.0,
        };
        // Anchors at or inside the margin-inset viewport; an anchor within
        // the margin band itself can pin the flipped panel into the margin.
        for anchor_x in [0.0, 12.0, 500.0, 1600.0, 1908.0] {
            for anchor_y in [0.0, 300.0, 624.0, 1000.0, 1068.0] {
                let p = solver.place(anchor_x, anchor_y, panel, VIEWPORT);
                assert!(p.x >= 12.0 && p.x + 300.0 <= 1920.0 - 12.0, "x escaped: {p:?}");
                assert!(p.y >= 12.0 && p.y + 455.0 <= 1080.0 - 12.0, "y escaped: {p:?}");
            }
        }
    }
}
