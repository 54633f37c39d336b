//! Viewport-aware UI geometry for the tribute wall.
//!
//! Two concerns live here: resolving collision-aware popup-panel positions
//! anchored to a pointer location, and the cancellable smooth-scroll
//! animation that carries the view to the surface line. Both are plain
//! computations; the host runtime owns the event loop and frame callbacks.

mod placement;
mod scroll;

pub use placement::{PanelSize, Placement, PlacementSolver, Viewport};
pub use scroll::{ScrollFrame, SmoothScroller, surface_scroll_target};
