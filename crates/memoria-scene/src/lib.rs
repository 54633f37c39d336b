//! Procedural scene generation for the memorial tribute wall.
//!
//! The wall is one tall scrollable canvas partitioned into five vertical
//! zones (space, sky, surface, roots, deep). This crate synthesizes the
//! decorative layers that fill it: a density-tapered star field at the top,
//! a band of multi-puff clouds below, and a stack of overlapping smooth
//! hill silhouettes covering the underground depth. Generators are pure
//! functions of their parameters and an injected RNG; they emit immutable
//! descriptor lists for a rendering layer to consume and never perform I/O.

mod clouds;
mod hills;
mod path;
mod starfield;
mod zone;

pub use clouds::{Cloud, CloudFieldGenerator, CloudFieldParams, Puff};
pub use hills::{HillLayer, HillStackGenerator, HillStackParams};
pub use path::{HillPath, PathPoint, PathSegment};
pub use starfield::{Star, StarFieldGenerator, StarFieldOutput, StarFieldParams};
pub use zone::{Zone, ZoneBounds, ZoneBoundsError};
