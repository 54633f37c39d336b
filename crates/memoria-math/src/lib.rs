//! Leaf math utilities for the memoria scene generators.
//!
//! Provides 8-bit RGB color parsing and linear interpolation, the easing
//! curve used by the smooth-scroll animation, and small uniform-sampling
//! helpers over an injected `rand::Rng` so generators stay deterministic
//! under a seeded RNG in tests.

mod color;
mod easing;
mod sampling;

pub use color::{ColorParseError, Rgb};
pub use easing::ease_in_out_quad;
pub use sampling::{jitter, uniform};
