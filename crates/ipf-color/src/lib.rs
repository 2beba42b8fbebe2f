//! # ipf-color
//!
//! Sphere color maps for inverse pole figure (IPF) coloring.
//!
//! The IPF pipeline reduces a crystal direction to a fractional position on
//! a colored sphere: an azimuth in [0, 1) and a polar value in [0, 1]. This
//! crate defines the interface between that geometry and whatever color
//! space turns the position into RGB:
//!
//! - [`SphereColorMap`] - The color lookup capability consumed by `ipf-core`
//! - [`HslSphere`] - A reference map built on HSL
//! - [`to_u8`], [`to_hex`] - Quantization helpers for output
//!
//! # Sphere Convention
//!
//! ```text
//!   polar = 1.0   white pole
//!   polar = 0.5   fully saturated equator, hue = azimuth
//!   polar = 0.0   black pole
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ipf_color::{HslSphere, SphereColorMap};
//!
//! let map = HslSphere;
//! assert_eq!(map.color(0.0, 0.5, true), [1.0, 0.0, 0.0]);
//! assert_eq!(map.color(0.0, 1.0, true), [1.0, 1.0, 1.0]);
//! ```
//!
//! # Used By
//!
//! - `ipf-core` - Per-class IPF entry points
//! - `ipf` - CLI output formatting

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod map;
mod quantize;

pub use map::{HslSphere, SphereColorMap, hsl_to_rgb};
pub use quantize::{to_hex, to_u8};

/// An RGB triplet with components in [0, 1].
pub type Rgb = [f64; 3];
