//! # ipf-core
//!
//! Inverse pole figure (IPF) coloring of crystal directions.
//!
//! An IPF color encodes which crystal direction points along some sample
//! axis. Directions related by the crystal's point group symmetry must get
//! the same color, so every direction is first folded into a fundamental
//! sector and only then colored.
//!
//! # Pipeline
//!
//! ```text
//! direction --[symmetry]--> reduced direction + mirror flag
//!           --[triangle]--> fractional (azimuth, radius) in the sector
//!           --[SphereColorMap]--> RGB
//! ```
//!
//! - [`symmetry`] - Closed-form fold operators, one per crystal family
//! - [`SphericalTriangle`] - Filleted patch giving a continuous coordinate
//!   over a sector
//! - [`PatchRegistry`] - Shared, lazily built patches
//! - [`ipf`] - One entry point per Laue class plus cyclic / dihedral
//!   dispatch
//! - [`Colorizer`] - Bulk coloring with rayon
//!
//! # Quick Start
//!
//! ```rust
//! use ipf_color::{HslSphere, to_hex};
//! use ipf_core::LaueClass;
//! use ipf_math::Vec3;
//!
//! let class: LaueClass = "m-3m".parse().unwrap();
//! let rgb = class.color(Vec3::new(0.0, 0.0, 1.0), &HslSphere);
//! assert_eq!(to_hex(rgb), "#ff0000");
//! ```
//!
//! # Dependencies
//!
//! - [`ipf_math`] - Vectors, matrices, fillet polynomials
//! - [`ipf_color`] - The color map interface
//! - `rayon` - Parallel bulk coloring
//! - `tracing` - Patch construction diagnostics
//!
//! # Used By
//!
//! - `ipf` - Command line tool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod ipf;
mod laue;
mod registry;
pub mod symmetry;
mod triangle;

pub use error::{Error, Result};
pub use ipf::Colorizer;
pub use laue::{CyclicOrder, DihedralOrder, LaueClass, PatchKind, TrigonalMode};
pub use registry::PatchRegistry;
pub use symmetry::Reduced;
pub use triangle::{FILLET_FRACTION, FractionalCoord, SphericalTriangle};
