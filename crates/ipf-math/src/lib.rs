//! # ipf-math
//!
//! Math primitives for inverse pole figure (IPF) coloring.
//!
//! This crate provides the small amount of linear algebra the coloring
//! pipeline needs:
//!
//! - [`Vec3`] - Double precision 3D vectors for crystal directions
//! - [`Mat3`] - 3x3 matrices for point group symmetry operations
//! - [`Cubic`] - Cubic polynomials used to fillet patch corners
//!
//! # Design
//!
//! Directions are `f64` throughout. The fundamental sector boundaries of the
//! hexagonal and trigonal classes sit on irrational slopes, and the fillet
//! fit uses a numerical derivative, both of which need the extra precision.
//!
//! Conversions to and from [`glam::DVec3`] / [`glam::DMat3`] are provided
//! for callers that already hold glam types. Matrices are stored
//! **row-major** and act on **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ipf_math::{Mat3, Vec3};
//!
//! // 4-fold rotation about z
//! let r = Mat3::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
//! assert_eq!(r * Vec3::X, Vec3::Y);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Interop with SIMD math types
//!
//! # Used By
//!
//! - `ipf-core` - Symmetry reduction and spherical triangle patches
//! - `ipf-color` - Color triplets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cubic;
mod mat3;
mod vec3;

pub use cubic::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3 as GlamDMat3, DVec3 as GlamDVec3};
}
