//! Error types for ipf-core operations.
//!
//! Per-direction coloring never fails: passing a non-unit direction is a
//! precondition violation, not a runtime error. The errors here cover
//! configuration (building a patch from bad vertices or a bad fillet width)
//! and parsing of user-facing names and orders.
//!
//! # Usage
//!
//! ```rust
//! use ipf_core::{Error, SphericalTriangle};
//! use ipf_math::Vec3;
//!
//! // clockwise vertices do not span a hemisphere in CCW order
//! let err = SphericalTriangle::new(Vec3::Z, Vec3::Y, Vec3::X).unwrap_err();
//! assert!(matches!(err, Error::NotInHemisphere { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by patch construction and name/order parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Triangle vertices do not lie within a single hemisphere in
    /// counter-clockwise order.
    ///
    /// `det` is the determinant of the vertex matrix (red, green, blue rows),
    /// which must be positive.
    #[error("spherical triangle must be within a single hemisphere (det = {det})")]
    NotInHemisphere {
        /// Determinant of the vertex matrix
        det: f64,
    },

    /// Fillet width is outside (0, 0.5] of the edge span.
    #[error("fillet fraction {0} must be in (0, 0.5]")]
    InvalidFillet(f64),

    /// Rotational order is not one of the crystallographic 2, 3, 4, 6.
    #[error("unsupported symmetry order {0}, expected 2, 3, 4 or 6")]
    UnsupportedOrder(u32),

    /// Name does not match any Laue class.
    #[error("unknown Laue class '{0}'")]
    UnknownLaueClass(String),

    /// Name does not match a trigonal coloring mode.
    #[error("unknown trigonal mode '{0}', expected 'jump-free' or 'unambiguous'")]
    UnknownTrigonalMode(String),

    /// Interleaved direction buffer length is not a multiple of 3.
    #[error("interleaved direction buffer has length {0}, expected a multiple of 3")]
    InvalidLength(usize),
}

impl Error {
    /// Returns `true` if this error comes from patch configuration.
    #[inline]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::NotInHemisphere { .. } | Self::InvalidFillet(_))
    }
}
