//! Filleted spherical triangle patches.
//!
//! A [`SphericalTriangle`] is one fundamental sector drawn as a triangle on
//! the unit hemisphere, with a red, a green and a blue corner. Any direction
//! inside it gets a fractional polar coordinate about the triangle centroid:
//!
//! ```text
//!            red (azimuth 0)
//!             /\
//!            /  \        radius 0 at the centroid,
//!           / c  \       radius 1 on the boundary
//!          /______\
//!      blue        green
//! ```
//!
//! The raw boundary distance `r(theta)` has a kink at each corner, which
//! would show up as a visible crease in the colored legend. A short cubic
//! fillet (see [`Cubic::hermite`]) replaces `r(theta)` on both sides of
//! every corner. Each corner uses one half-width for both sides, a fraction
//! of the shorter adjacent edge span, so the boundary radius and its slope
//! are continuous around the whole patch. Points outside the fillet curve
//! clip to radius 1.
//!
//! # Usage
//!
//! ```rust
//! use ipf_core::SphericalTriangle;
//! use ipf_math::Vec3;
//!
//! let tri = SphericalTriangle::cyclic(4).unwrap();
//! let c = tri.to_fractional(tri.center());
//! assert_eq!(c.radius, 0.0);
//! ```

use std::f64::consts::{PI, TAU};

use ipf_color::{Rgb, SphereColorMap};
use ipf_math::{Cubic, Vec3};
use tracing::debug;

use crate::error::{Error, Result};

/// Default fillet half-width, as a fraction of the shorter edge span at a
/// corner.
pub const FILLET_FRACTION: f64 = 0.05;

/// Step for the central difference of `r(theta)`, in radians.
const DERIVATIVE_STEP: f64 = 0.001;

/// Fractional polar position inside a patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalCoord {
    /// Angle about the centroid measured from the red corner, in [0, 1).
    pub azimuth: f64,
    /// Distance from the centroid: 0 at the centroid, 1 on the boundary.
    pub radius: f64,
}

impl FractionalCoord {
    /// Polar value for a [`SphereColorMap`].
    ///
    /// A white center maps the centroid to the white pole (polar 1) and the
    /// boundary to the equator; a black center maps it to the black pole.
    #[inline]
    pub fn polar(&self, white_center: bool) -> f64 {
        let half = self.radius * 0.5;
        if white_center { 1.0 - half } else { half }
    }
}

/// A triangular patch of the unit sphere with a continuous polar coordinate.
///
/// Immutable after construction. All derived geometry is computed once in
/// [`SphericalTriangle::with_fillet`].
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalTriangle {
    vertices: [Vec3; 3],
    center: Vec3,
    // local frame: rx toward red, ry = center x rx
    rx: Vec3,
    ry: Vec3,
    normals: [Vec3; 3],
    cum_angles: [f64; 4],
    // fillet i sits around vertex i + 1 and spans +-half_widths[i]
    half_widths: [f64; 3],
    // per edge: fillet end, fillet start, next vertex
    cutoffs: [f64; 9],
    fillets: [Cubic; 3],
    fillet_fraction: f64,
}

impl SphericalTriangle {
    /// Builds a patch with the default [`FILLET_FRACTION`].
    ///
    /// Vertices must be unit vectors in counter-clockwise order (seen from
    /// outside the sphere) within a single hemisphere.
    ///
    /// # Errors
    ///
    /// [`Error::NotInHemisphere`] if `red . (green x blue)` is below machine
    /// epsilon.
    pub fn new(red: Vec3, green: Vec3, blue: Vec3) -> Result<Self> {
        Self::with_fillet(red, green, blue, FILLET_FRACTION)
    }

    /// Builds a patch with a custom fillet width.
    ///
    /// At each corner the fillet extends `fraction` times the shorter of the
    /// two adjacent edge spans to either side.
    ///
    /// # Errors
    ///
    /// - [`Error::NotInHemisphere`] for clockwise or degenerate vertices
    /// - [`Error::InvalidFillet`] if `fraction` is not in (0, 0.5]
    pub fn with_fillet(red: Vec3, green: Vec3, blue: Vec3, fraction: f64) -> Result<Self> {
        let det = red.triple(green, blue);
        if !(det >= f64::EPSILON) {
            return Err(Error::NotInHemisphere { det });
        }
        if !(fraction > 0.0 && fraction <= 0.5) {
            return Err(Error::InvalidFillet(fraction));
        }

        let vertices = [red, green, blue];
        let center = (red + green + blue).normalize();

        let vx = vertices.map(|v| {
            let vy = center.cross(v).normalize();
            vy.cross(center).normalize()
        });
        let rx = vx[0];
        let ry = center.cross(vertices[0]).normalize();

        let mut angles = [0.0; 3];
        let mut cum_angles = [0.0; 4];
        for i in 0..3 {
            angles[i] = vx[i].dot(vx[(i + 1) % 3]).clamp(-1.0, 1.0).acos();
            cum_angles[i + 1] = cum_angles[i] + angles[i];
        }

        let normals = std::array::from_fn(|i| vertices[i].cross(vertices[(i + 1) % 3]).normalize());
        let half_widths: [f64; 3] =
            std::array::from_fn(|i| fraction * angles[i].min(angles[(i + 1) % 3]));

        let mut cutoffs = [0.0; 9];
        for i in 0..3 {
            cutoffs[3 * i] = cum_angles[i] + half_widths[(i + 2) % 3];
            cutoffs[3 * i + 1] = cum_angles[i + 1] - half_widths[i];
            cutoffs[3 * i + 2] = cum_angles[i + 1];
        }

        let mut tri = Self {
            vertices,
            center,
            rx,
            ry,
            normals,
            cum_angles,
            half_widths,
            cutoffs,
            fillets: [Cubic::default(); 3],
            fillet_fraction: fraction,
        };

        // boundary radius and slope at both fillet transitions of every edge
        let mut radii = [[0.0; 2]; 3];
        let mut slopes = [[0.0; 2]; 3];
        for i in 0..3 {
            for (k, &theta) in [cutoffs[3 * i], cutoffs[3 * i + 1]].iter().enumerate() {
                radii[i][k] = tri.edge_radius(i, theta);
                slopes[i][k] = (tri.edge_radius(i, theta + DERIVATIVE_STEP)
                    - tri.edge_radius(i, theta - DERIVATIVE_STEP))
                    / (2.0 * DERIVATIVE_STEP);
            }
        }

        // one x scale on both sides keeps dr/dtheta continuous at the corner
        tri.fillets = std::array::from_fn(|i| {
            let j = (i + 1) % 3;
            let w = half_widths[i];
            Cubic::hermite(radii[i][1], slopes[i][1] * w, radii[j][0], slopes[j][0] * w)
        });

        debug!(
            red = ?red.to_array(),
            green = ?green.to_array(),
            blue = ?blue.to_array(),
            center = ?center.to_array(),
            cutoffs = ?cutoffs,
            fraction,
            "Built spherical triangle patch"
        );

        Ok(tri)
    }

    /// Patch for a fundamental sector bounded by an `order`-fold axis along z.
    ///
    /// Red at `[001]`, green at `[100]`, blue on the equator at `180/order`
    /// degrees.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedOrder`] for orders below 2.
    pub fn cyclic(order: u32) -> Result<Self> {
        if order < 2 {
            return Err(Error::UnsupportedOrder(order));
        }
        let (s, c) = (PI / order as f64).sin_cos();
        Self::new(Vec3::Z, Vec3::X, Vec3::new(c, s, 0.0))
    }

    /// Patch for the m-3m fundamental sector: `[001]`, `[101]`, `[111]`.
    pub fn cubic() -> Result<Self> {
        let r2 = std::f64::consts::FRAC_1_SQRT_2;
        let r3 = 1.0 / 3f64.sqrt();
        Self::new(Vec3::Z, Vec3::new(r2, 0.0, r2), Vec3::new(r3, r3, r3))
    }

    /// Angular distance from the center to edge `edge` at patch azimuth
    /// `theta` (radians).
    fn edge_radius(&self, edge: usize, theta: f64) -> f64 {
        let (s, c) = theta.sin_cos();
        // normal of the great circle through the center at azimuth theta
        let m = self.ry * c - self.rx * s;
        let v = self.normals[edge].cross(m).normalize();
        // of the two intersections, take the one on the center's side
        v.dot(self.center).abs().min(1.0).acos()
    }

    /// Converts a direction inside the patch to a fractional coordinate.
    ///
    /// Directions outside the patch get a meaningful azimuth and a radius
    /// clipped to 1.
    ///
    /// # Preconditions
    ///
    /// `n` must be a unit vector.
    pub fn to_fractional(&self, n: Vec3) -> FractionalCoord {
        let v = n - self.center;
        let mut angle = self.ry.dot(v).atan2(self.rx.dot(v));
        if angle < 0.0 {
            angle += TAU;
        }
        if angle >= TAU {
            angle = 0.0;
        }
        let azimuth = angle / TAU;

        // atan2 keeps full precision near the center where acos does not
        let phi = n.cross(self.center).length().atan2(n.dot(self.center));
        if phi < f64::EPSILON {
            return FractionalCoord { azimuth, radius: 0.0 };
        }

        let idx = self.cutoffs.partition_point(|&c| c < angle).min(8);
        let edge = idx / 3;
        let radius = match idx % 3 {
            1 => {
                // boundary point on the arc from the center through n
                let e = self.normals[edge].cross(n.cross(self.center)).normalize();
                phi / e.dot(self.center).clamp(-1.0, 1.0).acos()
            }
            0 => {
                let f = (edge + 2) % 3;
                let x = (angle - self.cum_angles[edge]) / self.half_widths[f];
                phi / phi.max(self.fillets[f].eval(x))
            }
            _ => {
                let x = (angle - self.cum_angles[edge + 1]) / self.half_widths[edge];
                phi / phi.max(self.fillets[edge].eval(x))
            }
        };

        FractionalCoord {
            azimuth,
            radius: radius.min(1.0),
        }
    }

    /// Colors a direction inside the patch.
    ///
    /// * `white_center` - Map the centroid to the white pole (else black)
    /// * `has_mirror` - Forwarded to the color map
    pub fn to_color<M>(&self, n: Vec3, map: &M, white_center: bool, has_mirror: bool) -> Rgb
    where
        M: SphereColorMap + ?Sized,
    {
        let c = self.to_fractional(n);
        map.color(c.azimuth, c.polar(white_center), has_mirror)
    }

    /// Normalized centroid.
    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Red, green and blue corners.
    #[inline]
    pub fn vertices(&self) -> [Vec3; 3] {
        self.vertices
    }

    /// Fractional azimuth of each corner; red is always 0.
    pub fn vertex_azimuths(&self) -> [f64; 3] {
        [
            self.cum_angles[0] / TAU,
            self.cum_angles[1] / TAU,
            self.cum_angles[2] / TAU,
        ]
    }

    /// Unit normals of the edge great circles, pointing into the patch.
    #[inline]
    pub fn edge_normals(&self) -> [Vec3; 3] {
        self.normals
    }

    /// Region boundaries in radians, three per edge: end of the leading
    /// fillet, start of the trailing fillet, and the next corner.
    #[inline]
    pub fn cutoffs(&self) -> &[f64; 9] {
        &self.cutoffs
    }

    /// Fillet fraction used at construction.
    #[inline]
    pub fn fillet_fraction(&self) -> f64 {
        self.fillet_fraction
    }

    /// Returns `true` if `n` is on the inner side of every edge, allowing
    /// `tolerance` of slack on the dot products.
    pub fn contains(&self, n: Vec3, tolerance: f64) -> bool {
        self.normals.iter().all(|e| e.dot(n) >= -tolerance)
    }

    /// Direction at patch azimuth `angle` (radians, from red) and angular
    /// distance `arc` from the center.
    pub fn direction_at(&self, angle: f64, arc: f64) -> Vec3 {
        let (sa, ca) = angle.sin_cos();
        let (sr, cr) = arc.sin_cos();
        self.center * cr + (self.rx * ca + self.ry * sa) * sr
    }
}
