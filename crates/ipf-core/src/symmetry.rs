//! Closed-form symmetry reduction.
//!
//! Every operator folds a unit direction into the fundamental sector of a
//! group by a short, fixed sequence of sign tests and exact rotations. No
//! `atan2` and no `fmod`: these run once per pixel on orientation maps with
//! millions of points.
//!
//! # Primitives
//!
//! | Fold     | Symmetry          | Result                    |
//! |----------|-------------------|---------------------------|
//! | [`bar1`] | inversion         | z >= 0                    |
//! | [`z2`]   | 2-fold about z    | azimuth in [0, 180]       |
//! | [`z3`]   | 3-fold about z    | azimuth in [0, 120]       |
//! | [`z4`]   | 4-fold about z    | azimuth in [0, 90]        |
//! | [`z6`]   | 6-fold about z    | azimuth in [0, 60]        |
//!
//! # Sector operators
//!
//! [`orthorhombic`], [`tetragonal`], [`trigonal`], [`hexagonal`] and
//! [`cubic`] apply the primitives and then one last mirror. The mirror flag
//! in [`Reduced`] records whether that last step fired, which is what lets a
//! low-symmetry class (e.g. 4/m) reuse the patch of its high-symmetry
//! partner (4/mmm) with the two halves distinguished by color polarity.
//!
//! # Boundaries
//!
//! Tests use the sign bit (`-0.0` counts as negative) and strict
//! comparisons, never tolerances. A direction on a sector boundary always
//! takes the same branch, so repeated inputs give identical output.
//!
//! # Preconditions
//!
//! Inputs must be unit vectors. Zero or non-normalized directions are not
//! checked and give meaningless (but non-panicking) results.

use ipf_math::Vec3;

/// sqrt(3)
const SQRT_3: f64 = 1.7320508075688772;

/// 1 / sqrt(3)
const FRAC_1_SQRT_3: f64 = 0.5773502691896258;

/// sin(60 deg) = sqrt(3) / 2
const SIN_60: f64 = 0.8660254037844386;

/// A direction folded into a fundamental sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reduced {
    /// The equivalent direction inside the sector.
    pub dir: Vec3,
    /// True if the final mirror was needed to reach the sector.
    pub mirrored: bool,
}

impl Reduced {
    /// Creates a reduced direction.
    #[inline]
    pub const fn new(dir: Vec3, mirrored: bool) -> Self {
        Self { dir, mirrored }
    }
}

/// Applies inversion so that the direction lies in the northern hemisphere.
#[inline]
pub fn bar1(n: Vec3) -> Vec3 {
    if n.z.is_sign_negative() { -n } else { n }
}

/// Applies a 2-fold rotation about z so that `y >= 0`.
#[inline]
pub fn z2(n: Vec3) -> Vec3 {
    if n.y.is_sign_negative() {
        Vec3::new(-n.x, -n.y, n.z)
    } else {
        n
    }
}

// +120 deg about z
#[inline]
fn rot_z_120(n: Vec3) -> Vec3 {
    Vec3::new(-0.5 * n.x - SIN_60 * n.y, -0.5 * n.y + SIN_60 * n.x, n.z)
}

// -120 deg about z
#[inline]
fn rot_z_neg_120(n: Vec3) -> Vec3 {
    Vec3::new(-0.5 * n.x + SIN_60 * n.y, -0.5 * n.y - SIN_60 * n.x, n.z)
}

// -60 deg about z
#[inline]
fn rot_z_neg_60(n: Vec3) -> Vec3 {
    Vec3::new(0.5 * n.x + SIN_60 * n.y, 0.5 * n.y - SIN_60 * n.x, n.z)
}

/// Applies 3-fold rotations about z so that the azimuth is in [0, 120].
pub fn z3(n: Vec3) -> Vec3 {
    if n.x.is_sign_negative() {
        // (90, 270)
        let t = n.y / n.x;
        if t > -SQRT_3 {
            if t > SQRT_3 {
                // (240, 270)
                rot_z_120(n)
            } else {
                // (120, 240]
                rot_z_neg_120(n)
            }
        } else {
            // (90, 120]
            n
        }
    } else if n.y.is_sign_negative() {
        // [270, 360)
        rot_z_120(n)
    } else {
        n
    }
}

/// Applies 4-fold rotations about z so that the azimuth is in [0, 90].
#[inline]
pub fn z4(n: Vec3) -> Vec3 {
    let n = z2(n);
    if n.x.is_sign_negative() {
        Vec3::new(n.y, -n.x, n.z)
    } else {
        n
    }
}

/// Applies 6-fold rotations about z so that the azimuth is in [0, 60].
pub fn z6(n: Vec3) -> Vec3 {
    let n = z2(n);
    let t = n.y / n.x;
    if t.abs() > SQRT_3 {
        // (60, 120)
        rot_z_neg_60(n)
    } else if t.is_sign_negative() {
        // (120, 180]
        rot_z_neg_120(n)
    } else {
        n
    }
}

/// Folds into the mmm sector: `x, y, z >= 0`.
///
/// The mirror flag is set when the x mirror was applied, which separates the
/// two halves of the 2/m sector.
pub fn orthorhombic(n: Vec3) -> Reduced {
    let n = z2(bar1(n));
    if n.x.is_sign_negative() {
        Reduced::new(Vec3::new(-n.x, n.y, n.z), true)
    } else {
        Reduced::new(n, false)
    }
}

/// Folds into the 4/mmm sector: azimuth in [0, 45].
///
/// The mirror flag is set when the diagonal mirror (swap of x and y) was
/// applied.
pub fn tetragonal(n: Vec3) -> Reduced {
    let n = z4(bar1(n));
    if n.y > n.x {
        Reduced::new(Vec3::new(n.y, n.x, n.z), true)
    } else {
        Reduced::new(n, false)
    }
}

/// Folds into the -3m sector: azimuth in [0, 60].
///
/// The mirror flag is set when the reflection across the 60 degree plane
/// was applied.
pub fn trigonal(n: Vec3) -> Reduced {
    let n = z3(bar1(n));
    if n.y / n.x > SQRT_3 || n.x.is_sign_negative() {
        Reduced::new(
            Vec3::new(SIN_60 * n.y - 0.5 * n.x, SIN_60 * n.x + 0.5 * n.y, n.z),
            true,
        )
    } else {
        Reduced::new(n, false)
    }
}

/// Folds into the 6/mmm sector: azimuth in [0, 30].
///
/// The mirror flag is set when the reflection across the 30 degree plane
/// was applied.
pub fn hexagonal(n: Vec3) -> Reduced {
    let n = z6(bar1(n));
    if n.y / n.x > FRAC_1_SQRT_3 {
        Reduced::new(
            Vec3::new(SIN_60 * n.y + 0.5 * n.x, SIN_60 * n.x - 0.5 * n.y, n.z),
            true,
        )
    } else {
        Reduced::new(n, false)
    }
}

/// Folds into the m-3m sector: `z >= x >= y >= 0`.
///
/// Inversion, the 2-fold about z and the x mirror bring the direction into
/// the first octant, a 3-fold about [111] makes z the largest component, and
/// the mirror flag is set when the final swap of x and y was applied.
pub fn cubic(n: Vec3) -> Reduced {
    let n = z2(bar1(n));
    let n = Vec3::new(n.x.abs(), n.y, n.z);

    let n = if n.x >= n.y {
        if n.x > n.z {
            // -120 @ [111]
            Vec3::new(n.y, n.z, n.x)
        } else {
            n
        }
    } else if n.y > n.z {
        // 120 @ [111]
        Vec3::new(n.z, n.x, n.y)
    } else {
        n
    };

    if n.y > n.x {
        Reduced::new(Vec3::new(n.y, n.x, n.z), true)
    } else {
        Reduced::new(n, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn azimuth_deg(n: Vec3) -> f64 {
        let a = n.y.atan2(n.x).to_degrees();
        if a < 0.0 { a + 360.0 } else { a }
    }

    fn ring(count: usize, z: f64) -> impl Iterator<Item = Vec3> {
        let r = (1.0 - z * z).sqrt();
        (0..count).map(move |i| {
            // offset avoids sampling exactly on sector boundaries
            let a = 2.0 * PI * (i as f64 + 0.37) / count as f64;
            Vec3::new(r * a.cos(), r * a.sin(), z)
        })
    }

    #[test]
    fn test_bar1() {
        assert_eq!(bar1(Vec3::new(0.0, 0.6, -0.8)), Vec3::new(-0.0, -0.6, 0.8));
        assert_eq!(bar1(Vec3::Z), Vec3::Z);
        // negative zero counts as southern
        assert_eq!(bar1(Vec3::new(1.0, 0.0, -0.0)).x, -1.0);
    }

    #[test]
    fn test_rotation_folds_ranges() {
        for n in ring(360, 0.3) {
            let a = azimuth_deg(z2(n));
            assert!(a <= 180.0 + 1e-9, "z2 -> {a}");
            let a = azimuth_deg(z3(n));
            assert!(a <= 120.0 + 1e-9, "z3 -> {a}");
            let a = azimuth_deg(z4(n));
            assert!(a <= 90.0 + 1e-9, "z4 -> {a}");
            let a = azimuth_deg(z6(n));
            assert!(a <= 60.0 + 1e-9, "z6 -> {a}");
        }
    }

    #[test]
    fn test_rotation_folds_preserve_length_and_z() {
        for n in ring(97, -0.45) {
            for f in [z2, z3, z4, z6] {
                let m = f(n);
                assert!((m.length() - 1.0).abs() < 1e-14);
                assert_eq!(m.z, n.z);
            }
        }
    }

    #[test]
    fn test_sector_operators() {
        for z in [-0.9, -0.2, 0.1, 0.7] {
            for n in ring(240, z) {
                let r = orthorhombic(n).dir;
                assert!(r.x >= 0.0 && r.y >= 0.0 && r.z >= 0.0);

                let r = tetragonal(n).dir;
                assert!(r.y >= 0.0 && r.x >= r.y && r.z >= 0.0);

                let a = azimuth_deg(trigonal(n).dir);
                assert!(a <= 60.0 + 1e-9, "trigonal -> {a}");

                let a = azimuth_deg(hexagonal(n).dir);
                assert!(a <= 30.0 + 1e-9, "hexagonal -> {a}");

                let r = cubic(n).dir;
                assert!(r.z >= r.x && r.x >= r.y && r.y >= 0.0, "cubic -> {r:?}");
            }
        }
    }

    #[test]
    fn test_mirror_flags() {
        // azimuth 10 deg is inside every sector
        let a = 10f64.to_radians();
        let inside = Vec3::new(a.cos() * 0.6, a.sin() * 0.6, 0.8);
        assert!(!orthorhombic(inside).mirrored);
        assert!(!tetragonal(inside).mirrored);
        assert!(!trigonal(inside).mirrored);
        assert!(!hexagonal(inside).mirrored);

        // its reflection across y = 0 needs the extra mirror
        let reflected = Vec3::new(inside.x, -inside.y, inside.z);
        assert!(tetragonal(reflected).mirrored);
        assert!(trigonal(reflected).mirrored);
        assert!(hexagonal(reflected).mirrored);
        assert!(orthorhombic(Vec3::new(-inside.x, inside.y, inside.z)).mirrored);
    }

    #[test]
    fn test_mirror_partners_share_reduced_direction() {
        let a = 10f64.to_radians();
        let n = Vec3::new(a.cos() * 0.6, a.sin() * 0.6, 0.8);
        let m = Vec3::new(n.x, -n.y, n.z);
        let (rn, rm) = (tetragonal(n), tetragonal(m));
        assert!(rn.dir.max_abs_diff(rm.dir) < 1e-15);
        assert_ne!(rn.mirrored, rm.mirrored);
    }

    #[test]
    fn test_cubic_known_directions() {
        let r = cubic(Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(r.dir, Vec3::new(0.0, 0.0, 1.0));

        let s = 1.0 / 3f64.sqrt();
        let r = cubic(Vec3::new(-s, s, -s));
        assert_eq!(r.dir, Vec3::new(s, s, s));

        // (0, 1, 1)/sqrt2 -> (1, 0, 1)/sqrt2
        let h = 1.0 / 2f64.sqrt();
        let r = cubic(Vec3::new(0.0, h, h));
        assert_eq!(r.dir, Vec3::new(h, 0.0, h));
        assert!(r.mirrored);
    }

    #[test]
    fn test_boundary_determinism() {
        let boundary = [
            Vec3::X,
            Vec3::Y,
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.5, SIN_60, 0.0),
            Vec3::new(1.0, 1.0, 0.0).normalize(),
            Vec3::new(1.0, 1.0, 1.0).normalize(),
        ];
        for n in boundary {
            for f in [orthorhombic, tetragonal, trigonal, hexagonal, cubic] {
                let a = f(n);
                let b = f(n);
                assert_eq!(a.dir.to_array().map(f64::to_bits), b.dir.to_array().map(f64::to_bits));
                assert_eq!(a.mirrored, b.mirrored);
            }
        }
    }

    #[test]
    fn test_orthorhombic_x_axis() {
        let r = orthorhombic(Vec3::X);
        assert_eq!(r.dir, Vec3::X);
        assert!(!r.mirrored);
    }
}
