//! Per-class IPF color entry points.
//!
//! Each function folds a direction into its class's fundamental sector and
//! colors it with the class's patch from [`PatchRegistry::global`]:
//!
//! | Function          | Patch   | Center color      | `has_mirror` |
//! |-------------------|---------|-------------------|--------------|
//! | [`triclinic`]     | -       | white pole        | true         |
//! | [`monoclinic`]    | Cyclic2 | white / black     | false        |
//! | [`orthorhombic`]  | Cyclic2 | white             | true         |
//! | [`tetragonal_low`]| Cyclic4 | white / black     | false        |
//! | [`tetragonal_high`]| Cyclic4| white             | true         |
//! | [`trigonal_low`]  | Cyclic3 | depends on mode   | false        |
//! | [`trigonal_high`] | Cyclic6 | white / black     | true         |
//! | [`hexagonal_low`] | Cyclic6 | white / black     | false        |
//! | [`hexagonal_high`]| Cyclic6 | white             | true         |
//! | [`cubic_low`]     | Cubic   | white / black     | false        |
//! | [`cubic_high`]    | Cubic   | white             | true         |
//!
//! "white / black" means the centroid is white for unmirrored directions
//! and black for mirrored ones, so the two halves of a low-symmetry sector
//! stay distinguishable while sharing one patch. The `has_mirror` column is
//! [`LaueClass::has_mirror`].
//!
//! # Preconditions
//!
//! All entry points expect unit directions. Nothing is checked on this
//! path; normalize at the boundary of your program.
//!
//! # Example
//!
//! ```rust
//! use ipf_color::HslSphere;
//! use ipf_core::{LaueClass, ipf};
//! use ipf_math::Vec3;
//!
//! let a = ipf::cubic_high(Vec3::new(0.0, 0.0, 1.0), &HslSphere);
//! let b = LaueClass::CubicHigh.color(Vec3::new(-1.0, 0.0, 0.0), &HslSphere);
//! assert_eq!(a, b);
//! ```

use std::f64::consts::{PI, TAU};

use ipf_color::{HslSphere, Rgb, SphereColorMap};
use ipf_math::Vec3;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::laue::{CyclicOrder, DihedralOrder, LaueClass, PatchKind, TrigonalMode};
use crate::registry::PatchRegistry;
use crate::symmetry;
use crate::triangle::SphericalTriangle;

#[inline]
fn patch(kind: PatchKind) -> &'static SphericalTriangle {
    PatchRegistry::global().get(kind)
}

// Colors a reduced direction with the class's patch and mirror flag.
fn sector_color<M: SphereColorMap + ?Sized>(
    class: LaueClass,
    dir: Vec3,
    white_center: bool,
    map: &M,
) -> Rgb {
    match class.patch_kind() {
        Some(kind) => patch(kind).to_color(dir, map, white_center, class.has_mirror()),
        None => triclinic(dir, map),
    }
}

/// IPF color for the -1 class.
///
/// No patch: the northern hemisphere is mapped directly, azimuth to hue and
/// the polar angle from the north pole to the upper half of the color
/// sphere.
pub fn triclinic<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let n = symmetry::bar1(n);
    let mut azimuth = n.y.atan2(n.x) / TAU;
    if azimuth < 0.0 {
        azimuth += 1.0;
    }
    if azimuth >= 1.0 {
        azimuth = 0.0;
    }
    let polar = n.z.clamp(-1.0, 1.0).acos() / PI;
    map.color(azimuth, 1.0 - polar, LaueClass::Triclinic.has_mirror())
}

/// IPF color for the 2/m class.
pub fn monoclinic<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::orthorhombic(n);
    sector_color(LaueClass::Monoclinic, r.dir, !r.mirrored, map)
}

/// IPF color for the mmm class.
pub fn orthorhombic<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::orthorhombic(n);
    sector_color(LaueClass::Orthorhombic, r.dir, true, map)
}

/// IPF color for the 4/m class.
pub fn tetragonal_low<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::tetragonal(n);
    sector_color(LaueClass::TetragonalLow, r.dir, !r.mirrored, map)
}

/// IPF color for the 4/mmm class.
pub fn tetragonal_high<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::tetragonal(n);
    sector_color(LaueClass::TetragonalHigh, r.dir, true, map)
}

/// IPF color for the -3 class.
///
/// The -3 sector is the 0-120 degree wedge of the northern hemisphere. It
/// has no mirror, so a mirror-folded half of it needs its own colors, and
/// there is no way to give them distinct colors without a jump somewhere:
///
/// - [`TrigonalMode::JumpFree`] maps the patch radius onto the whole polar
///   range with a black boundary. Continuous everywhere, but a direction
///   and its mirror partner share a color.
/// - [`TrigonalMode::Unambiguous`] uses the white / black center split like
///   the other low classes. Every color is unique, at the price of a jump
///   across the equator.
pub fn trigonal_low<M: SphereColorMap + ?Sized>(n: Vec3, mode: TrigonalMode, map: &M) -> Rgb {
    let r = symmetry::trigonal(n);
    let tri = patch(PatchKind::Cyclic3);
    match mode {
        TrigonalMode::JumpFree => {
            let c = tri.to_fractional(r.dir);
            map.color(c.azimuth, 1.0 - c.radius, LaueClass::TrigonalLow.has_mirror())
        }
        TrigonalMode::Unambiguous => {
            tri.to_color(r.dir, map, !r.mirrored, LaueClass::TrigonalLow.has_mirror())
        }
    }
}

/// IPF color for the -3m class.
pub fn trigonal_high<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = LaueClass::TrigonalHigh.reduce(n);
    sector_color(LaueClass::TrigonalHigh, r.dir, !r.mirrored, map)
}

/// IPF color for the 6/m class.
pub fn hexagonal_low<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::hexagonal(n);
    sector_color(LaueClass::HexagonalLow, r.dir, !r.mirrored, map)
}

/// IPF color for the 6/mmm class.
pub fn hexagonal_high<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::hexagonal(n);
    sector_color(LaueClass::HexagonalHigh, r.dir, true, map)
}

/// IPF color for the m-3 class.
///
/// The m-3 sector is two m-3m sectors joined across the `x = y` plane; the
/// mirrored half is colored with a black center.
pub fn cubic_low<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::cubic(n);
    sector_color(LaueClass::CubicLow, r.dir, !r.mirrored, map)
}

/// IPF color for the m-3m class.
pub fn cubic_high<M: SphereColorMap + ?Sized>(n: Vec3, map: &M) -> Rgb {
    let r = symmetry::cubic(n);
    sector_color(LaueClass::CubicHigh, r.dir, true, map)
}

/// IPF color for a cyclic class `N/m` (`-3` for N = 3, jump-free).
pub fn cyclic<M: SphereColorMap + ?Sized>(order: CyclicOrder, n: Vec3, map: &M) -> Rgb {
    match order {
        CyclicOrder::Two => monoclinic(n, map),
        CyclicOrder::Three => trigonal_low(n, TrigonalMode::JumpFree, map),
        CyclicOrder::Four => tetragonal_low(n, map),
        CyclicOrder::Six => hexagonal_low(n, map),
    }
}

/// IPF color for a dihedral class `N/mmm` (`-3m` for N = 3).
pub fn dihedral<M: SphereColorMap + ?Sized>(order: DihedralOrder, n: Vec3, map: &M) -> Rgb {
    match order {
        DihedralOrder::Two => orthorhombic(n, map),
        DihedralOrder::Three => trigonal_high(n, map),
        DihedralOrder::Four => tetragonal_high(n, map),
        DihedralOrder::Six => hexagonal_high(n, map),
    }
}

impl LaueClass {
    /// IPF color of `n` for this class, using the default [`TrigonalMode`].
    pub fn color<M: SphereColorMap + ?Sized>(&self, n: Vec3, map: &M) -> Rgb {
        self.color_with_mode(n, TrigonalMode::default(), map)
    }

    /// IPF color of `n`; `mode` only affects [`LaueClass::TrigonalLow`].
    pub fn color_with_mode<M: SphereColorMap + ?Sized>(
        &self,
        n: Vec3,
        mode: TrigonalMode,
        map: &M,
    ) -> Rgb {
        match self {
            Self::Triclinic => triclinic(n, map),
            Self::Monoclinic => monoclinic(n, map),
            Self::Orthorhombic => orthorhombic(n, map),
            Self::TetragonalLow => tetragonal_low(n, map),
            Self::TetragonalHigh => tetragonal_high(n, map),
            Self::TrigonalLow => trigonal_low(n, mode, map),
            Self::TrigonalHigh => trigonal_high(n, map),
            Self::HexagonalLow => hexagonal_low(n, map),
            Self::HexagonalHigh => hexagonal_high(n, map),
            Self::CubicLow => cubic_low(n, map),
            Self::CubicHigh => cubic_high(n, map),
        }
    }
}

/// Colors many directions with one color map.
///
/// # Example
///
/// ```rust
/// use ipf_core::{Colorizer, LaueClass, TrigonalMode};
/// use ipf_math::Vec3;
///
/// let colorizer = Colorizer::default().with_trigonal_mode(TrigonalMode::Unambiguous);
/// let rgb = colorizer.color_all(LaueClass::TrigonalLow, &[Vec3::Z, Vec3::X]);
/// assert_eq!(rgb.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Colorizer<M> {
    map: M,
    trigonal_mode: TrigonalMode,
}

impl<M: SphereColorMap> Colorizer<M> {
    /// Creates a colorizer with the default trigonal mode.
    pub fn new(map: M) -> Self {
        Self {
            map,
            trigonal_mode: TrigonalMode::default(),
        }
    }

    /// Sets the mode used for [`LaueClass::TrigonalLow`].
    pub fn with_trigonal_mode(mut self, mode: TrigonalMode) -> Self {
        self.trigonal_mode = mode;
        self
    }

    /// Trigonal mode in use.
    pub fn trigonal_mode(&self) -> TrigonalMode {
        self.trigonal_mode
    }

    /// The wrapped color map.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Colors one direction.
    #[inline]
    pub fn color(&self, class: LaueClass, n: Vec3) -> Rgb {
        class.color_with_mode(n, self.trigonal_mode, &self.map)
    }
}

impl<M: SphereColorMap + Sync> Colorizer<M> {
    /// Colors a slice of directions in parallel. Output order matches input.
    pub fn color_all(&self, class: LaueClass, dirs: &[Vec3]) -> Vec<Rgb> {
        dirs.par_iter().map(|&n| self.color(class, n)).collect()
    }

    /// Colors interleaved `x y z` triples in parallel, returning interleaved
    /// `r g b` triples.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] if `xyz.len()` is not a multiple of 3.
    pub fn color_interleaved(&self, class: LaueClass, xyz: &[f64]) -> Result<Vec<f64>> {
        if xyz.len() % 3 != 0 {
            return Err(Error::InvalidLength(xyz.len()));
        }

        let mut rgb = vec![0.0; xyz.len()];
        rgb.par_chunks_mut(3)
            .zip(xyz.par_chunks(3))
            .for_each(|(out, v)| {
                out.copy_from_slice(&self.color(class, Vec3::new(v[0], v[1], v[2])));
            });
        Ok(rgb)
    }
}

impl Default for Colorizer<HslSphere> {
    fn default() -> Self {
        Self::new(HslSphere)
    }
}
