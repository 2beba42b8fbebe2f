//! Laue classes and symmetry orders.
//!
//! The 11 Laue classes are the centrosymmetric crystallographic point
//! groups. Orientation coloring only ever needs these: a diffraction
//! experiment cannot tell a direction from its opposite, so every group is
//! taken together with the inversion centre.
//!
//! | Class           | Symbol | Order | Patch     |
//! |-----------------|--------|-------|-----------|
//! | triclinic       | -1     | 2     | -         |
//! | monoclinic      | 2/m    | 4     | Cyclic2   |
//! | orthorhombic    | mmm    | 8     | Cyclic2   |
//! | tetragonal-low  | 4/m    | 8     | Cyclic4   |
//! | tetragonal-high | 4/mmm  | 16    | Cyclic4   |
//! | trigonal-low    | -3     | 6     | Cyclic3   |
//! | trigonal-high   | -3m    | 12    | Cyclic6   |
//! | hexagonal-low   | 6/m    | 12    | Cyclic6   |
//! | hexagonal-high  | 6/mmm  | 24    | Cyclic6   |
//! | cubic-low       | m-3    | 24    | Cubic     |
//! | cubic-high      | m-3m   | 48    | Cubic     |

use std::fmt;
use std::str::FromStr;

use ipf_math::{Mat3, Vec3};

use crate::error::{Error, Result};
use crate::symmetry::{self, Reduced};
use crate::triangle::SphericalTriangle;

const SIN_60: f64 = 0.8660254037844386;

/// Rotational order of a cyclic group `N/m` (or `-3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CyclicOrder {
    /// 2/m
    Two = 2,
    /// -3
    Three = 3,
    /// 4/m
    Four = 4,
    /// 6/m
    Six = 6,
}

impl CyclicOrder {
    /// Numeric order.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for CyclicOrder {
    type Error = Error;

    fn try_from(order: u32) -> Result<Self> {
        match order {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            _ => Err(Error::UnsupportedOrder(order)),
        }
    }
}

/// Rotational order of a dihedral group `N/mmm` (or `-3m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DihedralOrder {
    /// mmm
    Two = 2,
    /// -3m
    Three = 3,
    /// 4/mmm
    Four = 4,
    /// 6/mmm
    Six = 6,
}

impl DihedralOrder {
    /// Numeric order.
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for DihedralOrder {
    type Error = Error;

    fn try_from(order: u32) -> Result<Self> {
        match order {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            _ => Err(Error::UnsupportedOrder(order)),
        }
    }
}

/// How the -3 class is colored.
///
/// The -3 sector cannot be colored both continuously and injectively. See
/// [`crate::ipf::trigonal_low`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrigonalMode {
    /// Continuous everywhere; mirror partners share a color.
    #[default]
    JumpFree,
    /// Distinct colors for mirror partners, with a jump across the equator.
    Unambiguous,
}

impl TrigonalMode {
    /// Kebab-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::JumpFree => "jump-free",
            Self::Unambiguous => "unambiguous",
        }
    }
}

impl fmt::Display for TrigonalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TrigonalMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "jump-free" | "jumpfree" => Ok(Self::JumpFree),
            "unambiguous" => Ok(Self::Unambiguous),
            _ => Err(Error::UnknownTrigonalMode(s.to_string())),
        }
    }
}

/// The distinct patch geometries used by the non-triclinic classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchKind {
    /// `[001]`, `[100]`, `[010]`
    Cyclic2,
    /// `[001]`, `[100]`, equator at 60 degrees
    Cyclic3,
    /// `[001]`, `[100]`, `[110]`
    Cyclic4,
    /// `[001]`, `[100]`, equator at 30 degrees
    Cyclic6,
    /// `[001]`, `[101]`, `[111]`
    Cubic,
}

impl PatchKind {
    /// All kinds, in slot order.
    pub const ALL: [PatchKind; 5] = [
        Self::Cyclic2,
        Self::Cyclic3,
        Self::Cyclic4,
        Self::Cyclic6,
        Self::Cubic,
    ];

    /// Slot index in [`PatchKind::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Cyclic2 => 0,
            Self::Cyclic3 => 1,
            Self::Cyclic4 => 2,
            Self::Cyclic6 => 3,
            Self::Cubic => 4,
        }
    }

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cyclic2 => "cyclic2",
            Self::Cyclic3 => "cyclic3",
            Self::Cyclic4 => "cyclic4",
            Self::Cyclic6 => "cyclic6",
            Self::Cubic => "cubic",
        }
    }

    /// Builds a fresh patch of this kind.
    pub fn build(self) -> Result<SphericalTriangle> {
        match self {
            Self::Cyclic2 => SphericalTriangle::cyclic(2),
            Self::Cyclic3 => SphericalTriangle::cyclic(3),
            Self::Cyclic4 => SphericalTriangle::cyclic(4),
            Self::Cyclic6 => SphericalTriangle::cyclic(6),
            Self::Cubic => SphericalTriangle::cubic(),
        }
    }
}

impl fmt::Display for PatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the 11 Laue classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaueClass {
    /// -1
    Triclinic,
    /// 2/m
    Monoclinic,
    /// mmm
    Orthorhombic,
    /// 4/m
    TetragonalLow,
    /// 4/mmm
    TetragonalHigh,
    /// -3
    TrigonalLow,
    /// -3m
    TrigonalHigh,
    /// 6/m
    HexagonalLow,
    /// 6/mmm
    HexagonalHigh,
    /// m-3
    CubicLow,
    /// m-3m
    CubicHigh,
}

impl LaueClass {
    /// All classes, lowest symmetry first within each crystal system.
    pub const ALL: [LaueClass; 11] = [
        Self::Triclinic,
        Self::Monoclinic,
        Self::Orthorhombic,
        Self::TetragonalLow,
        Self::TetragonalHigh,
        Self::TrigonalLow,
        Self::TrigonalHigh,
        Self::HexagonalLow,
        Self::HexagonalHigh,
        Self::CubicLow,
        Self::CubicHigh,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Triclinic => "triclinic",
            Self::Monoclinic => "monoclinic",
            Self::Orthorhombic => "orthorhombic",
            Self::TetragonalLow => "tetragonal-low",
            Self::TetragonalHigh => "tetragonal-high",
            Self::TrigonalLow => "trigonal-low",
            Self::TrigonalHigh => "trigonal-high",
            Self::HexagonalLow => "hexagonal-low",
            Self::HexagonalHigh => "hexagonal-high",
            Self::CubicLow => "cubic-low",
            Self::CubicHigh => "cubic-high",
        }
    }

    /// Hermann-Mauguin symbol, with `-` for the overbar.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Triclinic => "-1",
            Self::Monoclinic => "2/m",
            Self::Orthorhombic => "mmm",
            Self::TetragonalLow => "4/m",
            Self::TetragonalHigh => "4/mmm",
            Self::TrigonalLow => "-3",
            Self::TrigonalHigh => "-3m",
            Self::HexagonalLow => "6/m",
            Self::HexagonalHigh => "6/mmm",
            Self::CubicLow => "m-3",
            Self::CubicHigh => "m-3m",
        }
    }

    /// Number of symmetry operations, proper and improper.
    pub const fn order(&self) -> usize {
        match self {
            Self::Triclinic => 2,
            Self::Monoclinic => 4,
            Self::Orthorhombic | Self::TetragonalLow => 8,
            Self::TetragonalHigh => 16,
            Self::TrigonalLow => 6,
            Self::TrigonalHigh | Self::HexagonalLow => 12,
            Self::HexagonalHigh | Self::CubicLow => 24,
            Self::CubicHigh => 48,
        }
    }

    /// Patch geometry used to color this class, `None` for triclinic.
    pub const fn patch_kind(&self) -> Option<PatchKind> {
        match self {
            Self::Triclinic => None,
            Self::Monoclinic | Self::Orthorhombic => Some(PatchKind::Cyclic2),
            Self::TetragonalLow | Self::TetragonalHigh => Some(PatchKind::Cyclic4),
            Self::TrigonalLow => Some(PatchKind::Cyclic3),
            Self::TrigonalHigh | Self::HexagonalLow | Self::HexagonalHigh => {
                Some(PatchKind::Cyclic6)
            }
            Self::CubicLow | Self::CubicHigh => Some(PatchKind::Cubic),
        }
    }

    /// Whether the point group contains mirror planes through the sector
    /// boundary. Passed to the color map as `has_mirror`.
    ///
    /// This says nothing about which half of the color sphere is used: -3m
    /// has mirrors but still colors its mirrored half with a black center.
    pub const fn has_mirror(&self) -> bool {
        matches!(
            self,
            Self::Triclinic
                | Self::Orthorhombic
                | Self::TetragonalHigh
                | Self::TrigonalHigh
                | Self::HexagonalHigh
                | Self::CubicHigh
        )
    }

    /// Class of the cyclic group with the given order.
    pub const fn cyclic(order: CyclicOrder) -> Self {
        match order {
            CyclicOrder::Two => Self::Monoclinic,
            CyclicOrder::Three => Self::TrigonalLow,
            CyclicOrder::Four => Self::TetragonalLow,
            CyclicOrder::Six => Self::HexagonalLow,
        }
    }

    /// Class of the dihedral group with the given order.
    pub const fn dihedral(order: DihedralOrder) -> Self {
        match order {
            DihedralOrder::Two => Self::Orthorhombic,
            DihedralOrder::Three => Self::TrigonalHigh,
            DihedralOrder::Four => Self::TetragonalHigh,
            DihedralOrder::Six => Self::HexagonalHigh,
        }
    }

    /// Folds a unit direction into this class's fundamental sector.
    ///
    /// The triclinic sector is the northern hemisphere and never reports a
    /// mirror. The -3m sector is the -3 sector folded once more by the
    /// 6/mmm operator, whose mirror flag is reported.
    pub fn reduce(&self, n: Vec3) -> Reduced {
        match self {
            Self::Triclinic => Reduced::new(symmetry::bar1(n), false),
            Self::Monoclinic | Self::Orthorhombic => symmetry::orthorhombic(n),
            Self::TetragonalLow | Self::TetragonalHigh => symmetry::tetragonal(n),
            Self::TrigonalLow => symmetry::trigonal(n),
            Self::TrigonalHigh => symmetry::hexagonal(symmetry::trigonal(n).dir),
            Self::HexagonalLow | Self::HexagonalHigh => symmetry::hexagonal(n),
            Self::CubicLow | Self::CubicHigh => symmetry::cubic(n),
        }
    }

    fn generators(&self) -> Vec<Mat3> {
        let mut gens = vec![Mat3::diagonal(-1.0, -1.0, -1.0)];

        let fold = match self {
            Self::Triclinic => 1,
            Self::Monoclinic | Self::Orthorhombic | Self::CubicLow => 2,
            Self::TrigonalLow | Self::TrigonalHigh => 3,
            Self::TetragonalLow | Self::TetragonalHigh | Self::CubicHigh => 4,
            Self::HexagonalLow | Self::HexagonalHigh => 6,
        };
        if let Some(r) = z_rotation(fold) {
            gens.push(r);
        }

        if matches!(
            self,
            Self::Orthorhombic | Self::TetragonalHigh | Self::TrigonalHigh | Self::HexagonalHigh
        ) {
            gens.push(Mat3::diagonal(1.0, -1.0, 1.0));
        }

        if matches!(self, Self::CubicLow | Self::CubicHigh) {
            gens.push(Mat3::diagonal(1.0, -1.0, -1.0));
            // 3-fold about [111]
            gens.push(Mat3::from_rows([
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
            ]));
        }
        gens
    }

    /// All symmetry operations of the group, proper and improper.
    ///
    /// Generated by closure over the group generators, so the identity comes
    /// first and the length equals [`LaueClass::order`]. Entries within
    /// `1e-12` of an integer are snapped to it, which keeps the
    /// signed-permutation groups exact.
    pub fn operations(&self) -> Vec<Mat3> {
        let gens = self.generators();
        let mut ops = vec![Mat3::IDENTITY];
        let mut i = 0;
        while i < ops.len() {
            let a = ops[i];
            for g in &gens {
                let p = snap(*g * a);
                if !ops.iter().any(|o| o.abs_diff_eq(&p, 1e-9)) {
                    ops.push(p);
                }
            }
            i += 1;
        }
        ops
    }
}

// Exact z rotations for the crystallographic orders.
fn z_rotation(fold: u32) -> Option<Mat3> {
    let (c, s) = match fold {
        2 => (-1.0, 0.0),
        3 => (-0.5, SIN_60),
        4 => (0.0, 1.0),
        6 => (0.5, SIN_60),
        _ => return None,
    };
    Some(Mat3::from_rows([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]]))
}

fn snap(mut m: Mat3) -> Mat3 {
    for row in m.m.iter_mut() {
        for v in row.iter_mut() {
            let r = v.round();
            if (*v - r).abs() < 1e-12 {
                *v = r;
            }
        }
    }
    m
}

impl fmt::Display for LaueClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LaueClass {
    type Err = Error;

    /// Parses a kebab-case name (`tetragonal-high`, underscores allowed) or
    /// a Hermann-Mauguin symbol (`4/mmm`).
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == key || c.symbol() == key)
            .ok_or_else(|| Error::UnknownLaueClass(s.to_string()))
    }
}
