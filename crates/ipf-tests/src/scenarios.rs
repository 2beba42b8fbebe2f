//! End-to-end scenarios with the reference color map.

use crate::{fibonacci_sphere, rgb_distance};
use approx::assert_relative_eq;
use ipf_color::{HslSphere, Rgb, to_hex};
use ipf_core::{
    Colorizer, CyclicOrder, DihedralOrder, Error, LaueClass, PatchKind, PatchRegistry,
    TrigonalMode, ipf,
};
use ipf_math::Vec3;

fn assert_rgb(a: Rgb, b: Rgb, eps: f64) {
    for i in 0..3 {
        assert_relative_eq!(a[i], b[i], epsilon = eps);
    }
}

fn equator_pair(azimuth_deg: f64, dz: f64) -> (Vec3, Vec3) {
    let a = azimuth_deg.to_radians();
    let r = (1.0 - dz * dz).sqrt();
    (
        Vec3::new(r * a.cos(), r * a.sin(), dz),
        Vec3::new(r * a.cos(), r * a.sin(), -dz),
    )
}

#[test]
fn test_tetragonal_high_c_axis_is_red() {
    let red = ipf::tetragonal_high(Vec3::Z, &HslSphere);
    assert_rgb(red, [1.0, 0.0, 0.0], 1e-9);
    for (dx, dy) in [(1e-9, 0.0), (0.0, 1e-9), (-1e-9, 2e-9), (3e-9, -1e-9)] {
        let n = Vec3::new(dx, dy, 1.0).normalize();
        let rgb = ipf::tetragonal_high(n, &HslSphere);
        assert!(rgb_distance(rgb, red) < 1e-6, "{n:?}: {rgb:?}");
    }
}

#[test]
fn test_orthorhombic_axes_are_primaries() {
    assert_eq!(to_hex(ipf::orthorhombic(Vec3::Z, &HslSphere)), "#ff0000");
    assert_eq!(to_hex(ipf::orthorhombic(Vec3::X, &HslSphere)), "#00ff00");
    assert_eq!(to_hex(ipf::orthorhombic(Vec3::Y, &HslSphere)), "#0000ff");
    assert_eq!(to_hex(ipf::orthorhombic(-Vec3::Y, &HslSphere)), "#0000ff");
}

#[test]
fn test_high_class_centers_are_white() {
    let registry = PatchRegistry::global();
    for class in [
        LaueClass::Orthorhombic,
        LaueClass::TetragonalHigh,
        LaueClass::HexagonalHigh,
        LaueClass::CubicHigh,
    ] {
        let center = registry.get(class.patch_kind().unwrap()).center();
        assert_rgb(class.color(center, &HslSphere), [1.0; 3], 1e-12);
    }
}

#[test]
fn test_cubic_equivalent_directions() {
    let s = 1.0 / 3f64.sqrt();
    let base = ipf::cubic_high(Vec3::new(s, s, s), &HslSphere);
    for n in [
        Vec3::new(-s, s, s),
        Vec3::new(s, -s, -s),
        Vec3::new(-s, -s, -s),
    ] {
        assert_eq!(ipf::cubic_high(n, &HslSphere), base);
    }
}

#[test]
fn test_trigonal_modes_agree_at_center() {
    let center = PatchRegistry::global().get(PatchKind::Cyclic3).center();
    let a = ipf::trigonal_low(center, TrigonalMode::JumpFree, &HslSphere);
    let b = ipf::trigonal_low(center, TrigonalMode::Unambiguous, &HslSphere);
    assert_rgb(a, b, 1e-12);
    assert_rgb(a, [1.0; 3], 1e-12);
}

#[test]
fn test_trigonal_jump_free_continuous_across_equator() {
    for az in [10.0, 45.0, 100.0, 200.0, 310.0] {
        let (above, below) = equator_pair(az, 1e-9);
        let a = ipf::trigonal_low(above, TrigonalMode::JumpFree, &HslSphere);
        let b = ipf::trigonal_low(below, TrigonalMode::JumpFree, &HslSphere);
        assert!(rgb_distance(a, b) < 1e-6, "azimuth {az}: {a:?} vs {b:?}");
    }
}

#[test]
fn test_trigonal_unambiguous_jumps_across_equator() {
    let (above, below) = equator_pair(100.0, 1e-9);
    let a = ipf::trigonal_low(above, TrigonalMode::Unambiguous, &HslSphere);
    let b = ipf::trigonal_low(below, TrigonalMode::Unambiguous, &HslSphere);
    assert!(rgb_distance(a, b) > 0.1, "{a:?} vs {b:?}");
}

#[test]
fn test_trigonal_mirror_partners() {
    // 50 and 70 degrees are mirror images across the 60 degree plane
    let at = |deg: f64| {
        let a = deg.to_radians();
        let r = 0.75f64.sqrt();
        Vec3::new(r * a.cos(), r * a.sin(), 0.5)
    };
    let (n, m) = (at(50.0), at(70.0));

    let a = ipf::trigonal_low(n, TrigonalMode::JumpFree, &HslSphere);
    let b = ipf::trigonal_low(m, TrigonalMode::JumpFree, &HslSphere);
    assert!(rgb_distance(a, b) < 1e-9);

    let a = ipf::trigonal_low(n, TrigonalMode::Unambiguous, &HslSphere);
    let b = ipf::trigonal_low(m, TrigonalMode::Unambiguous, &HslSphere);
    assert!(rgb_distance(a, b) > 0.1);
}

#[test]
fn test_dispatch_from_raw_orders() {
    let n = Vec3::new(0.2, 0.5, 0.84).normalize();
    for order in [2u32, 3, 4, 6] {
        let c = CyclicOrder::try_from(order).unwrap();
        let d = DihedralOrder::try_from(order).unwrap();
        assert_eq!(ipf::cyclic(c, n, &HslSphere), LaueClass::cyclic(c).color(n, &HslSphere));
        assert_eq!(ipf::dihedral(d, n, &HslSphere), LaueClass::dihedral(d).color(n, &HslSphere));
    }
    assert_eq!(CyclicOrder::try_from(5), Err(Error::UnsupportedOrder(5)));
    assert_eq!(DihedralOrder::try_from(1), Err(Error::UnsupportedOrder(1)));
}

#[test]
fn test_colorizer_matches_per_direction_calls() {
    let dirs = fibonacci_sphere(256);
    let colorizer = Colorizer::default().with_trigonal_mode(TrigonalMode::Unambiguous);
    for class in LaueClass::ALL {
        let bulk = colorizer.color_all(class, &dirs);
        for (n, rgb) in dirs.iter().zip(&bulk) {
            assert_eq!(
                *rgb,
                class.color_with_mode(*n, TrigonalMode::Unambiguous, &HslSphere)
            );
        }
    }
}

#[test]
fn test_repeated_calls_are_deterministic() {
    let boundary = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 0.0).normalize(),
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(0.5, 0.75f64.sqrt(), 0.0),
        Vec3::new(-0.0, 1.0, -0.0),
    ];
    for class in LaueClass::ALL {
        for n in boundary {
            let a = class.color(n, &HslSphere);
            let b = class.color(n, &HslSphere);
            assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits), "{class} {n:?}");
        }
    }
}
