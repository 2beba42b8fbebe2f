//! Reduced directions land inside their class patch.

use crate::fibonacci_sphere;
use ipf_core::{LaueClass, PatchRegistry};

#[test]
fn test_reduced_directions_inside_patch() {
    let registry = PatchRegistry::global();
    for class in LaueClass::ALL {
        let Some(kind) = class.patch_kind() else {
            continue;
        };
        let tri = registry.get(kind);
        for n in fibonacci_sphere(2000) {
            let r = class.reduce(n);
            assert!(tri.contains(r.dir, 1e-12), "{class}: {n:?} -> {:?}", r.dir);
        }
    }
}

#[test]
fn test_triclinic_reduces_to_north() {
    for n in fibonacci_sphere(500) {
        let r = LaueClass::Triclinic.reduce(n);
        assert!(r.dir.z > 0.0);
        assert!(!r.mirrored);
    }
}

#[test]
fn test_fractional_coordinates_in_range() {
    let registry = PatchRegistry::global();
    for class in LaueClass::ALL {
        let Some(kind) = class.patch_kind() else {
            continue;
        };
        let tri = registry.get(kind);
        for n in fibonacci_sphere(2000) {
            let c = tri.to_fractional(class.reduce(n).dir);
            assert!((0.0..1.0).contains(&c.azimuth), "{class}: azimuth {}", c.azimuth);
            assert!((0.0..=1.0).contains(&c.radius), "{class}: radius {}", c.radius);
        }
    }
}

#[test]
fn test_colors_in_unit_cube() {
    use ipf_color::HslSphere;
    for class in LaueClass::ALL {
        for n in fibonacci_sphere(600) {
            let rgb = class.color(n, &HslSphere);
            for v in rgb {
                assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{class}: {rgb:?}");
            }
        }
    }
}

#[test]
fn test_mirror_flag_matches_low_high_split() {
    use ipf_math::Vec3;
    // 4/m: azimuth 30 and 60 are mirror images across the 45 degree plane
    let a = 30f64.to_radians();
    let n = Vec3::new(0.6 * a.cos(), 0.6 * a.sin(), 0.8);
    let m = Vec3::new(n.y, n.x, n.z);
    assert!(!LaueClass::TetragonalLow.reduce(n).mirrored);
    assert!(LaueClass::TetragonalLow.reduce(m).mirrored);
}
