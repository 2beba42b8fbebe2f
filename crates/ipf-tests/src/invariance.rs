//! Symmetry-equivalent directions get the same color.

use crate::{fibonacci_sphere, is_signed_permutation, rgb_distance};
use ipf_color::HslSphere;
use ipf_core::{LaueClass, TrigonalMode};

fn check_class(class: LaueClass, mode: TrigonalMode) {
    let ops = class.operations();
    // folds of the signed-permutation groups only negate and swap
    let exact = ops.iter().all(is_signed_permutation);
    for n in fibonacci_sphere(800) {
        let base = class.color_with_mode(n, mode, &HslSphere);
        for g in &ops {
            let rgb = class.color_with_mode(*g * n, mode, &HslSphere);
            if exact {
                assert_eq!(rgb, base, "{class} {g:?} {n:?}");
            } else {
                let d = rgb_distance(rgb, base);
                assert!(d < 1e-9, "{class} {g:?} {n:?}: {d}");
            }
        }
    }
}

#[test]
fn test_every_class_is_invariant() {
    for class in LaueClass::ALL {
        check_class(class, TrigonalMode::JumpFree);
    }
}

#[test]
fn test_trigonal_unambiguous_is_invariant() {
    check_class(LaueClass::TrigonalLow, TrigonalMode::Unambiguous);
}

#[test]
fn test_reduction_is_idempotent() {
    for class in LaueClass::ALL {
        for n in fibonacci_sphere(400) {
            let once = class.reduce(n);
            let twice = class.reduce(once.dir);
            assert!(
                once.dir.max_abs_diff(twice.dir) < 1e-12,
                "{class}: {:?} -> {:?}",
                once.dir,
                twice.dir
            );
        }
    }
}

#[test]
fn test_cubic_groups_are_exact() {
    for class in [
        LaueClass::Orthorhombic,
        LaueClass::TetragonalHigh,
        LaueClass::CubicLow,
        LaueClass::CubicHigh,
    ] {
        assert!(class.operations().iter().all(is_signed_permutation), "{class}");
    }
}

#[test]
fn test_low_classes_separate_mirror_partners() {
    use ipf_core::PatchRegistry;
    use ipf_math::Vec3;

    // interior points of the high-symmetry sector and their diagonal mirror
    let registry = PatchRegistry::global();
    for class in [LaueClass::TetragonalLow, LaueClass::CubicLow] {
        let tri = registry.get(class.patch_kind().unwrap());
        for k in 0..12 {
            let n = tri.direction_at(0.5 * k as f64, 0.05);
            let partner = Vec3::new(n.y, n.x, n.z);
            let a = class.color(n, &HslSphere);
            let b = class.color(partner, &HslSphere);
            assert!(rgb_distance(a, b) > 0.1, "{class} {n:?}");
        }
    }
}
