//! Colors and the fillet boundary change smoothly inside a patch.

use crate::rgb_distance;
use ipf_color::HslSphere;
use ipf_core::{PatchKind, PatchRegistry, SphericalTriangle};

// Smallest angular distance from the center to a corner.
fn corner_scale(tri: &SphericalTriangle) -> f64 {
    tri.vertices()
        .iter()
        .map(|v| v.angle_between(tri.center()))
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn test_no_jump_across_fillet_cutoffs() {
    let registry = PatchRegistry::global();
    for kind in PatchKind::ALL {
        let tri = registry.get(kind);
        let scale = corner_scale(tri);
        for &cut in tri.cutoffs() {
            for frac in [0.2, 0.5, 0.8, 0.95] {
                let arc = scale * frac;
                for white in [true, false] {
                    let a = tri.to_color(tri.direction_at(cut - 4e-4, arc), &HslSphere, white, false);
                    let b = tri.to_color(tri.direction_at(cut + 4e-4, arc), &HslSphere, white, false);
                    let d = rgb_distance(a, b);
                    assert!(d < 0.01, "{kind} cut {cut:.4} arc {arc:.4}: {d}");
                }
            }
        }
    }
}

#[test]
fn test_radius_continuous_along_boundary() {
    // walk all the way around each patch just inside the boundary
    let registry = PatchRegistry::global();
    for kind in PatchKind::ALL {
        let tri = registry.get(kind);
        let arc = corner_scale(tri) * 0.6;
        let steps = 8000;
        let mut prev = tri.to_fractional(tri.direction_at(0.0, arc)).radius;
        for i in 1..=steps {
            let angle = std::f64::consts::TAU * i as f64 / steps as f64;
            let r = tri.to_fractional(tri.direction_at(angle, arc)).radius;
            assert!((r - prev).abs() < 0.01, "{kind} at {angle:.4}: {prev} -> {r}");
            prev = r;
        }
    }
}

#[test]
fn test_boundary_slope_matches_across_corners() {
    use std::f64::consts::TAU;

    let h = 1e-6;
    let registry = PatchRegistry::global();
    for kind in PatchKind::ALL {
        let tri = registry.get(kind);
        let cut = tri.cutoffs();
        for frac in [0.1, 0.4] {
            let arc = corner_scale(tri) * frac;
            // fillet curve distance from the center, independent of arc
            let edge = |angle: f64| arc / tri.to_fractional(tri.direction_at(angle, arc)).radius;
            for (lo, hi) in [(cut[2], cut[2]), (cut[5], cut[5]), (TAU, 0.0)] {
                let left = (edge(lo - h) - edge(lo - 2.0 * h)) / h;
                let right = (edge(hi + 2.0 * h) - edge(hi + h)) / h;
                assert!(
                    (left - right).abs() < 2e-3,
                    "{kind} corner at {hi:.4}: {left:.5} vs {right:.5}"
                );
            }
        }
    }
}
