//! Integration tests for ipf-rs crates.
//!
//! This crate contains property tests that exercise symmetry reduction,
//! patches and color maps together. Inputs come from a deterministic
//! Fibonacci lattice on the sphere instead of a random generator, so every
//! failure reproduces exactly.

use ipf_color::Rgb;
use ipf_math::Vec3;

/// pi * (3 - sqrt 5)
const GOLDEN_ANGLE: f64 = 2.399963229728653;

/// Near-uniform unit directions on the sphere.
///
/// With an even `count` no sample lies on the equator.
pub fn fibonacci_sphere(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let z = 1.0 - (2 * i + 1) as f64 / count as f64;
            let r = (1.0 - z * z).sqrt();
            let (s, c) = (GOLDEN_ANGLE * i as f64).sin_cos();
            Vec3::new(r * c, r * s, z)
        })
        .collect()
}

/// Largest per-channel difference between two colors.
pub fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    (0..3).map(|i| (a[i] - b[i]).abs()).fold(0.0, f64::max)
}

/// Returns `true` if every entry is 0 or +-1 with one non-zero per row.
pub fn is_signed_permutation(m: &ipf_math::Mat3) -> bool {
    m.m.iter().all(|row| {
        row.iter().all(|v| *v == 0.0 || v.abs() == 1.0)
            && row.iter().filter(|v| **v != 0.0).count() == 1
    })
}

#[cfg(test)]
mod continuity;
#[cfg(test)]
mod coverage;
#[cfg(test)]
mod invariance;
#[cfg(test)]
mod scenarios;
