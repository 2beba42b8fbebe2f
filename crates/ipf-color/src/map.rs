//! The sphere color map interface.
//!
//! [`SphereColorMap`] is the single capability the coloring core needs from
//! a color space. Implementations decide how hue and lightness are laid out
//! perceptually; the core only guarantees that symmetry-equivalent
//! directions produce identical `(azimuth, polar, has_mirror)` arguments.

use crate::Rgb;

/// Maps a fractional position on the color sphere to RGB.
///
/// # Arguments
///
/// * `azimuth` - Fractional azimuth in [0, 1), measured from the red vertex
/// * `polar` - Fractional polar value in [0, 1]: 0 is the black pole, 0.5 the
///   saturated equator, 1 the white pole
/// * `has_mirror` - True when the crystal class has mirror planes through
///   the sector boundary. Maps may use it to pick a layout; it does not
///   restrict `polar` to either hemisphere
///
/// Closures `Fn(f64, f64, bool) -> Rgb` implement this trait, which is handy
/// for tests and for wrapping lookup tables:
///
/// ```rust
/// use ipf_color::SphereColorMap;
///
/// let gray = |_az: f64, polar: f64, _m: bool| [polar; 3];
/// assert_eq!(gray.color(0.3, 0.25, false), [0.25; 3]);
/// ```
pub trait SphereColorMap {
    /// Looks up the color at a fractional sphere position.
    fn color(&self, azimuth: f64, polar: f64, has_mirror: bool) -> Rgb;
}

impl<F> SphereColorMap for F
where
    F: Fn(f64, f64, bool) -> Rgb,
{
    #[inline]
    fn color(&self, azimuth: f64, polar: f64, has_mirror: bool) -> Rgb {
        self(azimuth, polar, has_mirror)
    }
}

/// Reference sphere map: HSL with full saturation.
///
/// Hue follows the azimuth (0 red, 1/3 green, 2/3 blue) and lightness
/// follows the polar value. It is continuous over the whole sphere, which is
/// all the coloring core requires, but it is not perceptually uniform; swap
/// in a perceptual map for publication figures.
///
/// Both hemispheres use the same layout, so `has_mirror` does not change the
/// result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HslSphere;

impl SphereColorMap for HslSphere {
    #[inline]
    fn color(&self, azimuth: f64, polar: f64, _has_mirror: bool) -> Rgb {
        hsl_to_rgb(azimuth.rem_euclid(1.0) * 360.0, 1.0, polar.clamp(0.0, 1.0))
    }
}

/// Convert HSL to RGB.
///
/// `h` in degrees [0, 360), `s` and `l` in [0, 1].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    [r1 + m, g1 + m, b1 + m]
}
