//! Output quantization.

use crate::Rgb;

/// Quantizes a color to 8 bits per channel.
///
/// Components are clamped to [0, 1] and rounded to nearest.
///
/// # Example
///
/// ```rust
/// use ipf_color::to_u8;
///
/// assert_eq!(to_u8([1.0, 0.5, -0.1]), [255, 128, 0]);
/// ```
#[inline]
pub fn to_u8(rgb: Rgb) -> [u8; 3] {
    rgb.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Formats a color as `#rrggbb`.
///
/// ```rust
/// use ipf_color::to_hex;
///
/// assert_eq!(to_hex([1.0, 0.0, 1.0]), "#ff00ff");
/// ```
pub fn to_hex(rgb: Rgb) -> String {
    let [r, g, b] = to_u8(rgb);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
