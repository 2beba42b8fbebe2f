//! Cubic polynomials for corner fillets.
//!
//! A [`Cubic`] blends two curves meeting at a corner. It is fit on the
//! symmetric interval `[-1, 1]` so that both value and slope match the
//! incoming curve at `x = -1` and the outgoing curve at `x = 1`, which makes
//! the blended curve C1 continuous (the same idea as `smoothstep`, with
//! arbitrary end slopes).
//!
//! # Usage
//!
//! ```rust
//! use ipf_math::Cubic;
//!
//! let p = Cubic::hermite(1.0, 0.0, 2.0, 0.0);
//! assert!((p.eval(-1.0) - 1.0).abs() < 1e-12);
//! assert!((p.eval(1.0) - 2.0).abs() < 1e-12);
//! ```

/// Cubic polynomial `a x^3 + b x^2 + c x + d`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cubic {
    /// Cubic coefficient
    pub a: f64,
    /// Quadratic coefficient
    pub b: f64,
    /// Linear coefficient
    pub c: f64,
    /// Constant term
    pub d: f64,
}

impl Cubic {
    /// Creates a polynomial from its coefficients, highest power first.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Hermite cubic on `[-1, 1]`.
    ///
    /// # Arguments
    ///
    /// * `v1` - Value at `x = -1`
    /// * `m1` - Slope `dp/dx` at `x = -1`
    /// * `v2` - Value at `x = 1`
    /// * `m2` - Slope `dp/dx` at `x = 1`
    ///
    /// Slopes are with respect to the normalized `x`; a slope measured in
    /// some other parameter `t` must be scaled by `dt/dx` first.
    pub fn hermite(v1: f64, m1: f64, v2: f64, m2: f64) -> Self {
        Self::new(
            (m1 + m2 + v1 - v2) / 4.0,
            (m2 - m1) / 4.0,
            (3.0 * (v2 - v1) - m1 - m2) / 4.0,
            (m1 - m2 + 2.0 * (v1 + v2)) / 4.0,
        )
    }

    /// Evaluates the polynomial (Horner form).
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }
}
