//! Standard normal distribution functions.
//!
//! This module provides the two transcendental helpers every closed form in
//! the workspace is built on:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Φ is computed from a complementary error function approximation carried
//! in-crate rather than pulled from a special-functions dependency. All
//! functions are generic over `T: Float` to support both `f64` and `f32`.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which
/// provides maximum error of 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    // The approximation is stated for x >= 0; the reflection
    // erfc(-x) = 2 - erfc(x) covers the negative half-line.
    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    // t = 1 / (1 + p * |x|)
    let t = one / (one + p * abs_x);

    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) via the complementary error function:
/// Φ(x) = (1/2) * erfc(-x / √2).
///
/// # Accuracy
/// Inherits the erfc approximation error, so results are accurate to about
/// 1.5e-7 for all finite x. Output always lies in [0, 1].
///
/// # Examples
/// ```
/// use vanilla_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// Computes φ(x) = (1 / √(2π)) * e^(-x²/2) directly from the closed form.
///
/// # Examples
/// ```
/// use vanilla_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
///
/// // φ is symmetric
/// assert!((norm_pdf(1.5_f64) - norm_pdf(-1.5_f64)).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}
