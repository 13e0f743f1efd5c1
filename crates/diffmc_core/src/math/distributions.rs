//! Standard normal distribution functions.
//!
//! This module provides AD-compatible implementations of:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `D: DualNum<f64>` so the same code serves
//! `f64` evaluation and dual-number differentiation.

use num_dual::DualNum;

/// 1 / sqrt(2)
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

// Abramowitz and Stegun constants (7.1.26).
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26), maximum
/// error 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
///
/// # AD Compatibility
/// The branch for negative x uses the exact identity erfc(-x) = 2 - erfc(x),
/// which holds for derivatives of all orders, so dual parts stay consistent
/// across the sign flip. The sign test reads the real part only since dual
/// numbers are not ordered.
#[inline]
fn erfc<D: DualNum<f64> + Copy>(x: D) -> D {
    let abs_x = x.abs();

    // t = 1 / (1 + p * |x|)
    let t = (abs_x * P + 1.0).recip();

    // Horner's method; scalar coefficients go on the right of the dual.
    let mut poly = t * A5 + A4;
    poly = poly * t + A3;
    poly = poly * t + A2;
    poly = poly * t + A1;

    // erfc(|x|) = t * poly * exp(-x²)
    let erfc_abs = t * poly * (-(abs_x * abs_x)).exp();

    if x.re() < 0.0 {
        -erfc_abs + 2.0
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) via the complementary error
/// function: Φ(x) = (1/2) · erfc(-x / √2).
///
/// # Accuracy
/// Accurate to at least 1e-7 for all finite x values.
///
/// # Examples
/// ```
/// use diffmc_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
/// ```
#[inline]
pub fn norm_cdf<D: DualNum<f64> + Copy>(x: D) -> D {
    erfc(-x * FRAC_1_SQRT_2) * 0.5
}

/// Standard normal probability density function.
///
/// Computes φ(x) = (1 / √(2π)) · exp(-x² / 2).
///
/// # Examples
/// ```
/// use diffmc_core::math::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<D: DualNum<f64> + Copy>(x: D) -> D {
    (-(x * x) * 0.5).exp() * FRAC_1_SQRT_2PI
}
