//! Integration tests for dual-number differentiation through the
//! distribution functions.

use approx::assert_relative_eq;
use diffmc_core::math::distributions::{norm_cdf, norm_pdf};
use diffmc_core::types::dual::Dual64;

#[test]
fn cdf_gradient_matches_density_on_grid() {
    // Φ'(x) = φ(x) across a grid spanning both erfc branches
    let mut x = -4.0;
    while x <= 4.0 {
        let cdf = norm_cdf(Dual64::new(x, 1.0));
        assert_relative_eq!(cdf.re, norm_cdf(x), epsilon = 1e-15);
        assert_relative_eq!(cdf.eps, norm_pdf(x), epsilon = 1e-5);
        x += 0.25;
    }
}

#[test]
fn pdf_gradient_matches_analytic() {
    // φ'(x) = -x · φ(x)
    for &x in &[-1.7, -0.3, 0.0, 0.9, 2.4] {
        let pdf = norm_pdf(Dual64::new(x, 1.0));
        assert_relative_eq!(pdf.eps, -x * norm_pdf(x), epsilon = 1e-12);
    }
}

#[test]
fn second_derivative_of_cdf() {
    // Φ''(x) = -x · φ(x), via second-order duals
    let (value, first, second) = num_dual::second_derivative(|x| norm_cdf(x), 0.7);
    assert_relative_eq!(value, norm_cdf(0.7), epsilon = 1e-15);
    assert_relative_eq!(first, norm_pdf(0.7), epsilon = 1e-5);
    assert_relative_eq!(second, -0.7 * norm_pdf(0.7), epsilon = 1e-4);
}
