//! Dual number type aliases for automatic differentiation.
//!
//! The analytic pricing functions in this workspace are generic over
//! [`num_dual::DualNum`], so the same code path produces plain `f64` prices
//! and exact derivatives when instantiated with dual numbers.
//!
//! ## Usage
//!
//! ```rust
//! use diffmc_core::types::dual::Dual64;
//! use diffmc_core::math::distributions::{norm_cdf, norm_pdf};
//!
//! // Seed the dual part to differentiate with respect to x
//! let x = Dual64::new(0.5, 1.0);
//! let phi = norm_cdf(x);
//!
//! // d/dx Φ(x) = φ(x)
//! assert!((phi.eps - norm_pdf(0.5_f64)).abs() < 1e-5);
//! ```

/// First-order dual number over `f64`.
///
/// - `re`: real part (function value)
/// - `eps`: dual part (first derivative)
pub type Dual64 = num_dual::Dual64;

/// Second-order dual number over `f64`.
///
/// Carries the value (`re`), first derivative (`v1`) and second derivative
/// (`v2`) of a scalar function of one variable. Used for Gamma.
pub type Dual2_64 = num_dual::Dual2_64;
