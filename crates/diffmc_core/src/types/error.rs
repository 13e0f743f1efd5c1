//! Input validation errors.
//!
//! This module provides [`InputError`], the structured error type raised when
//! market or contract parameters fail construction-time validation. Validation
//! happens once at construction; pricing code downstream relies on the
//! invariants and never re-checks them.

use thiserror::Error;

/// Invalid market or contract input.
///
/// Each variant carries the offending value so that error messages identify
/// exactly which parameter failed and why.
///
/// # Examples
/// ```
/// use diffmc_core::types::InputError;
///
/// let err = InputError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    /// Spot price must be positive and finite.
    #[error("Invalid spot price: S = {spot} (must be positive and finite)")]
    InvalidSpot {
        /// The invalid spot price value.
        spot: f64,
    },

    /// Strike must be positive and finite.
    #[error("Invalid strike: K = {strike} (must be positive and finite)")]
    InvalidStrike {
        /// The invalid strike value.
        strike: f64,
    },

    /// Expiry (year fraction) must be positive and finite.
    #[error("Invalid expiry: T = {expiry} (must be positive and finite)")]
    InvalidExpiry {
        /// The invalid expiry value.
        expiry: f64,
    },

    /// Volatility must be positive and finite.
    #[error("Invalid volatility: σ = {volatility} (must be positive and finite)")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// The risk-free rate may be any finite real.
    #[error("Invalid rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The invalid rate value.
        rate: f64,
    },

    /// Barrier level must be positive and finite.
    #[error("Invalid barrier level: B = {level} (must be positive and finite)")]
    InvalidBarrierLevel {
        /// The invalid barrier level.
        level: f64,
    },
}
