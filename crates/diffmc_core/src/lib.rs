//! # diffmc_core: Foundation Layer for Differentiable Barrier Pricing
//!
//! ## Layer Role
//!
//! diffmc_core is the leaf layer of the two-crate workspace, providing:
//! - Validated market and contract parameter types (`types::params`)
//! - Dual number type integration (`types::dual`)
//! - Structured input error types (`types::error`)
//! - AD-compatible standard normal distribution functions (`math::distributions`)
//!
//! ## Minimal Dependency Principle
//!
//! The foundation layer carries no simulation machinery, only:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types for forward-mode automatic differentiation
//! - thiserror: Derived error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use diffmc_core::math::distributions::norm_cdf;
//! use diffmc_core::types::{Barrier, BarrierDirection, MarketParams};
//!
//! // Validated construction
//! let params = MarketParams::new(100.0, 110.0, 2.0, 0.2, 0.03).unwrap();
//! let barrier = Barrier::new(90.0, BarrierDirection::Down).unwrap();
//! assert!(barrier.level() < params.spot());
//!
//! // AD-compatible distribution functions
//! let phi = norm_cdf(0.0_f64);
//! assert!((phi - 0.5).abs() < 1e-7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
