//! Core type definitions.
//!
//! This module provides:
//! - `params`: Validated market and contract parameter types
//! - `error`: Input validation errors
//! - `dual`: Dual number type aliases for automatic differentiation

pub mod dual;
pub mod error;
pub mod params;

pub use dual::{Dual2_64, Dual64};
pub use error::InputError;
pub use params::{Barrier, BarrierDirection, MarketParams, OptionKind};
