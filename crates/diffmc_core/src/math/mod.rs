//! Mathematical functions for pricing.

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
