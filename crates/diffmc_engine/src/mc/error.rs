//! Error types for the Monte Carlo pricing kernel.
//!
//! This module defines [`EngineError`], covering configuration validation,
//! runtime numerical failures, and backend acquisition failures.

use diffmc_core::types::InputError;
use thiserror::Error;

/// Monte Carlo engine error.
///
/// # Variants
/// - `InvalidInput`: market/contract parameter validation failure
/// - `InvalidPathCount` / `InvalidStepCount`: simulation dimensions outside
///   the supported range
/// - `NumericalInstability`: a simulated price was non-finite or
///   non-positive; reported with its path and step indices, never masked
/// - `BackendFailure`: the parallel backend could not be acquired;
///   recoverable through the explicit sequential fallback entry point
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Market or contract parameters failed validation.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, 10_000_000]")]
    InvalidPathCount(usize),

    /// Step count outside the valid range.
    #[error("Invalid step count {0}: must be in range [1, 10_000]")]
    InvalidStepCount(usize),

    /// A simulated price left the valid domain.
    #[error("Numerical instability: path {path}, step {step} produced {value}")]
    NumericalInstability {
        /// Index of the offending path.
        path: usize,
        /// Step index within the path (0 is the initial spot).
        step: usize,
        /// The offending value.
        value: f64,
    },

    /// The parallel execution backend could not be acquired.
    #[error("Backend failure: {message}")]
    BackendFailure {
        /// Description of the acquisition failure.
        message: String,
    },
}
