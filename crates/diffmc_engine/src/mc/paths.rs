//! GBM path generation for Monte Carlo simulation.
//!
//! Paths follow risk-neutral Geometric Brownian Motion simulated in log
//! space: the engine accumulates log-increments per path and exponentiates,
//! never multiplying raw prices step by step. This keeps every stored price
//! strictly positive by construction and makes the recurrence a cumulative
//! sum over the step axis.
//!
//! # Memory Layout
//!
//! Paths are stored row-major: `paths[path_idx * (n_steps + 1) + step_idx]`,
//! with `step_idx = 0` holding the initial spot.

use diffmc_core::types::MarketParams;
use rayon::prelude::*;

use super::config::Backend;
use super::error::EngineError;
use super::workspace::PathWorkspace;

/// Evolves a single path row from its pre-drawn normal samples.
///
/// `row` has length `n_steps + 1` and `randoms` length `n_steps`. The
/// recurrence is `log_s += drift_dt + vol_sqrt_dt * z`, with the price
/// recovered as `spot * exp(log_s)`.
#[inline]
fn evolve_path(row: &mut [f64], randoms: &[f64], spot: f64, drift_dt: f64, vol_sqrt_dt: f64) {
    row[0] = spot;
    let mut log_s = 0.0;
    for (slot, &z) in row[1..].iter_mut().zip(randoms) {
        log_s += drift_dt + vol_sqrt_dt * z;
        *slot = spot * log_s.exp();
    }
}

/// Generates GBM paths from the random samples already in the workspace.
///
/// Precomputes `drift_dt = (r - σ²/2)·dt` and `vol_sqrt_dt = σ·√dt` with
/// `dt = T / n_steps`, then evolves each path row independently. Paths are
/// mutually independent, so under [`Backend::Parallel`] the rows are
/// distributed with `par_chunks_mut`; the output is bit-identical to
/// sequential execution because all randomness is pre-drawn.
///
/// The parallel arm runs in whatever rayon pool is installed by the caller.
pub fn generate_gbm_paths(workspace: &mut PathWorkspace, params: MarketParams, backend: Backend) {
    let n_steps = workspace.size_steps();
    let dt = params.expiry() / n_steps as f64;
    let vol = params.volatility();
    let drift_dt = (params.rate() - 0.5 * vol * vol) * dt;
    let vol_sqrt_dt = vol * dt.sqrt();
    let spot = params.spot();

    let (paths, randoms) = workspace.paths_mut_and_randoms();

    match backend {
        Backend::Sequential => {
            for (row, zs) in paths.chunks_mut(n_steps + 1).zip(randoms.chunks(n_steps)) {
                evolve_path(row, zs, spot, drift_dt, vol_sqrt_dt);
            }
        }
        Backend::Parallel { .. } => {
            paths
                .par_chunks_mut(n_steps + 1)
                .zip(randoms.par_chunks(n_steps))
                .for_each(|(row, zs)| evolve_path(row, zs, spot, drift_dt, vol_sqrt_dt));
        }
    }
}

/// Checks every stored price is finite and strictly positive.
///
/// Log-space simulation cannot produce a negative price, but extreme inputs
/// can overflow `exp` to infinity. The first offending entry is reported
/// with its path and step indices.
///
/// # Errors
///
/// Returns [`EngineError::NumericalInstability`] for the first invalid
/// entry.
pub fn validate_paths(paths: &[f64], n_steps: usize) -> Result<(), EngineError> {
    for (path_idx, row) in paths.chunks(n_steps + 1).enumerate() {
        for (step_idx, &value) in row.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::NumericalInstability {
                    path: path_idx,
                    step: step_idx,
                    value,
                });
            }
        }
    }
    Ok(())
}
