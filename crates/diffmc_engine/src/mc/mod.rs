//! Monte Carlo pricing kernel.
//!
//! This module contains the simulation pipeline:
//!
//! - [`config`]: simulation configuration and backend selection
//! - [`workspace`]: pre-allocated simulation buffers
//! - [`paths`]: log-space GBM path generation and validation
//! - [`barrier`]: discrete monitoring with continuity correction
//! - [`payoff`]: terminal payoff evaluation and knock-out masking
//! - [`pricer`]: orchestration, discounting and aggregation
//! - [`error`]: engine error types

pub mod barrier;
pub mod config;
pub mod error;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod workspace;

pub use barrier::{breach_flags, corrected_level, survival_mask, Monitoring, CONTINUITY_BETA};
pub use config::{Backend, SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::EngineError;
pub use paths::{generate_gbm_paths, validate_paths};
pub use payoff::{apply_knockout, compute_terminal_payoffs, terminal_payoff};
pub use pricer::{MonteCarloPricer, PriceEstimate};
pub use workspace::PathWorkspace;
