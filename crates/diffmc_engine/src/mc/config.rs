//! Monte Carlo simulation configuration.
//!
//! This module provides the immutable [`SimulationConfig`] and its builder,
//! plus the [`Backend`] selection for path-level execution.

use super::error::EngineError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Execution backend for the bulk per-path operations.
///
/// The backend never changes the numeric result: paths are generated from
/// pre-drawn random buffers, so sequential and parallel execution are
/// bit-identical. It only changes where the per-path loops run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Backend {
    /// Plain iteration on the calling thread.
    #[default]
    Sequential,

    /// Scoped rayon thread pool, built per pricing call and dropped with it.
    Parallel {
        /// Worker thread count; 0 lets rayon pick the default.
        threads: usize,
    },
}

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`SimulationConfig::builder`] to construct
/// instances; dimension validation happens at `build()`.
///
/// # Examples
///
/// ```rust
/// use diffmc_engine::mc::{Backend, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(100_000)
///     .n_steps(252)
///     .seed(42)
///     .backend(Backend::Parallel { threads: 4 })
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility; `None` draws from entropy.
    seed: Option<u64>,
    /// Execution backend.
    backend: Backend,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the execution backend.
    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use diffmc_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)  // Daily steps for 1 year
///     .seed(12345)
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    backend: Backend,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// When no seed is set, the pricer draws one from entropy at
    /// construction and reports it in the result.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the execution backend.
    #[inline]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Builds the configuration, validating dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPathCount`] or
    /// [`EngineError::InvalidStepCount`] when a dimension is zero, missing,
    /// or above its maximum.
    pub fn build(self) -> Result<SimulationConfig, EngineError> {
        let n_paths = self.n_paths.unwrap_or(0);
        let n_steps = self.n_steps.unwrap_or(0);

        if n_paths == 0 || n_paths > MAX_PATHS {
            return Err(EngineError::InvalidPathCount(n_paths));
        }
        if n_steps == 0 || n_steps > MAX_STEPS {
            return Err(EngineError::InvalidStepCount(n_steps));
        }

        Ok(SimulationConfig {
            n_paths,
            n_steps,
            seed: self.seed,
            backend: self.backend,
        })
    }
}
