//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer tying the kernel together:
//!
//! 1. Random number generation (via [`SimRng`](crate::rng::SimRng))
//! 2. Path generation (via [`generate_gbm_paths`](super::paths::generate_gbm_paths))
//! 3. Barrier monitoring (via [`breach_flags`](super::barrier::breach_flags))
//! 4. Payoff evaluation, discounting and aggregation
//!
//! # Determinism
//!
//! The pricer resolves its seed once at construction (from the config, or
//! from entropy when the config leaves it unset) and resets the generator
//! to that seed at the start of every pricing call. Two calls with the same
//! parameters therefore return identical estimates, and bumped revaluations
//! automatically share random numbers with the base run.
//!
//! # Workspace Reuse
//!
//! The pricer owns a [`PathWorkspace`](super::workspace::PathWorkspace)
//! reused across calls, so repeated pricing does not reallocate.

use diffmc_core::types::{Barrier, MarketParams, OptionKind};
use rayon::ThreadPoolBuilder;

use super::barrier::{breach_flags, corrected_level, survival_mask, Monitoring};
use super::config::{Backend, SimulationConfig};
use super::error::EngineError;
use super::paths::{generate_gbm_paths, validate_paths};
use super::payoff::{apply_knockout, compute_terminal_payoffs};
use super::workspace::PathWorkspace;
use crate::rng::SimRng;

/// Discounted Monte Carlo price estimate.
///
/// Carries the sample standard error so callers can form confidence
/// intervals, and the seed that produced the estimate so any run can be
/// reproduced, including runs that drew their seed from entropy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceEstimate {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the price estimate (discounted).
    pub std_error: f64,
    /// Seed that produced this estimate.
    pub seed: u64,
}

impl PriceEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine for vanilla and knock-out barrier options.
///
/// # Examples
///
/// ```rust
/// use diffmc_core::types::{Barrier, BarrierDirection, MarketParams, OptionKind};
/// use diffmc_engine::mc::{MonteCarloPricer, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config);
///
/// let params = MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
/// let vanilla = pricer.price_vanilla(params, OptionKind::Call).unwrap();
///
/// let barrier = Barrier::new(90.0, BarrierDirection::Down).unwrap();
/// let knock_out = pricer.price_barrier(params, OptionKind::Call, barrier).unwrap();
/// assert!(knock_out.price <= vanilla.price + vanilla.confidence_95());
/// ```
pub struct MonteCarloPricer {
    config: SimulationConfig,
    workspace: PathWorkspace,
    rng: SimRng,
    /// Seed resolved at construction; every call replays from it.
    seed: u64,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    ///
    /// When the config has no seed, one is drawn from entropy here and
    /// reported in every [`PriceEstimate`].
    pub fn new(config: SimulationConfig) -> Self {
        let seed = config.seed().unwrap_or_else(rand::random);
        let workspace = PathWorkspace::new(config.n_paths(), config.n_steps());
        Self {
            config,
            workspace,
            rng: SimRng::from_seed(seed),
            seed,
        }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the resolved seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Prices a vanilla European option.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NumericalInstability`] if a simulated price
    /// leaves the valid domain, or [`EngineError::BackendFailure`] if the
    /// parallel backend cannot be acquired.
    pub fn price_vanilla(
        &mut self,
        params: MarketParams,
        kind: OptionKind,
    ) -> Result<PriceEstimate, EngineError> {
        self.simulate(params, kind, None, self.config.backend())
    }

    /// Prices a knock-out barrier option with continuity correction.
    ///
    /// The barrier level is shifted by the Broadie–Glasserman–Kou factor
    /// before monitoring; see [`Monitoring`] for the uncorrected variant.
    ///
    /// # Errors
    ///
    /// As [`price_vanilla`](Self::price_vanilla).
    pub fn price_barrier(
        &mut self,
        params: MarketParams,
        kind: OptionKind,
        barrier: Barrier,
    ) -> Result<PriceEstimate, EngineError> {
        self.price_barrier_monitored(params, kind, barrier, Monitoring::Corrected)
    }

    /// Prices a knock-out barrier option with explicit monitoring choice.
    ///
    /// [`Monitoring::Uncorrected`] monitors the raw level and retains the
    /// discretisation bias; it exists for bias studies and comparison
    /// against continuously monitored closed forms.
    ///
    /// # Errors
    ///
    /// As [`price_vanilla`](Self::price_vanilla).
    pub fn price_barrier_monitored(
        &mut self,
        params: MarketParams,
        kind: OptionKind,
        barrier: Barrier,
        monitoring: Monitoring,
    ) -> Result<PriceEstimate, EngineError> {
        self.simulate(
            params,
            kind,
            Some((barrier, monitoring)),
            self.config.backend(),
        )
    }

    /// Prices a knock-out barrier option, falling back to sequential
    /// execution if the parallel backend cannot be acquired.
    ///
    /// The fallback is a single explicit retry on [`Backend::Sequential`],
    /// logged at warn level. Numerical results are identical on either
    /// backend, so the fallback changes only where the work runs.
    ///
    /// # Errors
    ///
    /// As [`price_vanilla`](Self::price_vanilla), except that
    /// [`EngineError::BackendFailure`] is consumed by the retry.
    pub fn price_barrier_with_fallback(
        &mut self,
        params: MarketParams,
        kind: OptionKind,
        barrier: Barrier,
    ) -> Result<PriceEstimate, EngineError> {
        match self.simulate(
            params,
            kind,
            Some((barrier, Monitoring::Corrected)),
            self.config.backend(),
        ) {
            Err(EngineError::BackendFailure { message }) => {
                tracing::warn!(%message, "parallel backend unavailable, retrying sequentially");
                self.simulate(
                    params,
                    kind,
                    Some((barrier, Monitoring::Corrected)),
                    Backend::Sequential,
                )
            }
            other => other,
        }
    }

    /// Runs one full simulation and reduces it to a discounted estimate.
    fn simulate(
        &mut self,
        params: MarketParams,
        kind: OptionKind,
        barrier: Option<(Barrier, Monitoring)>,
        backend: Backend,
    ) -> Result<PriceEstimate, EngineError> {
        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();

        // Replay from the resolved seed so every call is deterministic and
        // bumped revaluations share random numbers with the base run.
        self.rng = SimRng::from_seed(self.seed);
        self.workspace.ensure_capacity(n_paths, n_steps);
        self.rng.fill_normal(self.workspace.randoms_mut());

        match backend {
            Backend::Sequential => {
                generate_gbm_paths(&mut self.workspace, params, Backend::Sequential);
            }
            Backend::Parallel { threads } => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::BackendFailure {
                        message: e.to_string(),
                    })?;
                // Pool is scoped to this call and dropped with it.
                pool.install(|| {
                    generate_gbm_paths(&mut self.workspace, params, backend);
                });
            }
        }

        validate_paths(self.workspace.paths(), n_steps)?;

        let (paths, payoffs) = self.workspace.paths_and_payoffs_mut();
        compute_terminal_payoffs(paths, payoffs, n_steps, params.strike(), kind);

        if let Some((barrier, monitoring)) = barrier {
            let level = match monitoring {
                Monitoring::Corrected => {
                    let dt = params.expiry() / n_steps as f64;
                    corrected_level(barrier, params.volatility(), dt)
                }
                Monitoring::Uncorrected => barrier.level(),
            };
            let breached = breach_flags(paths, n_steps, level, barrier.direction());
            let mask = survival_mask(&breached);
            apply_knockout(payoffs, &mask);
        }

        let estimate = self.reduce(params);
        tracing::debug!(
            seed = self.seed,
            n_paths,
            n_steps,
            price = estimate.price,
            std_error = estimate.std_error,
            "monte carlo pricing complete"
        );
        Ok(estimate)
    }

    /// Discounted mean and standard error of the payoff buffer.
    fn reduce(&self, params: MarketParams) -> PriceEstimate {
        let payoffs = self.workspace.payoffs();
        let n = payoffs.len() as f64;

        let mean = payoffs.iter().sum::<f64>() / n;
        let std_error = if payoffs.len() > 1 {
            let variance =
                payoffs.iter().map(|&p| (p - mean) * (p - mean)).sum::<f64>() / (n - 1.0);
            (variance / n).sqrt()
        } else {
            0.0
        };

        let discount = (-params.rate() * params.expiry()).exp();
        PriceEstimate {
            price: mean * discount,
            std_error: std_error * discount,
            seed: self.seed,
        }
    }
}
