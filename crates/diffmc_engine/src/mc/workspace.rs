//! Pre-allocated workspace buffers for Monte Carlo simulation.
//!
//! This module provides [`PathWorkspace`], which owns the buffers the
//! simulation loop operates on so that repeated pricing calls do not
//! reallocate.
//!
//! # Memory Layout
//!
//! All buffers use row-major contiguous layout:
//! - `randoms`: n_paths × n_steps (standard normal samples)
//! - `paths`: n_paths × (n_steps + 1) (price paths, step 0 holds the spot)
//! - `payoffs`: n_paths (per-path discounted-payoff inputs)

/// Pre-allocated workspace for Monte Carlo simulation.
///
/// All allocation happens in [`new`](Self::new) and
/// [`ensure_capacity`](Self::ensure_capacity); the simulation loop operates
/// on slices without heap allocation.
///
/// # Examples
///
/// ```rust
/// use diffmc_engine::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(1000, 252);
/// workspace.randoms_mut().fill(0.0);
/// assert_eq!(workspace.paths().len(), 1000 * 253);
/// ```
pub struct PathWorkspace {
    /// Standard normal samples (n_paths × n_steps).
    randoms: Vec<f64>,
    /// Price paths (n_paths × (n_steps + 1)).
    paths: Vec<f64>,
    /// Payoff values per path (n_paths).
    payoffs: Vec<f64>,
    /// Current capacity for the paths dimension.
    capacity_paths: usize,
    /// Current capacity for the steps dimension.
    capacity_steps: usize,
    /// Logical size for the paths dimension.
    size_paths: usize,
    /// Logical size for the steps dimension.
    size_steps: usize,
}

impl PathWorkspace {
    /// Creates a workspace sized for `n_paths` × `n_steps` simulations.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        Self {
            randoms: vec![0.0; n_paths * n_steps],
            paths: vec![0.0; n_paths * (n_steps + 1)],
            payoffs: vec![0.0; n_paths],
            capacity_paths: n_paths,
            capacity_steps: n_steps,
            size_paths: n_paths,
            size_steps: n_steps,
        }
    }

    /// Ensures capacity for the given dimensions, growing if necessary.
    ///
    /// Growth uses a doubling strategy and buffers never shrink, so varying
    /// simulation sizes do not cause repeated reallocation.
    pub fn ensure_capacity(&mut self, n_paths: usize, n_steps: usize) {
        if n_paths > self.capacity_paths || n_steps > self.capacity_steps {
            let new_capacity_paths = n_paths.max(self.capacity_paths * 2);
            let new_capacity_steps = n_steps.max(self.capacity_steps * 2);

            self.randoms
                .resize(new_capacity_paths * new_capacity_steps, 0.0);
            self.paths
                .resize(new_capacity_paths * (new_capacity_steps + 1), 0.0);
            self.payoffs.resize(new_capacity_paths, 0.0);

            self.capacity_paths = new_capacity_paths;
            self.capacity_steps = new_capacity_steps;
        }

        self.size_paths = n_paths;
        self.size_steps = n_steps;
    }

    /// Returns the logical number of paths.
    #[inline]
    pub fn size_paths(&self) -> usize {
        self.size_paths
    }

    /// Returns the logical number of steps.
    #[inline]
    pub fn size_steps(&self) -> usize {
        self.size_steps
    }

    /// Returns the random sample buffer for the logical size.
    #[inline]
    pub fn randoms(&self) -> &[f64] {
        &self.randoms[..self.size_paths * self.size_steps]
    }

    /// Returns the mutable random sample buffer for the logical size.
    #[inline]
    pub fn randoms_mut(&mut self) -> &mut [f64] {
        &mut self.randoms[..self.size_paths * self.size_steps]
    }

    /// Returns the path buffer for the logical size.
    #[inline]
    pub fn paths(&self) -> &[f64] {
        &self.paths[..self.size_paths * (self.size_steps + 1)]
    }

    /// Returns the payoff buffer for the logical size.
    #[inline]
    pub fn payoffs(&self) -> &[f64] {
        &self.payoffs[..self.size_paths]
    }

    /// Returns the mutable payoff buffer for the logical size.
    #[inline]
    pub fn payoffs_mut(&mut self) -> &mut [f64] {
        &mut self.payoffs[..self.size_paths]
    }

    /// Returns the mutable path buffer together with the random samples.
    ///
    /// Split borrow so path generation can read randoms while writing paths.
    #[inline]
    pub fn paths_mut_and_randoms(&mut self) -> (&mut [f64], &[f64]) {
        (
            &mut self.paths[..self.size_paths * (self.size_steps + 1)],
            &self.randoms[..self.size_paths * self.size_steps],
        )
    }

    /// Returns the path buffer together with the mutable payoff buffer.
    ///
    /// Split borrow so payoff evaluation can read paths while writing
    /// payoffs.
    #[inline]
    pub fn paths_and_payoffs_mut(&mut self) -> (&[f64], &mut [f64]) {
        (
            &self.paths[..self.size_paths * (self.size_steps + 1)],
            &mut self.payoffs[..self.size_paths],
        )
    }

    /// Returns the flat index of `paths[path_idx][step_idx]`.
    #[inline]
    pub fn path_index(&self, path_idx: usize, step_idx: usize) -> usize {
        path_idx * (self.size_steps + 1) + step_idx
    }
}
