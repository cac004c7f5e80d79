//! The assembled matrix of simulated paths.

use ratesim_models::{ModelParameters, RatePath};

/// A batch of independent simulated rate paths.
///
/// Conceptually an `N x M` matrix: `N` rows (time steps) by `M` columns
/// (simulation runs), column `i` holding one independent [`RatePath`]. All
/// columns share the same step count and the same [`ModelParameters`].
///
/// The batch is owned by the engine that produced it and replaced wholesale
/// by the next run; paths are immutable once assembled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationBatch {
    params: ModelParameters,
    paths: Vec<RatePath>,
}

impl SimulationBatch {
    /// Assembles a batch from generated paths.
    ///
    /// The engine guarantees every path came from `params`, so the uniform
    /// length invariant is checked with a debug assertion only.
    pub(crate) fn new(params: ModelParameters, paths: Vec<RatePath>) -> Self {
        debug_assert!(!paths.is_empty());
        debug_assert!(paths.iter().all(|p| p.len() == params.n_steps()));
        Self { params, paths }
    }

    /// Returns the parameters shared by every column.
    #[inline]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Returns the number of time steps (rows).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.params.n_steps()
    }

    /// Returns the number of simulation runs (columns).
    #[inline]
    pub fn n_runs(&self) -> usize {
        self.paths.len()
    }

    /// Returns column `i`, if it exists.
    #[inline]
    pub fn path(&self, i: usize) -> Option<&RatePath> {
        self.paths.get(i)
    }

    /// Returns all columns in run order.
    #[inline]
    pub fn paths(&self) -> &[RatePath] {
        &self.paths
    }

    /// Iterates over the columns free of numerical anomalies.
    pub fn valid_paths(&self) -> impl Iterator<Item = &RatePath> {
        self.paths.iter().filter(|p| p.is_valid())
    }

    /// Returns how many columns carry a numerical anomaly.
    pub fn anomalous_count(&self) -> usize {
        self.paths.iter().filter(|p| !p.is_valid()).count()
    }
}
