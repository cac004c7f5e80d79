//! Monte Carlo batch orchestration.

use rayon::prelude::*;

use super::batch::SimulationBatch;
use super::error::StatisticsError;
use super::stats::SummaryStatistics;
use crate::rng::SimRng;
use ratesim_models::{ConfigurationError, ModelParameters, ShortRateModel};

/// Orchestrates repeated path generation and exposes batch statistics.
///
/// The engine retains the most recent batch; a new run replaces it. All
/// validation happens before the first random draw is consumed, so a failed
/// run leaves the previous batch intact and the draw stream untouched.
///
/// # Examples
///
/// ```rust
/// use ratesim_mc::{MonteCarloEngine, SimRng};
/// use ratesim_models::{ModelParameters, ShortRateModel};
///
/// let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 5).unwrap();
/// let mut engine = MonteCarloEngine::new();
/// let mut rng = SimRng::from_seed(42);
///
/// let batch = engine.run(&ShortRateModel::cir(), &params, 50, &mut rng).unwrap();
/// assert_eq!(batch.n_steps(), 5);
/// assert_eq!(batch.n_runs(), 50);
/// ```
#[derive(Debug, Default)]
pub struct MonteCarloEngine {
    batch: Option<SimulationBatch>,
}

impl MonteCarloEngine {
    /// Creates an engine with no stored batch.
    pub fn new() -> Self {
        Self { batch: None }
    }

    /// Runs `number_of_simulations` independent simulations sequentially.
    ///
    /// Draws are consumed from the one shared stream in a fixed, reproducible
    /// order: simulation 1 fully before simulation 2, and so on. Given the
    /// same seed, model and parameters, the resulting batch is identical.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSimulationCount`] when
    /// `number_of_simulations < 1`, before any draw is consumed.
    pub fn run(
        &mut self,
        model: &ShortRateModel,
        params: &ModelParameters,
        number_of_simulations: usize,
        rng: &mut SimRng,
    ) -> Result<&SimulationBatch, ConfigurationError> {
        if number_of_simulations < 1 {
            return Err(ConfigurationError::InvalidSimulationCount(
                number_of_simulations,
            ));
        }

        let paths = (0..number_of_simulations)
            .map(|_| model.generate_path(params, &mut *rng))
            .collect();

        let batch = self.batch.insert(SimulationBatch::new(params.clone(), paths));
        Ok(&*batch)
    }

    /// Runs the simulations in parallel over rayon's thread pool.
    ///
    /// Each run draws from its own sub-stream, derived deterministically from
    /// `base_seed` and the run index (see [`SimRng::for_run`]), so the batch
    /// is identical regardless of thread count and across repeated calls.
    /// Note the sub-streams differ from the single sequential stream: the
    /// same seed produces different (equally valid) draws under `run` and
    /// `run_parallel`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidSimulationCount`] when
    /// `number_of_simulations < 1`.
    pub fn run_parallel(
        &mut self,
        model: &ShortRateModel,
        params: &ModelParameters,
        number_of_simulations: usize,
        base_seed: u64,
    ) -> Result<&SimulationBatch, ConfigurationError> {
        if number_of_simulations < 1 {
            return Err(ConfigurationError::InvalidSimulationCount(
                number_of_simulations,
            ));
        }

        let paths = (0..number_of_simulations)
            .into_par_iter()
            .map(|i| {
                let mut rng = SimRng::for_run(base_seed, i as u64);
                model.generate_path(params, &mut rng)
            })
            .collect();

        let batch = self.batch.insert(SimulationBatch::new(params.clone(), paths));
        Ok(&*batch)
    }

    /// Returns the most recent batch, if a run has been executed.
    #[inline]
    pub fn batch(&self) -> Option<&SimulationBatch> {
        self.batch.as_ref()
    }

    /// Computes per-step summary statistics over the stored batch.
    ///
    /// Pure with respect to the engine: the batch is not modified and the
    /// statistics are recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::EmptyBatch`] when no run has been executed
    /// yet, or [`StatisticsError::AllPathsExcluded`] when every path in the
    /// batch was numerically anomalous.
    pub fn statistics(&self) -> Result<SummaryStatistics, StatisticsError> {
        let batch = self.batch.as_ref().ok_or(StatisticsError::EmptyBatch)?;
        SummaryStatistics::from_batch(batch)
    }

    /// Like [`MonteCarloEngine::statistics`], additionally computing the
    /// requested percentile levels.
    pub fn statistics_with_percentiles(
        &self,
        levels: &[f64],
    ) -> Result<SummaryStatistics, StatisticsError> {
        let batch = self.batch.as_ref().ok_or(StatisticsError::EmptyBatch)?;
        SummaryStatistics::from_batch_with_percentiles(batch, levels)
    }
}
