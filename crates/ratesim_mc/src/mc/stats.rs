//! Per-time-step summary statistics over a simulation batch.
//!
//! Statistics are a pure function of the batch, recomputed on demand and
//! never cached across runs. Paths flagged with a numerical anomaly are
//! excluded from every aggregate; the omission count is reported alongside
//! the statistics so a degenerate path can neither silently skew nor abort a
//! Monte Carlo run.

use super::batch::SimulationBatch;
use super::error::StatisticsError;
use ratesim_models::RatePath;

/// Per-time-step aggregates over the columns of a [`SimulationBatch`].
///
/// Every vector has one entry per time step. `std_dev` is the sample
/// standard deviation (`ddof = 1`); with a single contributing path it is
/// reported as zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    mean: Vec<f64>,
    std_dev: Vec<f64>,
    min: Vec<f64>,
    max: Vec<f64>,
    percentiles: Vec<(f64, Vec<f64>)>,
    sample_count: usize,
    excluded_paths: usize,
}

impl SummaryStatistics {
    /// Computes mean, standard deviation, minimum and maximum per time step.
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::AllPathsExcluded`] when every column of the
    /// batch carries a numerical anomaly.
    pub fn from_batch(batch: &SimulationBatch) -> Result<Self, StatisticsError> {
        Self::from_batch_with_percentiles(batch, &[])
    }

    /// Computes the standard aggregates plus the requested percentile rows.
    ///
    /// Percentiles use linear interpolation between order statistics, with
    /// levels expressed as fractions (`0.05` for the 5th percentile).
    ///
    /// # Errors
    ///
    /// Returns [`StatisticsError::InvalidPercentile`] for a level outside
    /// [0, 1] and [`StatisticsError::AllPathsExcluded`] when no valid column
    /// remains.
    pub fn from_batch_with_percentiles(
        batch: &SimulationBatch,
        levels: &[f64],
    ) -> Result<Self, StatisticsError> {
        for &level in levels {
            if !level.is_finite() || !(0.0..=1.0).contains(&level) {
                return Err(StatisticsError::InvalidPercentile(level));
            }
        }

        let valid: Vec<&RatePath> = batch.valid_paths().collect();
        if valid.is_empty() {
            return Err(StatisticsError::AllPathsExcluded(batch.n_runs()));
        }

        let n_steps = batch.n_steps();
        let m = valid.len();

        let mut mean = Vec::with_capacity(n_steps);
        let mut std_dev = Vec::with_capacity(n_steps);
        let mut min = Vec::with_capacity(n_steps);
        let mut max = Vec::with_capacity(n_steps);
        let mut percentiles: Vec<(f64, Vec<f64>)> = levels
            .iter()
            .map(|&level| (level, Vec::with_capacity(n_steps)))
            .collect();

        let mut row = vec![0.0; m];
        for k in 0..n_steps {
            for (slot, path) in row.iter_mut().zip(valid.iter()) {
                *slot = path.rates()[k];
            }

            let sum: f64 = row.iter().sum();
            let mu = sum / m as f64;
            mean.push(mu);

            let var = if m > 1 {
                row.iter().map(|r| (r - mu) * (r - mu)).sum::<f64>() / (m - 1) as f64
            } else {
                0.0
            };
            std_dev.push(var.sqrt());

            min.push(row.iter().copied().fold(f64::INFINITY, f64::min));
            max.push(row.iter().copied().fold(f64::NEG_INFINITY, f64::max));

            if !percentiles.is_empty() {
                row.sort_by(f64::total_cmp);
                for (level, values) in percentiles.iter_mut() {
                    values.push(interpolated_quantile(&row, *level));
                }
            }
        }

        Ok(Self {
            mean,
            std_dev,
            min,
            max,
            percentiles,
            sample_count: m,
            excluded_paths: batch.anomalous_count(),
        })
    }

    /// Returns the number of time steps covered.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.mean.len()
    }

    /// Returns the per-step sample means.
    #[inline]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Returns the per-step sample standard deviations (`ddof = 1`).
    #[inline]
    pub fn std_dev(&self) -> &[f64] {
        &self.std_dev
    }

    /// Returns the per-step minima.
    #[inline]
    pub fn min(&self) -> &[f64] {
        &self.min
    }

    /// Returns the per-step maxima.
    #[inline]
    pub fn max(&self) -> &[f64] {
        &self.max
    }

    /// Returns the per-step values for a requested percentile level, if it
    /// was computed.
    pub fn percentile(&self, level: f64) -> Option<&[f64]> {
        self.percentiles
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns how many paths contributed to the aggregates.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns how many paths were omitted as numerically anomalous.
    #[inline]
    pub fn excluded_paths(&self) -> usize {
        self.excluded_paths
    }
}

/// Linear interpolation between order statistics of a sorted slice.
fn interpolated_quantile(sorted: &[f64], level: f64) -> f64 {
    let m = sorted.len();
    if m == 1 {
        return sorted[0];
    }
    let pos = level * (m - 1) as f64;
    let lo = pos.floor() as usize;
    let frac = pos - lo as f64;
    if lo + 1 < m {
        sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
    } else {
        sorted[m - 1]
    }
}
