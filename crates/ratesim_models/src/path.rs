//! Simulated rate trajectories.
//!
//! A [`RatePath`] is one full trajectory on the uniform time grid, freshly
//! allocated by each generation call and immutable once returned. A path may
//! carry an advisory [`NumericalAnomaly`] when the recurrence produced a
//! non-finite or implausibly large rate; the anomaly is a warning attached to
//! the path, not an error, since one degenerate path must not invalidate an
//! entire Monte Carlo batch.

/// Absolute rate magnitude above which a path is flagged as anomalous.
///
/// 10.0 corresponds to a 1000% short rate; anything beyond it is treated as
/// a numerical blow-up rather than an economically meaningful value.
pub const MAX_SANE_RATE: f64 = 10.0;

/// Advisory record of a numerical blow-up within a path.
///
/// Recorded at the first offending step; generation continues so the path
/// keeps its full length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumericalAnomaly {
    /// Index of the first step whose rate breached the sane bound.
    pub step: usize,
    /// The offending rate value (may be NaN or infinite).
    pub value: f64,
}

/// One simulated short-rate trajectory.
///
/// Invariants:
/// - `rates().len() == n_steps` of the generating parameters
/// - `rates()[0]` equals the initial rate exactly
///
/// # Examples
///
/// ```
/// use ratesim_models::{FixedDraws, ModelParameters, ShortRateModel};
///
/// let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 5).unwrap();
/// let mut draws = FixedDraws::new(vec![0.1, -0.2, 0.05, 0.3]);
/// let path = ShortRateModel::vasicek().generate_path(&params, &mut draws);
///
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.initial_rate(), 0.03);
/// assert!(path.anomaly().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatePath {
    rates: Vec<f64>,
    anomaly: Option<NumericalAnomaly>,
}

impl RatePath {
    /// Wraps a generated rate buffer, scanning it for the first anomaly.
    ///
    /// A rate is anomalous when it is non-finite or its magnitude exceeds
    /// [`MAX_SANE_RATE`].
    pub fn new(rates: Vec<f64>) -> Self {
        let anomaly = rates
            .iter()
            .position(|r| !r.is_finite() || r.abs() > MAX_SANE_RATE)
            .map(|step| NumericalAnomaly {
                step,
                value: rates[step],
            });
        Self { rates, anomaly }
    }

    /// Returns the simulated rates, index `k` holding the rate at `t_k = k * dt`.
    #[inline]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the number of time steps in the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns `true` if the path holds no rates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns the rate at `t = 0`.
    #[inline]
    pub fn initial_rate(&self) -> f64 {
        self.rates[0]
    }

    /// Returns the rate at the final step.
    #[inline]
    pub fn terminal_rate(&self) -> f64 {
        self.rates[self.rates.len() - 1]
    }

    /// Returns the advisory anomaly record, if the path blew up.
    #[inline]
    pub fn anomaly(&self) -> Option<NumericalAnomaly> {
        self.anomaly
    }

    /// Returns `true` when the path carries no anomaly and may enter
    /// batch statistics.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.anomaly.is_none()
    }
}
