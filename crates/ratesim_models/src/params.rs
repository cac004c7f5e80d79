//! Validated model parameters for short-rate simulation.
//!
//! [`ModelParameters`] is the immutable value shared by every simulation run.
//! Validation happens once, at construction; every other operation in the
//! workspace relies on the invariants established here (in particular
//! `dt > 0`) and never re-checks them.

use crate::error::ConfigurationError;

/// Default time horizon in years.
pub const DEFAULT_HORIZON: f64 = 1.0;

/// Default number of discretisation steps (one trading year of daily steps).
pub const DEFAULT_STEPS: usize = 252;

/// Parameters of a mean-reverting short-rate model.
///
/// # Fields
///
/// * `mean_reversion` - Speed of reversion to the mean (theta >= 0)
/// * `long_term_mean` - Long-run mean rate level (mu)
/// * `volatility` - Rate volatility (sigma >= 0)
/// * `initial_rate` - Initial short rate r(0)
/// * `horizon` - Time horizon T in years (T > 0)
/// * `n_steps` - Number of discretisation steps N (N >= 2)
///
/// The derived step size is `dt = horizon / n_steps`, strictly positive by
/// construction.
///
/// # Examples
///
/// ```
/// use ratesim_models::ModelParameters;
///
/// let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 252).unwrap();
/// assert_eq!(params.n_steps(), 252);
/// assert!((params.dt() - 1.0 / 252.0).abs() < 1e-15);
///
/// // Invalid: negative volatility
/// assert!(ModelParameters::new(2.0, 0.05, -0.02, 0.03, 1.0, 252).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelParameters {
    /// Mean reversion speed (theta >= 0).
    mean_reversion: f64,
    /// Long-term mean rate (mu).
    long_term_mean: f64,
    /// Volatility of the short rate (sigma >= 0).
    volatility: f64,
    /// Initial short rate r(0).
    initial_rate: f64,
    /// Time horizon in years (T > 0).
    horizon: f64,
    /// Number of discretisation steps (N >= 2).
    n_steps: usize,
}

impl ModelParameters {
    /// Creates new model parameters with validation.
    ///
    /// # Arguments
    ///
    /// * `mean_reversion` - Mean reversion speed theta (must be non-negative)
    /// * `long_term_mean` - Long-run mean level mu (must be finite)
    /// * `volatility` - Volatility sigma (must be non-negative)
    /// * `initial_rate` - Initial rate r(0) (must be finite)
    /// * `horizon` - Time horizon T in years (must be positive)
    /// * `n_steps` - Number of steps N (must be at least 2)
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] naming the offending field when any
    /// precondition is violated. No computation happens on failure.
    pub fn new(
        mean_reversion: f64,
        long_term_mean: f64,
        volatility: f64,
        initial_rate: f64,
        horizon: f64,
        n_steps: usize,
    ) -> Result<Self, ConfigurationError> {
        if !mean_reversion.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter {
                name: "mean_reversion",
                value: mean_reversion,
            });
        }
        if mean_reversion < 0.0 {
            return Err(ConfigurationError::InvalidMeanReversion(mean_reversion));
        }
        if !long_term_mean.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter {
                name: "long_term_mean",
                value: long_term_mean,
            });
        }
        if !volatility.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter {
                name: "volatility",
                value: volatility,
            });
        }
        if volatility < 0.0 {
            return Err(ConfigurationError::InvalidVolatility(volatility));
        }
        if !initial_rate.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter {
                name: "initial_rate",
                value: initial_rate,
            });
        }
        if !horizon.is_finite() || horizon <= 0.0 {
            return Err(ConfigurationError::InvalidHorizon(horizon));
        }
        if n_steps < 2 {
            return Err(ConfigurationError::InvalidStepCount(n_steps));
        }

        Ok(Self {
            mean_reversion,
            long_term_mean,
            volatility,
            initial_rate,
            horizon,
            n_steps,
        })
    }

    /// Creates parameters with the conventional one-year horizon of 252 daily
    /// steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratesim_models::ModelParameters;
    ///
    /// let params = ModelParameters::with_defaults(2.0, 0.05, 0.02, 0.03).unwrap();
    /// assert_eq!(params.horizon(), 1.0);
    /// assert_eq!(params.n_steps(), 252);
    /// ```
    pub fn with_defaults(
        mean_reversion: f64,
        long_term_mean: f64,
        volatility: f64,
        initial_rate: f64,
    ) -> Result<Self, ConfigurationError> {
        Self::new(
            mean_reversion,
            long_term_mean,
            volatility,
            initial_rate,
            DEFAULT_HORIZON,
            DEFAULT_STEPS,
        )
    }

    /// Returns a copy with a replacement initial rate.
    ///
    /// This is the seam for seeding a simulation from an externally observed
    /// rate (see [`crate::source::ReferenceRateSource`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NonFiniteParameter`] if `initial_rate`
    /// is NaN or infinite.
    pub fn with_initial_rate(&self, initial_rate: f64) -> Result<Self, ConfigurationError> {
        if !initial_rate.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter {
                name: "initial_rate",
                value: initial_rate,
            });
        }
        Ok(Self {
            initial_rate,
            ..self.clone()
        })
    }

    /// Returns the mean reversion speed (theta).
    #[inline]
    pub fn mean_reversion(&self) -> f64 {
        self.mean_reversion
    }

    /// Returns the long-term mean rate (mu).
    #[inline]
    pub fn long_term_mean(&self) -> f64 {
        self.long_term_mean
    }

    /// Returns the volatility (sigma).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the initial rate r(0).
    #[inline]
    pub fn initial_rate(&self) -> f64 {
        self.initial_rate
    }

    /// Returns the time horizon T in years.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Returns the number of discretisation steps N.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the derived step size `dt = T / N`.
    ///
    /// Strictly positive by construction.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.n_steps as f64
    }

    /// Returns the uniform time grid `t_k = k * dt` for `k = 0..N-1`.
    pub fn time_grid(&self) -> Vec<f64> {
        let dt = self.dt();
        (0..self.n_steps).map(|k| k as f64 * dt).collect()
    }
}
