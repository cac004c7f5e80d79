//! Error types for model configuration.
//!
//! This module provides [`ConfigurationError`], the structured error returned
//! when model parameters or a simulation request fail validation. Every
//! variant names the offending field and carries the rejected value, so the
//! caller can fix the input without parsing a message.

use thiserror::Error;

/// Categorised configuration errors.
///
/// Raised before any computation or random draw is consumed; a configuration
/// error is fail-fast and non-recoverable: the caller must fix the inputs
/// and retry the whole call.
///
/// # Examples
///
/// ```
/// use ratesim_models::{ConfigurationError, ModelParameters};
///
/// let err = ModelParameters::new(2.0, 0.05, -0.01, 0.03, 1.0, 252).unwrap_err();
/// assert_eq!(err, ConfigurationError::InvalidVolatility(-0.01));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Mean reversion speed (theta) must be non-negative.
    #[error("invalid mean reversion speed theta = {0}: must be non-negative")]
    InvalidMeanReversion(f64),

    /// Volatility (sigma) must be non-negative.
    #[error("invalid volatility sigma = {0}: must be non-negative")]
    InvalidVolatility(f64),

    /// Time horizon (T) must be strictly positive.
    #[error("invalid time horizon T = {0}: must be positive")]
    InvalidHorizon(f64),

    /// Step count (N) must be at least 2 so the path has at least one increment.
    #[error("invalid step count N = {0}: must be at least 2")]
    InvalidStepCount(usize),

    /// Simulation count (M) must be at least 1.
    #[error("invalid simulation count {0}: must be at least 1")]
    InvalidSimulationCount(usize),

    /// A parameter that must be finite was NaN or infinite.
    #[error("invalid parameter '{name}' = {value}: must be finite")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
