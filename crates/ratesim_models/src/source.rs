//! External reference-rate seam.
//!
//! A [`ReferenceRateSource`] supplies an optional observed starting rate (and,
//! if available, a volatility estimate) as plain floats. How those values
//! were obtained (scraped reference-rate tables, a market data feed, a
//! hard-coded fixture) is outside this workspace; the models treat the
//! source as an opaque provider of seed values.

use crate::error::ConfigurationError;
use crate::params::ModelParameters;

/// Provider of observed market values used to seed a simulation.
pub trait ReferenceRateSource {
    /// Returns the most recently observed short rate, if any.
    fn initial_rate(&self) -> Option<f64>;

    /// Returns an estimate of the rate volatility, if the source can supply
    /// one.
    fn volatility_estimate(&self) -> Option<f64> {
        None
    }
}

impl ModelParameters {
    /// Returns a copy whose initial rate is taken from `source`, falling back
    /// to the current value when the source has nothing to offer.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the observed rate is non-finite.
    pub fn seeded_from(
        &self,
        source: &dyn ReferenceRateSource,
    ) -> Result<Self, ConfigurationError> {
        match source.initial_rate() {
            Some(observed) => self.with_initial_rate(observed),
            None => Ok(self.clone()),
        }
    }
}
