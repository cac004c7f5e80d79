//! Static dispatch enum for short-rate models.
//!
//! [`ShortRateModel`] dispatches the per-step Euler update via `match`
//! expressions (no vtable, no `Box<dyn Trait>`) and owns the full path
//! recurrence so both variants share one generation loop.
//!
//! ## Innovation distribution
//!
//! The continuous-time CIR process calls for standard normal innovations,
//! the same as Vasicek. Some legacy discretisations instead fed uniform
//! [0, 1) draws into the CIR diffusion; that behaviour is reproducible via
//! [`ShortRateModel::cir_with_innovation`] but is not the default, because a
//! uniform innovation has positive mean and biases the simulated drift
//! upward.

use crate::draws::{DrawSource, Innovation};
use crate::params::ModelParameters;
use crate::path::RatePath;

/// Mean-reverting short-rate model variants.
///
/// # Examples
///
/// ```
/// use ratesim_models::{FixedDraws, ModelParameters, ShortRateModel};
///
/// let params = ModelParameters::new(2.0, 0.05, 0.02, 0.03, 1.0, 5).unwrap();
/// let model = ShortRateModel::vasicek();
///
/// // One path consumes exactly N - 1 draws.
/// let mut draws = FixedDraws::new(vec![0.1, -0.2, 0.05, 0.3]);
/// let path = model.generate_path(&params, &mut draws);
///
/// assert_eq!(path.len(), 5);
/// assert_eq!(path.initial_rate(), 0.03);
/// assert_eq!(draws.remaining(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShortRateModel {
    /// Vasicek model: Gaussian diffusion, rates may go negative.
    Vasicek,
    /// Cox-Ingersoll-Ross model: square-root diffusion damped near zero.
    CoxIngersollRoss {
        /// Innovation distribution consumed per step.
        innovation: Innovation,
    },
}

impl ShortRateModel {
    /// Creates a Vasicek model.
    #[inline]
    pub fn vasicek() -> Self {
        ShortRateModel::Vasicek
    }

    /// Creates a CIR model with the standard normal innovation the
    /// continuous-time process calls for.
    #[inline]
    pub fn cir() -> Self {
        ShortRateModel::CoxIngersollRoss {
            innovation: Innovation::StandardNormal,
        }
    }

    /// Creates a CIR model with an explicit innovation distribution.
    ///
    /// Use [`Innovation::Uniform`] to reproduce legacy discretisations that
    /// drew uniform-[0, 1) shocks.
    #[inline]
    pub fn cir_with_innovation(innovation: Innovation) -> Self {
        ShortRateModel::CoxIngersollRoss { innovation }
    }

    /// Model name for reporting.
    pub fn model_name(&self) -> &'static str {
        match self {
            ShortRateModel::Vasicek => "Vasicek",
            ShortRateModel::CoxIngersollRoss { .. } => "CIR",
        }
    }

    /// The innovation distribution this model consumes per step.
    pub fn innovation(&self) -> Innovation {
        match self {
            ShortRateModel::Vasicek => Innovation::StandardNormal,
            ShortRateModel::CoxIngersollRoss { innovation } => *innovation,
        }
    }

    /// Advances the rate by one Euler step.
    ///
    /// * Vasicek: `r + theta * (mu - r) * dt + sigma * sqrt(dt) * shock`
    /// * CIR: `r + theta * (mu - r) * dt + sigma * sqrt(dt) * sqrt(max(0, r)) * shock`
    ///
    /// The CIR clamp makes the diffusion contribution vanish for a negative
    /// prior rate; no floor is applied to the resulting rate.
    #[inline]
    fn step(&self, rate: f64, sqrt_dt: f64, dt: f64, shock: f64, params: &ModelParameters) -> f64 {
        let drift = params.mean_reversion() * (params.long_term_mean() - rate) * dt;
        let diffusion = match self {
            ShortRateModel::Vasicek => params.volatility() * sqrt_dt * shock,
            ShortRateModel::CoxIngersollRoss { .. } => {
                params.volatility() * sqrt_dt * rate.max(0.0).sqrt() * shock
            }
        };
        rate + drift + diffusion
    }

    /// Generates one rate path on the uniform grid `t_k = k * dt`.
    ///
    /// Allocates a fresh buffer per call: repeated or concurrent invocations
    /// never observe each other's intermediate rates. Consumes exactly
    /// `N - 1` draws from `draws`, in order, and retains no state afterwards.
    ///
    /// The returned path starts at `params.initial_rate()` exactly and is
    /// scanned for numerical anomalies (see [`RatePath::anomaly`]); a blow-up
    /// is recorded, not raised.
    pub fn generate_path(
        &self,
        params: &ModelParameters,
        draws: &mut impl DrawSource,
    ) -> RatePath {
        let n_steps = params.n_steps();
        let dt = params.dt();
        let sqrt_dt = dt.sqrt();
        let innovation = self.innovation();

        let mut rates = Vec::with_capacity(n_steps);
        rates.push(params.initial_rate());

        for k in 1..n_steps {
            let shock = innovation.sample(draws);
            let next = self.step(rates[k - 1], sqrt_dt, dt, shock, params);
            rates.push(next);
        }

        RatePath::new(rates)
    }
}
