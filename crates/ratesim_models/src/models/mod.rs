//! Mean-reverting short-rate SDE models.
//!
//! Two variants of one capability, "discretise one mean-reverting SDE step",
//! expressed as a static-dispatch enum rather than duplicated types:
//!
//! ## Vasicek
//!
//! ```text
//! dr(t) = theta * (mu - r(t)) * dt + sigma * dW(t)
//! ```
//!
//! ## Cox-Ingersoll-Ross (CIR)
//!
//! ```text
//! dr(t) = theta * (mu - r(t)) * dt + sigma * sqrt(r(t)) * dW(t)
//! ```
//!
//! Both are simulated with an Euler discretisation on the uniform grid
//! `dt = T / N`. The CIR diffusion clamps the prior rate at zero inside the
//! square root, so a negative rate suppresses the diffusion term instead of
//! raising a domain error.

pub mod short_rate;

pub use short_rate::ShortRateModel;
