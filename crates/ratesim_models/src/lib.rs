//! # Ratesim Models (L1: SDE parameterisations)
//!
//! Mean-reverting short-rate models and their supporting value types.
//!
//! This crate provides:
//! - Validated model parameters ([`ModelParameters`])
//! - Simulated rate trajectories ([`RatePath`]) with advisory anomaly records
//! - The explicit random-draw abstraction ([`DrawSource`])
//! - Short-rate model variants ([`ShortRateModel`]: Vasicek, Cox-Ingersoll-Ross)
//! - The external reference-rate seam ([`ReferenceRateSource`])
//!
//! ## Design Principles
//!
//! - **Validate at construction**: a [`ModelParameters`] value cannot exist in
//!   an invalid state, so path generation never re-checks preconditions.
//! - **Enum-based models** for static dispatch (no `Box<dyn Trait>`)
//! - **Explicit draw sources**: randomness is always passed in, never ambient,
//!   making every simulation reproducible.
//! - **Per-call path buffers**: each generation call returns a freshly
//!   allocated, immutable [`RatePath`]; no state survives between calls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod draws;
pub mod error;
pub mod models;
pub mod params;
pub mod path;
pub mod source;

pub use draws::{DrawSource, FixedDraws, Innovation};
pub use error::ConfigurationError;
pub use models::ShortRateModel;
pub use params::ModelParameters;
pub use path::{NumericalAnomaly, RatePath, MAX_SANE_RATE};
pub use source::ReferenceRateSource;
