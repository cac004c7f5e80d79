//! Monte Carlo batch simulation and aggregation.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── ShortRateModel::generate_path()  (one call per simulation run)
//! ├── SimulationBatch                  (N steps x M runs, column = one path)
//! └── SummaryStatistics                (per-step mean/std/min/max, percentiles)
//! ```
//!
//! The engine owns at most one batch at a time; a new run replaces it.
//! Statistics are recomputed on demand from the stored batch and exclude
//! paths flagged with a numerical anomaly, reporting how many were omitted.

mod batch;
mod engine;
mod error;
mod stats;

pub use batch::SimulationBatch;
pub use engine::MonteCarloEngine;
pub use error::StatisticsError;
pub use stats::SummaryStatistics;
