//! Error types for batch statistics.

use thiserror::Error;

/// Errors raised when summary statistics cannot be computed.
///
/// These are local, fail-fast errors: the caller must run a simulation (or
/// fix the request) and ask again. Per-path numerical anomalies are not
/// errors: they are recorded on the path and reported as an omission count.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatisticsError {
    /// Statistics requested before any run has been executed.
    #[error("no simulation batch available: run the engine before requesting statistics")]
    EmptyBatch,

    /// Every path in the batch was excluded as numerically anomalous.
    #[error("all {0} simulated paths were excluded as numerically anomalous")]
    AllPathsExcluded(usize),

    /// A requested percentile level fell outside [0, 1].
    #[error("invalid percentile level {0}: must lie in [0, 1]")]
    InvalidPercentile(f64),
}
