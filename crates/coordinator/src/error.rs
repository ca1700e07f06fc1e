//! Error types for the lunaria-coordinator crate.

use lunaria_grid::GridError;

/// Error type for coordinator operations.
///
/// Nothing here is fatal to the process: `DatasetUnavailable` degrades to
/// the approximate fixed-length display, and stale loads are not errors at
/// all (they are reported as a [`crate::LoadOutcome`] and silently
/// discarded).
#[derive(Debug, thiserror::Error)]
pub enum CoordinatorError {
    /// Returned when the astronomy collaborator could not be reached
    /// within the retry budget.
    #[error("dataset unavailable after {attempts} attempt(s): {reason}")]
    DatasetUnavailable {
        /// Number of fetch attempts made.
        attempts: u32,
        /// Last failure reason observed.
        reason: String,
    },

    /// Returned when a pending load was cancelled by a newer request.
    #[error("load cancelled by a newer location request")]
    LoadCancelled,

    /// Wraps a grid construction failure during rendering.
    #[error("render failed: {0}")]
    Render(#[from] GridError),
}
