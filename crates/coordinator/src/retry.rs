//! Bounded-retry dataset loading.

use std::time::Duration;

use tracing::{info, warn};

use lunaria_dataset::{BoundaryDataset, DatasetSource, Location};

use crate::error::CoordinatorError;

/// Retry budget for the start-up dataset poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Fixed wait between attempts.
    pub interval: Duration,
    /// Maximum number of fetch attempts (>= 1).
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 5,
        }
    }
}

/// Polls the astronomy collaborator until it yields a dataset, the retry
/// budget is exhausted, or `cancelled` reports that a newer request has
/// superseded this one.
///
/// `sleep` is injected so tests can run the loop without real waiting.
///
/// # Errors
///
/// Returns [`CoordinatorError::DatasetUnavailable`] when every attempt
/// failed, or [`CoordinatorError::LoadCancelled`] when superseded. Callers
/// are expected to degrade to the approximate fixed-length dataset rather
/// than surface either to the user.
pub fn load_with_retry(
    source: &dyn DatasetSource,
    location: &Location,
    policy: &RetryPolicy,
    mut sleep: impl FnMut(Duration),
    cancelled: impl Fn() -> bool,
) -> Result<BoundaryDataset, CoordinatorError> {
    let mut last_reason = String::from("no attempts made");
    for attempt in 1..=policy.max_attempts.max(1) {
        if cancelled() {
            return Err(CoordinatorError::LoadCancelled);
        }
        match source.fetch(location) {
            Ok(dataset) => {
                info!(attempt, location = %location, "dataset fetch succeeded");
                return Ok(dataset);
            }
            Err(e) => {
                warn!(attempt, location = %location, error = %e, "dataset fetch failed");
                last_reason = e.to_string();
            }
        }
        if attempt < policy.max_attempts {
            sleep(policy.interval);
        }
    }
    Err(CoordinatorError::DatasetUnavailable {
        attempts: policy.max_attempts.max(1),
        reason: last_reason,
    })
}
