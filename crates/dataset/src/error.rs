//! Error types for the lunaria-dataset crate.

use std::path::PathBuf;

/// Error type for all fallible operations on boundary datasets.
///
/// This enum covers structural validation failures: empty datasets,
/// out-of-order month boundaries, invalid day counts, and year ordering
/// problems in data received from the astronomy collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// Returned when a dataset contains no years, or a year contains no months.
    #[error("empty dataset: {reason}")]
    Empty {
        /// Which structural level was empty.
        reason: String,
    },

    /// Returned when consecutive month starts within a year are not strictly increasing.
    #[error(
        "non-monotonic month start in year index {year_index}: months {month_index} and {}",
        month_index + 1
    )]
    NonMonotonicStart {
        /// Index of the offending year within the dataset.
        year_index: usize,
        /// Index of the first of the two offending months.
        month_index: usize,
    },

    /// Returned when a month's day count is zero.
    #[error("invalid day count 0 for year index {year_index}, month index {month_index}")]
    InvalidDayCount {
        /// Index of the offending year within the dataset.
        year_index: usize,
        /// Index of the offending month within the year.
        month_index: usize,
    },

    /// Returned when year labels are not strictly ascending, or a year's
    /// first month does not start after the previous year's last month.
    #[error("year order violation between year indices {} and {year_index}", year_index - 1)]
    YearOrder {
        /// Index of the later of the two offending years.
        year_index: usize,
    },
}

/// Error type for dataset fetch operations against the astronomy collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Returned when the backing file could not be read.
    #[error("failed to read dataset file {}: {reason}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the dataset payload could not be parsed.
    #[error("failed to parse dataset: {reason}")]
    Parse {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Returned when a parsed dataset fails structural validation.
    #[error("invalid dataset: {0}")]
    Invalid(#[from] DatasetError),
}
