//! Error types for the lunaria-grid crate.

use lunaria_index::IndexError;

/// Error type for grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Wraps a month-index lookup failure for the requested view.
    #[error("index lookup failed: {0}")]
    Index(#[from] IndexError),

    /// Returned when the requested Gregorian (year, month) is not a valid
    /// calendar month.
    #[error("invalid Gregorian month {month} of year {year}")]
    InvalidGregorianMonth {
        /// Requested calendar year.
        year: i32,
        /// Requested calendar month (1..=12 expected).
        month: u32,
    },
}
