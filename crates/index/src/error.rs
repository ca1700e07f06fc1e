//! Error types for the lunaria-index crate.

use chrono::NaiveDate;

/// Which side of the loaded range an unresolvable date fell on.
///
/// Callers use this to decide in which direction to ask the astronomy
/// collaborator for more data; it is never shown to end users as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    /// The date precedes the first loaded month.
    Before,
    /// The date follows the last loaded month.
    After,
}

impl std::fmt::Display for RangeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// Signals that a Gregorian date lies outside the loaded dataset.
///
/// This is "outside loaded range", not a failure: the expected reaction is
/// a dataset extension request, or simply rendering the cell without a
/// secondary annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("date {date} is {side} the loaded range")]
pub struct OutOfRange {
    /// The date that could not be resolved.
    pub date: NaiveDate,
    /// Which side of the range it fell on.
    pub side: RangeSide,
}

/// Error type for custom-to-Gregorian conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Returned when the (year, month) indices do not exist in the dataset.
    #[error("no month at year index {year_index}, month index {month_index}")]
    UnknownMonth {
        /// Requested year index.
        year_index: usize,
        /// Requested month index.
        month_index: usize,
    },

    /// Returned when the day number falls outside the month's actual span.
    #[error("day {day_number} out of range for a {span_days}-day month")]
    DayOutOfRange {
        /// Requested day number (1-based).
        day_number: u32,
        /// Actual number of days the month spans.
        span_days: u32,
    },
}
