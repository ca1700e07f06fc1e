//! Year and month boundary records.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::location::Location;

/// How a month-start boundary was determined by the astronomy collaborator.
///
/// The primary indicator is the first astronomical dawn after the month's
/// full moon. At high latitudes that event can be undefined for part of the
/// year, in which case the collaborator substitutes a secondary indicator
/// and names it here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryOrigin {
    /// Boundary came from the primary astronomical event.
    Astronomical,
    /// Boundary came from a named secondary indicator (e.g. "civil_dawn").
    Secondary(String),
}

impl Default for BoundaryOrigin {
    fn default() -> Self {
        Self::Astronomical
    }
}

/// One month of the lunar calendar, as supplied by the astronomy collaborator.
///
/// The half-open interval from this month's `start` to the next month's
/// `start` determines exactly which civil days belong to this month; `days`
/// is the nominal length and only decides the month end when no following
/// boundary is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Authoritative instant the month begins, in the dataset's timezone.
    pub start: DateTime<FixedOffset>,
    /// Number of days in this month (>= 1, typically 29 or 30).
    pub days: u32,
    /// Canonical full-moon instant identifying this month, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_moon: Option<DateTime<Utc>>,
    /// How the start boundary was determined.
    #[serde(default)]
    pub origin: BoundaryOrigin,
}

impl MonthRecord {
    /// Creates a month record with an astronomical origin and no full-moon
    /// instant. Convenience for tests and the approximate fallback builder.
    pub fn new(start: DateTime<FixedOffset>, days: u32) -> Self {
        Self {
            start,
            days,
            full_moon: None,
            origin: BoundaryOrigin::Astronomical,
        }
    }
}

/// One lunar year: an ordered run of months between two new-year anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Gregorian year the lunar year's anchor falls in.
    pub year: i32,
    /// Months in order of occurrence.
    pub months: Vec<MonthRecord>,
}

/// Immutable per-location snapshot of year and month boundary data.
///
/// Replaced wholesale on location change, never patched in place; holders
/// of a stale snapshot must drop it rather than reconcile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDataset {
    /// Location the boundaries were computed for.
    pub location: Location,
    /// IANA timezone name the `start` instants are expressed in.
    pub timezone: String,
    /// False for the degraded fixed-length fallback dataset.
    #[serde(default = "default_true")]
    pub authoritative: bool,
    /// Years in ascending order.
    pub years: Vec<YearRecord>,
}

fn default_true() -> bool {
    true
}

impl BoundaryDataset {
    /// Checks the structural invariants the rest of the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] when the dataset is empty, a month has a
    /// zero day count, month starts within a year are not strictly
    /// increasing, or years are out of order.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.years.is_empty() {
            return Err(DatasetError::Empty {
                reason: "no years".to_string(),
            });
        }
        for (yi, year) in self.years.iter().enumerate() {
            if year.months.is_empty() {
                return Err(DatasetError::Empty {
                    reason: format!("year index {yi} has no months"),
                });
            }
            for (mi, month) in year.months.iter().enumerate() {
                if month.days == 0 {
                    return Err(DatasetError::InvalidDayCount {
                        year_index: yi,
                        month_index: mi,
                    });
                }
                if let Some(next) = year.months.get(mi + 1)
                    && next.start <= month.start
                {
                    return Err(DatasetError::NonMonotonicStart {
                        year_index: yi,
                        month_index: mi,
                    });
                }
            }
            if yi > 0 {
                let prev = &self.years[yi - 1];
                let prev_last = prev
                    .months
                    .last()
                    .map(|m| m.start)
                    .unwrap_or_else(|| year.months[0].start);
                if year.year <= prev.year
                    || year.months[0].start <= prev_last
                {
                    return Err(DatasetError::YearOrder { year_index: yi });
                }
            }
        }
        Ok(())
    }

    /// Total number of months across all years.
    pub fn n_months(&self) -> usize {
        self.years.iter().map(|y| y.months.len()).sum()
    }

    /// The month record at the given indices, when it exists.
    pub fn month(&self, year_index: usize, month_index: usize) -> Option<&MonthRecord> {
        self.years.get(year_index)?.months.get(month_index)
    }
}
