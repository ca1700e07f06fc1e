//! Lookup engine mapping between Gregorian dates and lunar coordinates.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing::warn;

use lunaria_dataset::{BoundaryDataset, DatasetError, MonthRecord};

use crate::custom_date::CustomDate;
use crate::error::{IndexError, OutOfRange, RangeSide};

/// One month flattened into a half-open civil-day interval.
#[derive(Debug, Clone, Copy)]
struct MonthSpan {
    year_index: usize,
    month_index: usize,
    first_day: NaiveDate,
    day_after_last: NaiveDate,
}

impl MonthSpan {
    fn span_days(&self) -> u32 {
        (self.day_after_last - self.first_day).num_days() as u32
    }
}

/// Ordered lookup engine over a [`BoundaryDataset`].
///
/// Built once per dataset, the index flattens every month into a half-open
/// interval of civil days. A month's end boundary is, in order of
/// precedence: the next month's start within the same year, the next
/// year's first month start (astronomically exact), and only for the
/// dataset tail the nominal `start + days` count.
#[derive(Debug, Clone)]
pub struct MonthIndex {
    dataset: Arc<BoundaryDataset>,
    spans: Vec<MonthSpan>,
    /// Cumulative month count before each year, for (year, month) -> span lookup.
    year_offsets: Vec<usize>,
}

impl MonthIndex {
    /// Builds the span table for a dataset.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] when the dataset fails structural
    /// validation.
    pub fn build(dataset: Arc<BoundaryDataset>) -> Result<Self, DatasetError> {
        dataset.validate()?;
        let mut spans = Vec::with_capacity(dataset.n_months());
        let mut year_offsets = Vec::with_capacity(dataset.years.len());
        for (yi, year) in dataset.years.iter().enumerate() {
            year_offsets.push(spans.len());
            for (mi, month) in year.months.iter().enumerate() {
                let first_day = month.start.date_naive();
                let next_start = year
                    .months
                    .get(mi + 1)
                    .or_else(|| dataset.years.get(yi + 1).and_then(|y| y.months.first()))
                    .map(|m| m.start.date_naive());
                let nominal_end = first_day + Duration::days(i64::from(month.days));
                let day_after_last = match next_start {
                    Some(end) => {
                        let drift = (end - nominal_end).num_days().abs();
                        if drift > 1 {
                            warn!(
                                year_index = yi,
                                month_index = mi,
                                %end,
                                %nominal_end,
                                drift,
                                "month boundary disagrees with nominal day count, \
                                 keeping the explicit boundary"
                            );
                        }
                        end
                    }
                    None => nominal_end,
                };
                spans.push(MonthSpan {
                    year_index: yi,
                    month_index: mi,
                    first_day,
                    day_after_last,
                });
            }
        }
        Ok(Self {
            dataset,
            spans,
            year_offsets,
        })
    }

    /// The dataset this index was built over.
    pub fn dataset(&self) -> &Arc<BoundaryDataset> {
        &self.dataset
    }

    /// Number of years in the dataset.
    pub fn n_years(&self) -> usize {
        self.dataset.years.len()
    }

    /// Number of months in the given year, or 0 for an unknown year index.
    pub fn months_in_year(&self, year_index: usize) -> usize {
        self.dataset
            .years
            .get(year_index)
            .map_or(0, |y| y.months.len())
    }

    /// The underlying month record, when the indices exist.
    pub fn month_record(&self, year_index: usize, month_index: usize) -> Option<&MonthRecord> {
        self.dataset.month(year_index, month_index)
    }

    /// Actual number of civil days the month spans.
    ///
    /// This is the half-open interval length, which may differ by a day
    /// from the nominal `days` count when the following boundary is
    /// astronomically exact.
    pub fn span_days(&self, year_index: usize, month_index: usize) -> Result<u32, IndexError> {
        self.span(year_index, month_index).map(|s| s.span_days())
    }

    /// Locates the lunar coordinates bracketing a Gregorian date.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `date` precedes the first loaded month
    /// or follows the last one. That is "outside loaded range", not a
    /// user-facing failure.
    pub fn resolve(&self, date: NaiveDate) -> Result<CustomDate, OutOfRange> {
        let idx = self.spans.partition_point(|s| s.first_day <= date);
        if idx == 0 {
            return Err(OutOfRange {
                date,
                side: RangeSide::Before,
            });
        }
        let span = &self.spans[idx - 1];
        if date >= span.day_after_last {
            return Err(OutOfRange {
                date,
                side: RangeSide::After,
            });
        }
        let day_number = (date - span.first_day).num_days() as u32 + 1;
        Ok(CustomDate::new(span.year_index, span.month_index, day_number))
    }

    /// Converts lunar coordinates back to the Gregorian day they cover.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] when the indices do not exist in the dataset
    /// or the day number exceeds the month's actual span.
    pub fn to_gregorian(&self, date: CustomDate) -> Result<NaiveDate, IndexError> {
        let span = self.span(date.year_index, date.month_index)?;
        let span_days = span.span_days();
        if date.day_number == 0 || date.day_number > span_days {
            return Err(IndexError::DayOutOfRange {
                day_number: date.day_number,
                span_days,
            });
        }
        Ok(span.first_day + Duration::days(i64::from(date.day_number) - 1))
    }

    /// First and last civil days covered by the dataset.
    pub fn coverage(&self) -> (NaiveDate, NaiveDate) {
        // Spans are non-empty: build() rejects empty datasets.
        let first = self.spans[0].first_day;
        let last = self.spans[self.spans.len() - 1].day_after_last - Duration::days(1);
        (first, last)
    }

    fn span(&self, year_index: usize, month_index: usize) -> Result<&MonthSpan, IndexError> {
        let err = IndexError::UnknownMonth {
            year_index,
            month_index,
        };
        let offset = *self.year_offsets.get(year_index).ok_or(err)?;
        if month_index >= self.months_in_year(year_index) {
            return Err(err);
        }
        Ok(&self.spans[offset + month_index])
    }
}
