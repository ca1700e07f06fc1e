//! Lunar calendar date coordinates.

/// A date in the lunar calendar, expressed as indices into a boundary
/// dataset.
///
/// A `CustomDate` is meaningless without the dataset it was resolved
/// against: the same coordinates name a different civil day under a
/// dataset computed for another location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomDate {
    /// Index of the year within the dataset (0-based).
    pub year_index: usize,
    /// Index of the month within its year (0-based).
    pub month_index: usize,
    /// Day within the month (1-based).
    pub day_number: u32,
}

impl CustomDate {
    /// Creates a custom date from raw coordinates.
    pub fn new(year_index: usize, month_index: usize, day_number: u32) -> Self {
        Self {
            year_index,
            month_index,
            day_number,
        }
    }

    /// 1-based month ordinal, the form annotation rules are keyed on.
    pub fn month_number(self) -> u32 {
        self.month_index as u32 + 1
    }
}

impl std::fmt::Display for CustomDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "month {} day {} (year index {})",
            self.month_number(),
            self.day_number,
            self.year_index
        )
    }
}
