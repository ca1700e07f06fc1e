//! Rendered month view shared by both grid shapes.

use serde::Serialize;

use crate::cell::DayCell;

/// One month laid out as rows of optional day cells.
///
/// `None` cells are padding (leading/trailing blanks in the Gregorian
/// shape, the merged label area and tail padding in the custom shape).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthView {
    /// Header label for the month.
    pub label: String,
    /// Rows of seven optional cells.
    pub weeks: Vec<Vec<Option<DayCell>>>,
}

impl MonthView {
    /// All populated cells in row order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter_map(|c| c.as_ref())
    }

    /// Number of populated cells.
    pub fn n_days(&self) -> usize {
        self.cells().count()
    }
}
