//! The native lunar month grid.

use tracing::debug;

use lunaria_annotate::SpecialDayRules;
use lunaria_index::{CustomDate, MonthIndex};

use crate::cell::DayCell;
use crate::error::GridError;
use crate::view::MonthView;

/// English ordinal month label: "1st Month", "2nd Month", ...
pub fn ordinal_label(month_number: u32) -> String {
    let suffix = match (month_number % 10, month_number % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{month_number}{suffix} Month")
}

/// Builds the lunar month at the given indices as its traditional fixed
/// matrix.
///
/// Layout: the first row holds six empty label cells and day 1 in the last
/// column; the middle rows hold days 2..=29 seven to a row; the last row
/// holds day 30 (and any overflow day from an astronomically long month)
/// starting at the first column, or stays empty for a 29-day month.
///
/// # Errors
///
/// Returns [`GridError`] when the indices do not exist in the dataset.
pub fn custom_month_view(
    index: &MonthIndex,
    rules: &dyn SpecialDayRules,
    year_index: usize,
    month_index: usize,
) -> Result<MonthView, GridError> {
    let span_days = index.span_days(year_index, month_index)?;
    let mut cells = Vec::with_capacity(span_days as usize);
    for day in 1..=span_days {
        let custom = CustomDate::new(year_index, month_index, day);
        let iso = index.to_gregorian(custom)?;
        cells.push(DayCell::resolved(iso, custom, span_days, rules));
    }

    let mut weeks: Vec<Vec<Option<DayCell>>> = Vec::with_capacity(6);
    let mut iter = cells.into_iter();

    // Row 1: merged label area, day 1 alone in the last column.
    let mut row1: Vec<Option<DayCell>> = vec![None; 6];
    row1.push(iter.next());
    weeks.push(row1);

    // Rows 2..=5: days 2..=29, seven per row.
    for _ in 0..4 {
        let row: Vec<Option<DayCell>> = (0..7).map(|_| iter.next()).collect();
        weeks.push(row);
    }

    // Last row: day 30 (and any overflow) from the first column.
    let mut last: Vec<Option<DayCell>> = iter.map(Some).collect();
    last.resize(7, None);
    weeks.push(last);

    debug!(year_index, month_index, span_days, "built custom month view");
    Ok(MonthView {
        label: ordinal_label(month_index as u32 + 1),
        weeks,
    })
}
