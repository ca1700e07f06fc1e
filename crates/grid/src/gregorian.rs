//! Gregorian month grid with the lunar overlay.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use lunaria_annotate::SpecialDayRules;
use lunaria_index::MonthIndex;

use crate::cell::DayCell;
use crate::error::GridError;
use crate::view::MonthView;

/// Builds a standard ISO (Monday-first) Gregorian month grid.
///
/// Every day cell additionally carries the lunar coordinates obtained from
/// the index as a secondary annotation layer. Days outside the loaded
/// dataset render with no secondary annotation, never as an error.
///
/// # Errors
///
/// Returns [`GridError::InvalidGregorianMonth`] when (year, month) is not
/// a real calendar month.
pub fn gregorian_month_view(
    index: &MonthIndex,
    rules: &dyn SpecialDayRules,
    year: i32,
    month: u32,
) -> Result<MonthView, GridError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(GridError::InvalidGregorianMonth { year, month })?;
    let day_after_last = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(GridError::InvalidGregorianMonth { year, month })?;
    let n_days = (day_after_last - first).num_days() as u32;

    let leading = first.weekday().num_days_from_monday() as usize;
    let mut weeks: Vec<Vec<Option<DayCell>>> = Vec::with_capacity(6);
    let mut row: Vec<Option<DayCell>> = vec![None; leading];
    for day in 0..n_days {
        let date = first + Duration::days(i64::from(day));
        let cell = match index.resolve(date) {
            Ok(custom) => {
                let span = index.span_days(custom.year_index, custom.month_index)?;
                DayCell::resolved(date, custom, span, rules)
            }
            Err(_) => DayCell::unresolved(date, rules),
        };
        row.push(Some(cell));
        if row.len() == 7 {
            weeks.push(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        row.resize(7, None);
        weeks.push(row);
    }

    debug!(year, month, n_days, "built Gregorian month view");
    Ok(MonthView {
        label: format!("{} {year}", month_name(month)),
        weeks,
    })
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::{DateTime, FixedOffset, TimeZone};
    use lunaria_annotate::NoRules;
    use lunaria_dataset::{BoundaryDataset, Location, MonthRecord, YearRecord};

    fn start(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 6, 0, 0)
            .unwrap()
    }

    fn index() -> MonthIndex {
        let ds = BoundaryDataset {
            location: Location::new(51.48, 0.0, "Greenwich, UK"),
            timezone: "UTC".to_string(),
            authoritative: true,
            years: vec![YearRecord {
                year: 2025,
                months: vec![
                    MonthRecord::new(start(2025, 1, 7), 30),
                    MonthRecord::new(start(2025, 2, 6), 29),
                ],
            }],
        };
        MonthIndex::build(Arc::new(ds)).unwrap()
    }

    #[test]
    fn january_2025_layout() {
        let view = gregorian_month_view(&index(), &NoRules, 2025, 1).unwrap();
        assert_eq!(view.label, "January 2025");
        assert_eq!(view.n_days(), 31);
        // Jan 1 2025 is a Wednesday: two leading blanks.
        assert!(view.weeks[0][0].is_none());
        assert!(view.weeks[0][1].is_none());
        let jan1 = view.weeks[0][2].as_ref().unwrap();
        assert_eq!(jan1.iso_date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn out_of_range_days_have_no_overlay() {
        let view = gregorian_month_view(&index(), &NoRules, 2025, 1).unwrap();
        let jan6 = view
            .cells()
            .find(|c| c.iso_date.day() == 6)
            .unwrap();
        assert!(jan6.custom.is_none());
        let jan7 = view
            .cells()
            .find(|c| c.iso_date.day() == 7)
            .unwrap();
        let overlay = jan7.custom.unwrap();
        assert_eq!((overlay.month_index, overlay.day_number), (0, 1));
    }

    #[test]
    fn overlay_crosses_lunar_month_boundary() {
        let view = gregorian_month_view(&index(), &NoRules, 2025, 2).unwrap();
        let feb5 = view.cells().find(|c| c.iso_date.day() == 5).unwrap();
        let feb6 = view.cells().find(|c| c.iso_date.day() == 6).unwrap();
        assert_eq!(feb5.custom.unwrap().day_number, 30);
        assert_eq!(feb6.custom.unwrap().month_index, 1);
        assert_eq!(feb6.custom.unwrap().day_number, 1);
    }

    #[test]
    fn invalid_month_rejected() {
        assert_eq!(
            gregorian_month_view(&index(), &NoRules, 2025, 13).unwrap_err(),
            GridError::InvalidGregorianMonth {
                year: 2025,
                month: 13,
            }
        );
    }
}
