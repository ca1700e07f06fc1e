use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Datelike;

use lunaria_dataset::BoundaryOrigin;
use lunaria_index::MonthIndex;

use crate::cli::MultiyearArgs;
use crate::session;

/// Print the month tables for every loaded lunar year.
pub fn run(args: MultiyearArgs) -> Result<()> {
    let session = session::bootstrap(&args.config)?;
    let index = MonthIndex::build(Arc::new(session.dataset))
        .context("boundary dataset failed validation")?;
    let dataset = Arc::clone(index.dataset());
    let current_year = session.today.year();

    for (yi, year) in dataset.years.iter().enumerate() {
        if args.start_year.is_some_and(|s| year.year < s)
            || args.end_year.is_some_and(|e| year.year > e)
        {
            continue;
        }
        let tag = if year.year < current_year {
            "Past Year"
        } else if year.year == current_year {
            "Current Year"
        } else {
            "Future Year"
        };
        println!("Year: {} ({tag})", year_range_label(&index, yi));
        for (mi, month) in year.months.iter().enumerate() {
            let days = index.span_days(yi, mi)?;
            let origin = match &month.origin {
                BoundaryOrigin::Astronomical => "astronomical".to_string(),
                BoundaryOrigin::Secondary(tag) => format!("secondary: {tag}"),
            };
            println!(
                "  Month {} begins: {} ({origin}) ({days} days)",
                mi + 1,
                month.start.format("%Y-%m-%d %H:%M:%S"),
            );
        }
        println!();
    }
    Ok(())
}

/// Year-range label like "2025-26": a lunar year usually straddles two
/// Gregorian years, but the end year is dropped back when the following
/// anchor falls in the first half of the year.
fn year_range_label(index: &MonthIndex, year_index: usize) -> String {
    let dataset = index.dataset();
    let year = &dataset.years[year_index];
    let start_year = year.months[0].start.year();
    let next_anchor = dataset
        .years
        .get(year_index + 1)
        .and_then(|y| y.months.first())
        .map(|m| m.start.date_naive());
    let end = match next_anchor {
        Some(anchor) => anchor,
        None => index.coverage().1,
    };
    let end_year = if end.month() > 6 {
        end.year()
    } else {
        end.year() - 1
    };
    if end_year <= start_year {
        format!("{start_year}")
    } else {
        format!("{start_year}-{:02}", end_year % 100)
    }
}
