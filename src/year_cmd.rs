use std::sync::Arc;

use anyhow::{Context, Result};

use lunaria_dataset::BoundaryOrigin;
use lunaria_index::MonthIndex;

use crate::cli::YearArgs;
use crate::session;

/// Print the month table for the lunar year containing today.
pub fn run(args: YearArgs) -> Result<()> {
    let session = session::bootstrap(&args.config)?;
    let index = MonthIndex::build(Arc::new(session.dataset))
        .context("boundary dataset failed validation")?;

    // The year today falls in, or the first loaded year when today is
    // outside the dataset.
    let (year_index, current_month) = match index.resolve(session.today) {
        Ok(custom) => (custom.year_index, Some(custom.month_index + 1)),
        Err(_) => (0, None),
    };

    let dataset = index.dataset();
    let year = &dataset.years[year_index];
    println!("--- Yearly Events ({}) ---", session.location);
    println!("Months in this year: {}", year.months.len());
    for (mi, month) in year.months.iter().enumerate() {
        let days = index.span_days(year_index, mi)?;
        let origin = match &month.origin {
            BoundaryOrigin::Astronomical => String::new(),
            BoundaryOrigin::Secondary(tag) => format!(" (secondary: {tag})"),
        };
        println!(
            "Month {} begins: {}{origin} ({days} days)",
            mi + 1,
            month.start.format("%Y-%m-%d %H:%M:%S"),
        );
    }
    match current_month {
        Some(m) => println!("\nCurrent Month in this Year: {m}"),
        None => println!("\nToday is outside the loaded dataset."),
    }
    println!("--- End Year Events ---");
    Ok(())
}
