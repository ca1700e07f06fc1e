//! Fixed-length fallback dataset for degraded display.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, TimeZone};
use tracing::warn;

use crate::location::Location;
use crate::record::{BoundaryDataset, MonthRecord, YearRecord};

/// Nominal month lengths used when no astronomical data is available.
/// Lunar months alternate between 30 and 29 days to a close approximation.
const NOMINAL_CYCLE: [u32; 2] = [30, 29];

/// Builds a non-authoritative dataset of nominal alternating 30/29-day
/// months, for display when the astronomy collaborator is unreachable.
///
/// `anchor` is taken as day 1 of month 1; twelve months are generated,
/// starting at 06:00 in the given fixed offset. The result carries
/// `authoritative: false` so renderers can mark it as approximate.
pub fn approximate_dataset(
    location: Location,
    timezone: &str,
    offset: FixedOffset,
    anchor: NaiveDate,
) -> BoundaryDataset {
    warn!(
        location = %location,
        %anchor,
        "astronomy data unavailable, building approximate fixed-length dataset"
    );
    let mut months = Vec::with_capacity(12);
    let mut day = anchor;
    for i in 0..12 {
        let days = NOMINAL_CYCLE[i % 2];
        let start = offset
            .from_local_datetime(&day.and_hms_opt(6, 0, 0).expect("06:00 is a valid time"))
            .single()
            .expect("fixed offsets have no ambiguous local times");
        months.push(MonthRecord::new(start, days));
        day += Duration::days(i64::from(days));
    }
    BoundaryDataset {
        location,
        timezone: timezone.to_string(),
        authoritative: false,
        years: vec![YearRecord {
            year: anchor.year(),
            months,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_thirty_twenty_nine() {
        let ds = approximate_dataset(
            Location::new(51.48, 0.0, "Greenwich, UK"),
            "UTC",
            FixedOffset::east_opt(0).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
        );
        assert!(!ds.authoritative);
        assert!(ds.validate().is_ok());
        let months = &ds.years[0].months;
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].days, 30);
        assert_eq!(months[1].days, 29);
        assert_eq!(months[11].days, 29);
    }

    #[test]
    fn starts_chain_from_anchor() {
        let ds = approximate_dataset(
            Location::new(0.0, 0.0, "Equator"),
            "UTC",
            FixedOffset::east_opt(0).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
        );
        let months = &ds.years[0].months;
        assert_eq!(
            months[0].start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()
        );
        // Second month begins 30 days after the anchor.
        assert_eq!(
            months[1].start.date_naive(),
            NaiveDate::from_ymd_opt(2025, 2, 6).unwrap()
        );
    }
}
