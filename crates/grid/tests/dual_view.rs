use std::sync::Arc;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone};

use lunaria_annotate::TableRules;
use lunaria_dataset::{BoundaryDataset, Location, MonthRecord, YearRecord};
use lunaria_grid::{custom_month_view, gregorian_month_view};
use lunaria_index::MonthIndex;

fn start(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, 6, 0, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
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

fn rules() -> TableRules {
    TableRules::from_pairs([
        (date(2025, 1, 28), vec!["crossing:spica".to_string()]),
        (date(2025, 2, 6), vec!["new-moon-feast".to_string()]),
    ])
}

/// The same underlying lunar day must carry identical annotations in both
/// views. Mismatches between the two grids are the defect class the shared
/// annotation path exists to prevent.
#[test]
fn annotations_identical_across_views() {
    let index = index();
    let rules = rules();

    let custom_jan = custom_month_view(&index, &rules, 0, 0).unwrap();
    let custom_feb = custom_month_view(&index, &rules, 0, 1).unwrap();
    let custom_cells: Vec<_> = custom_jan.cells().chain(custom_feb.cells()).collect();

    for month in 1..=3u32 {
        let view = gregorian_month_view(&index, &rules, 2025, month).unwrap();
        for cell in view.cells() {
            let Some(overlay) = cell.custom else { continue };
            let counterpart = custom_cells
                .iter()
                .find(|c| c.iso_date == cell.iso_date)
                .unwrap_or_else(|| panic!("no custom cell for {}", cell.iso_date));
            assert_eq!(counterpart.custom, Some(overlay), "{}", cell.iso_date);
            assert_eq!(counterpart.glyph, cell.glyph, "{}", cell.iso_date);
            assert_eq!(counterpart.silver, cell.silver, "{}", cell.iso_date);
            assert_eq!(counterpart.bronze, cell.bronze, "{}", cell.iso_date);
            assert_eq!(counterpart.tags, cell.tags, "{}", cell.iso_date);
        }
    }
}

#[test]
fn custom_matrix_layout_thirty_days() {
    let index = index();
    let view = custom_month_view(&index, &lunaria_annotate::NoRules, 0, 0).unwrap();
    assert_eq!(view.label, "1st Month");
    assert_eq!(view.weeks.len(), 6);
    assert_eq!(view.n_days(), 30);

    // Day 1 sits alone in the last column of the first row.
    assert!(view.weeks[0][..6].iter().all(|c| c.is_none()));
    let day1 = view.weeks[0][6].as_ref().unwrap();
    assert_eq!(day1.custom.unwrap().day_number, 1);
    assert_eq!(day1.iso_date, date(2025, 1, 7));

    // Rows 2..=5 hold days 2..=29 in order.
    let mut expected = 2;
    for row in &view.weeks[1..5] {
        for cell in row {
            assert_eq!(cell.as_ref().unwrap().custom.unwrap().day_number, expected);
            expected += 1;
        }
    }

    // Day 30 opens the last row; the rest is padding.
    let day30 = view.weeks[5][0].as_ref().unwrap();
    assert_eq!(day30.custom.unwrap().day_number, 30);
    assert!(view.weeks[5][1..].iter().all(|c| c.is_none()));
}

#[test]
fn custom_matrix_layout_twenty_nine_days() {
    let index = index();
    let view = custom_month_view(&index, &lunaria_annotate::NoRules, 0, 1).unwrap();
    assert_eq!(view.label, "2nd Month");
    assert_eq!(view.weeks.len(), 6);
    assert_eq!(view.n_days(), 29);
    // 29-day month leaves the last row empty.
    assert!(view.weeks[5].iter().all(|c| c.is_none()));
}

#[test]
fn custom_view_days_map_to_consecutive_civil_days() {
    let index = index();
    let view = custom_month_view(&index, &lunaria_annotate::NoRules, 0, 0).unwrap();
    let cells: Vec<_> = view.cells().collect();
    for pair in cells.windows(2) {
        assert_eq!(
            pair[1].iso_date.num_days_from_ce(),
            pair[0].iso_date.num_days_from_ce() + 1
        );
    }
}
