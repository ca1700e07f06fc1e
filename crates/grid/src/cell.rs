//! Per-day-cell metadata shared by both views.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use lunaria_annotate::{MoonGlyph, SpecialDayRules, bronze, glyph_for_day, silver};
use lunaria_index::CustomDate;

/// Everything the display layer needs to paint one day cell.
///
/// Built identically for both views: the annotations derive from the lunar
/// coordinates through the shared rules in `lunaria-annotate`, never from
/// per-view logic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    /// Civil date of the cell.
    pub iso_date: NaiveDate,
    /// Lunar coordinates, absent when the date is outside the loaded
    /// dataset (rendered without secondary annotation, never as an error).
    pub custom: Option<CustomDateOut>,
    /// Special-day tag strings for the civil date.
    pub tags: Vec<String>,
    /// Illumination glyph, when the lunar day carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<MoonGlyph>,
    /// Silver counter value, when defined for this lunar day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silver: Option<u32>,
    /// Bronze counter value, when defined for this lunar day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bronze: Option<u32>,
}

/// Serialisable form of the lunar coordinates carried by a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomDateOut {
    /// 0-based month index within the year.
    pub month_index: usize,
    /// 1-based day within the month.
    pub day_number: u32,
}

impl DayCell {
    /// Builds the cell for a civil date with known lunar coordinates.
    ///
    /// `span_days` is the actual length of the lunar month, needed for the
    /// "final two days" glyph rule.
    pub fn resolved(
        iso_date: NaiveDate,
        custom: CustomDate,
        span_days: u32,
        rules: &dyn SpecialDayRules,
    ) -> Self {
        let month_number = custom.month_number();
        Self {
            iso_date,
            custom: Some(CustomDateOut {
                month_index: custom.month_index,
                day_number: custom.day_number,
            }),
            tags: tags_for(iso_date, rules),
            glyph: glyph_for_day(custom.day_number, span_days),
            silver: silver(month_number, custom.day_number),
            bronze: bronze(month_number, custom.day_number),
        }
    }

    /// Builds the cell for a civil date outside the loaded dataset: tags
    /// still apply (they are keyed on the civil date), but there is no
    /// secondary lunar annotation.
    pub fn unresolved(iso_date: NaiveDate, rules: &dyn SpecialDayRules) -> Self {
        Self {
            iso_date,
            custom: None,
            tags: tags_for(iso_date, rules),
            glyph: None,
            silver: None,
            bronze: None,
        }
    }
}

/// Queries the rule table, isolating failures to this one cell.
fn tags_for(date: NaiveDate, rules: &dyn SpecialDayRules) -> Vec<String> {
    match rules.classes_for(date) {
        Ok(tags) => tags,
        Err(e) => {
            warn!(%date, error = %e, "special-day rule lookup failed, leaving cell untagged");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunaria_annotate::{NoRules, RuleError, TableRules};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn resolved_cell_carries_all_annotations() {
        let rules = TableRules::from_pairs([(date(2025, 1, 28), vec!["x".to_string()])]);
        let cell = DayCell::resolved(date(2025, 1, 28), CustomDate::new(0, 0, 22), 30, &rules);
        assert_eq!(cell.tags, vec!["x"]);
        assert_eq!(cell.glyph, Some(MoonGlyph::WaxingQuarter));
        assert_eq!(cell.silver, Some(3));
        assert_eq!(cell.bronze, Some(1));
        assert_eq!(
            cell.custom,
            Some(CustomDateOut {
                month_index: 0,
                day_number: 22,
            })
        );
    }

    #[test]
    fn unresolved_cell_keeps_tags_only() {
        let rules = TableRules::from_pairs([(date(2030, 6, 1), vec!["y".to_string()])]);
        let cell = DayCell::unresolved(date(2030, 6, 1), &rules);
        assert_eq!(cell.tags, vec!["y"]);
        assert!(cell.custom.is_none());
        assert!(cell.glyph.is_none());
        assert!(cell.silver.is_none());
        assert!(cell.bronze.is_none());
    }

    #[test]
    fn rule_failure_degrades_to_empty_tags() {
        struct Failing;
        impl SpecialDayRules for Failing {
            fn classes_for(&self, _date: NaiveDate) -> Result<Vec<String>, RuleError> {
                Err(RuleError::Source {
                    reason: "down".to_string(),
                })
            }
        }
        let cell = DayCell::resolved(date(2025, 1, 7), CustomDate::new(0, 0, 1), 30, &Failing);
        assert!(cell.tags.is_empty());
        // Other annotations are unaffected by the rule failure.
        assert_eq!(cell.glyph, Some(MoonGlyph::Full));
    }

    #[test]
    fn day_without_annotations() {
        let cell = DayCell::resolved(date(2025, 1, 10), CustomDate::new(0, 0, 4), 30, &NoRules);
        assert!(cell.glyph.is_none());
        assert!(cell.silver.is_none());
        assert!(cell.bronze.is_none());
        assert!(cell.tags.is_empty());
    }
}
