//! Illumination glyph keyed on the day's position within its month.

use serde::Serialize;

/// Coarse illumination state shown next to a day number.
///
/// Months begin just after full moon, so day 1 and the final days of a
/// month sit near full illumination and mid-month sits near new. This is
/// a fixed-offset heuristic keyed to nominal 29/30-day months, not a
/// recomputation of the true phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonGlyph {
    /// Near-full disc.
    Full,
    /// Waning half disc.
    WaningQuarter,
    /// Dark disc.
    New,
    /// Waxing half disc.
    WaxingQuarter,
}

impl MoonGlyph {
    /// Terminal symbol for text rendering.
    pub fn symbol(self) -> char {
        match self {
            Self::Full => '●',
            Self::WaningQuarter => '◐',
            Self::New => '○',
            Self::WaxingQuarter => '◑',
        }
    }
}

/// Glyph for a day number within a month of the given length, or `None`
/// for days that carry no glyph.
///
/// Day 1 and the final two days of the month show full; days 8, 15 and 22
/// show the waning quarter, new and waxing quarter respectively.
pub fn glyph_for_day(day_number: u32, days_in_month: u32) -> Option<MoonGlyph> {
    if day_number == 1 || day_number + 2 > days_in_month {
        return Some(MoonGlyph::Full);
    }
    match day_number {
        8 => Some(MoonGlyph::WaningQuarter),
        15 => Some(MoonGlyph::New),
        22 => Some(MoonGlyph::WaxingQuarter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_one_is_full() {
        assert_eq!(glyph_for_day(1, 30), Some(MoonGlyph::Full));
        assert_eq!(glyph_for_day(1, 29), Some(MoonGlyph::Full));
    }

    #[test]
    fn final_two_days_are_full() {
        assert_eq!(glyph_for_day(29, 30), Some(MoonGlyph::Full));
        assert_eq!(glyph_for_day(30, 30), Some(MoonGlyph::Full));
        assert_eq!(glyph_for_day(28, 29), Some(MoonGlyph::Full));
        assert_eq!(glyph_for_day(29, 29), Some(MoonGlyph::Full));
        assert_eq!(glyph_for_day(28, 30), None);
    }

    #[test]
    fn quarter_offsets() {
        assert_eq!(glyph_for_day(8, 30), Some(MoonGlyph::WaningQuarter));
        assert_eq!(glyph_for_day(15, 30), Some(MoonGlyph::New));
        assert_eq!(glyph_for_day(22, 30), Some(MoonGlyph::WaxingQuarter));
    }

    #[test]
    fn off_offset_days_have_no_glyph() {
        for day in [2, 7, 9, 14, 16, 21, 23, 27] {
            assert_eq!(glyph_for_day(day, 30), None, "day {day}");
        }
    }

    #[test]
    fn serde_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&MoonGlyph::WaningQuarter).unwrap(),
            "\"waning-quarter\""
        );
    }
}
