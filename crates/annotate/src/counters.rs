//! Ordinal counters running over the lunar year.
//!
//! Both counters are defined only on the weekly offset days {8, 15, 22, 29}
//! and are keyed purely on the 1-based month number and day number, so the
//! custom grid and the Gregorian overlay compute identical values from the
//! same coordinates.

/// Day numbers that carry counter tags.
const OFFSETS: [u32; 4] = [8, 15, 22, 29];

fn offset_index(day_number: u32) -> Option<u32> {
    OFFSETS
        .iter()
        .position(|&d| d == day_number)
        .map(|i| i as u32)
}

/// Silver counter: the running ordinal of the offset day within the year.
///
/// Defined on days {8, 15, 22, 29} of every month as
/// `(month - 1) * 4 + offset + 1`, monotonic over the year and uncapped;
/// undefined on all other days.
pub fn silver(month_number: u32, day_number: u32) -> Option<u32> {
    if month_number == 0 {
        return None;
    }
    let offset = offset_index(day_number)?;
    Some((month_number - 1) * 4 + offset + 1)
}

/// Bronze counter: a capped seven-step count that only begins on day 22
/// of month 1.
///
/// Month 1 contributes 1 and 2 on days 22 and 29. From month 2 onward the
/// count is `3 + (month - 2) * 4 + offset` on the offset days, and the
/// counter is undefined once the value would exceed 7. The stepping rule,
/// including the cap, is a domain convention reproduced exactly.
pub fn bronze(month_number: u32, day_number: u32) -> Option<u32> {
    match month_number {
        0 => None,
        1 => match day_number {
            22 => Some(1),
            29 => Some(2),
            _ => None,
        },
        m => {
            let offset = offset_index(day_number)?;
            let value = 3 + (m - 2) * 4 + offset;
            (value <= 7).then_some(value)
        }
    }
}
