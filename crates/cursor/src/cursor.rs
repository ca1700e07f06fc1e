//! Cursor state machine and transitions.

use chrono::NaiveDate;
use tracing::debug;

use lunaria_index::{CustomDate, MonthIndex};

use crate::error::CursorError;

/// Result of a cursor transition.
///
/// `Moved` is the single notification consumed by the render coordinator;
/// `Unchanged` means the transition was a no-op (already at a dataset
/// bound, or the cursor is unresolved).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    /// The cursor moved to a new month.
    Moved {
        /// New year index.
        year_index: usize,
        /// New month index.
        month_index: usize,
    },
    /// The cursor did not move.
    Unchanged,
}

/// Mutable (year index, month index) pointer into the loaded dataset.
///
/// `Unresolved` exists only while no dataset is bound; every other state
/// is guaranteed valid against the index that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCursor {
    /// No dataset loaded yet.
    Unresolved,
    /// Valid position within the loaded dataset.
    Resolved {
        /// Year index within the dataset.
        year_index: usize,
        /// Month index within the year.
        month_index: usize,
    },
}

impl NavigationCursor {
    /// Resolves the cursor to the month containing `today`, falling back
    /// to the first month of the first year when `today` lies outside the
    /// loaded range.
    pub fn init(index: &MonthIndex, today: NaiveDate) -> Self {
        match index.resolve(today) {
            Ok(custom) => Self::Resolved {
                year_index: custom.year_index,
                month_index: custom.month_index,
            },
            Err(oor) => {
                debug!(%oor, "today outside loaded range, starting at first month");
                Self::Resolved {
                    year_index: 0,
                    month_index: 0,
                }
            }
        }
    }

    /// Current position, or `None` while unresolved.
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Unresolved => None,
            Self::Resolved {
                year_index,
                month_index,
            } => Some((year_index, month_index)),
        }
    }

    /// Advances to the next month, rolling into the next year's first
    /// month at a year boundary. A no-op at the absolute end of the
    /// dataset.
    pub fn next(&mut self, index: &MonthIndex) -> CursorMove {
        let Some((yi, mi)) = self.position() else {
            return CursorMove::Unchanged;
        };
        if mi + 1 < index.months_in_year(yi) {
            self.set(yi, mi + 1)
        } else if yi + 1 < index.n_years() {
            self.set(yi + 1, 0)
        } else {
            CursorMove::Unchanged
        }
    }

    /// Steps back to the previous month, rolling into the previous year's
    /// last month at a year boundary. A no-op at the absolute start of the
    /// dataset.
    pub fn prev(&mut self, index: &MonthIndex) -> CursorMove {
        let Some((yi, mi)) = self.position() else {
            return CursorMove::Unchanged;
        };
        if mi > 0 {
            self.set(yi, mi - 1)
        } else if yi > 0 {
            let prev_year = yi - 1;
            self.set(prev_year, index.months_in_year(prev_year) - 1)
        } else {
            CursorMove::Unchanged
        }
    }

    /// Jumps directly to the month containing `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError`] when the cursor is unresolved or the target
    /// does not exist in the loaded dataset; the cursor is left unchanged.
    pub fn jump_to(
        &mut self,
        index: &MonthIndex,
        target: CustomDate,
    ) -> Result<CursorMove, CursorError> {
        if self.position().is_none() {
            return Err(CursorError::Unresolved);
        }
        let valid = index
            .span_days(target.year_index, target.month_index)
            .map(|span| target.day_number >= 1 && target.day_number <= span)
            .unwrap_or(false);
        if !valid {
            return Err(CursorError::TargetOutOfBounds {
                year_index: target.year_index,
                month_index: target.month_index,
            });
        }
        Ok(self.set(target.year_index, target.month_index))
    }

    /// Re-resolves the cursor after a dataset swap.
    ///
    /// Keeps the position when the new dataset still contains it, clamps
    /// to the year's last month when the year survived with fewer months,
    /// and otherwise re-initialises from `today`.
    pub fn rebind(&mut self, index: &MonthIndex, today: NaiveDate) -> CursorMove {
        let new = match self.position() {
            Some((yi, mi)) if mi < index.months_in_year(yi) => Self::Resolved {
                year_index: yi,
                month_index: mi,
            },
            Some((yi, _)) if index.months_in_year(yi) > 0 => Self::Resolved {
                year_index: yi,
                month_index: index.months_in_year(yi) - 1,
            },
            _ => Self::init(index, today),
        };
        let moved = new != *self;
        *self = new;
        match self.position() {
            Some((year_index, month_index)) if moved => CursorMove::Moved {
                year_index,
                month_index,
            },
            _ => CursorMove::Unchanged,
        }
    }

    fn set(&mut self, year_index: usize, month_index: usize) -> CursorMove {
        let target = Self::Resolved {
            year_index,
            month_index,
        };
        if target == *self {
            return CursorMove::Unchanged;
        }
        *self = target;
        CursorMove::Moved {
            year_index,
            month_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone};
    use std::sync::Arc;

    use lunaria_dataset::{BoundaryDataset, Location, MonthRecord, YearRecord};

    fn start(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 6, 0, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Two years, two months each.
    fn index() -> MonthIndex {
        let ds = BoundaryDataset {
            location: Location::new(51.48, 0.0, "Greenwich, UK"),
            timezone: "UTC".to_string(),
            authoritative: true,
            years: vec![
                YearRecord {
                    year: 2025,
                    months: vec![
                        MonthRecord::new(start(2025, 1, 7), 30),
                        MonthRecord::new(start(2025, 2, 6), 29),
                    ],
                },
                YearRecord {
                    year: 2026,
                    months: vec![
                        MonthRecord::new(start(2026, 1, 26), 30),
                        MonthRecord::new(start(2026, 2, 25), 29),
                    ],
                },
            ],
        };
        MonthIndex::build(Arc::new(ds)).unwrap()
    }

    #[test]
    fn init_resolves_today() {
        let idx = index();
        let cursor = NavigationCursor::init(&idx, date(2025, 2, 10));
        assert_eq!(cursor.position(), Some((0, 1)));
    }

    #[test]
    fn init_falls_back_to_first_month() {
        let idx = index();
        let cursor = NavigationCursor::init(&idx, date(2030, 1, 1));
        assert_eq!(cursor.position(), Some((0, 0)));
    }

    #[test]
    fn next_rolls_into_next_year() {
        let idx = index();
        let mut cursor = NavigationCursor::init(&idx, date(2025, 2, 10));
        assert_eq!(
            cursor.next(&idx),
            CursorMove::Moved {
                year_index: 1,
                month_index: 0,
            }
        );
    }

    #[test]
    fn next_at_end_is_idempotent_noop() {
        let idx = index();
        let mut cursor = NavigationCursor::Resolved {
            year_index: 1,
            month_index: 1,
        };
        for _ in 0..3 {
            assert_eq!(cursor.next(&idx), CursorMove::Unchanged);
            assert_eq!(cursor.position(), Some((1, 1)));
        }
    }

    #[test]
    fn prev_rolls_into_previous_year_last_month() {
        let idx = index();
        let mut cursor = NavigationCursor::Resolved {
            year_index: 1,
            month_index: 0,
        };
        assert_eq!(
            cursor.prev(&idx),
            CursorMove::Moved {
                year_index: 0,
                month_index: 1,
            }
        );
    }

    #[test]
    fn prev_at_start_is_noop() {
        let idx = index();
        let mut cursor = NavigationCursor::Resolved {
            year_index: 0,
            month_index: 0,
        };
        assert_eq!(cursor.prev(&idx), CursorMove::Unchanged);
        assert_eq!(cursor.position(), Some((0, 0)));
    }

    #[test]
    fn unresolved_transitions_are_noops() {
        let idx = index();
        let mut cursor = NavigationCursor::Unresolved;
        assert_eq!(cursor.next(&idx), CursorMove::Unchanged);
        assert_eq!(cursor.prev(&idx), CursorMove::Unchanged);
        assert_eq!(cursor.position(), None);
    }

    #[test]
    fn jump_to_valid_target() {
        let idx = index();
        let mut cursor = NavigationCursor::init(&idx, date(2025, 1, 10));
        let mv = cursor.jump_to(&idx, CustomDate::new(1, 1, 5)).unwrap();
        assert_eq!(
            mv,
            CursorMove::Moved {
                year_index: 1,
                month_index: 1,
            }
        );
    }

    #[test]
    fn jump_to_invalid_target_leaves_cursor_unchanged() {
        let idx = index();
        let mut cursor = NavigationCursor::init(&idx, date(2025, 1, 10));
        let err = cursor.jump_to(&idx, CustomDate::new(5, 0, 1)).unwrap_err();
        assert_eq!(
            err,
            CursorError::TargetOutOfBounds {
                year_index: 5,
                month_index: 0,
            }
        );
        assert_eq!(cursor.position(), Some((0, 0)));

        // Day number past the month span is also rejected.
        assert!(cursor.jump_to(&idx, CustomDate::new(0, 0, 31)).is_err());
        assert_eq!(cursor.position(), Some((0, 0)));
    }

    #[test]
    fn rebind_keeps_valid_position() {
        let idx = index();
        let mut cursor = NavigationCursor::Resolved {
            year_index: 1,
            month_index: 1,
        };
        assert_eq!(cursor.rebind(&idx, date(2025, 1, 10)), CursorMove::Unchanged);
        assert_eq!(cursor.position(), Some((1, 1)));
    }

    #[test]
    fn rebind_clamps_or_reinits_out_of_range_position() {
        let idx = index();
        let mut cursor = NavigationCursor::Resolved {
            year_index: 1,
            month_index: 7,
        };
        // Year survives with fewer months: clamp to its last month.
        assert_eq!(
            cursor.rebind(&idx, date(2025, 1, 10)),
            CursorMove::Moved {
                year_index: 1,
                month_index: 1,
            }
        );

        let mut gone = NavigationCursor::Resolved {
            year_index: 9,
            month_index: 0,
        };
        // Year gone entirely: fall back to resolving today.
        assert_eq!(
            gone.rebind(&idx, date(2025, 1, 10)),
            CursorMove::Moved {
                year_index: 0,
                month_index: 0,
            }
        );
    }
}
