//! # lunaria-annotate
//!
//! Pure, deterministic per-day annotation rules shared by both grid views.
//!
//! Every function here is keyed only on lunar coordinates (1-based month
//! number, day number) or a plain Gregorian date, never on which grid is
//! asking. That single-source design is what guarantees the custom grid
//! and the Gregorian overlay can never disagree about the same underlying
//! day.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `glyph` | Four-state illumination glyph at fixed day offsets |
//! | `counters` | Silver and bronze ordinal counters over the year |
//! | `rules` | Special-day tag lookup behind the `SpecialDayRules` seam |
//! | `error` | Error types |

mod counters;
mod error;
mod glyph;
mod rules;

pub use counters::{bronze, silver};
pub use error::RuleError;
pub use glyph::{MoonGlyph, glyph_for_day};
pub use rules::{NoRules, SpecialDayRules, TableRules};
