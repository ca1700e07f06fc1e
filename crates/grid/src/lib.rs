//! # lunaria-grid
//!
//! Month matrices and per-day-cell metadata for both calendar views.
//!
//! The same [`DayCell`] type and annotation path serve the native lunar
//! grid ([`custom_month_view`]) and the Gregorian overlay grid
//! ([`gregorian_month_view`]); the views only differ in layout, never in
//! how a day is annotated.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `cell` | Per-day-cell metadata and annotation assembly |
//! | `view` | Row-of-cells month view shared by both shapes |
//! | `custom` | The traditional fixed 6-row lunar month matrix |
//! | `gregorian` | ISO Monday-first month grid with lunar overlay |
//! | `error` | Error types |

mod cell;
mod custom;
mod error;
mod gregorian;
mod view;

pub use cell::{CustomDateOut, DayCell};
pub use custom::{custom_month_view, ordinal_label};
pub use error::GridError;
pub use gregorian::gregorian_month_view;
pub use view::MonthView;
