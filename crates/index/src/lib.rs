//! # lunaria-index
//!
//! Bidirectional mapping between the Gregorian date axis and lunar
//! calendar coordinates.
//!
//! A [`MonthIndex`] is built once per [`lunaria_dataset::BoundaryDataset`]
//! and flattens every month into a half-open interval of civil days, giving
//! ordered (binary-searchable) `resolve` and exact `to_gregorian`
//! conversions that satisfy the round-trip law: for any date inside the
//! loaded range, `to_gregorian(resolve(d)) == d`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `custom_date` | Lunar (year, month, day) coordinates |
//! | `index` | Span table construction and both lookup directions |
//! | `error` | Error and out-of-range types |

mod custom_date;
mod error;
mod index;

pub use custom_date::CustomDate;
pub use error::{IndexError, OutOfRange, RangeSide};
pub use index::MonthIndex;
