//! # lunaria-dataset
//!
//! Boundary dataset records for astronomically-bounded lunar months.
//!
//! A [`BoundaryDataset`] is an immutable, per-location snapshot of ordered
//! years, each holding ordered months of irregular, data-driven length. The
//! snapshot is produced by an external astronomy collaborator (behind the
//! [`DatasetSource`] seam) and replaced wholesale whenever the authoritative
//! location changes.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | Year/month boundary records and structural validation |
//! | `location` | Geographic location key |
//! | `source` | `DatasetSource` trait and JSON snapshot implementation |
//! | `approximate` | Fixed-length fallback dataset for degraded display |
//! | `error` | Error types |

mod approximate;
mod error;
mod location;
mod record;
mod source;

pub use approximate::approximate_dataset;
pub use error::{DatasetError, SourceError};
pub use location::Location;
pub use record::{BoundaryDataset, BoundaryOrigin, MonthRecord, YearRecord};
pub use source::{DatasetSource, JsonFileSource};
