//! Dataset source seam for the astronomy collaborator.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::SourceError;
use crate::location::Location;
use crate::record::BoundaryDataset;

/// Interface to the external astronomy collaborator.
///
/// How boundaries are computed (dawn times, full moons, star crossings) is
/// entirely the collaborator's business; this crate only consumes the
/// resulting boundary records.
pub trait DatasetSource {
    /// Fetches the boundary dataset for a location.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the collaborator cannot be reached or
    /// produces an unparseable or structurally invalid dataset.
    fn fetch(&self, location: &Location) -> Result<BoundaryDataset, SourceError>;
}

/// Dataset source backed by a JSON snapshot on disk.
///
/// Stands in for the live astronomy service: the snapshot holds the exact
/// interchange structure ([`BoundaryDataset`]) the service would return.
/// The parsed dataset is validated before it is handed out.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from the given JSON file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DatasetSource for JsonFileSource {
    fn fetch(&self, location: &Location) -> Result<BoundaryDataset, SourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| SourceError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let mut dataset: BoundaryDataset =
            serde_json::from_str(&raw).map_err(|e| SourceError::Parse {
                reason: e.to_string(),
            })?;
        dataset.validate()?;
        // The snapshot keeps its own computed coordinates but adopts the
        // requested display label.
        dataset.location.label = location.label.clone();
        info!(
            path = %self.path.display(),
            n_years = dataset.years.len(),
            n_months = dataset.n_months(),
            "loaded boundary dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let source = JsonFileSource::new("/nonexistent/boundaries.json");
        let loc = Location::new(0.0, 0.0, "Nowhere");
        assert!(matches!(
            source.fetch(&loc).unwrap_err(),
            SourceError::Io { .. }
        ));
    }
}
