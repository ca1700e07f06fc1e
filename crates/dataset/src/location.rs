//! Geographic location the dataset was computed for.

use serde::{Deserialize, Serialize};

/// A geographic location with a display label.
///
/// Month boundaries depend on the observer's position (dawn times shift
/// with latitude and longitude), so every dataset is keyed by the location
/// it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in decimal degrees, positive north.
    pub lat: f64,
    /// Longitude in decimal degrees, positive east.
    pub lon: f64,
    /// Human-readable label, e.g. "Greenwich, UK".
    pub label: String,
}

impl Location {
    /// Creates a labelled location.
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            label: label.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.4}, {:.4})", self.label, self.lat, self.lon)
    }
}
