//! Render notification published to the map-overlay collaborator.

/// Payload of the single "rendered" notification per completed render.
///
/// The map overlay positions its location marker from this; the radial
/// projection math itself is external to this core.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEvent {
    /// Latitude of the active location, decimal degrees.
    pub lat: f64,
    /// Longitude of the active location, decimal degrees.
    pub lon: f64,
    /// Display label of the active location.
    pub label: String,
    /// Actual length in days of the month under the cursor.
    pub month_length_days: u32,
}

/// Consumer of completed-render notifications.
pub trait RenderSink {
    /// Called exactly once per completed render.
    fn rendered(&mut self, event: &RenderedEvent);
}
