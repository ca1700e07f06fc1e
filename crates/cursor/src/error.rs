//! Error types for the lunaria-cursor crate.

/// Error type for invalid cursor jumps.
///
/// A rejected jump leaves the cursor exactly where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    /// Returned when the jump target does not exist in the loaded dataset.
    #[error("jump target (year {year_index}, month {month_index}) outside loaded dataset")]
    TargetOutOfBounds {
        /// Requested year index.
        year_index: usize,
        /// Requested month index.
        month_index: usize,
    },

    /// Returned when a transition is attempted before any dataset is bound.
    #[error("cursor is unresolved: no dataset loaded")]
    Unresolved,
}
