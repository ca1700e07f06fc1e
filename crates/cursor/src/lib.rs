//! # lunaria-cursor
//!
//! The navigation cursor: a mutable (year index, month index) position over
//! a [`lunaria_index::MonthIndex`], with bounds-checked transitions.
//!
//! Every transition reports a [`CursorMove`]; `Moved` is the single
//! notification the render coordinator consumes to trigger a re-render of
//! the visible grid.

mod cursor;
mod error;

pub use cursor::{CursorMove, NavigationCursor};
pub use error::CursorError;
