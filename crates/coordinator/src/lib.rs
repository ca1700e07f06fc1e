//! # lunaria-coordinator
//!
//! The dual render coordinator: owns the dataset reference, the
//! navigation cursor, and the active grid mode, and keeps the custom
//! grid, the Gregorian overlay grid, and the map overlay consistent
//! across navigation, mode switches, and asynchronous dataset (re)loads.
//!
//! Loads follow last-request-wins: a [`LoadTicket`] from a superseded
//! request completes as [`LoadOutcome::Stale`] and its dataset is
//! discarded, so a slow early response can never overwrite a faster
//! later one. Rendering is suppressed while any load is in flight.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `coordinator` | State ownership, load lifecycle, navigation, rendering |
//! | `retry` | Bounded-retry start-up polling with cancellation |
//! | `events` | Rendered-notification payload and sink trait |
//! | `error` | Error types |

mod coordinator;
mod error;
mod events;
mod retry;

pub use coordinator::{Coordinator, GridMode, LoadOutcome, LoadTicket, RenderOutput};
pub use error::CoordinatorError;
pub use events::{RenderSink, RenderedEvent};
pub use retry::{RetryPolicy, load_with_retry};
