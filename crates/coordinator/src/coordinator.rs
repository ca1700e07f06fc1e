//! The dual render coordinator.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use lunaria_annotate::SpecialDayRules;
use lunaria_cursor::{CursorMove, NavigationCursor};
use lunaria_dataset::{BoundaryDataset, Location, SourceError};
use lunaria_grid::{MonthView, custom_month_view, gregorian_month_view};
use lunaria_index::{CustomDate, MonthIndex};

use crate::error::CoordinatorError;
use crate::events::{RenderSink, RenderedEvent};

/// Which of the two grids is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridMode {
    /// The native lunar month matrix.
    #[default]
    Custom,
    /// The Gregorian grid with lunar overlay.
    Gregorian,
}

/// Opaque handle identifying one dataset load request.
///
/// A ticket whose request has been superseded by a newer `begin_load`
/// completes as [`LoadOutcome::Stale`] and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// How a completed load was handled.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The dataset was applied and the grid re-rendered once.
    Applied(RenderOutput),
    /// A newer request had superseded this one; the result was discarded.
    Stale,
    /// The fetch itself failed; the caller should degrade to the
    /// approximate fixed-length dataset.
    Failed(String),
}

/// One completed render of the active grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Mode the view was rendered in.
    pub mode: GridMode,
    /// The rendered month.
    pub view: MonthView,
    /// False when rendering the approximate fallback dataset.
    pub authoritative: bool,
    /// Payload published to the map overlay for this render.
    pub event: RenderedEvent,
}

/// Owns the dataset reference, the navigation cursor, and the active grid
/// mode, and keeps both views and the map overlay consistent across
/// navigation, mode switches, and dataset (re)loads.
///
/// Single-threaded by design: every mutation happens in event arrival
/// order, and the only suspension points are the collaborator fetches
/// outside this type. Datasets are replaced by a single reference swap,
/// never patched.
pub struct Coordinator {
    index: Option<Arc<MonthIndex>>,
    cursor: NavigationCursor,
    mode: GridMode,
    generation: u64,
    pending: Option<Location>,
    rules: Box<dyn SpecialDayRules>,
    sinks: Vec<Box<dyn RenderSink>>,
}

impl Coordinator {
    /// Creates a coordinator with no dataset bound, in custom mode.
    pub fn new(rules: Box<dyn SpecialDayRules>) -> Self {
        Self {
            index: None,
            cursor: NavigationCursor::Unresolved,
            mode: GridMode::default(),
            generation: 0,
            pending: None,
            rules,
            sinks: Vec::new(),
        }
    }

    /// Registers a consumer of completed-render notifications.
    pub fn add_sink(&mut self, sink: Box<dyn RenderSink>) {
        self.sinks.push(sink);
    }

    /// The active grid mode.
    pub fn mode(&self) -> GridMode {
        self.mode
    }

    /// Current cursor position, when resolved.
    pub fn cursor_position(&self) -> Option<(usize, usize)> {
        self.cursor.position()
    }

    /// True while a dataset load is in flight (rendering is suppressed).
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The currently bound dataset, if any.
    pub fn dataset(&self) -> Option<&Arc<BoundaryDataset>> {
        self.index.as_deref().map(MonthIndex::dataset)
    }

    /// Starts a dataset load for a location, superseding any in-flight
    /// load (last request wins). Rendering is suppressed until the load
    /// completes.
    pub fn begin_load(&mut self, location: Location) -> LoadTicket {
        self.generation += 1;
        info!(generation = self.generation, %location, "beginning dataset load");
        self.pending = Some(location);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Completes a load started by [`Self::begin_load`].
    ///
    /// A stale ticket (superseded by a newer `begin_load`) is discarded
    /// without touching any state. On success the dataset reference is
    /// swapped, the cursor re-resolved against the new dataset, and the
    /// active grid re-rendered exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] only for render failures after a
    /// successful apply; fetch failures come back as
    /// [`LoadOutcome::Failed`].
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<BoundaryDataset, SourceError>,
        today: NaiveDate,
    ) -> Result<LoadOutcome, CoordinatorError> {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale load result"
            );
            return Ok(LoadOutcome::Stale);
        }
        let dataset = match result {
            Ok(ds) => ds,
            Err(e) => {
                warn!(error = %e, "dataset load failed");
                self.pending = None;
                return Ok(LoadOutcome::Failed(e.to_string()));
            }
        };
        let index = match MonthIndex::build(Arc::new(dataset)) {
            Ok(index) => Arc::new(index),
            Err(e) => {
                warn!(error = %e, "fetched dataset failed validation");
                self.pending = None;
                return Ok(LoadOutcome::Failed(e.to_string()));
            }
        };
        self.cursor.rebind(&index, today);
        self.index = Some(index);
        self.pending = None;
        info!(generation = self.generation, "dataset applied");
        let output = self.render()?.expect("dataset bound and no load pending");
        Ok(LoadOutcome::Applied(output))
    }

    /// Switches the active grid mode and re-renders from the live cursor
    /// and index, never from cached output.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] when the re-render fails.
    pub fn set_mode(&mut self, mode: GridMode) -> Result<Option<RenderOutput>, CoordinatorError> {
        self.mode = mode;
        self.render()
    }

    /// Advances the cursor one month and re-renders on movement.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] when the re-render fails.
    pub fn next(&mut self) -> Result<Option<RenderOutput>, CoordinatorError> {
        self.step(NavigationCursor::next)
    }

    /// Steps the cursor back one month and re-renders on movement.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] when the re-render fails.
    pub fn prev(&mut self) -> Result<Option<RenderOutput>, CoordinatorError> {
        self.step(NavigationCursor::prev)
    }

    /// Jumps the cursor to the month containing `target`.
    ///
    /// An invalid target is a no-op, not a user-facing error: the cursor
    /// stays put and no render happens.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] when the re-render fails.
    pub fn jump_to(
        &mut self,
        target: CustomDate,
    ) -> Result<Option<RenderOutput>, CoordinatorError> {
        let Some(index) = self.index.clone() else {
            return Ok(None);
        };
        if self.pending.is_some() {
            return Ok(None);
        }
        match self.cursor.jump_to(&index, target) {
            Ok(CursorMove::Moved { .. }) => self.render(),
            Ok(CursorMove::Unchanged) => Ok(None),
            Err(e) => {
                debug!(%target, error = %e, "jump rejected, cursor unchanged");
                Ok(None)
            }
        }
    }

    /// Renders the active grid from the current cursor and index.
    ///
    /// Returns `Ok(None)` while a load is in flight or no dataset is
    /// bound; otherwise builds the view and publishes exactly one
    /// rendered notification to every sink.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinatorError`] when grid construction fails.
    pub fn render(&mut self) -> Result<Option<RenderOutput>, CoordinatorError> {
        if self.pending.is_some() {
            debug!("render suppressed: dataset load in flight");
            return Ok(None);
        }
        let Some(index) = self.index.as_deref() else {
            return Ok(None);
        };
        let Some((yi, mi)) = self.cursor.position() else {
            return Ok(None);
        };
        let month_length_days = index.span_days(yi, mi).map_err(lunaria_grid::GridError::from)?;
        let view = match self.mode {
            GridMode::Custom => custom_month_view(index, self.rules.as_ref(), yi, mi)?,
            GridMode::Gregorian => {
                // The Gregorian view shows the civil month the cursor
                // month begins in.
                let anchor = index
                    .to_gregorian(CustomDate::new(yi, mi, 1))
                    .map_err(lunaria_grid::GridError::from)?;
                gregorian_month_view(index, self.rules.as_ref(), anchor.year(), anchor.month())?
            }
        };
        let dataset = index.dataset();
        let event = RenderedEvent {
            lat: dataset.location.lat,
            lon: dataset.location.lon,
            label: dataset.location.label.clone(),
            month_length_days,
        };
        let authoritative = dataset.authoritative;
        for sink in &mut self.sinks {
            sink.rendered(&event);
        }
        Ok(Some(RenderOutput {
            mode: self.mode,
            view,
            authoritative,
            event,
        }))
    }

    fn step(
        &mut self,
        transition: fn(&mut NavigationCursor, &MonthIndex) -> CursorMove,
    ) -> Result<Option<RenderOutput>, CoordinatorError> {
        if self.pending.is_some() {
            return Ok(None);
        }
        let Some(index) = self.index.clone() else {
            return Ok(None);
        };
        match transition(&mut self.cursor, &index) {
            CursorMove::Moved { .. } => self.render(),
            CursorMove::Unchanged => Ok(None),
        }
    }
}
