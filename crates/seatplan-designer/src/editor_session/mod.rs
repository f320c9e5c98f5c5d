//! Editor session: the orchestrator behind the seat editor UI.
//!
//! The session owns the seats, the numbering cursor, and the selection. It
//! routes user actions to the layout generator and alignment engine, mirrors
//! every change to the [`Scene`], asks the [`Dialog`] for input, and writes
//! layouts to a [`LayoutStore`]. User-facing failures become notifications
//! and an [`ActionOutcome`]; nothing is left half-applied.
//!
//! This module is split into submodules:
//! - `seats`: adding, importing, relabeling and deleting seats
//! - `transforms`: alignment
//! - `prompts`: dialog-gated rename and clear
//! - `file_io`: save/load through the layout store

mod file_io;
mod prompts;
mod seats;
mod transforms;

use std::sync::Arc;

use seatplan_core::{event_bus, AppEvent, EventBus, LayoutError, Point, SelectionEvent};

use crate::collaborators::{Dialog, Scene};
use crate::constraints::ConstraintController;
use crate::cursor::EditorCursor;
use crate::layout::LayoutGenerator;
use crate::layout_store::LayoutStore;
use crate::options::EditorOptions;
use crate::seat::{Seat, SeatId};
use crate::seat_store::SeatStore;
use crate::selection_manager::SelectionManager;

/// How a user action ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome<T = ()> {
    /// The action completed.
    Done(T),
    /// The user backed out of a dialog; nothing changed.
    Cancelled,
    /// A precondition failed; nothing changed and the user was told.
    Rejected(LayoutError),
}

impl<T> ActionOutcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionOutcome::Done(_))
    }

    pub fn done(self) -> Option<T> {
        match self {
            ActionOutcome::Done(value) => Some(value),
            _ => None,
        }
    }
}

/// Seat editor state for UI integration.
pub struct EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    options: EditorOptions,
    generator: LayoutGenerator,
    constraints: ConstraintController,
    cursor: EditorCursor,
    seats: SeatStore,
    selection: SelectionManager,
    scene: S,
    dialog: D,
    store: P,
    events: Arc<EventBus>,
}

impl<S, D, P> EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    /// Creates a session publishing on the global event bus.
    pub fn new(options: EditorOptions, scene: S, dialog: D, store: P) -> Self {
        let generator = LayoutGenerator::new(&options);
        let constraints = ConstraintController::new(options.bounds, options.metrics.footprint());
        let cursor = EditorCursor::new(options.metrics.start_y);
        Self {
            options,
            generator,
            constraints,
            cursor,
            seats: SeatStore::new(),
            selection: SelectionManager::new(),
            scene,
            dialog,
            store,
            events: event_bus(),
        }
    }

    /// Publishes on `events` instead of the global bus.
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn cursor(&self) -> &EditorCursor {
        &self.cursor
    }

    pub fn seats(&self) -> &SeatStore {
        &self.seats
    }

    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(id)
    }

    /// Finds the first seat with the given label.
    pub fn find_by_label(&self, label: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.label == label)
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut D {
        &mut self.dialog
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Live drag tick: clamps the seat into the canvas and mirrors it.
    pub fn on_object_moving(&mut self, id: SeatId, proposed: Point) -> Option<Point> {
        let position = self
            .constraints
            .on_object_moving(&mut self.seats, id, proposed)?;
        if let Some(seat) = self.seats.get(id) {
            self.scene.update(seat);
        }
        Some(position)
    }

    /// Selection change reported by the scene.
    ///
    /// Unknown ids are dropped. Every selected seat gets its resize lock back.
    pub fn on_selection_changed(&mut self, ids: &[SeatId]) {
        let known: Vec<SeatId> = ids
            .iter()
            .copied()
            .filter(|id| self.seats.contains(*id))
            .collect();
        self.selection.set_selection(&known);
        self.constraints
            .on_selection_changed(&mut self.seats, self.selection.selected_ids());
        for id in self.selection.selected_ids() {
            if let Some(seat) = self.seats.get(*id) {
                self.scene.update(seat);
            }
        }

        let event = if known.is_empty() {
            SelectionEvent::Cleared
        } else {
            SelectionEvent::Changed {
                ids: known.iter().map(|id| id.get()).collect(),
            }
        };
        self.publish(event);
    }

    /// Selects seats programmatically, updating the scene's selection too.
    pub fn select(&mut self, ids: &[SeatId]) {
        self.scene.set_active_selection(ids);
        self.on_selection_changed(ids);
    }

    /// Clears the selection in the session and the scene.
    pub fn deselect_all(&mut self) {
        self.select(&[]);
    }

    /// Pulls the active selection from the scene before acting on it.
    fn refresh_selection(&mut self) -> Vec<SeatId> {
        let ids = self.scene.active_selection().unwrap_or_default();
        self.on_selection_changed(&ids);
        self.selection.selected_ids().to_vec()
    }

    /// Inserts seats and mirrors them to the scene.
    fn insert_seats(&mut self, seats: Vec<Seat>) -> Vec<SeatId> {
        let mut ids = Vec::with_capacity(seats.len());
        for seat in seats {
            let id = self.seats.insert(seat);
            if let Some(seat) = self.seats.get(id) {
                self.scene.add(seat);
            }
            ids.push(id);
        }
        self.scene.render();
        ids
    }

    fn publish(&self, event: impl Into<AppEvent>) {
        self.events.publish(event.into());
    }
}

impl<S, D, P> std::fmt::Debug for EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("seats", &self.seats.len())
            .field("selected", &self.selection.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}
