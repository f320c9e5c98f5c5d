//! Interfaces to the scene, dialog and notification surfaces the editor drives.
//!
//! The editor session owns the seats. A [`Scene`] only mirrors them for
//! display and reports what the user has selected. A [`Dialog`] asks the user
//! for input and shows notifications.

use std::time::Duration;

use serde_json::Value;

use crate::seat::{Seat, SeatId};

/// Scene graph that renders seats.
pub trait Scene {
    /// Adds a drawable for a new seat.
    fn add(&mut self, seat: &Seat);

    /// Refreshes the drawable of an existing seat (position, label, z-order).
    fn update(&mut self, seat: &Seat);

    /// Removes the drawable of a seat.
    fn remove(&mut self, id: SeatId);

    /// Removes every drawable.
    fn clear(&mut self);

    /// Currently selected seats, or `None` when nothing is selected.
    fn active_selection(&self) -> Option<Vec<SeatId>>;

    fn set_active_selection(&mut self, ids: &[SeatId]);

    fn render(&mut self);

    /// Opaque snapshot of the scene graph.
    fn serialize(&self) -> Value;

    /// Replaces the scene graph with a snapshot taken by [`Scene::serialize`].
    fn deserialize(&mut self, document: &Value) -> anyhow::Result<()>;
}

/// Result of a prompt: the user either confirmed with a value or backed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    Confirmed(T),
    Cancelled,
}

impl<T> DialogOutcome<T> {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DialogOutcome::Confirmed(_))
    }

    pub fn confirmed(self) -> Option<T> {
        match self {
            DialogOutcome::Confirmed(value) => Some(value),
            DialogOutcome::Cancelled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DialogOutcome<U> {
        match self {
            DialogOutcome::Confirmed(value) => DialogOutcome::Confirmed(f(value)),
            DialogOutcome::Cancelled => DialogOutcome::Cancelled,
        }
    }
}

impl DialogOutcome<()> {
    pub fn from_confirm(confirmed: bool) -> Self {
        if confirmed {
            DialogOutcome::Confirmed(())
        } else {
            DialogOutcome::Cancelled
        }
    }
}

/// Icon and tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Prompts and notifications.
pub trait Dialog {
    /// Asks for a line of text. Implementations reject empty input with
    /// `validation_message` before returning.
    fn prompt_text(
        &mut self,
        title: &str,
        initial_value: &str,
        validation_message: &str,
    ) -> DialogOutcome<String>;

    /// Asks a yes/no question.
    fn prompt_confirm(&mut self, title: &str, message: &str) -> bool;

    /// Shows a message, optionally dismissing itself after `auto_dismiss`.
    fn notify(
        &mut self,
        title: &str,
        message: &str,
        kind: NotifyKind,
        auto_dismiss: Option<Duration>,
    );
}
