//! Dialog-gated actions.
//!
//! Each action is split in two: a request that asks the dialog and returns
//! its [`DialogOutcome`], and an apply step that mutates only on
//! confirmation. The combined methods simply chain the two.

use seatplan_core::{LayoutError, LayoutEvent};

use super::{ActionOutcome, EditorSession};
use crate::collaborators::{Dialog, DialogOutcome, NotifyKind, Scene};
use crate::layout_store::LayoutStore;
use crate::seat::SeatId;

const RENAME_TITLE: &str = "Rename Seat";
const RENAME_REQUIRED: &str = "You need to enter a seat name!";

impl<S, D, P> EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    /// Asks the user for a new label, prefilled with the current one.
    pub fn request_rename(&mut self, id: SeatId) -> Result<DialogOutcome<String>, LayoutError> {
        let current = self
            .seats
            .get(id)
            .map(|s| s.label.clone())
            .ok_or(LayoutError::SeatNotFound { id: id.get() })?;
        Ok(self
            .dialog
            .prompt_text(RENAME_TITLE, &current, RENAME_REQUIRED))
    }

    /// Applies a rename answer. The label is stored verbatim; empty text is refused.
    pub fn apply_rename(
        &mut self,
        id: SeatId,
        outcome: DialogOutcome<String>,
    ) -> ActionOutcome<String> {
        let DialogOutcome::Confirmed(new_label) = outcome else {
            tracing::debug!("Rename of seat {} cancelled", id);
            return ActionOutcome::Cancelled;
        };
        if new_label.is_empty() {
            tracing::warn!("Refusing empty label for seat {}", id);
            return ActionOutcome::Rejected(LayoutError::EmptyLabel);
        }
        let Some(seat) = self.seats.get_mut(id) else {
            return ActionOutcome::Rejected(LayoutError::SeatNotFound { id: id.get() });
        };

        let old_label = std::mem::replace(&mut seat.label, new_label.clone());
        self.scene.update(seat);
        self.scene.render();

        tracing::info!("Renamed seat {} to {}", old_label, new_label);
        self.publish(LayoutEvent::SeatRenamed {
            id: id.get(),
            old_label,
            new_label: new_label.clone(),
        });
        ActionOutcome::Done(new_label)
    }

    /// Prompts for a new label and applies it on confirmation.
    pub fn rename_seat(&mut self, id: SeatId) -> ActionOutcome<String> {
        match self.request_rename(id) {
            Ok(outcome) => self.apply_rename(id, outcome),
            Err(err) => ActionOutcome::Rejected(err),
        }
    }

    /// Asks the user to confirm clearing the canvas.
    pub fn request_clear(&mut self) -> DialogOutcome<()> {
        DialogOutcome::from_confirm(
            self.dialog
                .prompt_confirm("Are you sure?", "You won't be able to revert this!"),
        )
    }

    /// On confirmation removes every seat and resets numbering to `A1`.
    pub fn apply_clear(&mut self, outcome: DialogOutcome<()>) -> ActionOutcome {
        if !outcome.is_confirmed() {
            tracing::debug!("Clear cancelled");
            return ActionOutcome::Cancelled;
        }

        let removed = self.seats.len();
        self.seats.clear();
        self.selection.deselect_all();
        self.scene.clear();
        self.scene.render();
        self.cursor.reset();

        tracing::info!("Canvas cleared ({} seats removed)", removed);
        self.dialog.notify(
            "Cleared!",
            "Your canvas has been cleared.",
            NotifyKind::Success,
            None,
        );
        self.publish(LayoutEvent::CanvasCleared);
        ActionOutcome::Done(())
    }

    /// Confirms, then clears the canvas.
    pub fn clear_canvas(&mut self) -> ActionOutcome {
        let outcome = self.request_clear();
        self.apply_clear(outcome)
    }
}
