//! Seat creation, relabeling and deletion.

use seatplan_core::{LayoutError, LayoutEvent};

use super::{ActionOutcome, EditorSession};
use crate::collaborators::{Dialog, NotifyKind, Scene};
use crate::layout::DEFAULT_ROW_SEATS;
use crate::layout_store::LayoutStore;
use crate::row_id::RowId;
use crate::seat::SeatId;
use crate::seat_table::{resolve_sections, SeatTable};

impl<S, D, P> EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    /// Adds one seat labeled from the cursor, centered at the start height.
    pub fn add_single_seat(&mut self) -> SeatId {
        let seat = self.generator.add_single_seat(&mut self.cursor);
        let label = seat.label.clone();
        let id = self.insert_seats(vec![seat])[0];

        tracing::info!("Added seat {} ({})", label, id);
        self.publish(LayoutEvent::SeatAdded { id: id.get(), label });
        id
    }

    /// Adds a centered row.
    ///
    /// `name` defaults to the cursor's current row and `count` to
    /// [`DEFAULT_ROW_SEATS`]. Invalid names and zero counts are rejected
    /// before any seat is created.
    pub fn add_row(
        &mut self,
        name: Option<&str>,
        count: Option<usize>,
    ) -> ActionOutcome<Vec<SeatId>> {
        let row = match name.filter(|n| !n.is_empty()) {
            Some(name) => match RowId::new(name) {
                Ok(row) => row,
                Err(err) => return self.reject("Invalid Row", err),
            },
            None => self.cursor.current_row.clone(),
        };
        let count = count.unwrap_or(DEFAULT_ROW_SEATS);

        let seats = match self.generator.add_row(&row, count, &mut self.cursor) {
            Ok(seats) => seats,
            Err(err) => return self.reject("Invalid Row", err),
        };
        let ids = self.insert_seats(seats);

        tracing::info!("Added row {} with {} seats", row, ids.len());
        self.publish(LayoutEvent::RowAdded {
            row: row.to_string(),
            seats: ids.len(),
        });
        ActionOutcome::Done(ids)
    }

    /// Lays out a whole seat table next to whatever is already placed.
    pub fn import_seat_table(&mut self, table: &SeatTable) -> ActionOutcome<Vec<SeatId>> {
        let sections =
            match resolve_sections(table, &self.options.import, self.options.style.fill) {
                Ok(sections) => sections,
                Err(err) => return self.reject("Import Failed", err),
            };
        let seats = self.generator.import_layout(&sections);
        let ids = self.insert_seats(seats);

        tracing::info!(
            "Imported {} seats in {} sections",
            ids.len(),
            sections.len()
        );
        self.publish(LayoutEvent::LayoutImported {
            sections: sections.len(),
            seats: ids.len(),
        });
        ActionOutcome::Done(ids)
    }

    /// Gives a seat the cursor's next label and advances the seat number.
    pub fn relabel_seat(&mut self, id: SeatId) -> ActionOutcome<String> {
        let Some(seat) = self.seats.get_mut(id) else {
            return ActionOutcome::Rejected(LayoutError::SeatNotFound { id: id.get() });
        };
        let old_label = self.generator.relabel_seat(seat, &mut self.cursor);
        let new_label = seat.label.clone();
        self.scene.update(seat);
        self.scene.render();

        tracing::info!("Relabeled seat {} to {}", old_label, new_label);
        self.publish(LayoutEvent::SeatRenamed {
            id: id.get(),
            old_label,
            new_label: new_label.clone(),
        });
        ActionOutcome::Done(new_label)
    }

    /// Deletes the seats selected in the scene (Delete/Backspace).
    pub fn delete_selected(&mut self) -> Vec<SeatId> {
        let ids = self.refresh_selection();
        if ids.is_empty() {
            return Vec::new();
        }
        let removed = self.delete_seats(&ids);
        self.deselect_all();
        removed
    }

    /// Deletes seats by id; unknown ids are skipped. Returns the ids removed.
    pub fn delete_seats(&mut self, ids: &[SeatId]) -> Vec<SeatId> {
        let mut removed = Vec::new();
        for id in ids {
            if self.seats.remove(*id).is_some() {
                self.scene.remove(*id);
                removed.push(*id);
            }
        }
        if removed.is_empty() {
            return removed;
        }

        self.selection.prune(&self.seats);
        self.scene.render();
        tracing::info!("Removed {} seats", removed.len());
        self.publish(LayoutEvent::SeatsRemoved {
            ids: removed.iter().map(|id| id.get()).collect(),
        });
        removed
    }

    /// Moves a seat to the top of the draw order.
    pub fn bring_to_front(&mut self, id: SeatId) -> bool {
        if !self.seats.bring_to_front(id) {
            return false;
        }
        if let Some(seat) = self.seats.get(id) {
            self.scene.remove(id);
            self.scene.add(seat);
        }
        self.scene.render();
        tracing::debug!("Brought seat {} to front", id);
        true
    }

    /// Warns about a failed precondition and leaves everything unchanged.
    pub(super) fn reject<T>(&mut self, title: &str, err: LayoutError) -> ActionOutcome<T> {
        tracing::warn!("{}: {}", title, err);
        self.dialog
            .notify(title, &err.to_string(), NotifyKind::Warning, None);
        ActionOutcome::Rejected(err)
    }
}
