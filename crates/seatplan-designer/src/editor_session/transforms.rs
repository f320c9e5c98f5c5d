//! Alignment of the active selection.

use std::time::Duration;

use seatplan_core::{Axis, LayoutError, LayoutEvent, Point};

use super::{ActionOutcome, EditorSession};
use crate::collaborators::{Dialog, NotifyKind, Scene};
use crate::layout_store::LayoutStore;

/// How long the alignment success toast stays up.
const ALIGN_TOAST: Duration = Duration::from_millis(1000);

impl<S, D, P> EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    /// Snaps the selected seats into an evenly spaced line along `axis`.
    ///
    /// Needs at least two selected seats; otherwise the user is warned and
    /// nothing moves. Returns the number of seats aligned.
    pub fn align_selection(&mut self, axis: Axis) -> ActionOutcome<usize> {
        let ids = self.refresh_selection();
        let positions: Vec<Point> = ids
            .iter()
            .filter_map(|id| self.seats.get(*id).map(|s| s.position))
            .collect();

        let plan = match self.generator.aligner().plan(&positions, axis) {
            Ok(plan) => plan,
            Err(err @ LayoutError::SelectionRequired { .. }) => {
                tracing::warn!("Alignment needs a multi-selection: {}", err);
                self.dialog.notify(
                    "Selection Required",
                    "Please select multiple seats to align",
                    NotifyKind::Warning,
                    None,
                );
                return ActionOutcome::Rejected(err);
            }
            Err(err) => return self.reject("Alignment Failed", err),
        };

        for (id, target) in ids.iter().zip(&plan.targets) {
            if let Some(seat) = self.seats.get_mut(*id) {
                seat.rotation = 0.0;
                seat.lock_scaling();
                seat.position = *target;
                self.scene.update(seat);
            }
        }
        self.scene.render();

        let count = plan.targets.len();
        tracing::info!("Aligned {} seats {}ly", count, axis);
        self.dialog.notify(
            "Success",
            &format!("Seats aligned {}ly", axis),
            NotifyKind::Success,
            Some(ALIGN_TOAST),
        );
        self.publish(LayoutEvent::SeatsAligned { axis, count });
        ActionOutcome::Done(count)
    }
}
