//! Collaborators for running an editor session without a UI.
//!
//! [`HeadlessScene`] keeps an in-memory mirror of the seats, [`LogDialog`]
//! answers prompts non-interactively and writes notifications to the log,
//! and [`ScriptedDialog`] replays canned answers.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::collaborators::{Dialog, DialogOutcome, NotifyKind, Scene};
use crate::seat::{Seat, SeatId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SceneSnapshot {
    objects: Vec<Seat>,
}

/// In-memory scene graph.
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    objects: Vec<Seat>,
    selection: Vec<SeatId>,
    render_count: usize,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrored seats in draw order.
    pub fn objects(&self) -> &[Seat] {
        &self.objects
    }

    pub fn get(&self, id: SeatId) -> Option<&Seat> {
        self.objects.iter().find(|s| s.id == id)
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl Scene for HeadlessScene {
    fn add(&mut self, seat: &Seat) {
        self.objects.retain(|s| s.id != seat.id);
        self.objects.push(seat.clone());
    }

    fn update(&mut self, seat: &Seat) {
        match self.objects.iter_mut().find(|s| s.id == seat.id) {
            Some(existing) => *existing = seat.clone(),
            None => self.objects.push(seat.clone()),
        }
    }

    fn remove(&mut self, id: SeatId) {
        self.objects.retain(|s| s.id != id);
        self.selection.retain(|s| *s != id);
    }

    fn clear(&mut self) {
        self.objects.clear();
        self.selection.clear();
    }

    fn active_selection(&self) -> Option<Vec<SeatId>> {
        if self.selection.is_empty() {
            None
        } else {
            Some(self.selection.clone())
        }
    }

    fn set_active_selection(&mut self, ids: &[SeatId]) {
        self.selection = ids.to_vec();
    }

    fn render(&mut self) {
        self.render_count += 1;
    }

    fn serialize(&self) -> Value {
        serde_json::json!({ "objects": self.objects })
    }

    fn deserialize(&mut self, document: &Value) -> anyhow::Result<()> {
        let snapshot = SceneSnapshot::deserialize(document).context("Invalid scene snapshot")?;
        self.objects = snapshot.objects;
        self.selection.clear();
        Ok(())
    }
}

/// Non-interactive dialog: text prompts are cancelled, confirmations get a
/// fixed answer, and notifications go to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDialog {
    assume_yes: bool,
}

impl LogDialog {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialog for LogDialog {
    fn prompt_text(
        &mut self,
        title: &str,
        _initial_value: &str,
        _validation_message: &str,
    ) -> DialogOutcome<String> {
        tracing::warn!("{}: text input is not available, cancelling", title);
        DialogOutcome::Cancelled
    }

    fn prompt_confirm(&mut self, title: &str, message: &str) -> bool {
        let answer = if self.assume_yes { "yes" } else { "no" };
        tracing::info!("{} {} -> {}", title, message, answer);
        self.assume_yes
    }

    fn notify(
        &mut self,
        title: &str,
        message: &str,
        kind: NotifyKind,
        _auto_dismiss: Option<Duration>,
    ) {
        match kind {
            NotifyKind::Success | NotifyKind::Info => tracing::info!("{}: {}", title, message),
            NotifyKind::Warning => tracing::warn!("{}: {}", title, message),
            NotifyKind::Error => tracing::error!("{}: {}", title, message),
        }
    }
}

/// A notification shown through a [`ScriptedDialog`].
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotifyKind,
    pub auto_dismiss: Option<Duration>,
}

/// Dialog that answers from queued responses and records what it was asked.
///
/// Empty text answers are refused with the validation message and the next
/// queued answer is used, the way an input validator keeps a prompt open.
/// When the queue runs dry, prompts are cancelled.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialog {
    text_answers: VecDeque<DialogOutcome<String>>,
    confirm_answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub validation_errors: Vec<String>,
    pub notifications: Vec<Notification>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_text(mut self, answer: impl Into<String>) -> Self {
        self.text_answers.push_back(DialogOutcome::Confirmed(answer.into()));
        self
    }

    pub fn cancel_text(mut self) -> Self {
        self.text_answers.push_back(DialogOutcome::Cancelled);
        self
    }

    pub fn answer_confirm(mut self, answer: bool) -> Self {
        self.confirm_answers.push_back(answer);
        self
    }

    /// Title of the last notification, if any.
    pub fn last_title(&self) -> Option<&str> {
        self.notifications.last().map(|n| n.title.as_str())
    }
}

impl Dialog for ScriptedDialog {
    fn prompt_text(
        &mut self,
        title: &str,
        _initial_value: &str,
        validation_message: &str,
    ) -> DialogOutcome<String> {
        self.prompts.push(title.to_string());
        while let Some(answer) = self.text_answers.pop_front() {
            match answer {
                DialogOutcome::Confirmed(text) if text.is_empty() => {
                    self.validation_errors.push(validation_message.to_string());
                }
                other => return other,
            }
        }
        DialogOutcome::Cancelled
    }

    fn prompt_confirm(&mut self, title: &str, _message: &str) -> bool {
        self.prompts.push(title.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }

    fn notify(
        &mut self,
        title: &str,
        message: &str,
        kind: NotifyKind,
        auto_dismiss: Option<Duration>,
    ) {
        self.notifications.push(Notification {
            title: title.to_string(),
            message: message.to_string(),
            kind,
            auto_dismiss,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SeatStyle;
    use seatplan_core::Point;

    fn seat(id: u64, label: &str) -> Seat {
        let mut seat = Seat::restore(label, Point::new(10.0, 20.0), SeatStyle::default());
        seat.id = SeatId(id);
        seat
    }

    #[test]
    fn test_scene_mirror() {
        let mut scene = HeadlessScene::new();
        scene.add(&seat(1, "A1"));
        scene.add(&seat(2, "A2"));
        scene.set_active_selection(&[SeatId(1), SeatId(2)]);

        let mut renamed = seat(1, "B1");
        renamed.position = Point::new(50.0, 60.0);
        scene.update(&renamed);
        assert_eq!(scene.get(SeatId(1)).unwrap().label, "B1");

        scene.remove(SeatId(2));
        assert_eq!(scene.objects().len(), 1);
        assert_eq!(scene.active_selection(), Some(vec![SeatId(1)]));

        scene.clear();
        assert_eq!(scene.active_selection(), None);
    }

    #[test]
    fn test_scene_snapshot_round_trip() {
        let mut scene = HeadlessScene::new();
        scene.add(&seat(1, "A1"));
        scene.add(&seat(2, "A2"));
        let snapshot = scene.serialize();

        let mut other = HeadlessScene::new();
        other.deserialize(&snapshot).unwrap();
        assert_eq!(other.objects(), scene.objects());

        assert!(other.deserialize(&serde_json::json!({"objects": 3})).is_err());
    }

    #[test]
    fn test_scripted_dialog_validation() {
        let mut dialog = ScriptedDialog::new().answer_text("").answer_text("C3");
        let outcome = dialog.prompt_text("Rename Seat", "A1", "You need to enter a seat name!");
        assert_eq!(outcome, DialogOutcome::Confirmed("C3".to_string()));
        assert_eq!(dialog.validation_errors, vec!["You need to enter a seat name!"]);

        assert_eq!(
            dialog.prompt_text("Rename Seat", "A1", "required"),
            DialogOutcome::Cancelled
        );
        assert!(!dialog.prompt_confirm("Are you sure?", "really"));
    }

    #[test]
    fn test_log_dialog() {
        let mut dialog = LogDialog::new(true);
        assert!(dialog.prompt_confirm("Are you sure?", "You won't be able to revert this!"));
        assert_eq!(dialog.prompt_text("Rename Seat", "A1", "required"), DialogOutcome::Cancelled);
        dialog.notify("Cleared!", "Your canvas has been cleared.", NotifyKind::Success, None);
    }
}
