//! Save/load operations for the editor session.

use std::path::Path;

use seatplan_core::{StorageError, StorageEvent};

use super::EditorSession;
use crate::collaborators::{Dialog, NotifyKind, Scene};
use crate::layout_store::LayoutStore;
use crate::serialization::LayoutDocument;

impl<S, D, P> EditorSession<S, D, P>
where
    S: Scene,
    D: Dialog,
    P: LayoutStore,
{
    /// Exports labels and positions of every seat in draw order.
    pub fn export_layout(&self) -> LayoutDocument {
        LayoutDocument::from_seats(self.seats.iter())
    }

    /// Replaces all seats with the document's seats, exactly as stored.
    ///
    /// The numbering cursor is left alone. Returns the number of seats restored.
    pub fn restore_layout(&mut self, document: &LayoutDocument) -> usize {
        self.seats.clear();
        self.selection.deselect_all();
        self.scene.clear();
        let ids = self.insert_seats(document.to_seats(&self.options.style));
        ids.len()
    }

    /// Saves the layout under the configured key.
    pub fn save_layout(&mut self) -> Result<usize, StorageError> {
        let key = self.options.layout_key.clone();
        let document = self.export_layout().with_metadata(&key);

        if let Err(err) = self.store.save(&key, &document) {
            tracing::error!("Failed to save layout '{}': {}", key, err);
            self.dialog
                .notify("Save Failed", &err.to_string(), NotifyKind::Error, None);
            return Err(err);
        }

        let seats = document.len();
        tracing::info!("Saved {} seats to '{}'", seats, key);
        self.dialog.notify(
            "Success!",
            "Theatre layout has been saved!",
            NotifyKind::Success,
            None,
        );
        self.publish(StorageEvent::LayoutSaved { key, seats });
        Ok(seats)
    }

    /// Restores the layout saved under the configured key.
    ///
    /// Returns `None` if nothing has been saved yet.
    pub fn load_layout(&mut self) -> Result<Option<usize>, StorageError> {
        let key = self.options.layout_key.clone();
        let document = match self.store.load(&key) {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::info!("No layout saved under '{}'", key);
                self.dialog.notify(
                    "Nothing to Load",
                    "No saved layout was found.",
                    NotifyKind::Info,
                    None,
                );
                return Ok(None);
            }
            Err(err) => {
                tracing::error!("Failed to load layout '{}': {}", key, err);
                self.dialog
                    .notify("Load Failed", &err.to_string(), NotifyKind::Error, None);
                return Err(err);
            }
        };

        let seats = self.restore_layout(&document);
        tracing::info!("Loaded {} seats from '{}'", seats, key);
        self.publish(StorageEvent::LayoutLoaded { key, seats });
        Ok(Some(seats))
    }

    /// Writes the layout to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.export_layout()
            .with_metadata(&self.options.layout_key)
            .save_to_file(path)
    }

    /// Replaces all seats with the layout in a JSON file.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<usize> {
        let document = LayoutDocument::load_from_file(path)?;
        Ok(self.restore_layout(&document))
    }
}
