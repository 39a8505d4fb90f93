//! Headless page controller: search box, new/edit/delete, one open editor.

use super::Interaction;
use crate::domain::{Note, NoteId};
use crate::editor::{EditMode, Editor, EditorError, OpenEditor};
use crate::store::{NoteStorage, NotesStore, SaveOutcome, StoreError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from app actions.
#[derive(Debug, Error)]
pub enum AppError {
    /// Save or cancel was requested with no editor open.
    #[error("no note is open for editing")]
    NoEditor,

    /// The requested note does not exist.
    #[error("note not found: {id}")]
    NotFound { id: NoteId },

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Returns true if a save was rejected as incomplete.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, AppError::Editor(e) if e.is_incomplete())
    }
}

/// Ties the store, the current search query, an optional open editor, and
/// the interaction port together.
pub struct NotesApp<S: NoteStorage, I: Interaction> {
    store: NotesStore<S>,
    ui: I,
    query: String,
    editor: Option<OpenEditor>,
}

impl<S: NoteStorage, I: Interaction> NotesApp<S, I> {
    pub fn new(store: NotesStore<S>, ui: I) -> Self {
        Self {
            store,
            ui,
            query: String::new(),
            editor: None,
        }
    }

    pub fn store(&self) -> &NotesStore<S> {
        &self.store
    }

    pub fn interaction(&self) -> &I {
        &self.ui
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Notes matching the current query, most recently updated first.
    pub fn visible(&self) -> Vec<&Note> {
        self.store.display(&self.query)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&OpenEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut OpenEditor> {
        self.editor.as_mut()
    }

    /// Opens an editor on a fresh note. Any open draft is discarded.
    pub fn new_note(&mut self, mode: EditMode) -> &mut OpenEditor {
        let note = self.store.create();
        debug!(id = %note.id(), "opening editor for new note");
        self.editor.insert(OpenEditor::open(&note, mode))
    }

    /// Opens a checklist editor on a fresh note.
    pub fn new_checklist(&mut self) -> &mut OpenEditor {
        self.new_note(EditMode::Checklist)
    }

    /// Opens an editor on an existing note. Any open draft is discarded.
    pub fn edit(&mut self, id: &NoteId, mode: EditMode) -> Result<&mut OpenEditor, AppError> {
        let note = self
            .store
            .get(id)
            .ok_or_else(|| AppError::NotFound { id: id.clone() })?;
        let editor = OpenEditor::open(note, mode);
        debug!(id = %id, "opening editor");
        Ok(self.editor.insert(editor))
    }

    /// Saves the open draft and closes the editor.
    ///
    /// An incomplete draft is reported through [`Interaction::incomplete`]
    /// and stays open for correction.
    pub fn save(&mut self) -> Result<SaveOutcome, AppError> {
        let editor = self.editor.as_ref().ok_or(AppError::NoEditor)?;

        let note = match editor.commit() {
            Ok(note) => note,
            Err(err) => {
                if err.is_incomplete() {
                    self.ui.incomplete(&err);
                }
                return Err(err.into());
            }
        };

        let id = note.id().clone();
        let outcome = self.store.save(note)?;
        if let Some(stored) = self.store.get(&id) {
            self.ui.saved(stored);
        }
        self.editor = None;
        Ok(outcome)
    }

    /// Closes the editor without saving. Returns false if none was open.
    pub fn cancel(&mut self) -> bool {
        match self.editor.take() {
            Some(editor) => {
                debug!(id = %editor.note_id(), "discarded draft");
                editor.cancel();
                true
            }
            None => false,
        }
    }

    /// Deletes a note after confirmation. Returns true if it was removed.
    pub fn delete(&mut self, id: &NoteId) -> Result<bool, AppError> {
        let Some(note) = self.store.get(id) else {
            return Err(AppError::NotFound { id: id.clone() });
        };

        if !self.ui.confirm_delete(note) {
            info!(id = %id, "delete declined");
            return Ok(false);
        }

        if self.editor.as_ref().is_some_and(|e| e.note_id() == id) {
            self.editor = None;
        }

        match self.store.delete(id)? {
            Some(removed) => {
                self.ui.deleted(&removed);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
