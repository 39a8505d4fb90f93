//! Draft editors for a single note: freeform text and checklist.
//!
//! An editor owns a copy of the note and never touches the store until
//! [`Editor::save`] succeeds. Dropping the editor (or calling
//! [`Editor::cancel`]) discards the draft.

mod checklist;
mod text;

pub use checklist::{ChecklistEditor, DEFAULT_TASK_TEXT};
pub use text::TextEditor;

use crate::domain::{Color, Note, NoteId};
use crate::store::{NoteStorage, NotesStore, SaveOutcome, StoreError};
use thiserror::Error;

/// Errors reported by editors.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Save attempted with a blank title or blank content. The draft is kept.
    #[error("incomplete note: {}", incomplete_message(*.missing_title, *.missing_content))]
    Incomplete {
        missing_title: bool,
        missing_content: bool,
    },

    /// A task index is outside the checklist.
    #[error("task {index} is out of range (checklist has {len} tasks)")]
    TaskIndex { index: usize, len: usize },

    /// Removal requested for a task that is not checked off.
    #[error("task {index} must be checked off before it can be removed")]
    TaskNotDone { index: usize },

    /// The store rejected the committed note.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    /// Returns true for a blank title or content on save.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, EditorError::Incomplete { .. })
    }
}

fn incomplete_message(missing_title: bool, missing_content: bool) -> &'static str {
    match (missing_title, missing_content) {
        (true, true) => "fill in the title and at least one line of content",
        (true, false) => "fill in the title",
        _ => "fill in at least one line of content",
    }
}

/// Rejects drafts whose trimmed title or trimmed content is empty.
pub(crate) fn validate(title: &str, content: &str) -> Result<(), EditorError> {
    let missing_title = title.trim().is_empty();
    let missing_content = content.trim().is_empty();

    if missing_title || missing_content {
        return Err(EditorError::Incomplete {
            missing_title,
            missing_content,
        });
    }
    Ok(())
}

/// Common editor behaviour.
pub trait Editor {
    /// Id of the note being edited.
    fn note_id(&self) -> &NoteId;

    /// Validates the draft and produces the note to store, with `updated_at`
    /// stamped to now. The draft is left untouched either way.
    fn commit(&self) -> Result<Note, EditorError>;

    /// Commits the draft and hands it to `store`.
    fn save<S: NoteStorage>(&self, store: &mut NotesStore<S>) -> Result<SaveOutcome, EditorError> {
        let note = self.commit()?;
        Ok(store.save(note)?)
    }

    /// Discards the draft.
    fn cancel(self)
    where
        Self: Sized,
    {
    }
}

/// How to open a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Checklist notes open as checklists, everything else as text.
    #[default]
    Auto,
    Text,
    Checklist,
}

/// Either editor variant.
#[derive(Debug, Clone)]
pub enum OpenEditor {
    Text(TextEditor),
    Checklist(ChecklistEditor),
}

impl OpenEditor {
    /// Opens `note` in the editor `mode` selects.
    pub fn open(note: &Note, mode: EditMode) -> Self {
        let checklist = match mode {
            EditMode::Auto => note.body().is_checklist(),
            EditMode::Text => false,
            EditMode::Checklist => true,
        };

        if checklist {
            OpenEditor::Checklist(ChecklistEditor::open(note))
        } else {
            OpenEditor::Text(TextEditor::open(note))
        }
    }

    pub fn title(&self) -> &str {
        match self {
            OpenEditor::Text(e) => e.title(),
            OpenEditor::Checklist(e) => e.title(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        match self {
            OpenEditor::Text(e) => e.set_title(title),
            OpenEditor::Checklist(e) => e.set_title(title),
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            OpenEditor::Text(e) => e.color(),
            OpenEditor::Checklist(e) => e.color(),
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            OpenEditor::Text(e) => e.set_color(color),
            OpenEditor::Checklist(e) => e.set_color(color),
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextEditor> {
        match self {
            OpenEditor::Text(e) => Some(e),
            OpenEditor::Checklist(_) => None,
        }
    }

    pub fn as_checklist_mut(&mut self) -> Option<&mut ChecklistEditor> {
        match self {
            OpenEditor::Text(_) => None,
            OpenEditor::Checklist(e) => Some(e),
        }
    }
}

impl Editor for OpenEditor {
    fn note_id(&self) -> &NoteId {
        match self {
            OpenEditor::Text(e) => e.note_id(),
            OpenEditor::Checklist(e) => e.note_id(),
        }
    }

    fn commit(&self) -> Result<Note, EditorError> {
        match self {
            OpenEditor::Text(e) => e.commit(),
            OpenEditor::Checklist(e) => e.commit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use chrono::Utc;

    #[test]
    fn validate_accepts_filled_draft() {
        assert!(validate("Title", "body").is_ok());
    }

    #[test]
    fn validate_reports_what_is_missing() {
        match validate("  ", "body") {
            Err(EditorError::Incomplete {
                missing_title,
                missing_content,
            }) => {
                assert!(missing_title);
                assert!(!missing_content);
            }
            other => panic!("expected incomplete, got {other:?}"),
        }

        let err = validate("", "\n \n").unwrap_err();
        assert!(err.is_incomplete());
        assert!(err.to_string().contains("title and at least one line"));
    }

    #[test]
    fn auto_mode_follows_note_shape() {
        let freeform = Note::builder(NoteId::new(), Utc::now()).content("x").build();
        let checklist = Note::builder(NoteId::new(), Utc::now())
            .tasks(vec![Task::new("x")])
            .build();

        assert!(matches!(
            OpenEditor::open(&freeform, EditMode::Auto),
            OpenEditor::Text(_)
        ));
        assert!(matches!(
            OpenEditor::open(&checklist, EditMode::Auto),
            OpenEditor::Checklist(_)
        ));
        assert!(matches!(
            OpenEditor::open(&freeform, EditMode::Checklist),
            OpenEditor::Checklist(_)
        ));
    }

    #[test]
    fn open_editor_delegates_title_and_color() {
        let note = Note::builder(NoteId::new(), Utc::now()).build();
        let mut editor = OpenEditor::open(&note, EditMode::Checklist);

        editor.set_title("List");
        editor.set_color(Color::Red);

        assert_eq!(editor.title(), "List");
        assert_eq!(editor.color(), Some(Color::Red));
        assert!(editor.as_text_mut().is_none());
        assert!(editor.as_checklist_mut().is_some());
        assert_eq!(editor.note_id(), note.id());
    }
}
