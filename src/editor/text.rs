//! Freeform text editor.

use super::{Editor, EditorError, validate};
use crate::domain::{Color, Note, NoteId, now};

/// Draft of a freeform note.
#[derive(Debug, Clone)]
pub struct TextEditor {
    original: Note,
    title: String,
    content: String,
    color: Option<Color>,
}

impl TextEditor {
    /// Opens a draft copy of `note`. Checklist notes open with their tasks
    /// joined into text.
    pub fn open(note: &Note) -> Self {
        Self {
            original: note.clone(),
            title: note.title().to_string(),
            content: note.content().into_owned(),
            color: note.color(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }
}

impl Editor for TextEditor {
    fn note_id(&self) -> &NoteId {
        self.original.id()
    }

    fn commit(&self) -> Result<Note, EditorError> {
        validate(&self.title, &self.content)?;

        Ok(
            Note::builder(self.original.id().clone(), self.original.created_at())
                .title(self.title.clone())
                .content(self.content.clone())
                .maybe_color(self.color)
                .updated_at(now())
                .build(),
        )
    }
}
