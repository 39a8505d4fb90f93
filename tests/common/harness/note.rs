//! Builder for test notes with sensible defaults.

// Not every test binary uses every helper
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use stickies::domain::{Color, Note, NoteId, Task};

/// Builder for seeding notes into a test environment.
///
/// Generates an ID and timestamps; `age_days` backdates both.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    content: String,
    tasks: Option<Vec<Task>>,
    color: Option<Color>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl TestNote {
    /// Creates a freeform test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        let now = stickies::domain::now();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: String::new(),
            tasks: None,
            color: None,
            created: now,
            updated: now,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the freeform content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Appends a checklist item, turning the note into a checklist.
    pub fn task(mut self, text: &str, done: bool) -> Self {
        self.tasks.get_or_insert_with(Vec::new).push(Task {
            text: text.to_string(),
            done,
        });
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Moves both timestamps `days` into the past.
    pub fn age_days(mut self, days: i64) -> Self {
        self.created -= Duration::days(days);
        self.updated -= Duration::days(days);
        self
    }

    /// Returns the full ID string.
    pub fn id_str(&self) -> String {
        self.id.to_string()
    }

    /// Returns the 10-character ID prefix.
    pub fn id_prefix(&self) -> String {
        self.id.prefix().to_string()
    }

    /// Builds the domain note.
    pub fn to_note(&self) -> Note {
        let builder = Note::builder(self.id.clone(), self.created)
            .title(self.title.as_str())
            .maybe_color(self.color)
            .updated_at(self.updated);
        let builder = match &self.tasks {
            Some(tasks) => builder.tasks(tasks.clone()),
            None => builder.content(self.content.as_str()),
        };
        builder.build()
    }
}
