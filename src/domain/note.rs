//! Note record: a titled freeform or checklist body with color and timestamps.

use crate::domain::{Color, NoteId, Task};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Title shown for notes whose title is blank.
pub const UNTITLED: &str = "Untitled Note";

/// Returns the current time truncated to the millisecond precision the
/// persisted format carries.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// The two shapes a note body can take.
///
/// Checklist notes have no stored content: [`NoteBody::content`] derives it by
/// joining task texts with newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteBody {
    Freeform { content: String },
    Checklist { tasks: Vec<Task> },
}

impl NoteBody {
    /// Returns the body as text.
    pub fn content(&self) -> Cow<'_, str> {
        match self {
            NoteBody::Freeform { content } => Cow::Borrowed(content),
            NoteBody::Checklist { tasks } => Cow::Owned(Task::join_lines(tasks)),
        }
    }

    /// Returns the tasks of a checklist body.
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            NoteBody::Freeform { .. } => None,
            NoteBody::Checklist { tasks } => Some(tasks),
        }
    }

    pub fn is_checklist(&self) -> bool {
        matches!(self, NoteBody::Checklist { .. })
    }
}

impl Default for NoteBody {
    fn default() -> Self {
        NoteBody::Freeform {
            content: String::new(),
        }
    }
}

/// A user-authored note.
///
/// # Examples
///
/// ```
/// use stickies::domain::{Color, Note, NoteBody, NoteId, Task};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let note = Note::builder(NoteId::new(), now)
///     .title("Groceries")
///     .tasks(vec![Task::new("Milk"), Task::new("Eggs")])
///     .color(Color::Green)
///     .build();
///
/// assert_eq!(note.content(), "Milk\nEggs");
/// assert!(note.body().is_checklist());
/// ```
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    body: NoteBody,
    color: Option<Color>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a builder. `updated_at` defaults to `created_at`.
    pub fn builder(id: NoteId, created_at: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder::new(id, created_at)
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title, or [`UNTITLED`] when it is blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    pub fn body(&self) -> &NoteBody {
        &self.body
    }

    /// Returns the body as text (derived for checklists).
    pub fn content(&self) -> Cow<'_, str> {
        self.body.content()
    }

    pub fn tasks(&self) -> Option<&[Task]> {
        self.body.tasks()
    }

    /// Returns the note color, if one was ever assigned.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Sets the color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Stamps `updated_at`, never moving it before `created_at`.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at.trunc_subsecs(3).max(self.created_at);
    }

    /// Returns true if the title or content contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content().to_lowercase().contains(needle)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.display_title(), self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("body", &self.body)
            .field("color", &self.color)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    body: NoteBody,
    color: Option<Color>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl NoteBuilder {
    fn new(id: NoteId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: String::new(),
            body: NoteBody::default(),
            color: None,
            created_at,
            updated_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets a freeform body.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.body = NoteBody::Freeform {
            content: content.into(),
        };
        self
    }

    /// Sets a checklist body.
    pub fn tasks(mut self, tasks: Vec<Task>) -> Self {
        self.body = NoteBody::Checklist { tasks };
        self
    }

    pub fn body(mut self, body: NoteBody) -> Self {
        self.body = body;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn maybe_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the Note.
    ///
    /// Timestamps are truncated to milliseconds and `updated_at` is clamped
    /// to be no earlier than `created_at`.
    pub fn build(self) -> Note {
        let created_at = self.created_at.trunc_subsecs(3);
        let updated_at = self
            .updated_at
            .map(|t| t.trunc_subsecs(3))
            .unwrap_or(created_at)
            .max(created_at);

        Note {
            id: self.id,
            title: self.title,
            body: self.body,
            color: self.color,
            created_at,
            updated_at,
        }
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content())?;

        if let Some(tasks) = self.tasks() {
            map.serialize_entry("tasks", tasks)?;
        }
        if let Some(color) = self.color {
            map.serialize_entry("color", &color)?;
        }

        map.serialize_entry("createdAt", &format_timestamp(&self.created_at))?;
        map.serialize_entry("updatedAt", &format_timestamp(&self.updated_at))?;

        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct NoteHelper {
            id: NoteId,
            #[serde(default)]
            title: String,
            #[serde(default)]
            content: String,
            #[serde(default)]
            tasks: Option<Vec<Task>>,
            #[serde(default)]
            color: Option<String>,
            created_at: DateTime<Utc>,
            updated_at: DateTime<Utc>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;

        let color = helper.color.and_then(|raw| match raw.parse::<Color>() {
            Ok(color) => Some(color),
            Err(err) => {
                tracing::warn!(id = %helper.id, "dropping color: {err}");
                None
            }
        });

        let body = match helper.tasks {
            Some(tasks) => NoteBody::Checklist { tasks },
            None => NoteBody::Freeform {
                content: helper.content,
            },
        };

        Ok(Note::builder(helper.id, helper.created_at)
            .title(helper.title)
            .body(body)
            .maybe_color(color)
            .updated_at(helper.updated_at)
            .build())
    }
}
