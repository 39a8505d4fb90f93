//! Checklist editor.
//!
//! Removing a task is a two-step gesture: the task must be checked off first.

use super::{Editor, EditorError, validate};
use crate::domain::{Color, Note, NoteId, Task, now};

/// Text given to tasks added with [`ChecklistEditor::add_task`].
pub const DEFAULT_TASK_TEXT: &str = "New Task";

/// Draft of a checklist note.
#[derive(Debug, Clone)]
pub struct ChecklistEditor {
    original: Note,
    title: String,
    tasks: Vec<Task>,
    color: Option<Color>,
}

impl ChecklistEditor {
    /// Opens a draft copy of `note`. Freeform notes are split on newlines
    /// into unchecked tasks.
    pub fn open(note: &Note) -> Self {
        let tasks = match note.tasks() {
            Some(tasks) => tasks.to_vec(),
            None => Task::split_lines(&note.content()),
        };

        Self {
            original: note.clone(),
            title: note.title().to_string(),
            tasks,
            color: note.color(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the draft content: task texts joined with newlines.
    pub fn content(&self) -> String {
        Task::join_lines(&self.tasks)
    }

    /// Flips the done flag of task `index`, returning the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, EditorError> {
        let task = self.task_mut(index)?;
        task.done = !task.done;
        Ok(task.done)
    }

    /// Appends an unchecked task with the default text.
    pub fn add_task(&mut self) -> usize {
        self.add_task_with(DEFAULT_TASK_TEXT)
    }

    /// Appends an unchecked task, returning its index.
    pub fn add_task_with(&mut self, text: impl Into<String>) -> usize {
        self.tasks.push(Task::new(text));
        self.tasks.len() - 1
    }

    /// Replaces the text of task `index`.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditorError> {
        self.task_mut(index)?.text = text.into();
        Ok(())
    }

    /// Returns true if task `index` exists and is checked off.
    pub fn is_removable(&self, index: usize) -> bool {
        self.tasks.get(index).is_some_and(|t| t.done)
    }

    /// Removes task `index`, which must be checked off.
    pub fn remove(&mut self, index: usize) -> Result<Task, EditorError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get(index)
            .ok_or(EditorError::TaskIndex { index, len })?;
        if !task.done {
            return Err(EditorError::TaskNotDone { index });
        }
        Ok(self.tasks.remove(index))
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task, EditorError> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(EditorError::TaskIndex { index, len })
    }
}

impl Editor for ChecklistEditor {
    fn note_id(&self) -> &NoteId {
        self.original.id()
    }

    fn commit(&self) -> Result<Note, EditorError> {
        validate(&self.title, &self.content())?;

        Ok(
            Note::builder(self.original.id().clone(), self.original.created_at())
                .title(self.title.clone())
                .tasks(self.tasks.clone())
                .maybe_color(self.color)
                .updated_at(now())
                .build(),
        )
    }
}
