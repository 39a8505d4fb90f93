//! Checklist item.

use serde::{Deserialize, Serialize};

/// One line of a checklist note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Creates an unchecked task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// Splits newline-joined text into unchecked tasks, one per line.
    ///
    /// An empty string yields a single empty task, matching how a blank
    /// freeform note opens in checklist mode.
    pub fn split_lines(content: &str) -> Vec<Task> {
        content.split('\n').map(Task::new).collect()
    }

    /// Joins task texts with newlines.
    pub fn join_lines(tasks: &[Task]) -> String {
        tasks
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
