//! Command handlers for the CLI.

mod colors;
mod delete;
mod edit;
mod list;
mod new;
mod show;


use anyhow::{Result, bail};
use std::io::{self, BufRead, Write};

use crate::app::Interaction;
use crate::domain::{Note, NoteId};
use crate::editor::EditorError;
use crate::store::{NoteStorage, NotesStore, Resolution};

// Re-export public items
pub use colors::handle_colors;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::{handle_list, handle_search};
pub use new::handle_new;
pub use show::handle_show;

// Re-export for tests
#[cfg(test)]
pub(crate) use edit::apply_edits;
#[cfg(test)]
pub(crate) use list::render_listing;
#[cfg(test)]
pub(crate) use new::fill_draft;
#[cfg(test)]
pub(crate) use show::render_note;

// ===========================================
// Shared Utilities
// ===========================================

/// Date format used in listings, e.g. `Jan 5, 2024`.
pub(crate) const SHORT_DATE: &str = "%b %-d, %Y";

/// Interaction that prompts on stdin and reports on stdout.
pub(crate) struct ConsoleInteraction {
    assume_yes: bool,
}

impl ConsoleInteraction {
    pub(crate) fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Interaction for ConsoleInteraction {
    fn confirm_delete(&mut self, note: &Note) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!(
            "Delete '{}'? This cannot be undone. [y/N] ",
            note.display_title()
        );
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }

    fn deleted(&mut self, note: &Note) {
        println!("Deleted: {}", note);
    }

    fn saved(&mut self, note: &Note) {
        println!("Saved: {}", note);
    }

    fn incomplete(&mut self, error: &EditorError) {
        eprintln!("Not saved: {}", error);
    }
}

/// Color name for display, `none` when the note has no color.
pub(crate) fn color_label(note: &Note) -> &'static str {
    note.color().map_or("none", |c| c.name())
}

/// Returns true for an affirmative prompt answer.
pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prints the candidates for an ambiguous identifier.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[&Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!(
            "  {} - {} (updated {})",
            note.id().prefix(),
            note.display_title(),
            note.updated_at().format(SHORT_DATE)
        );
    }
    eprintln!();
    eprintln!("Use the ID prefix to specify which note you mean.");
}

/// Resolves an identifier to a single note id or fails with a message.
pub(crate) fn resolve_id<S: NoteStorage>(
    store: &NotesStore<S>,
    identifier: &str,
) -> Result<NoteId> {
    match store.find(identifier) {
        Resolution::Unique(note) => Ok(note.id().clone()),
        Resolution::Ambiguous(notes) => {
            print_ambiguous_notes(identifier, &notes);
            bail!("ambiguous note identifier");
        }
        Resolution::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Converts a 1-based CLI index to a 0-based one.
pub(crate) fn zero_based(n: usize) -> Result<usize> {
    match n.checked_sub(1) {
        Some(idx) => Ok(idx),
        None => bail!("task numbers start at 1"),
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
