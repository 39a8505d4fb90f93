//! Show command handler.

use anyhow::Result;

use super::{color_label, resolve_id};
use crate::cli::ShowArgs;
use crate::domain::Note;
use crate::store::{NoteStorage, NotesStore};

const LONG_DATE: &str = "%b %-d, %Y %H:%M UTC";

pub fn handle_show<S: NoteStorage>(args: &ShowArgs, store: &NotesStore<S>) -> Result<()> {
    let id = resolve_id(store, &args.note)?;
    if let Some(note) = store.get(&id) {
        print!("{}", render_note(note));
    }
    Ok(())
}

/// Renders a note: heading, metadata line, then body.
///
/// Checklist items are numbered from 1, the numbering `edit` accepts.
pub(crate) fn render_note(note: &Note) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", note.display_title()));

    out.push_str(&format!(
        "ID: {}  Color: {}  Created: {}  Updated: {}\n\n",
        note.id(),
        color_label(note),
        note.created_at().format(LONG_DATE),
        note.updated_at().format(LONG_DATE)
    ));

    match note.tasks() {
        Some(tasks) => {
            for (i, task) in tasks.iter().enumerate() {
                let mark = if task.done { "x" } else { " " };
                out.push_str(&format!("[{}] {}. {}\n", mark, i + 1, task.text));
            }
        }
        None => {
            let content = note.content();
            if content.is_empty() {
                out.push_str("No content\n");
            } else {
                out.push_str(&content);
                out.push('\n');
            }
        }
    }

    out
}
