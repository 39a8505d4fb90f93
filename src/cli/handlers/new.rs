//! New note command handler.

use anyhow::{Context, Result, bail};

use super::ConsoleInteraction;
use crate::app::{Interaction, NotesApp};
use crate::cli::NewArgs;
use crate::editor::{EditMode, OpenEditor};
use crate::store::{NoteStorage, NotesStore};

/// Copies the command-line fields into a freshly opened draft.
pub(crate) fn fill_draft(editor: &mut OpenEditor, args: &NewArgs) -> Result<()> {
    editor.set_title(args.title.as_str());

    if let Some(color) = args.color {
        editor.set_color(color);
    }

    match editor {
        OpenEditor::Text(text) => {
            text.set_content(args.content.clone().unwrap_or_default());
        }
        OpenEditor::Checklist(checklist) => {
            for (i, task) in args.tasks.iter().enumerate() {
                if i == 0 {
                    checklist.set_text(0, task.as_str())?;
                } else {
                    checklist.add_task_with(task.as_str());
                }
            }
        }
    }

    Ok(())
}

/// Saves the open draft, turning an incomplete draft into a CLI error.
pub(crate) fn save_open_draft<S: NoteStorage, I: Interaction>(
    app: &mut NotesApp<S, I>,
) -> Result<()> {
    match app.save() {
        Ok(_) => Ok(()),
        Err(err) if err.is_incomplete() => bail!("note was not saved"),
        Err(err) => Err(err).context("failed to save note"),
    }
}

pub fn handle_new<S: NoteStorage>(args: &NewArgs, store: NotesStore<S>) -> Result<()> {
    let mode = if args.tasks.is_empty() {
        EditMode::Text
    } else {
        EditMode::Checklist
    };

    let mut app = NotesApp::new(store, ConsoleInteraction::new(true));
    let editor = app.new_note(mode);
    fill_draft(editor, args)?;

    save_open_draft(&mut app)
}
