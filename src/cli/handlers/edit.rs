//! Edit command handler.

use anyhow::{Result, anyhow, bail};

use super::new::save_open_draft;
use super::{ConsoleInteraction, resolve_id, zero_based};
use crate::app::NotesApp;
use crate::cli::EditArgs;
use crate::editor::{EditMode, EditorError, OpenEditor};
use crate::store::{NoteStorage, NotesStore};

/// Picks the editor variant the requested changes need.
fn edit_mode(args: &EditArgs) -> Result<EditMode> {
    match (args.content.is_some(), args.has_task_ops()) {
        (true, true) => bail!("--content cannot be combined with checklist options"),
        (true, false) => Ok(EditMode::Text),
        (false, true) => Ok(EditMode::Checklist),
        (false, false) => Ok(EditMode::Auto),
    }
}

/// Rewords a checklist error using the 1-based number the user typed.
fn task_error(n: usize, err: EditorError) -> anyhow::Error {
    match err {
        EditorError::TaskIndex { len, .. } => {
            anyhow!("task {} does not exist (checklist has {} tasks)", n, len)
        }
        EditorError::TaskNotDone { .. } => anyhow!(
            "task {} must be checked off before it can be removed (use --check {})",
            n,
            n
        ),
        other => other.into(),
    }
}

/// Applies the requested changes to an open draft.
///
/// Checklist changes run in order: toggles, additions, then removals.
/// Removals use the numbering from before any removal.
pub(crate) fn apply_edits(editor: &mut OpenEditor, args: &EditArgs) -> Result<()> {
    if let Some(title) = &args.title {
        editor.set_title(title.as_str());
    }
    if let Some(color) = args.color {
        editor.set_color(color);
    }

    match editor {
        OpenEditor::Text(text) => {
            if let Some(content) = &args.content {
                text.set_content(content.as_str());
            }
        }
        OpenEditor::Checklist(checklist) => {
            for &n in &args.check {
                checklist
                    .toggle(zero_based(n)?)
                    .map_err(|e| task_error(n, e))?;
            }

            for text in &args.add_tasks {
                checklist.add_task_with(text.as_str());
            }

            let mut removals = args
                .remove
                .iter()
                .map(|&n| zero_based(n).map(|idx| (n, idx)))
                .collect::<Result<Vec<_>>>()?;
            removals.sort_by(|a, b| b.1.cmp(&a.1));
            removals.dedup_by_key(|r| r.1);

            for (n, idx) in removals {
                checklist.remove(idx).map_err(|e| task_error(n, e))?;
            }
        }
    }

    Ok(())
}

pub fn handle_edit<S: NoteStorage>(args: &EditArgs, store: NotesStore<S>) -> Result<()> {
    let mode = edit_mode(args)?;
    let id = resolve_id(&store, &args.note)?;

    let mut app = NotesApp::new(store, ConsoleInteraction::new(true));
    let editor = app.edit(&id, mode)?;
    apply_edits(editor, args)?;

    save_open_draft(&mut app)
}
