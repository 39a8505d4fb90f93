//! Delete command handler.

use anyhow::Result;

use super::{ConsoleInteraction, resolve_id};
use crate::app::NotesApp;
use crate::cli::DeleteArgs;
use crate::store::{NoteStorage, NotesStore};

pub fn handle_delete<S: NoteStorage>(args: &DeleteArgs, store: NotesStore<S>) -> Result<()> {
    let id = resolve_id(&store, &args.note)?;

    let mut app = NotesApp::new(store, ConsoleInteraction::new(args.yes));
    if !app.delete(&id)? {
        println!("Kept: {}", args.note);
    }

    Ok(())
}
