//! List and search command handlers.

use anyhow::Result;

use super::{SHORT_DATE, color_label, truncate_str};
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::Note;
use crate::store::{NoteStorage, NotesStore};

const TITLE_WIDTH: usize = 40;

pub fn handle_list<S: NoteStorage>(args: &ListArgs, store: &NotesStore<S>) -> Result<()> {
    let query = args.query.as_deref().unwrap_or("");
    let notes = store.display(query);

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                if query.is_empty() {
                    println!("No notes found. Create your first note with `stickies new`.");
                } else {
                    println!("No notes found. Try a different search term.");
                }
            } else {
                print!("{}", render_listing(&notes));
            }
        }
        OutputFormat::Json => print_json(&notes)?,
    }

    Ok(())
}

pub fn handle_search<S: NoteStorage>(args: &SearchArgs, store: &NotesStore<S>) -> Result<()> {
    let notes = store.display(&args.query);

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No matching notes found.");
            } else {
                print!("{}", render_listing(&notes));
            }
        }
        OutputFormat::Json => print_json(&notes)?,
    }

    Ok(())
}

fn print_json(notes: &[&Note]) -> Result<()> {
    let output = Output::new(notes);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Renders the human-readable table, ending with a count line.
pub(crate) fn render_listing(notes: &[&Note]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}  {:<6}  {:<width$}  {}\n",
        "ID",
        "Color",
        "Title",
        "Updated",
        width = TITLE_WIDTH
    ));
    out.push_str(&format!(
        "{:<10}  {:<6}  {:<width$}  {}\n",
        "-".repeat(10),
        "-".repeat(6),
        "-".repeat(TITLE_WIDTH),
        "-".repeat(12),
        width = TITLE_WIDTH
    ));

    for note in notes {
        out.push_str(&format!(
            "{:<10}  {:<6}  {:<width$}  {}\n",
            note.id().prefix(),
            color_label(note),
            truncate_str(&listing_title(note), TITLE_WIDTH),
            note.updated_at().format(SHORT_DATE),
            width = TITLE_WIDTH
        ));
    }

    out.push('\n');
    out.push_str(&format!("{} note(s)\n", notes.len()));
    out
}

/// Title with a `(done/total)` suffix for checklists.
fn listing_title(note: &Note) -> String {
    match note.tasks() {
        Some(tasks) => {
            let done = tasks.iter().filter(|t| t.done).count();
            format!("{} ({}/{})", note.display_title(), done, tasks.len())
        }
        None => note.display_title().to_string(),
    }
}
