//! Core types: Note, NoteBody, Task, Color, NoteId

mod color;
mod note;
mod note_id;
mod task;

pub use color::{Color, ParseColorError};
pub use note::{Note, NoteBody, NoteBuilder, UNTITLED, now};
pub use note_id::{NoteId, ParseNoteIdError};
pub use task::Task;
