//! App controller and the interaction port it reports through.

mod interaction;
mod notes_app;

pub use interaction::{AssumeYes, Interaction};
pub use notes_app::{AppError, NotesApp};
