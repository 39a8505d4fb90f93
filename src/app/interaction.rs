//! User-interaction port: confirmations and notifications.

use crate::domain::Note;
use crate::editor::EditorError;

/// Touchpoints where the app asks or tells the user something.
///
/// Front-ends implement this to show dialogs or toasts; tests record calls.
pub trait Interaction {
    /// Asks whether `note` should really be deleted.
    fn confirm_delete(&mut self, note: &Note) -> bool;

    /// A note was deleted.
    fn deleted(&mut self, _note: &Note) {}

    /// A note was saved; `note` is the stored version.
    fn saved(&mut self, _note: &Note) {}

    /// A save was rejected because the draft is incomplete.
    fn incomplete(&mut self, _error: &EditorError) {}
}

/// Interaction that confirms everything and reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Interaction for AssumeYes {
    fn confirm_delete(&mut self, _note: &Note) -> bool {
        true
    }
}

impl<I: Interaction + ?Sized> Interaction for &mut I {
    fn confirm_delete(&mut self, note: &Note) -> bool {
        (**self).confirm_delete(note)
    }

    fn deleted(&mut self, note: &Note) {
        (**self).deleted(note)
    }

    fn saved(&mut self, note: &Note) {
        (**self).saved(note)
    }

    fn incomplete(&mut self, error: &EditorError) {
        (**self).incomplete(error)
    }
}
