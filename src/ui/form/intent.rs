use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Append one typed character to the focused field.
    Input(char),
    /// Append pasted text to the focused field. Control characters are
    /// dropped; everything else is kept as is.
    Paste(String),
    /// Remove the last character of the focused field.
    Backspace,
    FocusNext,
    FocusPrev,
    /// Clear all three fields. Focus stays where it was.
    Reset,
}

impl Intent for FormIntent {}
