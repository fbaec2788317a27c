use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GotoIntent {
    /// Open the prompt with a leading slash already typed.
    Open,
    Input(char),
    Paste(String),
    Backspace,
    /// Record why the typed path did not navigate.
    Fail { message: String },
    Close,
}

impl Intent for GotoIntent {}
