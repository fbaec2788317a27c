use crate::mvi::State;

/// A single-line text input. Editing is append/remove at the end only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextField {
    pub(crate) value: String,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Which of the three fields owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Content,
    Author,
    Info,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Content => FormFocus::Author,
            FormFocus::Author => FormFocus::Info,
            FormFocus::Info => FormFocus::Content,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Content => FormFocus::Info,
            FormFocus::Author => FormFocus::Content,
            FormFocus::Info => FormFocus::Author,
        }
    }
}

/// The create form. Values are taken as typed; there is no validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub(crate) content: TextField,
    pub(crate) author: TextField,
    pub(crate) info: TextField,
    pub(crate) focus: FormFocus,
}

impl State for FormState {}

impl FormState {
    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn content(&self) -> &str {
        self.content.value()
    }

    pub fn author(&self) -> &str {
        self.author.value()
    }

    pub fn info(&self) -> &str {
        self.info.value()
    }

    /// The value of whichever field has focus. Used to place the
    /// cursor.
    pub fn focused_value(&self) -> &str {
        match self.focus {
            FormFocus::Content => self.content(),
            FormFocus::Author => self.author(),
            FormFocus::Info => self.info(),
        }
    }

    pub(crate) fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            FormFocus::Content => &mut self.content,
            FormFocus::Author => &mut self.author,
            FormFocus::Info => &mut self.info,
        }
    }
}
