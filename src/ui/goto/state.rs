use crate::mvi::State;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GotoState {
    #[default]
    Hidden,
    Visible {
        input: String,
        /// The parse error for the last submitted input, cleared on the
        /// next edit.
        error: Option<String>,
    },
}

impl State for GotoState {}

impl GotoState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
