use crate::mvi::State;

/// The banner text plus the generation it belongs to.
///
/// An empty message means the banner is hidden. The generation counts
/// every shown message and never resets, so each message's timer can be
/// told apart from its predecessors'.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationState {
    pub(crate) message: String,
    pub(crate) generation: u64,
}

impl State for NotificationState {}

impl NotificationState {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }
}
