use super::intent::NotificationIntent;
use super::state::NotificationState;
use crate::mvi::Reducer;

pub struct NotificationReducer;

impl Reducer for NotificationReducer {
    type State = NotificationState;
    type Intent = NotificationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationIntent::Show { message } => NotificationState {
                message,
                generation: state.generation + 1,
            },
            NotificationIntent::Expire { generation } => {
                if generation == state.generation {
                    NotificationState {
                        message: String::new(),
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(message: &str) -> NotificationIntent {
        NotificationIntent::Show {
            message: message.to_string(),
        }
    }

    #[test]
    fn show_sets_message_and_bumps_generation() {
        let state = NotificationReducer::reduce(NotificationState::default(), show("hello"));
        assert_eq!(state.message(), "hello");
        assert_eq!(state.generation(), 1);
        assert!(state.is_visible());
    }

    #[test]
    fn show_replaces_an_earlier_message() {
        let state = NotificationReducer::reduce(NotificationState::default(), show("first"));
        let state = NotificationReducer::reduce(state, show("second"));
        assert_eq!(state.message(), "second");
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn matching_expire_clears_the_banner() {
        let state = NotificationReducer::reduce(NotificationState::default(), show("gone soon"));
        let generation = state.generation();

        let state = NotificationReducer::reduce(state, NotificationIntent::Expire { generation });

        assert!(!state.is_visible());
        assert_eq!(state.generation(), generation);
    }

    #[test]
    fn stale_expire_leaves_the_newer_message_alone() {
        let state = NotificationReducer::reduce(NotificationState::default(), show("first"));
        let stale = state.generation();
        let state = NotificationReducer::reduce(state, show("second"));

        let state = NotificationReducer::reduce(
            state,
            NotificationIntent::Expire { generation: stale },
        );

        assert_eq!(state.message(), "second");
    }

    #[test]
    fn expire_on_hidden_banner_is_a_no_op() {
        let state = NotificationReducer::reduce(
            NotificationState::default(),
            NotificationIntent::Expire { generation: 0 },
        );
        assert_eq!(state, NotificationState::default());
    }
}
