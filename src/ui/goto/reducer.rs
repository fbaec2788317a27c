use crate::mvi::Reducer;
use crate::ui::goto::intent::GotoIntent;
use crate::ui::goto::state::GotoState;

pub struct GotoReducer;

impl Reducer for GotoReducer {
    type State = GotoState;
    type Intent = GotoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GotoIntent::Open => GotoState::Visible {
                input: "/".to_string(),
                error: None,
            },
            GotoIntent::Close => GotoState::Hidden,
            GotoIntent::Input(ch) => match state {
                GotoState::Visible { mut input, .. } => {
                    if !ch.is_control() {
                        input.push(ch);
                    }
                    GotoState::Visible { input, error: None }
                }
                other => other,
            },
            GotoIntent::Paste(text) => match state {
                GotoState::Visible { mut input, .. } => {
                    input.extend(text.chars().filter(|ch| !ch.is_control()));
                    GotoState::Visible { input, error: None }
                }
                other => other,
            },
            GotoIntent::Backspace => match state {
                GotoState::Visible { mut input, .. } => {
                    input.pop();
                    GotoState::Visible { input, error: None }
                }
                other => other,
            },
            GotoIntent::Fail { message } => match state {
                GotoState::Visible { input, .. } => GotoState::Visible {
                    input,
                    error: Some(message),
                },
                other => other,
            },
        }
    }
}
