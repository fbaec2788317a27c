use crate::mvi::Reducer;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            FormIntent::Input(ch) => {
                if !ch.is_control() {
                    state.focused_field_mut().value.push(ch);
                }
                state
            }
            FormIntent::Paste(text) => {
                state
                    .focused_field_mut()
                    .value
                    .extend(text.chars().filter(|ch| !ch.is_control()));
                state
            }
            FormIntent::Backspace => {
                state.focused_field_mut().value.pop();
                state
            }
            FormIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            FormIntent::Reset => FormState {
                focus: state.focus,
                ..FormState::default()
            },
        }
    }
}
