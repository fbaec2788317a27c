use super::intent::StoreIntent;
use super::state::StoreState;
use crate::model::{Anecdote, AnecdoteId};
use crate::mvi::Reducer;

pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = StoreState;
    type Intent = StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoreIntent::AddNew {
                content,
                author,
                info,
            } => {
                let id = AnecdoteId(state.next_id);
                let mut anecdotes = state.anecdotes;
                anecdotes.push(Anecdote::new(id, content, author, info));
                StoreState {
                    anecdotes,
                    next_id: state.next_id + 1,
                }
            }
            StoreIntent::Vote { id } => StoreState {
                next_id: state.next_id,
                anecdotes: state
                    .anecdotes
                    .into_iter()
                    .map(|a| if a.id == id { a.voted() } else { a })
                    .collect(),
            },
        }
    }
}
