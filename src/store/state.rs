use crate::model::{seed_anecdotes, Anecdote, AnecdoteId};
use crate::mvi::State;

/// The anecdote collection plus the id counter that feeds it.
///
/// `next_id` only moves forward. It starts above the highest seeded id
/// and is bumped on every insert, so ids stay unique for the lifetime
/// of the state.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    pub(crate) anecdotes: Vec<Anecdote>,
    pub(crate) next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            anecdotes: Vec::new(),
            next_id: 1,
        }
    }
}

impl State for StoreState {}

impl StoreState {
    /// The collection every fresh session starts from.
    pub fn seeded() -> Self {
        let anecdotes = seed_anecdotes();
        let next_id = anecdotes.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        Self { anecdotes, next_id }
    }

    pub fn anecdotes(&self) -> &[Anecdote] {
        &self.anecdotes
    }

    pub fn get(&self, id: AnecdoteId) -> Option<&Anecdote> {
        self.anecdotes.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_with_counter_at_one() {
        let state = StoreState::default();
        assert!(state.anecdotes().is_empty());
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn seeded_counter_clears_the_seeds() {
        let state = StoreState::seeded();
        let max_seed = state.anecdotes().iter().map(|a| a.id.0).max().unwrap();
        assert!(state.next_id > max_seed);
    }

    #[test]
    fn get_finds_by_id() {
        let state = StoreState::seeded();
        assert_eq!(
            state.get(AnecdoteId(1)).map(|a| a.content.as_str()),
            Some("If it hurts, do it more often")
        );
        assert!(state.get(AnecdoteId(999)).is_none());
    }
}
