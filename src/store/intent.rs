use crate::model::AnecdoteId;
use crate::mvi::Intent;

/// Everything that can change the anecdote collection.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreIntent {
    /// Insert a new anecdote with zero votes. The id is assigned by the
    /// reducer from the state's counter, never by the caller.
    AddNew {
        content: String,
        author: String,
        info: String,
    },
    /// Bump the vote count of one anecdote. Unknown ids leave the
    /// collection untouched.
    Vote { id: AnecdoteId },
}

impl Intent for StoreIntent {}
