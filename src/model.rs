//! The anecdote entity and the seed data every run starts with.

use std::fmt;

/// Identifier of an anecdote within the collection.
///
/// Ids are handed out by the store's monotonic counter, so they are
/// unique by construction and never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnecdoteId(pub u64);

impl fmt::Display for AnecdoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single anecdote: a short piece of text with an author, a link for
/// further reading, and a vote counter that only ever goes up.
///
/// None of the text fields are validated. `info` is expected to be a
/// URL but an empty string is as acceptable as anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct Anecdote {
    pub id: AnecdoteId,
    pub content: String,
    pub author: String,
    pub info: String,
    pub votes: u32,
}

impl Anecdote {
    pub fn new(id: AnecdoteId, content: String, author: String, info: String) -> Self {
        Self {
            id,
            content,
            author,
            info,
            votes: 0,
        }
    }

    /// Copy of this anecdote with one more vote.
    pub fn voted(self) -> Self {
        Self {
            votes: self.votes + 1,
            ..self
        }
    }
}

/// The two anecdotes present at startup, ids 1 and 2.
pub fn seed_anecdotes() -> Vec<Anecdote> {
    vec![
        Anecdote::new(
            AnecdoteId(1),
            "If it hurts, do it more often".to_string(),
            "Jez Humble".to_string(),
            "https://martinfowler.com/bliki/FrequencyReducesDifficulty.html".to_string(),
        ),
        Anecdote::new(
            AnecdoteId(2),
            "Premature optimization is the root of all evil".to_string(),
            "Donald Knuth".to_string(),
            "http://wiki.c2.com/?PrematureOptimization".to_string(),
        ),
    ]
}
