//! Unidirectional state flow primitives.
//!
//! Every mutable piece of the application (the anecdote store, the
//! notification banner, the create form, the address prompt) is a
//! [`State`] that only changes when an [`Intent`] is run through a
//! [`Reducer`]:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers are pure: side effects (scheduling a notification expiry,
//! logging, navigation) happen in the caller around the dispatch.

/// Marker trait for intents.
///
/// Intents represent user actions such as key presses and form
/// submission, and system events such as timer expiry.
pub trait Intent: Send + 'static {}

/// Marker trait for state objects.
///
/// State is immutable from the outside: a reducer consumes the old
/// value and returns a fresh one, so "updating" an anecdote really
/// replaces the collection with one where that entry differs.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// Transforms state based on intents.
///
/// The only place a state transition may happen. Must be a pure
/// function `(State, Intent) -> State`.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
