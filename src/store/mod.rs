//! The anecdote collection as an MVI component.
//!
//! Every view reads from it; the create form and the vote keys write to
//! it through [`StoreIntent`]. Ids are handed out by a counter carried
//! in the state itself, so an id is never reused within a run.

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::StoreState;
