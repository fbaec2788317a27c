//! Anecdota, a terminal browser for software anecdotes.
//!
//! The application is a routed, single-screen UI over an in-memory
//! collection: a route table selects one of four views (list, detail,
//! create form, about), the create form appends to the store, voting
//! bumps a counter, and a notification banner clears itself after a
//! fixed delay. Nothing is persisted; state lives for one run.
//!
//! All mutation follows one rule: an intent is dispatched to a pure
//! reducer that consumes the old state and returns the new one (see
//! [`mvi`]). The [`ui::app::App`] object owns every piece of state and
//! is created at startup and dropped at exit; there are no globals.
//!
//! Module map:
//! - [`model`]: the `Anecdote` entity and the seed data
//! - [`store`]: the anecdote collection and its reducer
//! - [`notify`]: the self-expiring notification and its reducer
//! - [`route`]: the navigation path table
//! - [`config`]: TOML configuration (tick rate, notification delay)
//! - [`trace`]: opt-in file logging for a process that owns the terminal
//! - [`ui`]: event loop, input handling, and ratatui rendering

pub mod config;
pub mod model;
pub mod mvi;
pub mod notify;
pub mod route;
pub mod store;
pub mod trace;
pub mod ui;
