//! The terminal interface: event plumbing, input handling, rendering
//! and the per-component MVI states.

pub mod app;
pub mod banner;
pub mod events;
pub mod footer;
pub mod form;
pub mod goto;
pub mod input;
pub mod layout;
pub mod menu;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;

pub use runtime::run;
