//! The address prompt as an MVI component.
//!
//! The prompt is the terminal's stand-in for a browser address bar: the
//! user types a path, the router parses it, and a path that matches no
//! view is reported inline instead of navigating anywhere.

mod intent;
mod reducer;
mod state;

pub use intent::GotoIntent;
pub use reducer::GotoReducer;
pub use state::GotoState;
