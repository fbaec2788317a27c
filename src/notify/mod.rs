//! The one-line notification banner as an MVI component.
//!
//! Each shown message bumps a generation counter, and the expiry that
//! the timer thread sends back carries the generation it was scheduled
//! for. An expiry whose generation no longer matches is a no-op, so a
//! newer message is never cleared by an older message's timer.

mod intent;
mod reducer;
mod state;

pub use intent::NotificationIntent;
pub use reducer::NotificationReducer;
pub use state::NotificationState;
