//! The create view's three input fields as an MVI component.

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormFocus, FormState};
