use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationIntent {
    /// Replace the banner text and move to the next generation.
    Show { message: String },
    /// Clear the banner, but only if `generation` is still the one on
    /// display. Stale expiries fall through unchanged.
    Expire { generation: u64 },
}

impl Intent for NotificationIntent {}
