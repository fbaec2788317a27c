use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Tunables for the interactive screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notification stays on screen, in milliseconds
    /// (default: 5000).
    #[serde(default = "default_notification_timeout_ms")]
    pub notification_timeout_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_timeout_ms() -> u64 {
    5000
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.ui.notification_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            notification_timeout_ms: default_notification_timeout_ms(),
        }
    }
}
