//! Taskbar display settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskbarConfig {
    /// strftime format for the clock.
    pub clock_format: String,
    /// Show the date next to the clock.
    pub show_date: bool,
}

impl Default for TaskbarConfig {
    fn default() -> Self {
        Self {
            clock_format: "%H:%M".into(),
            show_date: true,
        }
    }
}
