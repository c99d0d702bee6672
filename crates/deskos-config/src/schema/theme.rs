//! Color theme settings. All values are `#rrggbb` hex strings; invalid
//! values fall back to the defaults at render time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Desktop background fill.
    pub background: String,
    /// Taskbar background fill.
    pub taskbar: String,
    /// Border color of unfocused windows.
    pub window_border: String,
    /// Border color of the focused (topmost) window.
    pub focused_border: String,
    /// Default foreground text color.
    pub text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1a2330".into(),
            taskbar: "#10161f".into(),
            window_border: "#4a5568".into(),
            focused_border: "#3b82f6".into(),
            text: "#e2e8f0".into(),
        }
    }
}
