//! Configuration schema types for DeskOS.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod ai;
mod desktop;
mod logging;
mod taskbar;
mod theme;

pub use ai::*;
pub use desktop::*;
pub use logging::*;
pub use taskbar::*;
pub use theme::*;

use serde::{Deserialize, Serialize};

/// Root configuration for DeskOS. Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskosConfig {
    pub theme: ThemeConfig,
    pub desktop: DesktopConfig,
    pub taskbar: TaskbarConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
