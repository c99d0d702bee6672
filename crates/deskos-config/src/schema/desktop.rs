//! Desktop surface settings: window cascade and icon grid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Top-left position of the first opened window, in cells.
    pub cascade_origin_x: i32,
    pub cascade_origin_y: i32,
    /// Offset added per already-open window so new windows stagger.
    pub cascade_step_x: i32,
    pub cascade_step_y: i32,
    /// Desktop icons fill columns top-to-bottom with this many rows.
    pub icon_rows: u16,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            cascade_origin_x: 4,
            cascade_origin_y: 2,
            cascade_step_x: 2,
            cascade_step_y: 1,
            icon_rows: 6,
        }
    }
}
