use serde::{Deserialize, Serialize};

use deskos_common::types::{Color, Point, Size};
use deskos_common::{AppId, WindowId};

use crate::registry::AppManifest;

/// One open window.
///
/// Title, icon, and accent are copied from the registry entry at creation and
/// never track later registry changes. `size` is fixed at creation; there is
/// no resize operation. `position` and `size` describe the restored geometry
/// and are left untouched while the window is maximized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub icon: char,
    pub accent: Color,
    pub minimized: bool,
    pub maximized: bool,
    /// Front-to-back order: higher is more in front.
    pub stack_order: u64,
    pub position: Point,
    pub size: Size,
}

impl WindowRecord {
    pub fn from_manifest(
        id: WindowId,
        manifest: &AppManifest,
        stack_order: u64,
        position: Point,
    ) -> Self {
        Self {
            id,
            app: manifest.id.clone(),
            title: manifest.name.clone(),
            icon: manifest.icon,
            accent: manifest.accent,
            minimized: false,
            maximized: false,
            stack_order,
            position,
            size: manifest.default_size,
        }
    }
}
