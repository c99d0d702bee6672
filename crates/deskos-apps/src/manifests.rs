//! The built-in application registry.

use deskos_common::types::{Color, Size};
use deskos_common::AppId;
use deskos_wm::registry::AppManifest;

/// Manifests for the seven built-in applications, in desktop order.
pub fn builtin_manifests() -> Vec<AppManifest> {
    let entry = |id: &str, name: &str, icon: char, accent: &str, w: u16, h: u16| AppManifest {
        id: AppId::new(id),
        name: name.to_string(),
        icon,
        accent: Color::from_hex(accent).unwrap_or(Color::rgb(128, 128, 128)),
        default_size: Size::new(w, h),
    };

    vec![
        entry("terminal", "Terminal", '>', "#1e1e1e", 60, 16),
        entry("notepad", "Notepad", '≡', "#3b82f6", 50, 14),
        entry("code", "Code", 'λ', "#2563eb", 70, 20),
        entry("browser", "Edge", 'e', "#60a5fa", 80, 22),
        entry("paint", "Paint", '✎', "#eab308", 64, 18),
        entry("calculator", "Calc", '=', "#22c55e", 26, 14),
        entry("video_editor", "Video", '▶', "#9333ea", 70, 18),
    ]
}
