//! Desktop chrome geometry and hit-testing.
//!
//! Pure cell arithmetic: where a window's frame, title region, control
//! buttons, and content area sit, plus the desktop icon grid, the taskbar
//! strip, and the start menu overlay. The event handler resolves every mouse
//! event through these functions; the renderer draws with the same ones, so
//! clicks and pixels can never disagree.

use deskos_common::types::Rect;
use deskos_wm::WindowRecord;

pub const TASKBAR_HEIGHT: u16 = 1;
/// Window control strip `[-][□][✕]` in the title row.
pub const CONTROLS_WIDTH: i32 = 9;

pub const ICON_CELL_WIDTH: u16 = 12;
pub const ICON_CELL_HEIGHT: u16 = 3;

pub const START_LABEL: &str = "[Start]";
/// Taskbar app buttons begin after the start label and a gap.
pub const APP_BUTTONS_X: i32 = START_LABEL.len() as i32 + 1;
pub const APP_BUTTON_WIDTH: i32 = 4;

pub const MENU_WIDTH: u16 = 30;

// =============================================================================
// WINDOWS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Minimize,
    Maximize,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHit {
    /// Draggable part of the title row.
    Title,
    Control(ControlButton),
    /// Inside the content area, coordinates relative to its top-left.
    Content { x: u16, y: u16 },
    /// Border cells that neither drag nor scroll.
    Frame,
}

/// The desktop surface: everything above the taskbar.
pub fn desktop_area(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height.saturating_sub(TASKBAR_HEIGHT))
}

/// A window's outer frame. Maximized windows cover the whole desktop area;
/// everyone else gets their stored geometry plus one border cell on each
/// side.
pub fn window_frame(record: &WindowRecord, desktop: Rect) -> Rect {
    if record.maximized {
        desktop
    } else {
        Rect::new(
            record.position.x,
            record.position.y,
            record.size.width + 2,
            record.size.height + 2,
        )
    }
}

/// The hosted content area: the frame minus its border.
pub fn content_rect(frame: Rect) -> Rect {
    Rect::new(
        frame.x + 1,
        frame.y + 1,
        frame.width.saturating_sub(2),
        frame.height.saturating_sub(2),
    )
}

/// Where inside a window's frame a desktop-space point lands.
pub fn window_hit(frame: Rect, x: i32, y: i32) -> Option<WindowHit> {
    if !frame.contains(x, y) {
        return None;
    }

    if y == frame.y {
        // Controls sit at the right end of the title row, inside the corner.
        let end = frame.right() - 1;
        let start = end - CONTROLS_WIDTH;
        if x >= start && x < end {
            let button = match (x - start) / 3 {
                0 => ControlButton::Minimize,
                1 => ControlButton::Maximize,
                _ => ControlButton::Close,
            };
            return Some(WindowHit::Control(button));
        }
        return Some(WindowHit::Title);
    }

    let content = content_rect(frame);
    if content.contains(x, y) {
        return Some(WindowHit::Content {
            x: (x - content.x) as u16,
            y: (y - content.y) as u16,
        });
    }
    Some(WindowHit::Frame)
}

// =============================================================================
// DESKTOP ICONS
// =============================================================================

/// Icons fill columns top-to-bottom, `rows` per column.
pub fn icon_rect(index: usize, rows: u16) -> Rect {
    let rows = rows.max(1) as usize;
    let col = (index / rows) as i32;
    let row = (index % rows) as i32;
    Rect::new(
        2 + col * (ICON_CELL_WIDTH as i32 + 2),
        1 + row * ICON_CELL_HEIGHT as i32,
        ICON_CELL_WIDTH,
        ICON_CELL_HEIGHT - 1,
    )
}

pub fn icon_at(count: usize, rows: u16, x: i32, y: i32) -> Option<usize> {
    (0..count).find(|&i| icon_rect(i, rows).contains(x, y))
}

// =============================================================================
// TASKBAR
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarHit {
    Start,
    App(usize),
}

/// The taskbar strip at the bottom of the screen.
pub fn taskbar_rect(width: u16, height: u16) -> Rect {
    Rect::new(
        0,
        height.saturating_sub(TASKBAR_HEIGHT) as i32,
        width,
        TASKBAR_HEIGHT,
    )
}

/// What a click at taskbar column `x` lands on.
pub fn taskbar_hit(x: i32, app_count: usize) -> Option<TaskbarHit> {
    if x >= 0 && x < START_LABEL.len() as i32 {
        return Some(TaskbarHit::Start);
    }
    if x >= APP_BUTTONS_X {
        let index = ((x - APP_BUTTONS_X) / APP_BUTTON_WIDTH) as usize;
        if index < app_count {
            return Some(TaskbarHit::App(index));
        }
    }
    None
}

// =============================================================================
// START MENU
// =============================================================================

/// The start menu overlay: bottom-centered above the taskbar, one row per
/// application plus a border.
pub fn start_menu_rect(desktop: Rect, app_count: usize) -> Rect {
    let height = app_count as u16 + 2;
    let x = (desktop.width.saturating_sub(MENU_WIDTH) / 2) as i32;
    let y = desktop.bottom() - height as i32;
    Rect::new(x, y.max(0), MENU_WIDTH.min(desktop.width), height)
}

/// Which menu entry a desktop-space point lands on.
pub fn start_menu_app_at(menu: Rect, app_count: usize, x: i32, y: i32) -> Option<usize> {
    if x <= menu.x || x >= menu.right() - 1 {
        return None;
    }
    let row = y - menu.y - 1;
    if row >= 0 && (row as usize) < app_count {
        Some(row as usize)
    } else {
        None
    }
}
