//! Content surface boundary between the window manager and the apps.

use std::collections::HashMap;

use crossterm::event::{KeyEvent, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::debug;

use deskos_ai::AiHandle;
use deskos_common::{AppId, WindowId};

/// A hosted application's rendered surface.
///
/// The window manager allocates a rectangular content region and hands it
/// down; what happens inside is the app's business. Mouse coordinates are
/// relative to the content area's top-left corner.
pub trait ContentSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect);

    fn handle_key(&mut self, _key: KeyEvent) {}

    fn handle_mouse(&mut self, _kind: MouseEventKind, _x: u16, _y: u16) {}

    /// Periodic low-frequency tick for polling and animation.
    fn tick(&mut self) {}
}

/// Creates content surfaces for registry applications.
///
/// Holds the AI bridge handle so the terminal and code editor can reach the
/// text-generation service; everything else is self-contained.
pub struct ContentFactory {
    ai: Option<AiHandle>,
}

impl ContentFactory {
    pub fn new(ai: Option<AiHandle>) -> Self {
        Self { ai }
    }

    pub fn make(&self, app: &AppId) -> Option<Box<dyn ContentSurface>> {
        let surface: Box<dyn ContentSurface> = match app.as_str() {
            "terminal" => Box::new(crate::terminal::TerminalSurface::new(self.ai.clone())),
            "notepad" => Box::new(crate::notepad::NotepadSurface::new()),
            "code" => Box::new(crate::editor::EditorSurface::new(self.ai.clone())),
            "browser" => Box::new(crate::browser::BrowserSurface::new()),
            "paint" => Box::new(crate::paint::PaintSurface::new()),
            "calculator" => Box::new(crate::calculator::CalculatorSurface::new()),
            "video_editor" => Box::new(crate::video::VideoSurface::new()),
            _ => return None,
        };
        Some(surface)
    }
}

/// Live content surfaces keyed by window id.
///
/// Mirrors the window collection's lifecycle: a surface is created when its
/// window opens and destroyed when it closes.
#[derive(Default)]
pub struct ContentRegistry {
    surfaces: HashMap<WindowId, Box<dyn ContentSurface>>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a surface for a window. Returns whether the
    /// factory knew the application.
    pub fn create(&mut self, factory: &ContentFactory, window: WindowId, app: &AppId) -> bool {
        match factory.make(app) {
            Some(surface) => {
                self.surfaces.insert(window, surface);
                true
            }
            None => {
                debug!(%window, %app, "no content surface for application");
                false
            }
        }
    }

    pub fn get_mut(&mut self, window: WindowId) -> Option<&mut Box<dyn ContentSurface>> {
        self.surfaces.get_mut(&window)
    }

    /// Drop the surface for a closed window.
    pub fn destroy(&mut self, window: WindowId) -> bool {
        let removed = self.surfaces.remove(&window).is_some();
        if removed {
            debug!(%window, "content surface destroyed");
        }
        removed
    }

    /// Tick every live surface.
    pub fn tick_all(&mut self) {
        for surface in self.surfaces.values_mut() {
            surface.tick();
        }
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

/// Like [`MouseEventKind::Down`] but only for the primary button.
pub(crate) fn is_primary_press(kind: MouseEventKind) -> bool {
    matches!(kind, MouseEventKind::Down(MouseButton::Left))
}
