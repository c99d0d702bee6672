//! Open, close, and move operations on the WindowManager.

use deskos_common::types::Point;
use deskos_common::{AppId, WindowId};

use crate::registry::AppRegistry;
use crate::window::WindowRecord;

use super::WindowManager;

impl WindowManager {
    /// Open a new window for `app`.
    ///
    /// Copies title, icon, accent, and default size from the registry entry,
    /// assigns a fresh id and the next stack order, and cascades the initial
    /// position from the number of already-open windows. Unknown `app` is a
    /// no-op returning `None`. Multiple instances of one application are
    /// permitted; there is no dedup.
    pub fn open(&mut self, registry: &AppRegistry, app: &AppId) -> Option<WindowId> {
        let Some(manifest) = registry.get(app) else {
            tracing::debug!(%app, "open ignored: unknown application");
            return None;
        };

        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;

        let stack_order = self.next_stack_order;
        self.next_stack_order += 1;

        let offset = self.windows.len() as i32;
        let position = Point::new(
            self.cascade_origin.x + self.cascade_step.x * offset,
            self.cascade_origin.y + self.cascade_step.y * offset,
        );

        tracing::debug!(%id, %app, "window opened");
        self.windows
            .push(WindowRecord::from_manifest(id, manifest, stack_order, position));
        Some(id)
    }

    /// Close a window, removing it from the collection permanently.
    /// No-op if `id` is not live.
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        let closed = self.windows.len() != before;
        if closed {
            tracing::debug!(%id, "window closed");
        }
        closed
    }

    /// Set a window's top-left position unconditionally. No clamping to the
    /// desktop: callers constrain coordinates if they want to. Callers avoid
    /// moving maximized windows, but the manager does not reject it.
    pub fn move_to(&mut self, id: WindowId, x: i32, y: i32) -> bool {
        match self.window_mut(id) {
            Some(w) => {
                w.position = Point::new(x, y);
                true
            }
            None => false,
        }
    }
}
