//! Focus, stacking, and minimize/maximize handling for WindowManager.

use deskos_common::WindowId;

use crate::window::WindowRecord;

use super::WindowManager;

impl WindowManager {
    /// Bring a window to the front by assigning it the next stack order
    /// value. No-op if `id` is not live.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let next = self.next_stack_order;
        match self.window_mut(id) {
            Some(w) => {
                w.stack_order = next;
                self.next_stack_order += 1;
                true
            }
            None => false,
        }
    }

    /// Hide a window from the desktop and from topmost determination. Stack
    /// order is untouched. No-op if `id` is not live.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        match self.window_mut(id) {
            Some(w) => {
                w.minimized = true;
                true
            }
            None => false,
        }
    }

    /// Toggle the maximized flag. Stack order and the stored restore
    /// geometry are untouched, so un-maximizing reveals the prior position
    /// and size. No-op if `id` is not live.
    pub fn toggle_maximize(&mut self, id: WindowId) -> bool {
        match self.window_mut(id) {
            Some(w) => {
                w.maximized = !w.maximized;
                true
            }
            None => false,
        }
    }

    /// Un-minimize and bring to front; for a window that is not minimized
    /// this is exactly `focus`. No-op if `id` is not live.
    pub fn restore(&mut self, id: WindowId) -> bool {
        match self.window_mut(id) {
            Some(w) => {
                w.minimized = false;
            }
            None => return false,
        }
        self.focus(id)
    }

    /// The non-minimized window with the greatest stack order, or `None`
    /// when every window is minimized or the collection is empty. On equal
    /// stack orders the later-created window wins.
    pub fn topmost(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.stack_order)
    }

    /// Whether `id` is the current topmost window.
    pub fn is_topmost(&self, id: WindowId) -> bool {
        self.topmost().is_some_and(|w| w.id == id)
    }
}
