//! Pointer-drag state for moving windows by their title bar.
//!
//! Tracks whether the user is dragging a window and the pointer's offset
//! from that window's top-left corner. The shell forwards global pointer
//! move/up events here only while a drag is active; releasing the button
//! clears the state, so a stray move after release can never produce a
//! window move.

use deskos_common::types::Point;
use deskos_common::WindowId;

use crate::manager::WindowManager;

// =============================================================================
// TYPES
// =============================================================================

/// Active state during a title-bar drag.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// The window being dragged.
    pub window: WindowId,
    /// Pointer offset from the window's top-left corner, captured at
    /// drag start. The window's new top-left is `pointer - anchor` on every
    /// move.
    pub anchor: Point,
}

/// Idle/Dragging state machine for window moves.
#[derive(Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

// =============================================================================
// STATE MACHINE
// =============================================================================

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    pub fn dragging_window(&self) -> Option<WindowId> {
        self.state.map(|s| s.window)
    }

    /// Pointer-down on a window's title region.
    ///
    /// `on_controls` is true when the pointer landed on one of the window
    /// control buttons; those never start a drag. Maximized windows never
    /// enter the dragging state. Starting a drag focuses the window.
    /// Returns whether a drag began.
    pub fn pointer_down(
        &mut self,
        mgr: &mut WindowManager,
        window: WindowId,
        pointer: Point,
        on_controls: bool,
    ) -> bool {
        if on_controls {
            return false;
        }
        let Some(record) = mgr.window(window) else {
            return false;
        };
        if record.maximized {
            return false;
        }

        let anchor = pointer - record.position;
        self.state = Some(DragState { window, anchor });
        mgr.focus(window);
        true
    }

    /// Pointer-move while the button is held. Issues a window move computed
    /// from the stored anchor. Returns whether a move was applied. If the
    /// dragged window disappeared mid-drag the drag ends here.
    pub fn pointer_move(&mut self, mgr: &mut WindowManager, pointer: Point) -> bool {
        let Some(DragState { window, anchor }) = self.state else {
            return false;
        };
        let target = pointer - anchor;
        if mgr.move_to(window, target.x, target.y) {
            true
        } else {
            // Window was closed out from under the drag.
            self.state = None;
            false
        }
    }

    /// Pointer-up anywhere ends the drag. The window stays at its last
    /// dragged position; there is no rollback.
    pub fn pointer_up(&mut self) {
        self.state = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================
