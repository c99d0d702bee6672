//! Core state and accessors for WindowManager.

use deskos_common::types::Point;
use deskos_common::{AppId, WindowId};

use crate::window::WindowRecord;

/// Owns the live window collection and the two monotonic counters that drive
/// identity and stacking.
///
/// Both counters only ever increase for the lifetime of the manager: window
/// ids are never reused, and "bring to front" is always implemented as
/// "assign the next counter value", never by reordering the collection. That
/// keeps restacking O(1) and the total order stable under rapid focus
/// changes.
pub struct WindowManager {
    /// Live windows in creation order.
    pub(super) windows: Vec<WindowRecord>,
    /// Next window identity. Never reset, never reused.
    pub(super) next_window_id: u64,
    /// Next stack order value. Never reset, never reused.
    pub(super) next_stack_order: u64,
    /// Top-left position of the first window.
    pub(super) cascade_origin: Point,
    /// Offset added per already-open window so new windows stagger.
    pub(super) cascade_step: Point,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_window_id: 1,
            next_stack_order: 1,
            cascade_origin: Point::new(4, 2),
            cascade_step: Point::new(2, 1),
        }
    }

    /// Create with a custom cascade origin and step.
    pub fn with_cascade(cascade_origin: Point, cascade_step: Point) -> Self {
        let mut mgr = Self::new();
        mgr.cascade_origin = cascade_origin;
        mgr.cascade_step = cascade_step;
        mgr
    }

    // -- Accessors --

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub(super) fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// All live windows in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Live windows sorted back-to-front for painting. The sort is stable, so
    /// equal stack orders keep creation order and the later window paints on
    /// top.
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|w| w.stack_order);
        ordered
    }

    /// All live windows belonging to one application, in creation order.
    pub fn windows_for_app<'a>(
        &'a self,
        app: &'a AppId,
    ) -> impl Iterator<Item = &'a WindowRecord> {
        self.windows.iter().filter(move |w| &w.app == app)
    }

    /// The current stack-order counter. Exposed for tests and diagnostics.
    pub fn stack_counter(&self) -> u64 {
        self.next_stack_order
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
