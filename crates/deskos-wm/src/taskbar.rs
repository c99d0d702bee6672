//! Taskbar click routing and per-application indicators.
//!
//! A taskbar button represents an application, not a window. Clicking it
//! resolves against that application's most recently active instance with a
//! fixed three-way precedence: a minimized instance is restored, the active
//! instance is minimized, and any other visible instance is focused. With no
//! instance at all, a new window opens. The minimized check runs before the
//! active check: a minimized instance that is not the global topmost is
//! restored, never minimized further.

use deskos_common::{AppId, WindowId};

use crate::manager::WindowManager;
use crate::registry::AppRegistry;

/// What a taskbar click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened(WindowId),
    Restored(WindowId),
    Minimized(WindowId),
    Focused(WindowId),
    /// Unknown application; nothing happened.
    Ignored,
}

/// Running/active badge state for one taskbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarItem {
    pub app: AppId,
    /// At least one live instance exists (minimized or not).
    pub running: bool,
    /// Some non-minimized instance holds the global maximum stack order.
    pub active: bool,
}

/// The app's instance with the greatest stack order, minimized or not.
fn most_recent_instance(mgr: &WindowManager, app: &AppId) -> Option<WindowId> {
    mgr.windows_for_app(app)
        .max_by_key(|w| w.stack_order)
        .map(|w| w.id)
}

/// Route a taskbar click on `app` to the window manager.
pub fn handle_click(mgr: &mut WindowManager, registry: &AppRegistry, app: &AppId) -> ClickOutcome {
    let Some(instance) = most_recent_instance(mgr, app) else {
        return match mgr.open(registry, app) {
            Some(id) => ClickOutcome::Opened(id),
            None => ClickOutcome::Ignored,
        };
    };

    let minimized = mgr
        .window(instance)
        .is_some_and(|w| w.minimized);
    if minimized {
        mgr.restore(instance);
        ClickOutcome::Restored(instance)
    } else if mgr.is_topmost(instance) {
        mgr.minimize(instance);
        ClickOutcome::Minimized(instance)
    } else {
        mgr.focus(instance);
        ClickOutcome::Focused(instance)
    }
}

/// Whether the application has any live instance.
pub fn is_running(mgr: &WindowManager, app: &AppId) -> bool {
    mgr.windows_for_app(app).next().is_some()
}

/// Whether the application owns the current topmost window.
pub fn is_active(mgr: &WindowManager, app: &AppId) -> bool {
    mgr.topmost().is_some_and(|w| &w.app == app)
}

/// Badge state for every registry entry, in registry order.
pub fn items(mgr: &WindowManager, registry: &AppRegistry) -> Vec<TaskbarItem> {
    registry
        .entries()
        .iter()
        .map(|m| TaskbarItem {
            app: m.id.clone(),
            running: is_running(mgr, &m.id),
            active: is_active(mgr, &m.id),
        })
        .collect()
}
