//! DesktopShell struct definition and constructor.

use deskos_ai::AiHandle;
use deskos_apps::{builtin_manifests, ContentFactory, ContentRegistry};
use deskos_common::events::EventBus;
use deskos_common::toast::ToastQueue;
use deskos_common::types::Point;
use deskos_common::WindowId;
use deskos_config::DeskosConfig;
use deskos_wm::{AppRegistry, DragController, WindowManager};

/// Top-level shell state.
///
/// One instance is constructed at startup and owns everything for the
/// process lifetime: the window manager, the drag controller, and the hosted
/// content surfaces. All of it is mutated from the single event-loop thread.
pub struct DesktopShell {
    pub(super) config: DeskosConfig,
    pub(super) registry: AppRegistry,

    // Window management
    pub(super) wm: WindowManager,
    pub(super) drag: DragController,

    // Hosted content
    pub(super) factory: ContentFactory,
    pub(super) contents: ContentRegistry,
    /// Window whose content received the last pointer press, for routing
    /// drag/release events into the same surface.
    pub(super) content_mouse_target: Option<WindowId>,

    // Shell surface
    pub(super) start_menu_open: bool,
    pub(super) toasts: ToastQueue,
    pub(super) events: EventBus,

    /// Terminal dimensions from the last draw, for mouse hit-testing.
    pub(super) screen: (u16, u16),

    pub(super) should_exit: bool,
    pub(super) needs_redraw: bool,
}

impl DesktopShell {
    pub fn new(config: DeskosConfig, ai: Option<AiHandle>) -> Self {
        let wm = WindowManager::with_cascade(
            Point::new(
                config.desktop.cascade_origin_x,
                config.desktop.cascade_origin_y,
            ),
            Point::new(config.desktop.cascade_step_x, config.desktop.cascade_step_y),
        );

        Self {
            config,
            registry: AppRegistry::from_entries(builtin_manifests()),
            wm,
            drag: DragController::new(),
            factory: ContentFactory::new(ai),
            contents: ContentRegistry::new(),
            content_mouse_target: None,
            start_menu_open: false,
            toasts: ToastQueue::new(8),
            events: EventBus::new(64),
            screen: (0, 0),
            should_exit: false,
            needs_redraw: true,
        }
    }

    #[cfg(test)]
    pub(super) fn for_tests() -> Self {
        Self::new(DeskosConfig::default(), None)
    }
}
