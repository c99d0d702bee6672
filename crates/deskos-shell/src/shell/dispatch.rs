//! Action dispatch: routes resolved actions into the window manager and
//! overlay state.

use deskos_common::actions::Action;
use deskos_common::events::Event;
use deskos_common::toast::Toast;
use deskos_wm::taskbar::{self, ClickOutcome};

use super::core::DesktopShell;

impl DesktopShell {
    /// Dispatch a resolved [`Action`].
    pub(super) fn dispatch(&mut self, action: Action) {
        match action {
            Action::LaunchApp(app) => {
                match self.wm.open(&self.registry, &app) {
                    Some(id) => {
                        self.contents.create(&self.factory, id, &app);
                        self.events.publish(Event::WindowOpened { window: id, app });
                    }
                    None => {
                        tracing::warn!(%app, "launch ignored: unknown application");
                        self.toasts.push(Toast::error(format!("Unknown app: {app}")));
                    }
                }
                self.close_start_menu();
            }
            Action::TaskbarApp(app) => {
                match taskbar::handle_click(&mut self.wm, &self.registry, &app) {
                    ClickOutcome::Opened(id) => {
                        self.contents.create(&self.factory, id, &app);
                        self.events.publish(Event::WindowOpened { window: id, app });
                    }
                    ClickOutcome::Restored(id) => {
                        self.events.publish(Event::WindowRestored(id));
                    }
                    ClickOutcome::Minimized(id) => {
                        self.events.publish(Event::WindowMinimized(id));
                    }
                    ClickOutcome::Focused(id) => {
                        self.events.publish(Event::WindowFocused(id));
                    }
                    ClickOutcome::Ignored => {}
                }
                self.close_start_menu();
            }
            Action::CloseWindow(id) => {
                if self.wm.close(id) {
                    self.contents.destroy(id);
                    self.events.publish(Event::WindowClosed(id));
                }
            }
            Action::MinimizeWindow(id) => {
                if self.wm.minimize(id) {
                    self.events.publish(Event::WindowMinimized(id));
                }
            }
            Action::ToggleMaximize(id) => {
                self.wm.toggle_maximize(id);
            }
            Action::FocusWindow(id) => {
                if self.wm.focus(id) {
                    self.events.publish(Event::WindowFocused(id));
                }
                // Focusing a window dismisses transient overlays.
                self.close_start_menu();
            }
            Action::RestoreWindow(id) => {
                if self.wm.restore(id) {
                    self.events.publish(Event::WindowRestored(id));
                }
                self.close_start_menu();
            }
            Action::ToggleStartMenu => {
                if self.start_menu_open {
                    self.close_start_menu();
                } else {
                    self.start_menu_open = true;
                    self.events.publish(Event::StartMenuOpened);
                }
            }
            Action::CloseStartMenu => self.close_start_menu(),
            Action::Quit => {
                self.should_exit = true;
                self.events.publish(Event::Shutdown);
            }
        }
        self.needs_redraw = true;
    }

    pub(super) fn close_start_menu(&mut self) {
        if self.start_menu_open {
            self.start_menu_open = false;
            self.events.publish(Event::StartMenuClosed);
        }
    }
}
