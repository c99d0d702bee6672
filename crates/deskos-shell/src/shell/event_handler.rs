//! The crossterm event loop: tick, keyboard, and mouse routing.
//!
//! Everything runs on one thread. Events apply in delivery order; the only
//! "background" work is the AI bridge, whose replies the surfaces poll
//! during the tick.

use std::time::Duration;

use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use ratatui::DefaultTerminal;

use deskos_common::actions::Action;
use deskos_common::types::Point;

use super::chrome::{self, ControlButton, TaskbarHit, WindowHit};
use super::core::DesktopShell;
use super::render;

/// Clock and poll cadence.
const TICK: Duration = Duration::from_millis(250);

pub fn run(shell: &mut DesktopShell, mut terminal: DefaultTerminal) -> std::io::Result<()> {
    while !shell.should_exit {
        if shell.needs_redraw {
            terminal.draw(|frame| render::draw(shell, frame))?;
            shell.needs_redraw = false;
        }
        if event::poll(TICK)? {
            match event::read()? {
                CtEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    shell.handle_key(key);
                }
                CtEvent::Mouse(mouse) => shell.handle_mouse(mouse),
                CtEvent::Resize(_, _) => shell.needs_redraw = true,
                _ => {}
            }
        } else {
            shell.tick();
        }
    }
    Ok(())
}

impl DesktopShell {
    pub(super) fn tick(&mut self) {
        self.contents.tick_all();
        // The clock advances even when nothing else happened.
        self.needs_redraw = true;
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.dispatch(Action::Quit);
            return;
        }
        if key.code == KeyCode::Esc && self.start_menu_open {
            self.dispatch(Action::CloseStartMenu);
            return;
        }

        // Everything else goes to the active window's content.
        let Some(target) = self.wm.topmost().map(|w| w.id) else {
            return;
        };
        if let Some(surface) = self.contents.get_mut(target) {
            surface.handle_key(key);
            self.needs_redraw = true;
        }
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = Point::new(mouse.column as i32, mouse.row as i32);

        // While a title drag is live, the controller receives every
        // move/release no matter where the pointer is; releasing drops that
        // routing in the same breath.
        if self.drag.is_dragging() {
            match mouse.kind {
                MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                    if self.drag.pointer_move(&mut self.wm, point) {
                        self.needs_redraw = true;
                    }
                }
                MouseEventKind::Up(MouseButton::Left) => self.drag.pointer_up(),
                _ => {}
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_press(point),
            MouseEventKind::Drag(MouseButton::Left) => {
                self.route_content_mouse(mouse.kind, point);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.route_content_mouse(mouse.kind, point);
                self.content_mouse_target = None;
            }
            _ => {}
        }
    }

    /// Resolve a primary button press against the shell surface, front to
    /// back: taskbar, start menu, windows, desktop icons.
    fn pointer_press(&mut self, point: Point) {
        let (width, height) = self.screen;
        let desktop = chrome::desktop_area(width, height);

        if chrome::taskbar_rect(width, height).contains(point.x, point.y) {
            match chrome::taskbar_hit(point.x, self.registry.len()) {
                Some(TaskbarHit::Start) => self.dispatch(Action::ToggleStartMenu),
                Some(TaskbarHit::App(i)) => {
                    let app = self.registry.entries()[i].id.clone();
                    self.dispatch(Action::TaskbarApp(app));
                }
                None => self.dispatch(Action::CloseStartMenu),
            }
            return;
        }

        if self.start_menu_open {
            let menu = chrome::start_menu_rect(desktop, self.registry.len());
            if menu.contains(point.x, point.y) {
                if let Some(i) =
                    chrome::start_menu_app_at(menu, self.registry.len(), point.x, point.y)
                {
                    let app = self.registry.entries()[i].id.clone();
                    self.dispatch(Action::LaunchApp(app));
                }
                return;
            }
            // A click anywhere else dismisses the menu, then lands normally.
            self.dispatch(Action::CloseStartMenu);
        }

        let front_to_back: Vec<_> = self
            .wm
            .paint_order()
            .iter()
            .rev()
            .filter(|w| !w.minimized)
            .map(|w| w.id)
            .collect();
        for id in front_to_back {
            let Some(record) = self.wm.window(id) else {
                continue;
            };
            let frame = chrome::window_frame(record, desktop);
            let Some(hit) = chrome::window_hit(frame, point.x, point.y) else {
                continue;
            };
            match hit {
                WindowHit::Control(button) => {
                    let action = match button {
                        ControlButton::Minimize => Action::MinimizeWindow(id),
                        ControlButton::Maximize => Action::ToggleMaximize(id),
                        ControlButton::Close => Action::CloseWindow(id),
                    };
                    self.dispatch(action);
                }
                WindowHit::Title => {
                    if !self.drag.pointer_down(&mut self.wm, id, point, false) {
                        // Maximized windows don't drag but still come to front.
                        self.wm.focus(id);
                    }
                    self.close_start_menu();
                    self.needs_redraw = true;
                }
                WindowHit::Content { x, y } => {
                    self.dispatch(Action::FocusWindow(id));
                    self.content_mouse_target = Some(id);
                    if let Some(surface) = self.contents.get_mut(id) {
                        surface.handle_mouse(MouseEventKind::Down(MouseButton::Left), x, y);
                    }
                }
                WindowHit::Frame => {
                    self.dispatch(Action::FocusWindow(id));
                }
            }
            return;
        }

        if let Some(i) = chrome::icon_at(
            self.registry.len(),
            self.config.desktop.icon_rows,
            point.x,
            point.y,
        ) {
            let app = self.registry.entries()[i].id.clone();
            self.dispatch(Action::LaunchApp(app));
        }
    }

    /// Forward a drag/release to the surface that received the initial
    /// press, using coordinates relative to its content area.
    fn route_content_mouse(&mut self, kind: MouseEventKind, point: Point) {
        let Some(id) = self.content_mouse_target else {
            return;
        };
        let desktop = chrome::desktop_area(self.screen.0, self.screen.1);
        let Some(record) = self.wm.window(id) else {
            self.content_mouse_target = None;
            return;
        };
        let content = chrome::content_rect(chrome::window_frame(record, desktop));
        if content.contains(point.x, point.y) {
            let (cx, cy) = ((point.x - content.x) as u16, (point.y - content.y) as u16);
            if let Some(surface) = self.contents.get_mut(id) {
                surface.handle_mouse(kind, cx, cy);
                self.needs_redraw = true;
            }
        }
    }
}
