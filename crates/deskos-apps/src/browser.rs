//! Browser frame: an address bar over a sandboxed placeholder page.
//!
//! There is no real networking here; the frame only normalizes and displays
//! the address, the way the desktop treats every app as an opaque surface.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::surface::ContentSurface;

const DEFAULT_URL: &str = "https://www.google.com/webhp?igu=1";

pub struct BrowserSurface {
    /// The committed address the page region shows.
    url: String,
    /// The address bar's edit buffer.
    edit: String,
}

impl BrowserSurface {
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            edit: DEFAULT_URL.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Commit the edit buffer, prepending a scheme when missing.
    fn navigate(&mut self) {
        let mut target = self.edit.trim().to_string();
        if target.is_empty() {
            return;
        }
        if !target.starts_with("http") {
            target = format!("https://{target}");
        }
        self.url = target.clone();
        self.edit = target;
    }
}

impl Default for BrowserSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSurface for BrowserSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [bar, page] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let address = format!("◂ ▸ ⟳  {}", self.edit);
        frame.render_widget(
            Paragraph::new(address).style(Style::new().fg(Color::White).bg(Color::DarkGray)),
            bar,
        );

        let body = Paragraph::new(vec![
            Line::raw(""),
            Line::raw(self.url.clone()).centered(),
            Line::raw(""),
            Line::styled(
                "sandboxed frame - content not rendered",
                Style::new().fg(Color::DarkGray),
            )
            .centered(),
        ])
        .block(Block::new().borders(Borders::TOP));
        frame.render_widget(body, page);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.edit.push(c),
            KeyCode::Backspace => {
                self.edit.pop();
            }
            KeyCode::Enter => self.navigate(),
            _ => {}
        }
    }
}
