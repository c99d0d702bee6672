//! Notepad: a small plain-text editor.

use crossterm::event::{KeyEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::surface::{is_primary_press, ContentSurface};
use crate::textbuf::TextBuffer;

pub struct NotepadSurface {
    buffer: TextBuffer,
}

impl NotepadSurface {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::from_text(
                "Welcome to DeskOS!\n\nThis is a functional text editor.",
            ),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }
}

impl Default for NotepadSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSurface for NotepadSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [menu, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new("File Edit View").style(Style::new().fg(Color::DarkGray)),
            menu,
        );

        let text: Vec<Line> = self
            .buffer
            .lines()
            .iter()
            .map(|l| Line::raw(l.clone()))
            .collect();
        frame.render_widget(Paragraph::new(text), body);

        // Show the cursor as a reversed cell when it is inside the viewport.
        let (line, col) = self.buffer.cursor();
        let cx = body.x + col as u16;
        let cy = body.y + line as u16;
        if body.contains((cx, cy).into()) {
            if let Some(cell) = frame.buffer_mut().cell_mut((cx, cy)) {
                cell.set_style(Style::new().add_modifier(Modifier::REVERSED));
            }
        }

        let position = format!("Ln {}, Col {}", line + 1, col + 1);
        frame.render_widget(
            Paragraph::new(position)
                .right_aligned()
                .style(Style::new().fg(Color::DarkGray)),
            status,
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.buffer.handle_key(key);
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        if !is_primary_press(kind) || y == 0 {
            return;
        }
        // Body starts one row below the menu.
        self.buffer.click((y - 1) as usize, x as usize);
    }
}
