//! Code editor: a code buffer with an AI suggestion strip.

use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use deskos_ai::{prompts, AiHandle, AiReply};

use crate::surface::{is_primary_press, ContentSurface};
use crate::textbuf::TextBuffer;

const AI_BUTTON: &str = "[ AI Fix ]";
const INITIAL_CODE: &str = "function App() {\n  return (\n    <div>Hello World</div>\n  );\n}";

pub struct EditorSurface {
    buffer: TextBuffer,
    suggestion: Option<String>,
    pending: Option<mpsc::Receiver<AiReply>>,
    ai: Option<AiHandle>,
    /// Content width from the last render, for hit-testing the AI button.
    last_width: u16,
}

impl EditorSurface {
    pub fn new(ai: Option<AiHandle>) -> Self {
        Self {
            buffer: TextBuffer::from_text(INITIAL_CODE),
            suggestion: None,
            pending: None,
            ai,
            last_width: 0,
        }
    }

    pub fn code(&self) -> String {
        self.buffer.text()
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    fn ask_ai(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let Some(ai) = &self.ai else {
            self.suggestion = Some("# API Key missing".to_string());
            return;
        };
        match ai.submit(prompts::code_suggestion(&self.buffer.text())) {
            Ok((_, rx)) => {
                self.suggestion = Some("Thinking...".to_string());
                self.pending = Some(rx);
            }
            Err(e) => self.suggestion = Some(format!("Error: {e}")),
        }
    }

    fn button_hit(&self, x: u16, y: u16) -> bool {
        let len = AI_BUTTON.len() as u16;
        y == 0 && self.last_width >= len && x >= self.last_width - len
    }
}

impl ContentSurface for EditorSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.last_width = area.width;

        let suggestion_rows = if self.suggestion.is_some() {
            (area.height / 3).clamp(3, 8)
        } else {
            0
        };
        let [bar, body, strip] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(suggestion_rows),
        ])
        .areas(area);

        let pad = area
            .width
            .saturating_sub(("App.tsx".len() + AI_BUTTON.len()) as u16);
        let title = Line::from(vec![
            Span::styled("App.tsx", Style::new().fg(Color::White)),
            Span::raw(" ".repeat(pad as usize)),
            Span::styled(AI_BUTTON, Style::new().fg(Color::White).bg(Color::Blue)),
        ]);
        frame.render_widget(
            Paragraph::new(title).style(Style::new().bg(Color::DarkGray)),
            bar,
        );

        let code: Vec<Line> = self
            .buffer
            .lines()
            .iter()
            .map(|l| Line::raw(l.clone()))
            .collect();
        frame.render_widget(Paragraph::new(code), body);

        if let Some(text) = &self.suggestion {
            let mut lines = vec![Line::styled(
                "Gemini Suggestion: (Esc to close)",
                Style::new().fg(Color::LightBlue),
            )];
            lines.extend(text.lines().map(|l| Line::raw(l.to_string())));
            frame.render_widget(
                Paragraph::new(lines).block(Block::new().borders(Borders::TOP)),
                strip,
            );
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.suggestion = None,
            KeyCode::F(1) => self.ask_ai(),
            _ => {
                self.buffer.handle_key(key);
            }
        }
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        if !is_primary_press(kind) {
            return;
        }
        if self.button_hit(x, y) {
            self.ask_ai();
        } else if y > 0 {
            self.buffer.click((y - 1) as usize, x as usize);
        }
    }

    fn tick(&mut self) {
        let Some(rx) = &self.pending else { return };
        let outcome = match rx.try_recv() {
            Ok(reply) => Some(match reply.result {
                Ok(text) => text,
                Err(e) => format!("Error: {e}"),
            }),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                Some("Error: ai bridge is not running".to_string())
            }
        };
        if let Some(text) = outcome {
            self.suggestion = Some(text);
            self.pending = None;
        }
    }
}
