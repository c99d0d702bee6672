//! Terminal: a simulated Python REPL backed by the text-generation service.
//!
//! No real interpreter runs here. Each submitted line goes to the AI bridge
//! with the session transcript as context, so assignments appear to persist
//! across lines. `clear` drops the transcript and with it the "interpreter
//! state".

use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use deskos_ai::{prompts, AiHandle, AiReply};

use crate::surface::ContentSurface;

const PROMPT: &str = ">>> ";

pub struct TerminalSurface {
    history: Vec<String>,
    input: String,
    /// Accumulated transcript sent as REPL context.
    context: String,
    /// The submitted line a reply is pending for.
    pending: Option<(String, mpsc::Receiver<AiReply>)>,
    ai: Option<AiHandle>,
}

impl TerminalSurface {
    pub fn new(ai: Option<AiHandle>) -> Self {
        Self {
            history: vec![
                "DeskOS Terminal [Version 0.1.0]".to_string(),
                "Python 3.11.0 (simulated) -- type exit() to leave".to_string(),
                String::new(),
            ],
            input: String::new(),
            context: String::new(),
            pending: None,
            ai,
        }
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    fn push_output(&mut self, output: &str) {
        for line in output.lines() {
            self.history.push(line.to_string());
        }
        if output.is_empty() {
            self.history.push(String::new());
        }
    }

    fn submit(&mut self) {
        let cmd = std::mem::take(&mut self.input);
        self.history.push(format!("{PROMPT}{cmd}"));

        if cmd.trim().is_empty() {
            self.history.push(String::new());
            return;
        }
        if cmd == "exit()" {
            self.history.push("Exiting Python environment...".to_string());
            return;
        }
        if cmd == "clear" || cmd == "cls" {
            self.history.clear();
            self.context.clear();
            return;
        }

        let Some(ai) = &self.ai else {
            self.history.push("Error: API Key not configured.".to_string());
            return;
        };
        match ai.submit(prompts::python_repl(&cmd, &self.context)) {
            Ok((_, rx)) => self.pending = Some((cmd, rx)),
            Err(e) => self.history.push(format!("Error: {e}")),
        }
    }

    fn poll_reply(&mut self) {
        let Some((cmd, rx)) = &self.pending else { return };
        let outcome = match rx.try_recv() {
            Ok(reply) => Some(reply.result),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                Some(Err("ai bridge is not running".to_string()))
            }
        };
        let Some(result) = outcome else { return };

        let cmd = cmd.clone();
        let output = match result {
            Ok(text) => text,
            Err(e) => format!("Error: {e}"),
        };
        self.context.push('\n');
        self.context.push_str(&cmd);
        self.context.push('\n');
        self.context.push_str(&output);
        self.push_output(&output);
        self.pending = None;
    }
}

impl ContentSurface for TerminalSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [scroll, prompt] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        // Tail of the transcript, plus the processing indicator.
        let mut lines: Vec<Line> = self
            .history
            .iter()
            .map(|l| Line::raw(l.clone()))
            .collect();
        if self.is_processing() {
            lines.push(Line::styled(
                "Processing...",
                Style::new().fg(Color::LightBlue),
            ));
        }
        let visible = scroll.height as usize;
        let skip = lines.len().saturating_sub(visible);
        let tail: Vec<Line> = lines.into_iter().skip(skip).collect();
        frame.render_widget(
            Paragraph::new(tail).style(Style::new().fg(Color::Gray)),
            scroll,
        );

        let input_line = Line::from(vec![
            Span::styled(PROMPT, Style::new().fg(Color::LightGreen)),
            Span::styled(self.input.clone(), Style::new().fg(Color::White)),
        ]);
        frame.render_widget(Paragraph::new(input_line), prompt);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.is_processing() {
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn tick(&mut self) {
        self.poll_reply();
    }
}
