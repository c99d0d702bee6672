//! Shared cursor-addressed text buffer for the notepad and code editor.

use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    line: usize,
    col: usize,
}

impl TextBuffer {
    /// Create from initial text, cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let line = lines.len() - 1;
        let col = lines[line].chars().count();
        Self { lines, line, col }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor as (line, column), both zero-based, in characters.
    pub fn cursor(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    fn byte_col(&self) -> usize {
        self.lines[self.line]
            .char_indices()
            .nth(self.col)
            .map(|(i, _)| i)
            .unwrap_or(self.lines[self.line].len())
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_col();
        self.lines[self.line].insert(at, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let at = self.byte_col();
        let rest = self.lines[self.line].split_off(at);
        self.lines.insert(self.line + 1, rest);
        self.line += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = self.byte_col();
            self.lines[self.line].remove(at);
        } else if self.line > 0 {
            let removed = self.lines.remove(self.line);
            self.line -= 1;
            self.col = self.line_len(self.line);
            self.lines[self.line].push_str(&removed);
        }
    }

    /// Place the cursor at a clicked position, clamping to line bounds.
    pub fn click(&mut self, line: usize, col: usize) {
        if line < self.lines.len() {
            self.line = line;
            self.col = col.min(self.line_len(line));
        }
    }

    /// Apply one key event. Returns whether the buffer consumed it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter => self.insert_newline(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.col = self.col.saturating_sub(1),
            KeyCode::Right => self.col = (self.col + 1).min(self.line_len(self.line)),
            KeyCode::Up => {
                if self.line > 0 {
                    self.line -= 1;
                    self.col = self.col.min(self.line_len(self.line));
                }
            }
            KeyCode::Down => {
                if self.line + 1 < self.lines.len() {
                    self.line += 1;
                    self.col = self.col.min(self.line_len(self.line));
                }
            }
            KeyCode::Home => self.col = 0,
            KeyCode::End => self.col = self.line_len(self.line),
            _ => return false,
        }
        true
    }
}
