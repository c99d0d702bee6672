//! Calculator: keypad-driven infix arithmetic.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::surface::{is_primary_press, ContentSurface};

/// Keypad layout, row-major. `C` clears, `=` evaluates.
const KEYS: [[char; 4]; 4] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['C', '0', '=', '+'],
];

const DISPLAY_ROWS: u16 = 2;

pub struct CalculatorSurface {
    display: String,
    /// Keypad dimensions from the last render, for mouse hit-testing.
    last_pad_size: (u16, u16),
}

impl CalculatorSurface {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            last_pad_size: (0, 0),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    fn press(&mut self, key: char) {
        match key {
            'C' => self.display = "0".to_string(),
            '=' => {
                self.display = match evaluate(&self.display) {
                    Some(value) => format_value(value),
                    None => "Error".to_string(),
                };
            }
            _ => {
                if self.display == "0" || self.display == "Error" {
                    self.display = key.to_string();
                } else {
                    self.display.push(key);
                }
            }
        }
    }
}

impl Default for CalculatorSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSurface for CalculatorSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [display, pad] =
            Layout::vertical([Constraint::Length(DISPLAY_ROWS), Constraint::Min(0)]).areas(area);

        frame.render_widget(
            Paragraph::new(self.display.clone())
                .right_aligned()
                .block(Block::new().borders(Borders::BOTTOM))
                .style(Style::new().fg(Color::White)),
            display,
        );

        let rows = Layout::vertical([Constraint::Ratio(1, 4); 4]).split(pad);
        for (r, row_area) in rows.iter().enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(*row_area);
            for (c, cell) in cols.iter().enumerate() {
                let key = KEYS[r][c];
                let style = if key.is_ascii_digit() {
                    Style::new().fg(Color::White)
                } else {
                    Style::new().fg(Color::LightBlue)
                };
                frame.render_widget(
                    Paragraph::new(key.to_string()).centered().style(style),
                    *cell,
                );
            }
        }
        self.last_pad_size = (pad.width, pad.height);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || "+-*/".contains(c) => self.press(c),
            KeyCode::Char('=') | KeyCode::Enter => self.press('='),
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => self.press('C'),
            KeyCode::Backspace => {
                self.display.pop();
                if self.display.is_empty() {
                    self.display = "0".to_string();
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, kind: crossterm::event::MouseEventKind, x: u16, y: u16) {
        if !is_primary_press(kind) {
            return;
        }
        let (width, height) = self.last_pad_size;
        if let Some(key) = key_at(width, height, x, y) {
            self.press(key);
        }
    }
}

/// Map a content-relative click to a keypad key. The keypad sits below the
/// display and divides its area into a 4x4 grid.
fn key_at(pad_width: u16, pad_height: u16, x: u16, y: u16) -> Option<char> {
    if y < DISPLAY_ROWS || pad_width == 0 || pad_height == 0 {
        return None;
    }
    let row = ((y - DISPLAY_ROWS) as usize * 4) / pad_height as usize;
    let col = (x as usize * 4) / pad_width as usize;
    if row < 4 && col < 4 {
        Some(KEYS[row][col])
    } else {
        None
    }
}

// =============================================================================
// EXPRESSION EVALUATION
// =============================================================================

/// Evaluate an infix expression of `+ - * /` over decimal numbers with the
/// usual precedence. Returns `None` on malformed input.
fn evaluate(expr: &str) -> Option<f64> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    if parser.pos == parser.tokens.len() {
        Some(value)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(char),
}

fn tokenize(expr: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = expr.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' | '.' => {
                let mut literal = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        literal.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Number(literal.parse().ok()?));
            }
            '+' | '-' | '*' | '/' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            ' ' => {
                chars.next();
            }
            _ => return None,
        }
    }
    Some(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn expression(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Some(value)
    }

    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        while let Some(Token::Op(op @ ('*' | '/'))) = self.peek() {
            self.pos += 1;
            let rhs = self.factor()?;
            value = if op == '*' { value * rhs } else { value / rhs };
        }
        Some(value)
    }

    fn factor(&mut self) -> Option<f64> {
        match self.peek()? {
            Token::Op('-') => {
                self.pos += 1;
                Some(-self.factor()?)
            }
            Token::Number(n) => {
                self.pos += 1;
                Some(n)
            }
            _ => None,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }
}

/// Integer results print without a fraction; division by zero prints the
/// IEEE name, matching what the original shell displayed.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};

    fn press_all(calc: &mut CalculatorSurface, keys: &str) {
        for key in keys.chars() {
            calc.press(key);
        }
    }

    #[test]
    fn starts_at_zero_and_replaces_leading_zero() {
        let mut calc = CalculatorSurface::new();
        assert_eq!(calc.display(), "0");
        calc.press('7');
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn addition() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "12+34=");
        assert_eq!(calc.display(), "46");
    }

    #[test]
    fn precedence_multiplication_first() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "2+3*4=");
        assert_eq!(calc.display(), "14");
    }

    #[test]
    fn division_result_with_fraction() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "7/2=");
        assert_eq!(calc.display(), "3.5");
    }

    #[test]
    fn unary_minus_after_operator() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "5*-3=");
        assert_eq!(calc.display(), "-15");
    }

    #[test]
    fn division_by_zero_displays_infinity() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "5/0=");
        assert_eq!(calc.display(), "Infinity");
    }

    #[test]
    fn malformed_expression_displays_error() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "5++=");
        // "5++" parses as 5 + (+?) which fails.
        assert_eq!(calc.display(), "Error");
    }

    #[test]
    fn clear_resets() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "123");
        calc.press('C');
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn typing_after_error_starts_fresh() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "5++=");
        calc.press('8');
        assert_eq!(calc.display(), "8");
    }

    #[test]
    fn chained_evaluation_uses_previous_result() {
        let mut calc = CalculatorSurface::new();
        press_all(&mut calc, "2+2=");
        press_all(&mut calc, "*10=");
        assert_eq!(calc.display(), "40");
    }

    #[test]
    fn keyboard_input() {
        let mut calc = CalculatorSurface::new();
        for c in "9*9".chars() {
            calc.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        calc.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(calc.display(), "81");
    }

    #[test]
    fn evaluate_rejects_garbage() {
        assert!(evaluate("abc").is_none());
        assert!(evaluate("1..2").is_none());
        assert!(evaluate("").is_none());
        assert!(evaluate("1+*2").is_none());
    }

    #[test]
    fn format_trims_integer_results() {
        assert_eq!(format_value(4.0), "4");
        assert_eq!(format_value(-2.0), "-2");
        assert_eq!(format_value(0.5), "0.5");
    }

    #[test]
    fn key_at_maps_grid() {
        // 24 wide, 8 tall keypad below a 2-row display.
        assert_eq!(key_at(24, 8, 0, DISPLAY_ROWS), Some('7'));
        assert_eq!(key_at(24, 8, 23, DISPLAY_ROWS + 7), Some('+'));
        assert_eq!(key_at(24, 8, 7, DISPLAY_ROWS + 6), Some('0'));
        assert_eq!(key_at(24, 8, 0, 0), None);
    }

    #[test]
    fn mouse_press_uses_last_layout() {
        let mut calc = CalculatorSurface::new();
        calc.last_pad_size = (24, 8);
        calc.handle_mouse(MouseEventKind::Down(MouseButton::Left), 0, DISPLAY_ROWS);
        assert_eq!(calc.display(), "7");
    }
}
