//! Paint: a cell canvas brushed with the mouse.

use std::collections::HashMap;

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::surface::ContentSurface;

const PALETTE: [Color; 7] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::White,
];

/// Width of one palette swatch plus its trailing gap.
const SWATCH_STRIDE: u16 = 3;
const CLEAR_LABEL: &str = "[Clear]";

pub struct PaintSurface {
    /// Painted cells, canvas-relative, each holding a palette index.
    strokes: HashMap<(u16, u16), usize>,
    selected: usize,
}

impl PaintSurface {
    pub fn new() -> Self {
        Self {
            strokes: HashMap::new(),
            selected: 0,
        }
    }

    fn clear_label_start() -> u16 {
        PALETTE.len() as u16 * SWATCH_STRIDE + 1
    }

    fn toolbar_click(&mut self, x: u16) {
        let swatch = (x / SWATCH_STRIDE) as usize;
        if swatch < PALETTE.len() && x % SWATCH_STRIDE < 2 {
            self.selected = swatch;
            return;
        }
        let clear_start = Self::clear_label_start();
        if x >= clear_start && x < clear_start + CLEAR_LABEL.len() as u16 {
            self.strokes.clear();
        }
    }
}

impl Default for PaintSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSurface for PaintSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [toolbar, canvas] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let mut spans: Vec<Span> = Vec::new();
        for (i, color) in PALETTE.iter().enumerate() {
            let mut style = Style::new().fg(*color);
            if i == self.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled("██", style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            CLEAR_LABEL,
            Style::new().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), toolbar);

        let buf = frame.buffer_mut();
        for (&(x, y), &color) in &self.strokes {
            let cx = canvas.x + x;
            let cy = canvas.y + y;
            if canvas.contains((cx, cy).into()) {
                if let Some(cell) = buf.cell_mut((cx, cy)) {
                    cell.set_bg(PALETTE[color]);
                    cell.set_char(' ');
                }
            }
        }
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, x: u16, y: u16) {
        match kind {
            MouseEventKind::Down(MouseButton::Left) if y == 0 => self.toolbar_click(x),
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
                if y > 0 =>
            {
                self.strokes.insert((x, y - 1), self.selected);
            }
            _ => {}
        }
    }
}
