//! Video editor mockup: media pool, preview, and track strips. Display only.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::surface::ContentSurface;

pub struct VideoSurface;

impl VideoSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VideoSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSurface for VideoSurface {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [top, timeline] =
            Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
        let [pool, preview] =
            Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]).areas(top);

        frame.render_widget(
            Paragraph::new(vec![
                Line::raw(""),
                Line::raw(" ▣ clip_01  ▣ clip_02"),
                Line::raw(" ♪ audio_01"),
            ])
            .block(
                Block::new()
                    .borders(Borders::RIGHT | Borders::BOTTOM)
                    .title("Media Pool"),
            )
            .style(Style::new().fg(Color::DarkGray)),
            pool,
        );

        frame.render_widget(
            Paragraph::new(vec![
                Line::raw(""),
                Line::styled("▶", Style::new().fg(Color::Gray)).centered(),
                Line::raw(""),
                Line::styled("00:00:00:00", Style::new().fg(Color::DarkGray)).centered(),
            ])
            .block(Block::new().borders(Borders::BOTTOM)),
            preview,
        );

        frame.render_widget(
            Paragraph::new(vec![
                Line::raw(" ✂ ⿻ ⎘   ↶ ↷"),
                Line::raw(""),
                Line::styled(
                    " ▇▇▇▇▇▇▇▇▇▇ Video Track 1",
                    Style::new().fg(Color::LightBlue),
                ),
                Line::styled(
                    "     ▇▇▇▇▇▇▇▇▇▇▇▇▇▇▇ Audio Track 1",
                    Style::new().fg(Color::LightGreen),
                ),
            ]),
            timeline,
        );
    }
}
