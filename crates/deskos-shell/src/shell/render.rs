//! The draw pass: desktop icons, windows back-to-front, start menu overlay,
//! toasts, and the taskbar. Geometry comes from [`chrome`], so rendering and
//! hit-testing always agree.

use ratatui::layout::Rect as TuiRect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use deskos_common::toast::ToastLevel;
use deskos_common::types::Rect;
use deskos_wm::taskbar;

use super::chrome;
use super::core::DesktopShell;

pub(super) fn draw(shell: &mut DesktopShell, frame: &mut Frame) {
    let screen = frame.area();
    shell.screen = (screen.width, screen.height);

    let theme = &shell.config.theme;
    let background = theme_color(&theme.background, Color::Rgb(26, 35, 48));
    let text = theme_color(&theme.text, Color::Rgb(226, 232, 240));
    let border = theme_color(&theme.window_border, Color::Rgb(74, 85, 104));
    let focused_border = theme_color(&theme.focused_border, Color::Rgb(59, 130, 246));

    frame.render_widget(Block::new().style(Style::new().bg(background).fg(text)), screen);

    let desktop = chrome::desktop_area(screen.width, screen.height);
    draw_icons(shell, frame, desktop);
    draw_windows(shell, frame, desktop, border, focused_border);
    draw_toasts(shell, frame, desktop);
    if shell.start_menu_open {
        draw_start_menu(shell, frame, desktop);
    }
    draw_taskbar(shell, frame, screen);
}

fn draw_icons(shell: &DesktopShell, frame: &mut Frame, desktop: Rect) {
    let rows = shell.config.desktop.icon_rows;
    for (i, manifest) in shell.registry.entries().iter().enumerate() {
        let Some(area) = clip(chrome::icon_rect(i, rows), desktop) else {
            continue;
        };
        let accent = manifest.accent;
        let lines = vec![
            Line::styled(
                manifest.icon.to_string(),
                Style::new().fg(Color::Rgb(accent.r, accent.g, accent.b)),
            )
            .centered(),
            Line::raw(manifest.name.clone()).centered(),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn draw_windows(
    shell: &mut DesktopShell,
    frame: &mut Frame,
    desktop: Rect,
    border: Color,
    focused_border: Color,
) {
    let topmost = shell.wm.topmost().map(|w| w.id);
    let order: Vec<_> = shell
        .wm
        .paint_order()
        .iter()
        .filter(|w| !w.minimized)
        .map(|w| w.id)
        .collect();

    for id in order {
        let Some(record) = shell.wm.window(id) else {
            continue;
        };
        let frame_rect = chrome::window_frame(record, desktop);
        let Some(outer) = clip(frame_rect, desktop) else {
            continue;
        };

        let border_style = if topmost == Some(id) {
            Style::new().fg(focused_border)
        } else {
            Style::new().fg(border)
        };
        let accent = record.accent;
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", record.icon),
                Style::new().fg(Color::Rgb(accent.r, accent.g, accent.b)),
            ),
            Span::raw(record.title.clone()),
            Span::raw(" "),
        ]);
        let controls = if record.maximized {
            "[-][❐][✕]"
        } else {
            "[-][□][✕]"
        };

        frame.render_widget(Clear, outer);
        frame.render_widget(
            Block::bordered()
                .border_style(border_style)
                .title(title)
                .title_top(Line::raw(controls).right_aligned()),
            outer,
        );

        if let Some(inner) = clip(chrome::content_rect(frame_rect), desktop) {
            if let Some(surface) = shell.contents.get_mut(id) {
                surface.render(frame, inner);
            }
        }
    }
}

fn draw_toasts(shell: &mut DesktopShell, frame: &mut Frame, desktop: Rect) {
    let bottom = desktop.bottom();
    let toasts: Vec<(ToastLevel, String)> = shell
        .toasts
        .visible()
        .iter()
        .map(|t| (t.level, t.message.clone()))
        .collect();
    for (i, (level, message)) in toasts.iter().enumerate() {
        let width = message.chars().count() as u16 + 2;
        let rect = Rect::new(
            desktop.right() - width as i32 - 1,
            bottom - 1 - i as i32,
            width,
            1,
        );
        let Some(area) = clip(rect, desktop) else {
            continue;
        };
        let style = match level {
            ToastLevel::Info => Style::new().fg(Color::Black).bg(Color::Gray),
            ToastLevel::Error => Style::new().fg(Color::White).bg(Color::Red),
        };
        frame.render_widget(
            Paragraph::new(format!(" {message} ")).style(style),
            area,
        );
    }
}

fn draw_start_menu(shell: &DesktopShell, frame: &mut Frame, desktop: Rect) {
    let menu = chrome::start_menu_rect(desktop, shell.registry.len());
    let Some(area) = clip(menu, desktop) else {
        return;
    };
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = shell
        .registry
        .entries()
        .iter()
        .map(|m| {
            let accent = m.accent;
            Line::from(vec![
                Span::styled(
                    format!(" {} ", m.icon),
                    Style::new().fg(Color::Rgb(accent.r, accent.g, accent.b)),
                ),
                Span::raw(m.name.clone()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Pinned ")),
        area,
    );
}

fn draw_taskbar(shell: &DesktopShell, frame: &mut Frame, screen: TuiRect) {
    let Some(area) = clip(
        chrome::taskbar_rect(screen.width, screen.height),
        Rect::new(0, 0, screen.width, screen.height),
    ) else {
        return;
    };
    let taskbar_bg = theme_color(&shell.config.theme.taskbar, Color::Rgb(16, 22, 31));
    frame.render_widget(Block::new().style(Style::new().bg(taskbar_bg)), area);

    let start_style = if shell.start_menu_open {
        Style::new().add_modifier(Modifier::REVERSED)
    } else {
        Style::new()
    };
    let mut spans = vec![
        Span::styled(chrome::START_LABEL, start_style),
        Span::raw(" "),
    ];
    for item in taskbar::items(&shell.wm, &shell.registry) {
        let manifest = shell.registry.get(&item.app);
        let icon = manifest.map(|m| m.icon).unwrap_or('?');
        let mut style = Style::new();
        if item.active {
            style = style.add_modifier(Modifier::REVERSED);
        } else if item.running {
            style = style.add_modifier(Modifier::UNDERLINED);
        } else {
            style = style.fg(Color::DarkGray);
        }
        spans.push(Span::styled(format!("[{icon}]"), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    // Clock on the right.
    let now = chrono::Local::now();
    let mut clock = now.format(&shell.config.taskbar.clock_format).to_string();
    if shell.config.taskbar.show_date {
        clock.push_str(&now.format("  %Y-%m-%d").to_string());
    }
    clock.push(' ');
    let width = clock.chars().count() as u16;
    if width < area.width {
        let clock_area = TuiRect::new(area.right() - width, area.y, width, 1);
        frame.render_widget(Paragraph::new(clock), clock_area);
    }
}

/// Convert a desktop-space rect to a drawable one, clipped to `bounds`.
/// Windows dragged past an edge keep their real coordinates; only the
/// visible part renders.
fn clip(rect: Rect, bounds: Rect) -> Option<TuiRect> {
    let x1 = rect.x.max(bounds.x);
    let y1 = rect.y.max(bounds.y);
    let x2 = rect.right().min(bounds.right());
    let y2 = rect.bottom().min(bounds.bottom());
    if x1 >= x2 || y1 >= y2 {
        return None;
    }
    Some(TuiRect::new(
        x1 as u16,
        y1 as u16,
        (x2 - x1) as u16,
        (y2 - y1) as u16,
    ))
}

fn theme_color(hex: &str, fallback: Color) -> Color {
    deskos_common::Color::from_hex(hex)
        .map(|c| Color::Rgb(c.r, c.g, c.b))
        .unwrap_or(fallback)
}
