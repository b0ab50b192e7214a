//! Left panel: navigation list + session info.
//!
//! ```text
//! ┌──────────────────────┐
//! │ NAVIGATION           │
//! │  [1] Dashboard       │
//! │  [2] AI Assistant    │
//! │  ...                 │
//! ├──────────────────────┤
//! │ SESSION              │
//! │  User: skye510       │
//! │  Mode: NAVIGATE      │
//! └──────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::branding::LogoStatus;
use crate::domain::{App, Focus, Page};

/// Render the left panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Navigation list
            Constraint::Length(6), // Session info
        ])
        .split(area);

    render_navigation(frame, chunks[0], app);
    render_session(frame, chunks[1], app);
}

/// Render the page list.
fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = Page::ALL
        .iter()
        .map(|&page| {
            let is_selected = page == app.page();

            let marker = if is_selected { "●" } else { "○" };
            let marker_color = if is_selected {
                Color::Green
            } else {
                Color::DarkGray
            };

            let line_style = if is_selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let spans = vec![
                Span::styled(
                    format!("[{}] ", page.hotkey()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
                Span::raw(page.label()),
            ];

            ListItem::new(Line::from(spans)).style(line_style)
        })
        .collect();

    let border = if app.focus == Focus::Navigation {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let list = List::new(items).block(
        Block::default()
            .title(" NAVIGATION ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(list, area);
}

/// Render session info: user, input mode, logo state.
fn render_session(frame: &mut Frame, area: Rect, app: &App) {
    let (mode, mode_color) = match app.focus {
        Focus::Navigation => ("NAVIGATE", Color::Cyan),
        Focus::Panel => ("EDIT", Color::Yellow),
    };

    let (logo, logo_color) = match &app.logo {
        LogoStatus::Pending => ("loading", Color::DarkGray),
        LogoStatus::Loaded(_) => ("loaded", Color::Green),
        LogoStatus::Unavailable(_) => ("unavailable", Color::Red),
        LogoStatus::Disabled => ("off", Color::DarkGray),
    };

    let text = vec![
        Line::from(vec![
            Span::raw("User: "),
            Span::styled(app.config().user.clone(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::raw("Mode: "),
            Span::styled(mode, Style::default().fg(mode_color)),
        ]),
        Line::from(vec![
            Span::raw("Logo: "),
            Span::styled(logo, Style::default().fg(logo_color)),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" SESSION ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
