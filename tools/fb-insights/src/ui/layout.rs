//! Main layout orchestration.
//!
//! Renders the overall dashboard structure:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  🤖 Skye's AI-Enhanced Analytics       ◈ Meta AI Logo   [?]Help │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  NAVIGATION            │  ACTIVE PAGE                           │
//! │  ...                   │  ...                                   │
//! ├────────────────────────┤                                        │
//! │  SESSION               │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! │  [1-4] Page   [↑↓] Navigate   [Enter] Focus panel   [Q] Quit    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::config::PageLayout;
use crate::domain::{App, AppState, Focus};

use super::{left_panel, right_panel, widgets};

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 28;

/// Maximum main panel width for the centered layout.
const CENTERED_MAX_WIDTH: u16 = 100;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main vertical layout: header, body, footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    render_body(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2], app);

    if app.state == AppState::Help {
        widgets::render_help_overlay(frame, &app.config().page_title);
    }
}

/// Render the header bar: title, logo slot, hints.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let config = app.config();

    let mut left = vec![Span::styled(
        format!(" {} ", config.window_title()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.logo.is_visible() {
        left.push(Span::styled(
            format!(" ◈ {} ", config.logo_alt),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hints = vec![
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
    ];

    // Calculate spacing
    let left_len: usize = left.iter().map(|s| s.width()).sum();
    let hints_len: usize = hints.iter().map(|s| s.width()).sum();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((left_len + hints_len) as u16);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Render the main body (sidebar + active page).
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let main_area = if app.sidebar_visible {
        let [sidebar, main] = Layout::horizontal([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(40),
        ])
        .areas(area);
        left_panel::render(frame, sidebar, app);
        main
    } else {
        area
    };

    let main_area = match app.config().layout {
        PageLayout::Wide => main_area,
        PageLayout::Centered => {
            let [centered] = Layout::horizontal([Constraint::Max(CENTERED_MAX_WIDTH)])
                .flex(Flex::Center)
                .areas(main_area);
            centered
        }
    };

    right_panel::render(frame, main_area, app);
}

/// Render the footer with keyboard shortcuts for the current focus.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let bindings: &[(&str, &str)] = match app.focus {
        Focus::Navigation => &[
            ("[1-4]", " Page  "),
            ("[↑↓]", " Navigate  "),
            ("[Enter]", " Focus panel  "),
            ("[S]", " Sidebar  "),
            ("[Q]", " Quit  "),
        ],
        Focus::Panel => &[
            ("[Tab]", " Next control  "),
            ("[←→]", " Change  "),
            ("[Enter]", " Press  "),
            ("[Esc]", " Back to navigation  "),
        ],
    };

    let keybinds: Vec<Span> = bindings
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(*label),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
