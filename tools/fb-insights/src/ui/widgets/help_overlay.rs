//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame, title: &str) {
    let popup_area = centered_rect(60, 80, frame.area());

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            format!("{} HELP", title.to_uppercase()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        section("Navigation (sidebar focus)"),
        key_line("  1-4      ", "Select page"),
        key_line("  ↑/↓      ", "Previous / next page"),
        key_line("  Enter    ", "Focus the panel"),
        key_line("  S        ", "Show / hide sidebar"),
        key_line("  Q, Esc   ", "Quit"),
        Line::raw(""),
        section("Panel focus"),
        key_line("  Tab/↑↓   ", "Move between controls"),
        key_line("  ←/→      ", "Change selection, switch tabs"),
        key_line("  Enter    ", "Press button"),
        key_line("  Esc      ", "Back to sidebar"),
        Line::raw(""),
        section("Anywhere"),
        key_line("  ?        ", "Toggle this help (except while typing)"),
        key_line("  Ctrl+C   ", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
