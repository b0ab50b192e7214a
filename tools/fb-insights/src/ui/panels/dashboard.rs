//! Dashboard panel renderer.
//!
//! ```text
//! 📊 Facebook Analytics Dashboard
//! Last updated: 2026-01-01 12:00:00 UTC
//! User: skye510
//! ┌ Total Reach ──┐┌ Engagement ───┐┌ Post Perf. ───┐┌ Audience ─────┐
//! │ 0             ││ 0%            ││ 0             ││ 0             │
//! │ ↑ 0%          ││ ↑ 0%          ││ ↑ 0%          ││ ↑ 0%          │
//! └───────────────┘└───────────────┘└───────────────┘└───────────────┘
//! ⓘ Number of unique users who saw any of your content
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::domain::{App, DashboardPanel, MetricTile, Page};
use crate::ui::widgets::controls::{caption, heading};

pub fn render(frame: &mut Frame, area: Rect, panel: &DashboardPanel, app: &App, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(2), // Captions
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Metric tiles
            Constraint::Length(3), // Tooltip
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(heading(Page::Dashboard)), chunks[0]);

    let captions = vec![
        caption(format!(
            "Last updated: {} UTC",
            app.last_updated().format("%Y-%m-%d %H:%M:%S")
        )),
        caption(format!("User: {}", app.config().user)),
    ];
    frame.render_widget(Paragraph::new(captions), chunks[1]);

    let tile_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[3]);

    for (idx, tile) in panel.tiles().iter().enumerate() {
        let highlighted = focused && idx == panel.focused_index();
        render_tile(frame, tile_areas[idx], tile, highlighted);
    }

    let tooltip = panel.focused_tile();
    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("ⓘ {}: ", tooltip.label),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(tooltip.help, Style::default().fg(Color::DarkGray)),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(help, chunks[4]);
}

fn render_tile(frame: &mut Frame, area: Rect, tile: &MetricTile, highlighted: bool) {
    let border = if highlighted {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let text = vec![
        Line::from(Span::styled(
            tile.value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("↑ {}", tile.delta),
            Style::default().fg(Color::Green),
        )),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(format!(" {} ", tile.label))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);
}
