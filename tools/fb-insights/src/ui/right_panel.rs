//! Right panel: the active page.
//!
//! Draws the container block and dispatches to the page-specific renderer.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::domain::{App, Focus};

use super::panels;

/// Render the right panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let page = app.page();

    let border = if app.focus == Focus::Panel {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} ", page.label().to_uppercase()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    // Calculate inner area for content
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    panels::render(frame, inner_area, app);
}
