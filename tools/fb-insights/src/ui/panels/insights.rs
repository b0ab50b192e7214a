//! Performance insights panel renderer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::domain::{InsightsControl, InsightsPanel, InsightsTab, Page, PERIOD_PROMPT};
use crate::ui::widgets::controls::{heading, info_box, select_box};

pub fn render(frame: &mut Frame, area: Rect, panel: &InsightsPanel, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Period
            Constraint::Length(3), // Tabs
            Constraint::Length(2), // Subheader
            Constraint::Length(3), // Info
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(heading(Page::PerformanceInsights)), chunks[0]);
    frame.render_widget(
        Paragraph::new(select_box(
            PERIOD_PROMPT,
            panel.period(),
            focused && panel.focus() == InsightsControl::Period,
        )),
        chunks[1],
    );

    let tabs_focused = focused && panel.focus() == InsightsControl::Tabs;
    let tabs = Tabs::new(InsightsTab::ALL.iter().map(|tab| tab.title()))
        .select(panel.tab_index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(if tabs_focused {
                    Color::Yellow
                } else {
                    Color::DarkGray
                })),
        );
    frame.render_widget(tabs, chunks[2]);

    let section = panel.section();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            section.subheader,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        chunks[3],
    );
    frame.render_widget(info_box(section.info), chunks[4]);
}
