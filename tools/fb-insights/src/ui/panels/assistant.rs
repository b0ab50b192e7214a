//! AI assistant panel renderer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{
    greeting, App, AssistantAction, AssistantControl, AssistantPanel, Page, QUESTION_PROMPT,
};
use crate::ui::widgets::controls::{button, heading, info_box, text_input};

pub fn render(frame: &mut Frame, area: Rect, panel: &AssistantPanel, app: &App, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Question
            Constraint::Length(3), // Buttons
            Constraint::Length(3), // Response
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(heading(Page::AiAssistant)), chunks[0]);
    frame.render_widget(Paragraph::new(greeting(&app.config().user)), chunks[1]);

    let question_focused = focused && panel.focus() == AssistantControl::Question;
    text_input(
        frame,
        chunks[2],
        QUESTION_PROMPT,
        panel.question(),
        question_focused,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[3]);
    for (idx, action) in AssistantAction::ALL.into_iter().enumerate() {
        let is_focused = focused && panel.focus() == AssistantControl::Button(action);
        frame.render_widget(
            button(format!("{} {}", action.icon(), action.label()), is_focused),
            columns[idx],
        );
    }

    if let Some(message) = panel.response() {
        frame.render_widget(info_box(message), chunks[4]);
    }
}
