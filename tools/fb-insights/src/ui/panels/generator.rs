//! Content generator panel renderer.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::domain::{
    GeneratorControl, GeneratorPanel, Page, CONTENT_TYPE_PROMPT, GENERATE_LABEL, TONE_PROMPT,
    TOPIC_PROMPT,
};
use crate::ui::widgets::controls::{
    button, code_block, heading, info_box, select_box, select_slider, text_input,
};

pub fn render(frame: &mut Frame, area: Rect, panel: &GeneratorPanel, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Content type
            Constraint::Length(3), // Topic
            Constraint::Length(3), // Tone
            Constraint::Length(3), // Generate button
            Constraint::Length(3), // Notice
            Constraint::Length(5), // Sample output
            Constraint::Min(0),
        ])
        .split(area);

    let is = |control: GeneratorControl| focused && panel.focus() == control;

    frame.render_widget(Paragraph::new(heading(Page::ContentGenerator)), chunks[0]);
    frame.render_widget(
        Paragraph::new(select_box(
            CONTENT_TYPE_PROMPT,
            panel.content_type(),
            is(GeneratorControl::ContentType),
        )),
        chunks[1],
    );
    text_input(
        frame,
        chunks[2],
        TOPIC_PROMPT,
        panel.topic(),
        is(GeneratorControl::Topic),
    );
    frame.render_widget(
        Paragraph::new(select_slider(
            TONE_PROMPT,
            panel.tone(),
            is(GeneratorControl::Tone),
        )),
        chunks[3],
    );

    let [button_area, _] = Layout::horizontal([Constraint::Length(24), Constraint::Min(0)])
        .areas(chunks[4]);
    frame.render_widget(
        button(GENERATE_LABEL.to_string(), is(GeneratorControl::Generate)),
        button_area,
    );

    if let Some(output) = panel.output() {
        frame.render_widget(info_box(output.notice), chunks[5]);
        frame.render_widget(code_block(output.body), chunks[6]);
    }
}
