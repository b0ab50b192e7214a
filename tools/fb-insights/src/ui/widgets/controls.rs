//! Form controls: text inputs, selectors, buttons and message boxes.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::domain::{Choice, Page, Selector, TextField};

/// Header blue used for panel headings.
pub const BRAND_BLUE: Color = Color::Rgb(0x18, 0x77, 0xf2);

fn prompt_line(prompt: &str, focused: bool) -> Line<'static> {
    let (marker, style) = if focused {
        (
            "▸ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().add_modifier(Modifier::BOLD))
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Yellow)),
        Span::styled(prompt.to_string(), style),
    ])
}

/// Centered page heading with icon.
pub fn heading(page: Page) -> Line<'static> {
    Line::from(Span::styled(
        format!("{} {}", page.icon(), page.heading()),
        Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
    ))
    .centered()
}

/// Small dimmed caption line.
pub fn caption(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// Prompt line above a single-line text area.
///
/// The field scrolls horizontally to keep the cursor in view. The cursor is
/// only drawn while the control has focus.
pub fn text_input(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    field: &TextField,
    focused: bool,
) {
    let [prompt_area, input_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    frame.render_widget(Paragraph::new(prompt_line(prompt, focused)), prompt_area);

    let mut input = field.textarea().clone();
    input.set_block(
        Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(if focused {
                Color::Yellow
            } else {
                Color::DarkGray
            }))
            .padding(Padding::left(1)),
    );
    input.set_cursor_line_style(Style::default());
    input.set_placeholder_style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    );
    input.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });

    let [_, input_area] =
        Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(input_row);
    frame.render_widget(&input, input_area);
}

/// Prompt plus the current option of a drop-down selector.
pub fn select_box<T: Choice>(
    prompt: &str,
    selector: Selector<T>,
    focused: bool,
) -> Vec<Line<'static>> {
    let arrows = Style::default().fg(if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    });
    vec![
        prompt_line(prompt, focused),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("◀ ", arrows),
            Span::styled(
                selector.selected().label(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", arrows),
        ]),
    ]
}

/// Prompt plus every option of a slider, the selected one highlighted.
pub fn select_slider<T: Choice>(
    prompt: &str,
    selector: Selector<T>,
    focused: bool,
) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (idx, option) in T::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::DarkGray)));
        }
        let style = if idx == selector.index() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(option.label(), style));
    }
    vec![prompt_line(prompt, focused), Line::from(spans)]
}

/// Bordered button.
pub fn button(label: String, focused: bool) -> Paragraph<'static> {
    let (text_style, border_style) = if focused {
        (
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Yellow),
        )
    } else {
        (Style::default(), Style::default().fg(Color::DarkGray))
    };
    Paragraph::new(Line::from(Span::styled(label, text_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}

/// Informational message box.
pub fn info_box(text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled("ℹ ", Style::default().fg(Color::Cyan)),
        Span::styled(text.to_string(), Style::default().fg(Color::Cyan)),
    ]))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    )
}

/// Monospace block for generated content.
pub fn code_block(body: &str) -> Paragraph<'static> {
    let lines: Vec<Line> = body
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Green))))
        .collect();
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
}
