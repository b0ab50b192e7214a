//! Shared fixtures for the dashboard integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fb_insights::{ui, App, DashboardConfig};
use ratatui::{backend::TestBackend, Terminal};

pub const WIDTH: u16 = 140;
pub const HEIGHT: u16 = 45;

/// Configuration that never touches the network.
pub fn offline_config() -> DashboardConfig {
    DashboardConfig {
        fetch_logo: false,
        ..DashboardConfig::default()
    }
}

pub fn offline_app() -> App {
    App::new(offline_config())
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed a sequence of key presses to the app.
pub fn press_all(app: &mut App, codes: &[KeyCode]) {
    for &code in codes {
        app.handle_key(key(code));
    }
}

/// Type a string into whichever text field has focus.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Render one frame and return the cell symbols, row by row.
pub fn render_grid(app: &App) -> Vec<Vec<String>> {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("test backend");
    terminal
        .draw(|frame| ui::render(frame, app))
        .expect("draw frame");

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

/// Render one frame and return the screen as text, one line per row.
pub fn render_to_string(app: &App) -> String {
    let mut screen = String::new();
    for row in render_grid(app) {
        screen.extend(row);
        screen.push('\n');
    }
    screen
}

/// Position `(row, column)` of the first cell of `needle`, one cell per char.
pub fn locate(grid: &[Vec<String>], needle: &str) -> Option<(usize, usize)> {
    let wanted: Vec<String> = needle.chars().map(String::from).collect();
    grid.iter().enumerate().find_map(|(y, row)| {
        row.windows(wanted.len())
            .position(|window| window == wanted.as_slice())
            .map(|x| (y, x))
    })
}

/// Text of `row` from `column` onwards.
pub fn row_from(grid: &[Vec<String>], row: usize, column: usize) -> String {
    grid[row][column..].concat()
}

/// The panel content that belongs to exactly one page.
pub const PAGE_MARKERS: [(&str, &str); 4] = [
    ("dashboard", "Facebook Analytics Dashboard"),
    ("assistant", "AI Social Media Assistant"),
    ("generator", "AI Content Generator"),
    ("insights", "AI Performance Insights"),
];
