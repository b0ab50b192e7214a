//! Per-page panel renderers.
//!
//! Each page has its own renderer file; [`render`] picks exactly one.

mod assistant;
mod dashboard;
mod generator;
mod insights;

use ratatui::{layout::Rect, Frame};

use crate::domain::{App, Focus, PanelState};

/// Dispatch to the renderer of the active panel.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Panel;
    match app.panel() {
        PanelState::Dashboard(panel) => dashboard::render(frame, area, panel, app, focused),
        PanelState::Assistant(panel) => assistant::render(frame, area, panel, app, focused),
        PanelState::Generator(panel) => generator::render(frame, area, panel, focused),
        PanelState::Insights(panel) => insights::render(frame, area, panel, focused),
    }
}
