//! View router: the active panel and its ephemeral state.
//!
//! The variant *is* the navigation selection, so exactly one panel exists at
//! any time and its inputs are dropped when another page is selected.

use crossterm::event::KeyEvent;

use super::{AssistantPanel, DashboardPanel, GeneratorPanel, InsightsPanel, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Dashboard(DashboardPanel),
    Assistant(AssistantPanel),
    Generator(GeneratorPanel),
    Insights(InsightsPanel),
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState::for_page(Page::default())
    }
}

impl PanelState {
    /// Fresh state for a page.
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Dashboard => PanelState::Dashboard(DashboardPanel::default()),
            Page::AiAssistant => PanelState::Assistant(AssistantPanel::default()),
            Page::ContentGenerator => PanelState::Generator(GeneratorPanel::default()),
            Page::PerformanceInsights => PanelState::Insights(InsightsPanel::default()),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PanelState::Dashboard(_) => Page::Dashboard,
            PanelState::Assistant(_) => Page::AiAssistant,
            PanelState::Generator(_) => Page::ContentGenerator,
            PanelState::Insights(_) => Page::PerformanceInsights,
        }
    }

    /// Forward a key to the active panel. Returns `true` if it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self {
            PanelState::Dashboard(panel) => panel.handle_key(key),
            PanelState::Assistant(panel) => panel.handle_key(key),
            PanelState::Generator(panel) => panel.handle_key(key),
            PanelState::Insights(panel) => panel.handle_key(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_page_round_trips() {
        for page in Page::ALL {
            assert_eq!(PanelState::for_page(page).page(), page);
        }
    }

    #[test]
    fn test_default_is_dashboard_panel() {
        assert!(matches!(PanelState::default(), PanelState::Dashboard(_)));
    }
}
