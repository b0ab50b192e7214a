//! Application state management.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::branding::LogoStatus;
use crate::config::{DashboardConfig, SidebarState};

use super::{Page, PanelState};

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Normal interaction with the sidebar and panels.
    #[default]
    Browsing,
    /// Help overlay.
    Help,
    /// Quitting.
    Quit,
}

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Sidebar navigation: arrows and hotkeys change the page.
    #[default]
    Navigation,
    /// Controls of the active panel.
    Panel,
}

/// Main application model.
pub struct App {
    /// Current application state.
    pub state: AppState,
    /// Where key presses go.
    pub focus: Focus,
    /// Whether the sidebar is drawn.
    pub sidebar_visible: bool,
    /// Branding logo status.
    pub logo: LogoStatus,
    panel: PanelState,
    config: DashboardConfig,
    last_updated: DateTime<Utc>,
}

impl App {
    /// Create a new application instance on the dashboard page.
    pub fn new(config: DashboardConfig) -> Self {
        let logo = if config.fetch_logo {
            LogoStatus::Pending
        } else {
            LogoStatus::Disabled
        };

        Self {
            state: AppState::Browsing,
            focus: Focus::Navigation,
            sidebar_visible: config.sidebar == SidebarState::Expanded,
            logo,
            panel: PanelState::default(),
            config,
            last_updated: Utc::now(),
        }
    }

    /// Start on a different page.
    pub fn with_page(mut self, page: Page) -> Self {
        self.navigate(page);
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Current navigation selection.
    pub fn page(&self) -> Page {
        self.panel.page()
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut PanelState {
        &mut self.panel
    }

    /// Time of the latest render cycle.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Select a page. A different page starts from fresh panel state.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page() {
            return;
        }
        info!(from = %self.page(), to = %page, "navigation");
        self.panel = PanelState::for_page(page);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state = AppState::Quit;
            return;
        }

        match self.state {
            AppState::Browsing => {
                self.last_updated = Utc::now();
                match self.focus {
                    Focus::Navigation => self.handle_navigation_key(key),
                    Focus::Panel => self.handle_panel_key(key),
                }
            }
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Browsing;
            }
            AppState::Quit => {}
        }
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.state = AppState::Quit,
            KeyCode::Char('?') => self.state = AppState::Help,
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.sidebar_visible = !self.sidebar_visible;
                debug!(visible = self.sidebar_visible, "sidebar toggled");
            }
            KeyCode::Up | KeyCode::Char('k') => self.navigate(self.page().prev()),
            KeyCode::Down | KeyCode::Char('j') => self.navigate(self.page().next()),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right => self.focus = Focus::Panel,
            KeyCode::Char(c) => {
                if let Some(page) = Page::from_hotkey(c) {
                    self.navigate(page);
                }
            }
            _ => {}
        }
    }

    fn handle_panel_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.focus = Focus::Navigation;
            return;
        }
        if !self.panel.handle_key(key) && key.code == KeyCode::Char('?') {
            self.state = AppState::Help;
        }
    }

    pub fn set_logo(&mut self, logo: LogoStatus) {
        self.logo = logo;
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssistantAction, AssistantControl};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(DashboardConfig::default())
    }

    #[test]
    fn test_starts_on_dashboard_with_navigation_focus() {
        let app = app();
        assert_eq!(app.page(), Page::Dashboard);
        assert_eq!(app.focus, Focus::Navigation);
        assert!(app.sidebar_visible);
        assert_eq!(app.logo, LogoStatus::Pending);
    }

    #[test]
    fn test_hotkeys_select_pages() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.page(), Page::ContentGenerator);
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.page(), Page::ContentGenerator);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.page(), Page::PerformanceInsights);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.page(), Page::Dashboard);
    }

    #[test]
    fn test_navigation_discards_panel_inputs() {
        let mut app = app().with_page(Page::AiAssistant);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('x')));
        match app.panel() {
            PanelState::Assistant(panel) => assert_eq!(panel.question().value(), "x"),
            other => panic!("unexpected panel: {:?}", other),
        }

        app.handle_key(key(KeyCode::Esc));
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        match app.panel() {
            PanelState::Assistant(panel) => assert!(panel.question().is_empty()),
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_reselecting_same_page_keeps_inputs() {
        let mut app = app().with_page(Page::AiAssistant);
        if let PanelState::Assistant(panel) = app.panel_mut() {
            panel.press(AssistantAction::AnalyzeTrends);
        }
        app.navigate(Page::AiAssistant);
        match app.panel() {
            PanelState::Assistant(panel) => {
                assert_eq!(panel.pressed(), Some(AssistantAction::AnalyzeTrends))
            }
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_panel_focus_routes_keys_to_panel() {
        let mut app = app().with_page(Page::AiAssistant);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Panel);
        // digits are typed into the question, not treated as hotkeys
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.page(), Page::AiAssistant);
        app.handle_key(key(KeyCode::Tab));
        match app.panel() {
            PanelState::Assistant(panel) => assert_eq!(
                panel.focus(),
                AssistantControl::Button(AssistantAction::AnalyzeTrends)
            ),
            other => panic!("unexpected panel: {:?}", other),
        }
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Help);
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.state, AppState::Browsing);
    }

    #[test]
    fn test_help_from_panel_when_key_unused() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Help);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = self::app().with_page(Page::ContentGenerator);
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        assert!(!app.sidebar_visible);
        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.sidebar_visible);
    }

    #[test]
    fn test_disabled_logo_when_fetch_off() {
        let config = DashboardConfig {
            fetch_logo: false,
            ..DashboardConfig::default()
        };
        assert_eq!(App::new(config).logo, LogoStatus::Disabled);
    }
}
