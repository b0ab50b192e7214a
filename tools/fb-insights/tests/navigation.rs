//! # Session Flow Tests
//!
//! Drives the app through key presses the way a user would and checks the
//! navigation selection, panel state lifetime and configuration loading.

mod common;

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fb_insights::domain::{AssistantAction, ContentType, Tone};
use fb_insights::{
    App, AppState, ConfigOverrides, DashboardConfig, Focus, Page, PageLayout, PanelState,
    SidebarState,
};

use common::{offline_app, press_all, render_to_string, type_text};

// =============================================================================
// NAVIGATION
// =============================================================================

#[test]
fn test_full_session_walkthrough() {
    let mut app = offline_app();
    assert_eq!(app.page(), Page::Dashboard);

    // Down through every page and back to the start
    for expected in [
        Page::AiAssistant,
        Page::ContentGenerator,
        Page::PerformanceInsights,
        Page::Dashboard,
    ] {
        press_all(&mut app, &[KeyCode::Down]);
        assert_eq!(app.page(), expected);
        assert_eq!(app.panel().page(), expected);
    }

    press_all(&mut app, &[KeyCode::Up]);
    assert_eq!(app.page(), Page::PerformanceInsights);

    press_all(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());
}

#[test]
fn test_arrows_move_controls_not_pages_while_panel_focused() {
    let mut app = offline_app().with_page(Page::ContentGenerator);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Down]);

    assert_eq!(app.focus, Focus::Panel);
    assert_eq!(app.page(), Page::ContentGenerator);

    press_all(&mut app, &[KeyCode::Esc, KeyCode::Down]);
    assert_eq!(app.focus, Focus::Navigation);
    assert_eq!(app.page(), Page::PerformanceInsights);
}

#[test]
fn test_hotkeys_typed_into_fields_do_not_navigate() {
    let mut app = offline_app().with_page(Page::AiAssistant);
    press_all(&mut app, &[KeyCode::Enter]);
    type_text(&mut app, "q1 vs q3 reach");

    assert_eq!(app.page(), Page::AiAssistant);
    assert_eq!(app.state, AppState::Browsing);
    match app.panel() {
        PanelState::Assistant(panel) => assert_eq!(panel.question().value(), "q1 vs q3 reach"),
        other => panic!("expected assistant panel, got {:?}", other.page()),
    }
}

#[test]
fn test_ctrl_c_quits_from_panel_focus() {
    let mut app = offline_app().with_page(Page::AiAssistant);
    press_all(&mut app, &[KeyCode::Enter]);
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

// =============================================================================
// PANEL STATE LIFETIME
// =============================================================================

#[test]
fn test_leaving_page_discards_generator_form() {
    let mut app = offline_app().with_page(Page::ContentGenerator);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Right, KeyCode::Tab]);
    type_text(&mut app, "launch");
    press_all(&mut app, &[KeyCode::Tab, KeyCode::Right, KeyCode::Tab, KeyCode::Enter]);

    match app.panel() {
        PanelState::Generator(panel) => {
            assert_eq!(panel.content_type().selected(), ContentType::Poll);
            assert_eq!(panel.topic().value(), "launch");
            assert_eq!(panel.tone().selected(), Tone::Casual);
            assert!(panel.output().is_some());
        }
        other => panic!("expected generator panel, got {:?}", other.page()),
    }

    press_all(&mut app, &[KeyCode::Esc, KeyCode::Char('1'), KeyCode::Char('3')]);
    match app.panel() {
        PanelState::Generator(panel) => {
            assert_eq!(panel.content_type().selected(), ContentType::Post);
            assert!(panel.topic().is_empty());
            assert_eq!(panel.tone().selected(), Tone::Professional);
            assert!(panel.output().is_none());
        }
        other => panic!("expected generator panel, got {:?}", other.page()),
    }
    assert!(!render_to_string(&app).contains("Sample Generated Post"));
}

#[test]
fn test_assistant_message_replaced_by_later_press() {
    let mut app = offline_app().with_page(Page::AiAssistant);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Tab, KeyCode::Enter]);
    press_all(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Enter]);

    match app.panel() {
        PanelState::Assistant(panel) => {
            assert_eq!(panel.pressed(), Some(AssistantAction::GenerateReport));
            assert_eq!(
                panel.response(),
                Some("Creating detailed report... (LLM will be connected later)")
            );
        }
        other => panic!("expected assistant panel, got {:?}", other.page()),
    }

    let screen = render_to_string(&app);
    assert!(screen.contains("Creating detailed report..."));
    assert!(!screen.contains("Analyzing your page trends..."));
}

#[test]
fn test_help_keeps_panel_state() {
    let mut app = offline_app().with_page(Page::AiAssistant);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Tab, KeyCode::Enter]);
    press_all(&mut app, &[KeyCode::Char('?')]);
    assert_eq!(app.state, AppState::Help);

    press_all(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.state, AppState::Browsing);
    match app.panel() {
        PanelState::Assistant(panel) => {
            assert_eq!(panel.pressed(), Some(AssistantAction::AnalyzeTrends))
        }
        other => panic!("expected assistant panel, got {:?}", other.page()),
    }
}

// =============================================================================
// STARTUP CONFIGURATION
// =============================================================================

#[test]
fn test_page_names_parse_for_startup() {
    assert_eq!("ai-assistant".parse::<Page>().ok(), Some(Page::AiAssistant));
    assert_eq!(
        "Performance Insights".parse::<Page>().ok(),
        Some(Page::PerformanceInsights)
    );
    assert!("settings".parse::<Page>().is_err());
}

#[test]
fn test_config_file_and_overrides_drive_the_app() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
page_title = "Team Analytics"
page_icon = ""
layout = "centered"
sidebar = "collapsed"
user = "from_file"
"#
    )
    .expect("write config");

    let overrides = ConfigOverrides {
        user: Some("from_cli".to_string()),
        no_logo: true,
        ..ConfigOverrides::default()
    };
    let config = DashboardConfig::load(Some(file.path()), &overrides).expect("valid config");

    assert_eq!(config.window_title(), "Team Analytics");
    assert_eq!(config.layout, PageLayout::Centered);
    assert_eq!(config.sidebar, SidebarState::Collapsed);
    assert_eq!(config.user, "from_cli");
    assert!(!config.fetch_logo);

    let app = App::new(config).with_page(Page::AiAssistant);
    assert!(!app.sidebar_visible);

    let screen = render_to_string(&app);
    assert!(screen.contains("Team Analytics"));
    assert!(screen.contains("Hello from_cli! How can I help you today?"));
    assert!(!screen.contains("NAVIGATION"));
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "theme = \"dark\"").expect("write config");

    let result = DashboardConfig::load(Some(file.path()), &ConfigOverrides::default());
    assert!(result.is_err());
}
