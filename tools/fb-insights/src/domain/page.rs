//! Navigation pages.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The navigation selection: exactly one page is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Metric tiles overview.
    #[default]
    Dashboard,
    /// Stubbed assistant with canned responses.
    AiAssistant,
    /// Content generator form with a fixed sample output.
    ContentGenerator,
    /// Period selector and placeholder insight tabs.
    PerformanceInsights,
}

impl Page {
    /// All pages in sidebar order.
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::AiAssistant,
        Page::ContentGenerator,
        Page::PerformanceInsights,
    ];

    /// Position in the sidebar (1-4).
    pub fn number(&self) -> u8 {
        match self {
            Page::Dashboard => 1,
            Page::AiAssistant => 2,
            Page::ContentGenerator => 3,
            Page::PerformanceInsights => 4,
        }
    }

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::AiAssistant => "AI Assistant",
            Page::ContentGenerator => "Content Generator",
            Page::PerformanceInsights => "Performance Insights",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "📊",
            Page::AiAssistant => "🤖",
            // single code point: ✍️ needs U+FE0F, drawn 1 or 2 columns wide by terminal
            Page::ContentGenerator => "📝",
            Page::PerformanceInsights => "🎯",
        }
    }

    /// Panel heading (without the icon).
    pub fn heading(&self) -> &'static str {
        match self {
            Page::Dashboard => "Facebook Analytics Dashboard",
            Page::AiAssistant => "AI Social Media Assistant",
            Page::ContentGenerator => "AI Content Generator",
            Page::PerformanceInsights => "AI Performance Insights",
        }
    }

    /// Keyboard shortcut for this page.
    pub fn hotkey(&self) -> char {
        (b'0' + self.number()) as char
    }

    /// Get page by hotkey.
    pub fn from_hotkey(key: char) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.hotkey() == key)
    }

    /// Next page in sidebar order, wrapping around.
    pub fn next(&self) -> Page {
        Page::ALL[self.number() as usize % Page::ALL.len()]
    }

    /// Previous page in sidebar order, wrapping around.
    pub fn prev(&self) -> Page {
        let idx = self.number() as usize - 1;
        Page::ALL[(idx + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text that names none of the four pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page '{0}' (expected one of: dashboard, ai-assistant, content-generator, performance-insights)")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    /// Accepts the sidebar label or its kebab-case form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Page::ALL
            .into_iter()
            .find(|page| page.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_hotkey(page.hotkey()), Some(page));
        }
        assert_eq!(Page::from_hotkey('5'), None);
        assert_eq!(Page::from_hotkey('0'), None);
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Page::Dashboard.next(), Page::AiAssistant);
        assert_eq!(Page::PerformanceInsights.next(), Page::Dashboard);
        assert_eq!(Page::Dashboard.prev(), Page::PerformanceInsights);
        assert_eq!(Page::ContentGenerator.prev(), Page::AiAssistant);
    }

    #[test]
    fn test_parse_labels_and_kebab_case() {
        assert_eq!("Dashboard".parse::<Page>(), Ok(Page::Dashboard));
        assert_eq!("AI Assistant".parse::<Page>(), Ok(Page::AiAssistant));
        assert_eq!("content-generator".parse::<Page>(), Ok(Page::ContentGenerator));
        assert_eq!(
            " performance_insights ".parse::<Page>(),
            Ok(Page::PerformanceInsights)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "settings".parse::<Page>().unwrap_err();
        assert_eq!(err, UnknownPage("settings".to_string()));
        assert!(err.to_string().contains("settings"));
    }

    #[test]
    fn test_icons_are_single_code_points() {
        for page in Page::ALL {
            assert_eq!(page.icon().chars().count(), 1, "{}", page);
        }
        assert_eq!(Page::ContentGenerator.icon(), "📝");
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(Page::default(), Page::Dashboard);
    }
}
