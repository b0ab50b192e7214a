//! Performance insights panel.

use crossterm::event::{KeyCode, KeyEvent};

use super::form::{Choice, FocusMove, Selector};

pub const PERIOD_PROMPT: &str = "Analysis Period";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPeriod {
    LastWeek,
    LastMonth,
    LastQuarter,
    Custom,
}

impl Choice for AnalysisPeriod {
    const ALL: &'static [Self] = &[
        AnalysisPeriod::LastWeek,
        AnalysisPeriod::LastMonth,
        AnalysisPeriod::LastQuarter,
        AnalysisPeriod::Custom,
    ];

    fn label(&self) -> &'static str {
        match self {
            AnalysisPeriod::LastWeek => "Last Week",
            AnalysisPeriod::LastMonth => "Last Month",
            AnalysisPeriod::LastQuarter => "Last Quarter",
            AnalysisPeriod::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightsTab {
    #[default]
    ContentAnalysis,
    AudienceInsights,
    Recommendations,
}

impl InsightsTab {
    pub const ALL: [InsightsTab; 3] = [
        InsightsTab::ContentAnalysis,
        InsightsTab::AudienceInsights,
        InsightsTab::Recommendations,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            InsightsTab::ContentAnalysis => "Content Analysis",
            InsightsTab::AudienceInsights => "Audience Insights",
            InsightsTab::Recommendations => "Recommendations",
        }
    }

    pub fn subheader(&self) -> &'static str {
        match self {
            InsightsTab::ContentAnalysis => "Content Performance Analysis",
            InsightsTab::AudienceInsights => "Audience Behavior Insights",
            InsightsTab::Recommendations => "AI Recommendations",
        }
    }

    pub fn info(&self) -> &'static str {
        match self {
            InsightsTab::ContentAnalysis => "AI will analyze your content performance patterns",
            InsightsTab::AudienceInsights => "AI will provide detailed audience insights",
            InsightsTab::Recommendations => "Personalized recommendations will appear here",
        }
    }

    fn index(&self) -> usize {
        InsightsTab::ALL
            .iter()
            .position(|tab| tab == self)
            .unwrap_or(0)
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightsControl {
    Period,
    Tabs,
}

const CONTROLS: [InsightsControl; 2] = [InsightsControl::Period, InsightsControl::Tabs];

/// Static section shown under the active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightSection {
    pub subheader: &'static str,
    pub info: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightsPanel {
    period: Selector<AnalysisPeriod>,
    tab: InsightsTab,
    focus: usize,
}

impl InsightsPanel {
    pub fn period(&self) -> Selector<AnalysisPeriod> {
        self.period
    }

    pub fn tab(&self) -> InsightsTab {
        self.tab
    }

    pub fn tab_index(&self) -> usize {
        self.tab.index()
    }

    pub fn focus(&self) -> InsightsControl {
        CONTROLS[self.focus]
    }

    pub fn select_tab(&mut self, tab: InsightsTab) {
        self.tab = tab;
    }

    /// Content of the active tab. The selected period is not consulted.
    pub fn section(&self) -> InsightSection {
        InsightSection {
            subheader: self.tab.subheader(),
            info: self.tab.info(),
        }
    }

    /// Handle a key while the panel has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(movement) = FocusMove::from_key(key) {
            self.focus = movement.apply(self.focus, CONTROLS.len());
            return true;
        }

        match (self.focus(), key.code) {
            (InsightsControl::Period, KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ')) => {
                self.period.cycle_next()
            }
            (InsightsControl::Period, KeyCode::Left) => self.period.cycle_prev(),
            (InsightsControl::Tabs, KeyCode::Right) => {
                let next = (self.tab.index() + 1) % InsightsTab::ALL.len();
                self.tab = InsightsTab::ALL[next];
                true
            }
            (InsightsControl::Tabs, KeyCode::Left) => {
                let len = InsightsTab::ALL.len();
                self.tab = InsightsTab::ALL[(self.tab.index() + len - 1) % len];
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_period_never_changes_section() {
        for tab in InsightsTab::ALL {
            let mut panel = InsightsPanel::default();
            panel.select_tab(tab);
            let baseline = panel.section();
            for _ in AnalysisPeriod::ALL {
                assert!(panel.handle_key(key(KeyCode::Right)));
                assert_eq!(panel.section(), baseline);
            }
        }
    }

    #[test]
    fn test_tabs_cycle_with_arrows() {
        let mut panel = InsightsPanel::default();
        panel.handle_key(key(KeyCode::Tab));
        assert_eq!(panel.focus(), InsightsControl::Tabs);
        panel.handle_key(key(KeyCode::Right));
        assert_eq!(panel.tab(), InsightsTab::AudienceInsights);
        panel.handle_key(key(KeyCode::Left));
        panel.handle_key(key(KeyCode::Left));
        assert_eq!(panel.tab(), InsightsTab::Recommendations);
        assert_eq!(panel.section().subheader, "AI Recommendations");
    }

    #[test]
    fn test_period_defaults_to_last_week() {
        let panel = InsightsPanel::default();
        assert_eq!(panel.period().selected(), AnalysisPeriod::LastWeek);
        assert_eq!(panel.period().selected().label(), "Last Week");
    }

    #[test]
    fn test_section_text() {
        assert_eq!(
            InsightsTab::ContentAnalysis.info(),
            "AI will analyze your content performance patterns"
        );
        assert_eq!(
            InsightsTab::AudienceInsights.subheader(),
            "Audience Behavior Insights"
        );
    }
}
