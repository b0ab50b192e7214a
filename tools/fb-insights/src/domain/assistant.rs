//! AI assistant panel.
//!
//! The buttons answer with canned messages. No request leaves the process.

use crossterm::event::KeyEvent;

use super::form::{is_press, FocusMove, TextField};

pub const QUESTION_PROMPT: &str = "Ask me anything about your Facebook data:";
pub const QUESTION_PLACEHOLDER: &str = "Example: What were my best performing posts last month?";

/// Greeting line shown above the question box.
pub fn greeting(user: &str) -> String {
    format!("Hello {}! How can I help you today?", user)
}

/// One of the three assistant buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssistantAction {
    AnalyzeTrends,
    GetRecommendations,
    GenerateReport,
}

impl AssistantAction {
    pub const ALL: [AssistantAction; 3] = [
        AssistantAction::AnalyzeTrends,
        AssistantAction::GetRecommendations,
        AssistantAction::GenerateReport,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            AssistantAction::AnalyzeTrends => "📈",
            AssistantAction::GetRecommendations => "🎯",
            AssistantAction::GenerateReport => "📊",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssistantAction::AnalyzeTrends => "Analyze Trends",
            AssistantAction::GetRecommendations => "Get Recommendations",
            AssistantAction::GenerateReport => "Generate Report",
        }
    }

    /// The informational message rendered when this button is pressed.
    pub fn message(&self) -> &'static str {
        match self {
            AssistantAction::AnalyzeTrends => {
                "Analyzing your page trends... (LLM will be connected later)"
            }
            AssistantAction::GetRecommendations => {
                "Generating personalized recommendations... (LLM will be connected later)"
            }
            AssistantAction::GenerateReport => {
                "Creating detailed report... (LLM will be connected later)"
            }
        }
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantControl {
    Question,
    Button(AssistantAction),
}

const CONTROLS: [AssistantControl; 4] = [
    AssistantControl::Question,
    AssistantControl::Button(AssistantAction::AnalyzeTrends),
    AssistantControl::Button(AssistantAction::GetRecommendations),
    AssistantControl::Button(AssistantAction::GenerateReport),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantPanel {
    question: TextField,
    focus: usize,
    /// Button pressed in the current render cycle.
    pressed: Option<AssistantAction>,
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self {
            question: TextField::with_placeholder(QUESTION_PLACEHOLDER),
            focus: 0,
            pressed: None,
        }
    }
}

impl AssistantPanel {
    pub fn question(&self) -> &TextField {
        &self.question
    }

    pub fn focus(&self) -> AssistantControl {
        CONTROLS[self.focus]
    }

    /// Message for the button pressed in this render cycle, if any.
    pub fn response(&self) -> Option<&'static str> {
        self.pressed.map(|action| action.message())
    }

    pub fn pressed(&self) -> Option<AssistantAction> {
        self.pressed
    }

    /// Press a button. Replaces any message from an earlier press.
    pub fn press(&mut self, action: AssistantAction) {
        tracing::debug!(action = action.label(), "assistant button pressed");
        self.pressed = Some(action);
    }

    /// Handle a key while the panel has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(movement) = FocusMove::from_key(key) {
            self.focus = movement.apply(self.focus, CONTROLS.len());
            return true;
        }

        match self.focus() {
            AssistantControl::Question => {
                let changed = self.question.handle_key(key);
                if changed {
                    // editing starts a new render cycle
                    self.pressed = None;
                }
                changed
            }
            AssistantControl::Button(action) if is_press(key) => {
                self.press(action);
                true
            }
            AssistantControl::Button(_) => false,
        }
    }
}
