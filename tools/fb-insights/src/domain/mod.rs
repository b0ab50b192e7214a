//! Domain models for the dashboard.

mod app;
mod assistant;
mod dashboard;
mod form;
mod generator;
mod insights;
mod page;
mod panel;

pub use app::{App, AppState, Focus};
pub use assistant::{
    greeting, AssistantAction, AssistantControl, AssistantPanel, QUESTION_PLACEHOLDER,
    QUESTION_PROMPT,
};
pub use dashboard::{DashboardPanel, MetricTile, METRIC_TILES};
pub use form::{Choice, FocusMove, Selector, TextField};
pub use generator::{
    ContentGenerator, ContentRequest, ContentType, GeneratedContent, GeneratorControl,
    GeneratorPanel, SampleGenerator, Tone, CONTENT_TYPE_PROMPT, GENERATE_LABEL,
    GENERATION_NOTICE, SAMPLE_POST, TONE_PROMPT, TOPIC_PLACEHOLDER, TOPIC_PROMPT,
};
pub use insights::{
    AnalysisPeriod, InsightSection, InsightsControl, InsightsPanel, InsightsTab, PERIOD_PROMPT,
};
pub use page::{Page, UnknownPage};
pub use panel::PanelState;
