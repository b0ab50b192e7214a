//! Content generator panel.
//!
//! Generation sits behind the [`ContentGenerator`] trait so a real backend can
//! replace [`SampleGenerator`] later. Today every request yields the same
//! sample post.

use crossterm::event::{KeyCode, KeyEvent};

use super::form::{is_press, Choice, FocusMove, Selector, TextField};

pub const CONTENT_TYPE_PROMPT: &str = "What type of content do you want to generate?";
pub const TOPIC_PROMPT: &str = "Topic or theme:";
pub const TOPIC_PLACEHOLDER: &str = "Enter a topic for your content";
pub const TONE_PROMPT: &str = "Select content tone:";
pub const GENERATE_LABEL: &str = "Generate Content";

pub const GENERATION_NOTICE: &str = "Content generation will be connected to LLM later";
pub const SAMPLE_POST: &str = "Sample Generated Post:\n\
📢 Exciting news! We're launching something special...\n\
#Innovation #Technology #Future";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Post,
    Poll,
    Contest,
    Story,
}

impl Choice for ContentType {
    const ALL: &'static [Self] = &[
        ContentType::Post,
        ContentType::Poll,
        ContentType::Contest,
        ContentType::Story,
    ];

    fn label(&self) -> &'static str {
        match self {
            ContentType::Post => "Post",
            ContentType::Poll => "Poll",
            ContentType::Contest => "Contest",
            ContentType::Story => "Story",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Humorous,
    Inspirational,
}

impl Choice for Tone {
    const ALL: &'static [Self] = &[
        Tone::Professional,
        Tone::Casual,
        Tone::Humorous,
        Tone::Inspirational,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Humorous => "Humorous",
            Tone::Inspirational => "Inspirational",
        }
    }
}

/// Form values at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRequest<'a> {
    pub content_type: ContentType,
    pub topic: &'a str,
    pub tone: Tone,
}

/// Output block rendered after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedContent {
    pub notice: &'static str,
    pub body: &'static str,
}

/// Turns a request into displayable content.
pub trait ContentGenerator {
    fn generate(&self, request: &ContentRequest<'_>) -> GeneratedContent;
}

/// Placeholder generator: ignores the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleGenerator;

impl ContentGenerator for SampleGenerator {
    fn generate(&self, _request: &ContentRequest<'_>) -> GeneratedContent {
        GeneratedContent {
            notice: GENERATION_NOTICE,
            body: SAMPLE_POST,
        }
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorControl {
    ContentType,
    Topic,
    Tone,
    Generate,
}

const CONTROLS: [GeneratorControl; 4] = [
    GeneratorControl::ContentType,
    GeneratorControl::Topic,
    GeneratorControl::Tone,
    GeneratorControl::Generate,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPanel {
    content_type: Selector<ContentType>,
    topic: TextField,
    tone: Selector<Tone>,
    focus: usize,
    output: Option<GeneratedContent>,
}

impl Default for GeneratorPanel {
    fn default() -> Self {
        Self {
            content_type: Selector::default(),
            topic: TextField::with_placeholder(TOPIC_PLACEHOLDER),
            tone: Selector::default(),
            focus: 0,
            output: None,
        }
    }
}

impl GeneratorPanel {
    pub fn content_type(&self) -> Selector<ContentType> {
        self.content_type
    }

    pub fn topic(&self) -> &TextField {
        &self.topic
    }

    pub fn tone(&self) -> Selector<Tone> {
        self.tone
    }

    pub fn focus(&self) -> GeneratorControl {
        CONTROLS[self.focus]
    }

    /// Output of a submission in the current render cycle.
    pub fn output(&self) -> Option<&GeneratedContent> {
        self.output.as_ref()
    }

    pub fn request(&self) -> ContentRequest<'_> {
        ContentRequest {
            content_type: self.content_type.selected(),
            topic: self.topic.value(),
            tone: self.tone.selected(),
        }
    }

    /// Submit the form with the placeholder generator.
    pub fn submit(&mut self) {
        self.submit_with(&SampleGenerator);
    }

    pub fn submit_with<G: ContentGenerator>(&mut self, generator: &G) {
        let request = self.request();
        tracing::debug!(
            content_type = request.content_type.label(),
            tone = request.tone.label(),
            topic_len = request.topic.len(),
            "content generation requested"
        );
        self.output = Some(generator.generate(&request));
    }

    /// Handle a key while the panel has focus.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(movement) = FocusMove::from_key(key) {
            self.focus = movement.apply(self.focus, CONTROLS.len());
            return true;
        }

        let changed = match self.focus() {
            GeneratorControl::ContentType => match key.code {
                KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                    self.content_type.cycle_next()
                }
                KeyCode::Left => self.content_type.cycle_prev(),
                _ => return false,
            },
            GeneratorControl::Topic => self.topic.handle_key(key),
            GeneratorControl::Tone => match key.code {
                KeyCode::Right => self.tone.step_next(),
                KeyCode::Left => self.tone.step_prev(),
                _ => return false,
            },
            GeneratorControl::Generate => {
                if !is_press(key) {
                    return false;
                }
                self.submit();
                return true;
            }
        };

        if changed {
            // a changed input is a new render cycle without a submission
            self.output = None;
        }
        changed
    }
}
