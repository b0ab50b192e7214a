//! Form primitives shared by the panels.
//!
//! Inputs are ephemeral: they live in the panel state and are dropped when
//! the user navigates away. Nothing here validates or stores content.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input, TextArea};

/// A fixed, ordered set of options for a selector.
pub trait Choice: Copy + PartialEq + 'static {
    /// All options in display order. The first one is the default.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Single-line free-text input backed by a [`TextArea`].
///
/// Line breaks are rejected so the area always holds exactly one line.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    textarea: TextArea<'static>,
}

impl TextField {
    /// Empty field showing `placeholder` until something is typed.
    pub fn with_placeholder(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(placeholder);
        Self { textarea }
    }

    pub fn value(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// The editor widget state, for rendering.
    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Apply an editing key. Returns `true` when the value changed; cursor
    /// movement alone does not count.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if is_line_break(key) {
            return false;
        }
        let before = self.textarea.lines().to_vec();
        self.textarea.input(Input::from(key));
        self.textarea.lines() != before.as_slice()
    }
}

impl PartialEq for TextField {
    fn eq(&self, other: &Self) -> bool {
        self.textarea.lines() == other.textarea.lines()
    }
}

impl Eq for TextField {}

fn is_line_break(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => true,
        KeyCode::Char('m') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Single-choice selector over a [`Choice`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector<T: Choice> {
    selected: T,
}

impl<T: Choice> Default for Selector<T> {
    fn default() -> Self {
        Self {
            selected: T::ALL[0],
        }
    }
}

impl<T: Choice> Selector<T> {
    pub fn selected(&self) -> T {
        self.selected
    }

    /// Index of the current option within `T::ALL`.
    pub fn index(&self) -> usize {
        T::ALL
            .iter()
            .position(|option| *option == self.selected)
            .unwrap_or(0)
    }

    /// Move forward, wrapping past the last option (drop-down behaviour).
    pub fn cycle_next(&mut self) -> bool {
        let next = (self.index() + 1) % T::ALL.len();
        self.set_index(next)
    }

    /// Move backward, wrapping past the first option.
    pub fn cycle_prev(&mut self) -> bool {
        let prev = (self.index() + T::ALL.len() - 1) % T::ALL.len();
        self.set_index(prev)
    }

    /// Move forward, stopping at the last option (slider behaviour).
    pub fn step_next(&mut self) -> bool {
        let next = (self.index() + 1).min(T::ALL.len() - 1);
        self.set_index(next)
    }

    /// Move backward, stopping at the first option.
    pub fn step_prev(&mut self) -> bool {
        let prev = self.index().saturating_sub(1);
        self.set_index(prev)
    }

    fn set_index(&mut self, idx: usize) -> bool {
        let changed = idx != self.index();
        self.selected = T::ALL[idx];
        changed
    }
}

/// Focus movement requested by a key, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Prev,
}

impl FocusMove {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => Some(FocusMove::Next),
            KeyCode::BackTab | KeyCode::Up => Some(FocusMove::Prev),
            _ => None,
        }
    }

    /// Apply to an index into `len` focusable controls, wrapping around.
    pub fn apply(self, index: usize, len: usize) -> usize {
        match self {
            FocusMove::Next => (index + 1) % len,
            FocusMove::Prev => (index + len - 1) % len,
        }
    }
}

/// `Enter` or `Space`: the keys that press a focused button.
pub fn is_press(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}
