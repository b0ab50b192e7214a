//! FB-Insights: AI-Enhanced Facebook Analytics dashboard
//!
//! A TUI scaffold for page analytics. Every panel currently renders
//! placeholder content: zeroed metrics, canned assistant replies, a fixed
//! sample post.
//!
//! ## Architecture
//!
//! The active page is a tagged variant ([`domain::PanelState`]) that owns
//! the page's ephemeral form state; [`ui::render`] dispatches on it to one
//! page renderer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  🤖 Skye's AI-Enhanced Analytics                                │
//! ├────────────────────────┬────────────────────────────────────────┤
//! │  NAVIGATION            │  ACTIVE PAGE                           │
//! │  [1] ● Dashboard       │  (page-specific renderer)              │
//! │  [2] ○ AI Assistant    │                                        │
//! │  ...                   │                                        │
//! ├────────────────────────┤                                        │
//! │  SESSION               │                                        │
//! └────────────────────────┴────────────────────────────────────────┘
//! ```

pub mod branding;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ui;

pub use config::{ConfigError, ConfigOverrides, DashboardConfig, PageLayout, SidebarState};
pub use domain::{App, AppState, Focus, Page, PanelState};
