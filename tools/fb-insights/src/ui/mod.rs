//! UI module - TUI rendering components.
//!
//! The UI follows a component-based architecture:
//! - `layout.rs`: Main layout orchestration
//! - `left_panel.rs`: Navigation list + session info
//! - `right_panel.rs`: Container for the active page
//! - `panels/`: Per-page renderers
//! - `widgets/`: Reusable UI components

mod layout;
mod left_panel;
mod right_panel;

pub mod panels;
pub mod widgets;

pub use layout::render;
