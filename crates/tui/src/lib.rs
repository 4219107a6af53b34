//! Terminal front-end for festdesk tables.
//!
//! Draws one page of a [`TableEngine`](festdesk_table_api::TableEngine) with
//! `ratatui` and maps key presses onto engine operations.

mod app;
pub mod components;
pub mod input;
mod runtime;
pub mod screen;
pub mod style;

pub use app::{App, TableOutcome};
pub use input::QueryInput;
pub use screen::{TableLabels, buffer_to_string, render_to_string};
pub use style::Theme;
