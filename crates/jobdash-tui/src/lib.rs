//! jobdash-tui - Terminal UI for the job request dashboard
//!
//! Renders [`jobdash_app::AppState`] with ratatui, turns key presses and
//! mouse clicks into [`jobdash_app::Message`]s, and drives the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
