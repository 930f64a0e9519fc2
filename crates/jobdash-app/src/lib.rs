//! jobdash-app - View state, controller, and orchestration for the job dashboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management on top of the pure sort/presentation core, plus configuration
//! loading and the action sink seam.

pub mod actions;
pub mod chrome;
pub mod config;
pub mod controller;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod presenter;
pub mod process;
pub mod signals;
pub mod sorter;
pub mod state;
pub mod view_state;

// Re-export primary types
pub use actions::{InteractionSink, LoggingSink};
pub use controller::{BadgeClick, BadgeKind, TableController};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use presenter::{RowView, StyleToken, UrlDisplay};
pub use state::{AppState, Focus, UiMode};
pub use view_state::{SortDirection, SortSpec, ViewState};
