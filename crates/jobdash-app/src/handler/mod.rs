//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `table`: Table interaction handlers
//! - `chrome`: Header, toolbar, and tab bar handlers
//! - `keys`: Key event handlers for UI modes

pub(crate) mod chrome;
pub(crate) mod keys;
pub(crate) mod table;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::controller::BadgeClick;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

pub use chrome::item_message;
pub use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand a badge click to the interaction sink
    ForwardBadgeClick(BadgeClick),

    /// Open a row's link target
    OpenUrl { url: String },

    /// Load rows from the data source again
    ReloadRows,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
