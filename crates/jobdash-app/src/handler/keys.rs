//! Key event handlers for different UI modes

use jobdash_core::SortField;

use crate::controller::BadgeKind;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

use super::chrome::item_message;

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Keep query, exit input mode
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),

        InputKey::Backspace => {
            let mut query = state.chrome.header.search_query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Char(c) => {
            let mut query = state.chrome.header.search_query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrevious),

        InputKey::Char('/') => Some(Message::StartSearch),

        // Header shortcuts work from any region
        InputKey::Char('1') => Some(Message::ColumnHeaderClicked {
            field: SortField::Submitted,
        }),
        InputKey::Char('2') => Some(Message::ColumnHeaderClicked {
            field: SortField::DueDate,
        }),

        InputKey::Char('r') => Some(Message::ReloadRows),

        _ if state.focus == Focus::Table => handle_key_table(state, key),
        _ => handle_key_chrome(state, key),
    }
}

fn handle_key_table(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::TableCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::TableCursorDown),
        InputKey::Home | InputKey::PageUp | InputKey::Char('g') => Some(Message::TableCursorFirst),
        InputKey::End | InputKey::PageDown | InputKey::Char('G') => Some(Message::TableCursorLast),

        InputKey::Enter | InputKey::Char(' ') => {
            state.table.cursor_id().map(|id| Message::RowClicked { id })
        }
        InputKey::Char('s') => state.table.cursor_id().map(|id| Message::BadgeClicked {
            kind: BadgeKind::Status,
            id,
        }),
        InputKey::Char('p') => state.table.cursor_id().map(|id| Message::BadgeClicked {
            kind: BadgeKind::Priority,
            id,
        }),
        InputKey::Char('o') => state
            .table
            .cursor_id()
            .map(|id| Message::LinkClicked { id }),

        _ => None,
    }
}

fn handle_key_chrome(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Char('h') => Some(Message::ChromeCursorLeft),
        InputKey::Right | InputKey::Char('l') => Some(Message::ChromeCursorRight),
        InputKey::Enter | InputKey::Char(' ') => item_message(state.focus, state.chrome_cursor),
        _ => None,
    }
}
