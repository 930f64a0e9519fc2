//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use jobdash_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{chrome, keys::handle_key, table, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => chrome::handle_tick(state, Instant::now()),

        // ─────────────────────────────────────────────────────────
        // Table Messages
        // ─────────────────────────────────────────────────────────
        Message::ColumnHeaderClicked { field } => table::handle_column_header_click(state, field),
        Message::RowClicked { id } => table::handle_row_click(state, id),
        Message::BadgeClicked { kind, id } => table::handle_badge_click(state, kind, id),
        Message::LinkClicked { id } => table::handle_link_click(state, id),
        Message::FillerRowClicked { number } => table::handle_filler_row_click(state, number),

        Message::TableCursorUp => {
            state.table.cursor_up();
            UpdateResult::none()
        }
        Message::TableCursorDown => {
            state.table.cursor_down();
            UpdateResult::none()
        }
        Message::TableCursorFirst => {
            state.table.cursor_first();
            UpdateResult::none()
        }
        Message::TableCursorLast => {
            state.table.cursor_last();
            UpdateResult::none()
        }

        Message::ReloadRows => UpdateResult::action(UpdateAction::ReloadRows),
        Message::RowsLoaded { dataset } => table::handle_rows_loaded(state, dataset),
        Message::ActionFailed { error } => {
            state.set_status(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }
        Message::ChromeCursorLeft => {
            state.chrome_cursor_left();
            UpdateResult::none()
        }
        Message::ChromeCursorRight => {
            state.chrome_cursor_right();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chrome Messages
        // ─────────────────────────────────────────────────────────
        Message::HeaderDropdownClicked(dropdown) => chrome::handle_header_dropdown(state, dropdown),
        Message::StartSearch => chrome::handle_start_search(state),
        Message::SearchInput { text } => chrome::handle_search_input(state, text),
        Message::EndSearch => chrome::handle_end_search(state),
        Message::NotificationsClicked => chrome::handle_notifications(state),
        Message::AvatarClicked => chrome::handle_avatar(state),

        Message::ToolbarDropdownClicked => chrome::handle_toolbar_dropdown(state),
        Message::HideFieldsClicked => chrome::handle_hide_fields(state),
        Message::ToolbarButtonClicked(button) => chrome::handle_toolbar_button(state, button),

        Message::OverviewTabClicked => chrome::handle_overview_tab(state),
        Message::AbcBadgeClicked => chrome::handle_abc_badge(state),
        Message::AnswerClicked => chrome::handle_answer(state),
        Message::ExtractClicked => chrome::handle_extract(state),
        Message::NavAddClicked => chrome::handle_nav_add(state),

        Message::BottomTabClicked(tab) => chrome::handle_bottom_tab(state, tab),
        Message::BottomAddClicked => chrome::handle_bottom_add(state),
    }
}
