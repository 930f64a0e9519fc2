//! Header, toolbar, and tab bar handlers
//!
//! None of these touch the table. Most only flip a toggle and log.

use std::time::Instant;

use jobdash_core::prelude::*;

use crate::chrome::{
    BottomItem, BottomTab, HeaderDropdown, HeaderItem, TabNavItem, ToolbarButton, ToolbarItem,
    OVERVIEW_TAB_TITLE,
};
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};

use super::UpdateResult;

/// Message for the chrome item at `index` in a focus region
pub fn item_message(focus: Focus, index: usize) -> Option<Message> {
    match focus {
        Focus::Header => HeaderItem::ALL.get(index).map(|item| match item {
            HeaderItem::Workspace => Message::HeaderDropdownClicked(HeaderDropdown::Workspace),
            HeaderItem::Folder => Message::HeaderDropdownClicked(HeaderDropdown::Folder),
            HeaderItem::Search => Message::StartSearch,
            HeaderItem::Notifications => Message::NotificationsClicked,
            HeaderItem::Avatar => Message::AvatarClicked,
        }),
        Focus::Toolbar => ToolbarItem::all().get(index).map(|item| match item {
            ToolbarItem::Dropdown => Message::ToolbarDropdownClicked,
            ToolbarItem::HideFields => Message::HideFieldsClicked,
            ToolbarItem::Button(button) => Message::ToolbarButtonClicked(*button),
        }),
        Focus::TabNav => TabNavItem::ALL.get(index).map(|item| match item {
            TabNavItem::Overview => Message::OverviewTabClicked,
            TabNavItem::AbcBadge => Message::AbcBadgeClicked,
            TabNavItem::Answer => Message::AnswerClicked,
            TabNavItem::Extract => Message::ExtractClicked,
            TabNavItem::Add => Message::NavAddClicked,
        }),
        Focus::BottomTabs => BottomItem::all().get(index).map(|item| match item {
            BottomItem::Tab(tab) => Message::BottomTabClicked(*tab),
            BottomItem::Add => Message::BottomAddClicked,
        }),
        Focus::Table => None,
    }
}

// ─────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────

pub fn handle_header_dropdown(state: &mut AppState, dropdown: HeaderDropdown) -> UpdateResult {
    state.chrome.header.toggle_dropdown(dropdown);
    info!(
        "{} dropdown {}",
        dropdown.label(),
        if state.chrome.header.active_dropdown == Some(dropdown) {
            "opened"
        } else {
            "closed"
        }
    );
    UpdateResult::none()
}

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.set_focus(Focus::Header);
    state.ui_mode = UiMode::SearchInput;
    UpdateResult::none()
}

/// Search only logs; rows are never filtered
pub fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    info!("Search: {}", text);
    state.chrome.header.search_query = text;
    UpdateResult::none()
}

pub fn handle_end_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_notifications(state: &mut AppState) -> UpdateResult {
    state.chrome.header.toggle_notifications();
    debug!(
        "Notifications {}",
        if state.chrome.header.notifications_open {
            "shown"
        } else {
            "hidden"
        }
    );
    UpdateResult::none()
}

pub fn handle_avatar(state: &mut AppState) -> UpdateResult {
    info!("Avatar clicked");
    state.set_status("Signed in as John Doe (john.doe@company.com)");
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Toolbar
// ─────────────────────────────────────────────────────────

pub fn handle_toolbar_dropdown(state: &mut AppState) -> UpdateResult {
    state.chrome.toolbar.toggle_dropdown();
    UpdateResult::none()
}

pub fn handle_hide_fields(state: &mut AppState) -> UpdateResult {
    state.chrome.toolbar.toggle_fields_hidden();
    info!("Hide fields: {}", state.chrome.toolbar.fields_hidden);
    UpdateResult::none()
}

pub fn handle_toolbar_button(state: &mut AppState, button: ToolbarButton) -> UpdateResult {
    handle_toolbar_button_at(state, button, Instant::now())
}

pub(crate) fn handle_toolbar_button_at(
    state: &mut AppState,
    button: ToolbarButton,
    now: Instant,
) -> UpdateResult {
    info!("{} clicked", button.label());
    state.chrome.toolbar.click(button, now);
    UpdateResult::none()
}

/// Clear a toolbar highlight whose flash has elapsed
pub fn handle_tick(state: &mut AppState, now: Instant) -> UpdateResult {
    if state.chrome.toolbar.tick(now) {
        trace!("Toolbar highlight cleared");
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Tab navigation
// ─────────────────────────────────────────────────────────

pub fn handle_overview_tab(state: &mut AppState) -> UpdateResult {
    info!("{} tab clicked", OVERVIEW_TAB_TITLE);
    state.chrome.tab_nav.overview_active = true;
    UpdateResult::none()
}

pub fn handle_abc_badge(state: &mut AppState) -> UpdateResult {
    info!("ABC clicked");
    state.set_status("ABC clicked");
    UpdateResult::none()
}

pub fn handle_answer(state: &mut AppState) -> UpdateResult {
    let nav = &mut state.chrome.tab_nav;
    nav.answer_active = !nav.answer_active;
    info!("Answer a question: {}", nav.answer_active);
    UpdateResult::none()
}

pub fn handle_extract(state: &mut AppState) -> UpdateResult {
    let nav = &mut state.chrome.tab_nav;
    nav.extract_active = !nav.extract_active;
    info!("Extract: {}", nav.extract_active);
    UpdateResult::none()
}

pub fn handle_nav_add(state: &mut AppState) -> UpdateResult {
    info!("Add tab clicked");
    state.set_status("Add tab clicked");
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Bottom tabs
// ─────────────────────────────────────────────────────────

pub fn handle_bottom_tab(state: &mut AppState, tab: BottomTab) -> UpdateResult {
    info!("Bottom tab: {}", tab.label());
    state.chrome.bottom_tab = tab;
    UpdateResult::none()
}

pub fn handle_bottom_add(state: &mut AppState) -> UpdateResult {
    info!("Add bottom tab clicked");
    state.set_status("Add bottom tab clicked");
    UpdateResult::none()
}
