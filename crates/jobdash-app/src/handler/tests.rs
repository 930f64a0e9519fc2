//! Tests for handler module

use std::time::{Duration, Instant};

use super::*;
use crate::chrome::{BottomTab, HeaderDropdown, ToolbarButton, TOOLBAR_FLASH};
use crate::controller::BadgeKind;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, UiMode};
use crate::view_state::SortDirection;
use jobdash_core::{Dataset, RawRow, RowId, SortField};

/// Run a message and every follow-up, collecting the actions
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn key(state: &mut AppState, key: InputKey) -> Vec<UpdateAction> {
    drive(state, Message::Key(key))
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::with_seed();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_quit_keys() {
    let state = AppState::with_seed();
    for k in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        assert!(matches!(handle_key(&state, k), Some(Message::Quit)));
    }
}

// ─────────────────────────────────────────────────────────
// Sorting
// ─────────────────────────────────────────────────────────

#[test]
fn test_header_click_toggles_sort() {
    let mut state = AppState::with_seed();

    drive(
        &mut state,
        Message::ColumnHeaderClicked {
            field: SortField::DueDate,
        },
    );
    assert_eq!(state.table.view_state().sort_key(), Some(SortField::DueDate));
    assert_eq!(
        state.table.view_state().sort_direction(),
        Some(SortDirection::Ascending)
    );

    drive(
        &mut state,
        Message::ColumnHeaderClicked {
            field: SortField::DueDate,
        },
    );
    assert_eq!(
        state.table.view_state().sort_direction(),
        Some(SortDirection::Descending)
    );
    assert_eq!(state.table.ordered_ids()[0], RowId(2));
}

#[test]
fn test_number_keys_click_headers() {
    let mut state = AppState::with_seed();
    state.set_focus(Focus::Toolbar);

    key(&mut state, InputKey::Char('1'));
    assert_eq!(state.table.view_state().sort_key(), Some(SortField::Submitted));

    key(&mut state, InputKey::Char('2'));
    assert_eq!(state.table.view_state().sort_key(), Some(SortField::DueDate));
    assert_eq!(
        state.table.view_state().sort_direction(),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn test_sort_keeps_selection() {
    let mut state = AppState::with_seed();
    drive(&mut state, Message::RowClicked { id: RowId(4) });
    drive(
        &mut state,
        Message::ColumnHeaderClicked {
            field: SortField::Submitted,
        },
    );
    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(4)));
}

// ─────────────────────────────────────────────────────────
// Selection and containment
// ─────────────────────────────────────────────────────────

#[test]
fn test_row_click_selects_and_deselects() {
    let mut state = AppState::with_seed();

    drive(&mut state, Message::RowClicked { id: RowId(3) });
    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(3)));
    assert_eq!(state.status.as_deref(), Some("Row 3 selected"));

    drive(&mut state, Message::RowClicked { id: RowId(1) });
    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(1)));

    drive(&mut state, Message::RowClicked { id: RowId(1) });
    assert_eq!(state.table.view_state().selected_row_id, None);
}

#[test]
fn test_row_click_unknown_id_is_ignored() {
    let mut state = AppState::with_seed();
    drive(&mut state, Message::RowClicked { id: RowId(2) });

    drive(&mut state, Message::RowClicked { id: RowId(77) });

    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(2)));
}

#[test]
fn test_badge_click_forwards_without_follow_up() {
    let mut state = AppState::with_seed();

    let result = update(
        &mut state,
        Message::BadgeClicked {
            kind: BadgeKind::Status,
            id: RowId(5),
        },
    );

    assert!(result.message.is_none());
    match result.action {
        Some(UpdateAction::ForwardBadgeClick(click)) => {
            assert_eq!(click.kind, BadgeKind::Status);
            assert_eq!(click.id, RowId(5));
            assert_eq!(click.label, "Blocked");
        }
        other => panic!("expected ForwardBadgeClick, got {:?}", other),
    }
    assert_eq!(state.table.view_state().selected_row_id, None);
}

#[test]
fn test_badge_click_keeps_existing_selection() {
    let mut state = AppState::with_seed();
    drive(&mut state, Message::RowClicked { id: RowId(1) });

    drive(
        &mut state,
        Message::BadgeClicked {
            kind: BadgeKind::Priority,
            id: RowId(1),
        },
    );

    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(1)));
}

#[test]
fn test_link_click_opens_normalized_url() {
    let mut state = AppState::with_seed();

    let result = update(&mut state, Message::LinkClicked { id: RowId(2) });

    assert!(result.message.is_none());
    assert_eq!(
        result.action,
        Some(UpdateAction::OpenUrl {
            url: "http://www.irfankhanportfolio.com".to_string()
        })
    );
    assert_eq!(state.table.view_state().selected_row_id, None);
}

#[test]
fn test_link_click_keeps_https_scheme() {
    let mut state = AppState::with_seed();
    let result = update(&mut state, Message::LinkClicked { id: RowId(3) });
    assert_eq!(
        result.action,
        Some(UpdateAction::OpenUrl {
            url: "https://www.markjohnsondesigns.com/portfolio".to_string()
        })
    );
}

#[test]
fn test_link_click_without_url() {
    let mut state = AppState::with_seed();
    let result = update(&mut state, Message::LinkClicked { id: RowId(5) });
    assert!(result.action.is_none());
}

#[test]
fn test_filler_row_click_only_logs() {
    let mut state = AppState::with_seed();
    let before = *state.table.view_state();

    let actions = drive(&mut state, Message::FillerRowClicked { number: 12 });

    assert!(actions.is_empty());
    assert_eq!(*state.table.view_state(), before);
}

// ─────────────────────────────────────────────────────────
// Table keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_table_keys_move_cursor_and_click() {
    let mut state = AppState::with_seed();
    assert_eq!(state.focus, Focus::Table);

    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Down);
    assert_eq!(state.table.cursor_id(), Some(RowId(3)));

    key(&mut state, InputKey::Enter);
    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(3)));

    key(&mut state, InputKey::End);
    assert_eq!(state.table.cursor_id(), Some(RowId(5)));
    key(&mut state, InputKey::Home);
    assert_eq!(state.table.cursor_id(), Some(RowId(1)));
}

#[test]
fn test_badge_keys_forward_cursor_row() {
    let mut state = AppState::with_seed();
    key(&mut state, InputKey::Down);

    let actions = key(&mut state, InputKey::Char('p'));

    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        UpdateAction::ForwardBadgeClick(c) if c.kind == BadgeKind::Priority && c.label == "High"
    ));
    assert_eq!(state.table.view_state().selected_row_id, None);
}

#[test]
fn test_link_key_opens_cursor_row() {
    let mut state = AppState::with_seed();
    let actions = key(&mut state, InputKey::Char('o'));
    assert_eq!(
        actions,
        vec![UpdateAction::OpenUrl {
            url: "http://www.aishapatel.com".to_string()
        }]
    );
}

#[test]
fn test_table_keys_on_empty_table() {
    let mut state = AppState::with_seed();
    drive(
        &mut state,
        Message::RowsLoaded {
            dataset: Dataset::default(),
        },
    );

    assert!(handle_key(&state, InputKey::Enter).is_none());
    assert!(handle_key(&state, InputKey::Char('s')).is_none());
}

// ─────────────────────────────────────────────────────────
// Data reload
// ─────────────────────────────────────────────────────────

#[test]
fn test_reload_key_requests_action() {
    let mut state = AppState::with_seed();
    assert_eq!(
        key(&mut state, InputKey::Char('r')),
        vec![UpdateAction::ReloadRows]
    );
}

#[test]
fn test_rows_loaded_clears_dangling_selection() {
    let mut state = AppState::with_seed();
    drive(&mut state, Message::RowClicked { id: RowId(5) });

    let dataset = Dataset::from_raw(vec![RawRow {
        id: 1,
        ..Default::default()
    }])
    .unwrap();
    drive(&mut state, Message::RowsLoaded { dataset });

    assert_eq!(state.table.view_state().selected_row_id, None);
    assert_eq!(state.table.len(), 1);
}

// ─────────────────────────────────────────────────────────
// Focus and chrome
// ─────────────────────────────────────────────────────────

#[test]
fn test_tab_cycles_focus() {
    let mut state = AppState::with_seed();
    key(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::BottomTabs);
    key(&mut state, InputKey::Tab);
    assert_eq!(state.focus, Focus::Header);
    key(&mut state, InputKey::BackTab);
    assert_eq!(state.focus, Focus::BottomTabs);
}

#[test]
fn test_enter_in_header_toggles_dropdowns() {
    let mut state = AppState::with_seed();
    state.set_focus(Focus::Header);

    key(&mut state, InputKey::Enter);
    assert_eq!(
        state.chrome.header.active_dropdown,
        Some(HeaderDropdown::Workspace)
    );

    key(&mut state, InputKey::Right);
    key(&mut state, InputKey::Enter);
    assert_eq!(
        state.chrome.header.active_dropdown,
        Some(HeaderDropdown::Folder)
    );
}

#[test]
fn test_chrome_keys_do_not_touch_table() {
    let mut state = AppState::with_seed();
    state.set_focus(Focus::TabNav);

    key(&mut state, InputKey::Down);
    key(&mut state, InputKey::Char('s'));

    assert_eq!(state.table.cursor(), 0);
}

#[test]
fn test_search_mode_captures_text() {
    let mut state = AppState::with_seed();

    key(&mut state, InputKey::Char('/'));
    assert_eq!(state.ui_mode, UiMode::SearchInput);
    assert_eq!(state.focus, Focus::Header);

    for c in "q3x".chars() {
        key(&mut state, InputKey::Char(c));
    }
    key(&mut state, InputKey::Backspace);
    assert_eq!(state.chrome.header.search_query, "q3");
    assert!(!state.should_quit());

    key(&mut state, InputKey::Enter);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.chrome.header.search_query, "q3");
    // Search never filters rows
    assert_eq!(state.table.len(), 5);
}

#[test]
fn test_ctrl_c_quits_from_search() {
    let mut state = AppState::with_seed();
    key(&mut state, InputKey::Char('/'));
    key(&mut state, InputKey::CharCtrl('c'));
    assert!(state.should_quit());
}

#[test]
fn test_toolbar_transient_highlight_expires() {
    let mut state = AppState::with_seed();
    let t0 = Instant::now();

    chrome::handle_toolbar_button_at(&mut state, ToolbarButton::Import, t0);
    assert_eq!(
        state.chrome.toolbar.active_button,
        Some(ToolbarButton::Import)
    );

    chrome::handle_tick(&mut state, t0 + Duration::from_millis(100));
    assert_eq!(
        state.chrome.toolbar.active_button,
        Some(ToolbarButton::Import)
    );

    chrome::handle_tick(&mut state, t0 + TOOLBAR_FLASH);
    assert_eq!(state.chrome.toolbar.active_button, None);
}

#[test]
fn test_toolbar_sort_is_independent_of_table_sort() {
    let mut state = AppState::with_seed();

    drive(
        &mut state,
        Message::ToolbarButtonClicked(ToolbarButton::Sort),
    );

    assert_eq!(state.chrome.toolbar.sort_direction, SortDirection::Descending);
    assert_eq!(state.table.view_state().sort, None);
}

#[test]
fn test_tab_nav_toggles() {
    let mut state = AppState::with_seed();
    drive(&mut state, Message::AnswerClicked);
    drive(&mut state, Message::ExtractClicked);
    drive(&mut state, Message::ExtractClicked);

    assert!(state.chrome.tab_nav.answer_active);
    assert!(!state.chrome.tab_nav.extract_active);
}

#[test]
fn test_bottom_tab_is_single_active() {
    let mut state = AppState::with_seed();
    assert_eq!(state.chrome.bottom_tab, BottomTab::AllOrders);

    drive(&mut state, Message::BottomTabClicked(BottomTab::Reviewed));
    assert_eq!(state.chrome.bottom_tab, BottomTab::Reviewed);

    state.set_focus(Focus::BottomTabs);
    key(&mut state, InputKey::Right);
    key(&mut state, InputKey::Enter);
    assert_eq!(state.chrome.bottom_tab, BottomTab::Pending);
}

#[test]
fn test_notifications_toggle() {
    let mut state = AppState::with_seed();
    drive(&mut state, Message::NotificationsClicked);
    assert!(state.chrome.header.notifications_open);
    drive(&mut state, Message::NotificationsClicked);
    assert!(!state.chrome.header.notifications_open);
}

#[test]
fn test_chrome_item_message_covers_every_item() {
    for focus in [Focus::Header, Focus::Toolbar, Focus::TabNav, Focus::BottomTabs] {
        for index in 0..focus.item_count() {
            assert!(chrome::item_message(focus, index).is_some());
        }
        assert!(chrome::item_message(focus, focus.item_count()).is_none());
    }
    assert!(chrome::item_message(Focus::Table, 0).is_none());
}
