//! Table interaction handlers
//!
//! Badge and link clicks are contained: they produce an action for the
//! event loop and never a follow-up `RowClicked`.

use jobdash_core::prelude::*;
use jobdash_core::{Dataset, RowId, SortField};

use crate::controller::BadgeKind;
use crate::presenter::present_url;
use crate::state::{AppState, Focus};

use super::{UpdateAction, UpdateResult};

pub fn handle_column_header_click(state: &mut AppState, field: SortField) -> UpdateResult {
    state.table.on_column_header_click(field);
    let arrow = state.table.view_state().sort_indicator(field);
    state.set_status(format!("Sorted by {} {}", field.field().title(), arrow));
    UpdateResult::none()
}

pub fn handle_row_click(state: &mut AppState, id: RowId) -> UpdateResult {
    if state.table.on_row_click(id) {
        state.set_focus(Focus::Table);
        let status = if state.table.view_state().is_selected(id) {
            format!("Row {} selected", id)
        } else {
            format!("Row {} deselected", id)
        };
        state.set_status(status);
    }
    UpdateResult::none()
}

pub fn handle_badge_click(state: &mut AppState, kind: BadgeKind, id: RowId) -> UpdateResult {
    match state.table.on_badge_click(kind, id) {
        Some(click) => {
            state.set_status(format!("{} clicked: {}", click.kind, click.label));
            UpdateResult::action(UpdateAction::ForwardBadgeClick(click))
        }
        None => {
            warn!("{} badge click for unknown row {}", kind, id);
            UpdateResult::none()
        }
    }
}

pub fn handle_link_click(state: &mut AppState, id: RowId) -> UpdateResult {
    let Some(row) = state.table.row(id) else {
        warn!("Link click for unknown row {}", id);
        return UpdateResult::none();
    };

    let display = present_url(row.url.as_deref());
    match display.href() {
        Some(href) => {
            info!("Link clicked: {} for row {}", href, id);
            state.set_status(format!("Opening {}", display.text()));
            UpdateResult::action(UpdateAction::OpenUrl {
                url: href.to_string(),
            })
        }
        None => {
            debug!("Row {} has no clickable link", id);
            UpdateResult::none()
        }
    }
}

pub fn handle_filler_row_click(state: &mut AppState, number: u32) -> UpdateResult {
    info!("Empty row clicked: {}", number);
    state.set_status(format!("Row {} is empty", number));
    UpdateResult::none()
}

pub fn handle_rows_loaded(state: &mut AppState, dataset: Dataset) -> UpdateResult {
    info!("Loaded {} rows", dataset.len());
    state.table.replace_rows(dataset);
    state.set_status(format!("Loaded {} rows", state.table.len()));
    UpdateResult::none()
}

