//! Table controller: interaction events to view state transitions
//!
//! The controller owns the dataset, the [`ViewState`], and the cached
//! display order. It is the only place either is mutated, and each call
//! runs to completion before the next (single writer).

use jobdash_core::prelude::*;
use jobdash_core::{Dataset, Row, RowId, SortField};
use serde::{Deserialize, Serialize};

use crate::presenter::{self, RowView};
use crate::sorter;
use crate::view_state::{SortSpec, ViewState};

/// Which badge inside a row was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Status,
    Priority,
}

impl std::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeKind::Status => write!(f, "Status"),
            BadgeKind::Priority => write!(f, "Priority"),
        }
    }
}

/// A badge click resolved against the dataset, ready to forward
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeClick {
    pub kind: BadgeKind,
    pub id: RowId,
    /// Current label of the badge (e.g. "Blocked")
    pub label: String,
}

/// Owner of rows, view state, and display order for one session
#[derive(Debug, Clone)]
pub struct TableController {
    dataset: Dataset,
    view: ViewState,
    /// Row ids in display order, recomputed whenever sort or data changes
    ordered_ids: Vec<RowId>,
    /// Keyboard cursor, an index into `ordered_ids`
    cursor: usize,
}

impl TableController {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_sort(dataset, None)
    }

    pub fn with_sort(dataset: Dataset, sort: Option<SortSpec>) -> Self {
        let mut controller = Self {
            dataset,
            view: ViewState::with_sort(sort),
            ordered_ids: Vec::new(),
            cursor: 0,
        };
        controller.reorder();
        controller
    }

    // ─────────────────────────────────────────────────────────
    // Interaction events
    // ─────────────────────────────────────────────────────────

    /// Toggle the sort on `field` and recompute the order
    pub fn on_column_header_click(&mut self, field: SortField) {
        info!("Sort by: {}", field);
        let cursor_id = self.cursor_id();
        self.view.toggle_sort(field);
        self.reorder();

        // Keep the cursor on the same row across reorders
        if let Some(id) = cursor_id {
            self.cursor = self.position_of(id).unwrap_or(0);
        }
    }

    /// Toggle selection of `id`; unknown ids are ignored
    ///
    /// Returns whether the event was applied.
    pub fn on_row_click(&mut self, id: RowId) -> bool {
        if !self.dataset.contains(id) {
            warn!("Row click for unknown id {}", id);
            return false;
        }
        info!("Row clicked: {}", id);
        self.view.toggle_selection(id);
        if let Some(pos) = self.position_of(id) {
            self.cursor = pos;
        }
        true
    }

    /// Resolve a badge click without touching any state
    ///
    /// Selection is left exactly as it was: a badge click never counts as a
    /// click on its row.
    pub fn on_badge_click(&self, kind: BadgeKind, id: RowId) -> Option<BadgeClick> {
        let row = self.dataset.get(id)?;
        let label = match kind {
            BadgeKind::Status => row.status.label(),
            BadgeKind::Priority => row.priority.label(),
        };
        info!("{} clicked: {} for row {}", kind, label, id);
        Some(BadgeClick {
            kind,
            id,
            label: label.to_string(),
        })
    }

    /// Swap in a new dataset, keeping sort but dropping a dangling selection
    pub fn replace_rows(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        let ids = self.dataset.ids();
        if self.view.retain_selection(&ids) {
            debug!("Cleared selection of a row that no longer exists");
        }
        self.reorder();
        self.cursor = self.cursor.min(self.ordered_ids.len().saturating_sub(1));
    }

    fn reorder(&mut self) {
        self.ordered_ids = sorter::order(self.dataset.rows(), &self.view)
            .into_iter()
            .map(|r| r.id)
            .collect();
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.dataset.get(id)
    }

    pub fn ordered_ids(&self) -> &[RowId] {
        &self.ordered_ids
    }

    /// Rows in display order
    pub fn ordered_rows(&self) -> Vec<&Row> {
        self.ordered_ids
            .iter()
            .filter_map(|id| self.dataset.get(*id))
            .collect()
    }

    /// Presented rows in display order
    pub fn row_views(&self, currency_suffix: &str) -> Vec<RowView<'_>> {
        presenter::present(&self.ordered_rows(), &self.view, currency_suffix)
    }

    pub fn len(&self) -> usize {
        self.ordered_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_ids.is_empty()
    }

    /// Numbers of the empty rows shown after the data, continuing the ids
    ///
    /// Clamped at `u32::MAX`; empty when the highest id leaves no room.
    pub fn filler_numbers(&self, count: usize) -> std::ops::Range<u32> {
        let start = match self.dataset.max_id() {
            Some(id) => match id.get().checked_add(1) {
                Some(start) => start,
                None => return u32::MAX..u32::MAX,
            },
            None => 1,
        };
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        start..start.saturating_add(count)
    }

    fn position_of(&self, id: RowId) -> Option<usize> {
        self.ordered_ids.iter().position(|r| *r == id)
    }

    // ─────────────────────────────────────────────────────────
    // Cursor (keyboard focus within the table)
    // ─────────────────────────────────────────────────────────

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_id(&self) -> Option<RowId> {
        self.ordered_ids.get(self.cursor).copied()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.ordered_ids.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_first(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_last(&mut self) {
        self.cursor = self.ordered_ids.len().saturating_sub(1);
    }
}
