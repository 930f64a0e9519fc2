//! Sort and selection state for one dashboard session
//!
//! Per sortable field the sort state machine is
//! `Unsorted → Asc(f) → Desc(f) → Asc(f) → …`; toggling a different field
//! always lands on `Asc(g)`. There is no way back to `Unsorted`.

use jobdash_core::{RowId, SortField};
use serde::{Deserialize, Serialize};

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header arrow
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort: a field and a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }
}

/// Current sort key/direction and selected row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    /// `None` means rows are shown in insertion order
    pub sort: Option<SortSpec>,
    /// At most one selected row
    pub selected_row_id: Option<RowId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(sort: Option<SortSpec>) -> Self {
        Self {
            sort,
            selected_row_id: None,
        }
    }

    pub fn sort_key(&self) -> Option<SortField> {
        self.sort.map(|s| s.field)
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort.map(|s| s.direction)
    }

    /// Same field flips direction; any other field starts ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = Some(match self.sort {
            Some(current) if current.field == field => SortSpec {
                field,
                direction: current.direction.toggled(),
            },
            _ => SortSpec::ascending(field),
        });
    }

    /// Same id clears the selection; any other id replaces it
    pub fn toggle_selection(&mut self, id: RowId) {
        self.selected_row_id = if self.selected_row_id == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected_row_id == Some(id)
    }

    /// Drop the selection if its row is no longer in `ids`
    ///
    /// Returns true when a dangling selection was cleared.
    pub fn retain_selection(&mut self, ids: &[RowId]) -> bool {
        match self.selected_row_id {
            Some(id) if !ids.contains(&id) => {
                self.selected_row_id = None;
                true
            }
            _ => false,
        }
    }

    /// Arrow to show next to a column header, empty when not the sort key
    pub fn sort_indicator(&self, field: SortField) -> &'static str {
        match self.sort {
            Some(spec) if spec.field == field => spec.direction.arrow(),
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unsorted_and_unselected() {
        let view = ViewState::new();
        assert_eq!(view.sort, None);
        assert_eq!(view.selected_row_id, None);
    }

    #[test]
    fn test_toggle_sort_cycles_between_asc_and_desc() {
        let mut view = ViewState::new();

        view.toggle_sort(SortField::Submitted);
        assert_eq!(view.sort_direction(), Some(SortDirection::Ascending));

        view.toggle_sort(SortField::Submitted);
        assert_eq!(view.sort_direction(), Some(SortDirection::Descending));

        view.toggle_sort(SortField::Submitted);
        assert_eq!(view.sort_direction(), Some(SortDirection::Ascending));
        assert_eq!(view.sort_key(), Some(SortField::Submitted));
    }

    #[test]
    fn test_toggle_other_field_resets_to_ascending() {
        let mut view = ViewState::new();
        view.toggle_sort(SortField::Submitted);
        view.toggle_sort(SortField::Submitted);

        view.toggle_sort(SortField::DueDate);

        assert_eq!(
            view.sort,
            Some(SortSpec {
                field: SortField::DueDate,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_selection_is_exclusive() {
        let mut view = ViewState::new();
        view.toggle_selection(RowId(5));
        view.toggle_selection(RowId(9));
        assert_eq!(view.selected_row_id, Some(RowId(9)));
        assert!(!view.is_selected(RowId(5)));
    }

    #[test]
    fn test_selection_toggles_off() {
        let mut view = ViewState::new();
        view.toggle_selection(RowId(5));
        view.toggle_selection(RowId(5));
        assert_eq!(view.selected_row_id, None);
    }

    #[test]
    fn test_retain_selection_clears_dangling_id() {
        let mut view = ViewState::new();
        view.toggle_selection(RowId(4));

        assert!(!view.retain_selection(&[RowId(1), RowId(4)]));
        assert_eq!(view.selected_row_id, Some(RowId(4)));

        assert!(view.retain_selection(&[RowId(1), RowId(2)]));
        assert_eq!(view.selected_row_id, None);
    }

    #[test]
    fn test_sort_indicator() {
        let mut view = ViewState::new();
        assert_eq!(view.sort_indicator(SortField::DueDate), "");

        view.toggle_sort(SortField::DueDate);
        assert_eq!(view.sort_indicator(SortField::DueDate), "↑");
        assert_eq!(view.sort_indicator(SortField::Submitted), "");

        view.toggle_sort(SortField::DueDate);
        assert_eq!(view.sort_indicator(SortField::DueDate), "↓");
    }
}
