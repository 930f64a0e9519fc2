//! Stable row ordering
//!
//! Keys are compared as stored strings (no calendar parsing). Descending
//! order uses the reversed comparator rather than reversing the output, so
//! rows with equal keys keep their input order in both directions.

use std::cmp::Ordering;

use jobdash_core::Row;

use crate::view_state::{SortDirection, ViewState};

/// Derive the display order of `rows` for `view`
///
/// The input slice is never reordered; the result is a fresh sequence of
/// references. Without a sort key the input order is returned unchanged.
pub fn order<'a>(rows: &'a [Row], view: &ViewState) -> Vec<&'a Row> {
    let mut ordered: Vec<&Row> = rows.iter().collect();

    if let Some(spec) = view.sort {
        // `sort_by` is a stable merge sort
        ordered.sort_by(|a, b| {
            let by_key = a.sort_key(spec.field).cmp(b.sort_key(spec.field));
            apply_direction(by_key, spec.direction)
        });
    }

    ordered
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::SortSpec;
    use jobdash_core::{ingest, Dataset, RawRow, RowId, SortField};

    fn row(id: u32, submitted: &str, due_date: &str) -> Row {
        ingest(RawRow {
            id,
            submitted: submitted.to_string(),
            due_date: due_date.to_string(),
            ..Default::default()
        })
    }

    fn ids(rows: &[&Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id.get()).collect()
    }

    fn sorted(field: SortField, direction: SortDirection) -> ViewState {
        ViewState::with_sort(Some(SortSpec { field, direction }))
    }

    #[test]
    fn test_unsorted_returns_input_order() {
        let rows = vec![
            row(3, "b", "b"),
            row(1, "a", "c"),
            row(2, "c", "a"),
        ];
        let ordered = order(&rows, &ViewState::new());
        assert_eq!(ids(&ordered), vec![3, 1, 2]);
    }

    #[test]
    fn test_ascending_is_stable_for_equal_keys() {
        let rows = vec![
            row(1, "", "2024-01-05"),
            row(2, "", "2024-01-05"),
            row(3, "", "2024-01-01"),
        ];
        let ordered = order(&rows, &sorted(SortField::DueDate, SortDirection::Ascending));
        assert_eq!(ids(&ordered), vec![3, 1, 2]);
    }

    #[test]
    fn test_descending_is_stable_for_equal_keys() {
        let rows = vec![
            row(1, "", "2024-01-05"),
            row(2, "", "2024-01-05"),
            row(3, "", "2024-01-01"),
        ];
        let ordered = order(&rows, &sorted(SortField::DueDate, SortDirection::Descending));
        assert_eq!(ids(&ordered), vec![1, 2, 3]);
    }

    #[test]
    fn test_dates_compare_as_strings() {
        // dd-mm-yyyy: lexicographic, not calendar, order
        let rows = vec![row(1, "15-11-2024", ""), row(2, "05-12-2024", "")];
        let ordered = order(&rows, &sorted(SortField::Submitted, SortDirection::Ascending));
        assert_eq!(ids(&ordered), vec![2, 1]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let dataset = Dataset::seed();
        let before = dataset.ids();

        let ordered = order(
            dataset.rows(),
            &sorted(SortField::Submitted, SortDirection::Descending),
        );

        assert_eq!(dataset.ids(), before);
        assert_eq!(ordered.len(), before.len());
    }

    #[test]
    fn test_seed_sorted_by_due_date() {
        let dataset = Dataset::seed();
        let ordered = order(
            dataset.rows(),
            &sorted(SortField::DueDate, SortDirection::Ascending),
        );
        let first: Vec<RowId> = ordered.iter().map(|r| r.id).collect();
        // "10-12-2024" < "15-01-2025" < "20-11-2024" < "30-01-2025" < "30-10-2024"
        assert_eq!(
            first,
            vec![RowId(3), RowId(4), RowId(1), RowId(5), RowId(2)]
        );
    }

    #[test]
    fn test_empty_rows() {
        let rows: Vec<Row> = Vec::new();
        assert!(order(&rows, &sorted(SortField::DueDate, SortDirection::Ascending)).is_empty());
    }
}
