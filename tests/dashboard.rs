//! End-to-end tests through the public API

use job_dashboard::headless::runner::drive;
use job_dashboard::launch::{self, LaunchOptions};
use jobdash_app::config::LinkSettings;
use jobdash_app::process::process_message;
use jobdash_app::{AppState, InputKey, LoggingSink, Message, SortDirection, SortSpec};
use jobdash_core::{RowId, SeedRows, SortField};
use serde_json::Value;
use tempfile::TempDir;

fn quiet_sink() -> LoggingSink {
    LoggingSink::new(LinkSettings {
        open_in_browser: false,
        ..Default::default()
    })
}

fn ids(state: &AppState) -> Vec<u32> {
    state.table.ordered_ids().iter().map(|id| id.get()).collect()
}

#[test]
fn test_header_clicks_cycle_through_sort_states() {
    let mut state = AppState::with_seed();
    let mut sink = quiet_sink();
    assert_eq!(ids(&state), vec![1, 2, 3, 4, 5]);

    let click = || Message::ColumnHeaderClicked {
        field: SortField::DueDate,
    };

    process_message(&mut state, click(), &mut sink, &SeedRows);
    assert_eq!(ids(&state), vec![3, 4, 1, 5, 2]);

    process_message(&mut state, click(), &mut sink, &SeedRows);
    assert_eq!(ids(&state), vec![2, 5, 1, 4, 3]);
    assert_eq!(
        state.table.view_state().sort,
        Some(SortSpec {
            field: SortField::DueDate,
            direction: SortDirection::Descending
        })
    );
}

#[test]
fn test_keyboard_selection_survives_sorting() {
    let mut state = AppState::with_seed();
    let mut sink = quiet_sink();

    for key in [InputKey::Down, InputKey::Down, InputKey::Enter] {
        process_message(&mut state, Message::Key(key), &mut sink, &SeedRows);
    }
    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(3)));

    process_message(&mut state, Message::Key(InputKey::Char('2')), &mut sink, &SeedRows);
    assert_eq!(state.table.view_state().selected_row_id, Some(RowId(3)));

    process_message(&mut state, Message::Key(InputKey::Char('q')), &mut sink, &SeedRows);
    assert!(state.should_quit());
}

#[tokio::test]
async fn test_headless_session_over_json_file() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("rows.json");
    std::fs::write(
        &data,
        r#"[
            {"id": 1, "jobRequest": "Alpha", "submitted": "02-01-2025", "status": "Complete", "url": "alpha.dev"},
            {"id": 2, "jobRequest": "Beta", "submitted": "01-01-2025", "status": "Archived"}
        ]"#,
    )
    .unwrap();

    let options = LaunchOptions {
        config_dir: dir.path().to_path_buf(),
        data: Some(data),
        sort: Some(SortField::Submitted),
        descending: false,
    };
    let (mut state, source) = launch::prepare(&options).await.unwrap();

    let input = concat!(
        r#"{"command":"badge_clicked","kind":"status","id":2}"#,
        "\n",
        r#"{"command":"link_clicked","id":2}"#,
        "\n",
        r#"{"command":"row_clicked","id":2}"#,
        "\n",
    );
    let mut out = Vec::new();
    drive(&mut state, &source, input.as_bytes(), &mut out).unwrap();

    let events: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events[0]["event"], "dataset_loaded");
    assert_eq!(events[1]["rows"][0]["row"]["id"], 2);
    assert_eq!(events[1]["rows"][1]["url"]["host"], "alpha.dev");

    // Unknown status falls back to the default label
    assert_eq!(events[2]["event"], "badge_forwarded");
    assert_eq!(events[2]["label"], "Need to start");

    // Row 2 has no URL, so the link click changes nothing
    assert_eq!(events[3]["event"], "view");
    assert!(events[3]["selected_row_id"].is_null());

    assert_eq!(events[4]["selected_row_id"], 2);
}
