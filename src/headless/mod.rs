//! Headless mode - NDJSON in, NDJSON out
//!
//! Scripts drive the table without a terminal. Commands arrive on stdin one
//! JSON object per line, and every response is one JSON event per line on
//! stdout.
//!
//! # Example
//!
//! ```json
//! {"command":"column_header_clicked","field":"dueDate"}
//! {"command":"badge_clicked","kind":"status","id":5}
//! ```
//!
//! ```json
//! {"event":"view","sort":{"field":"dueDate","direction":"ascending"},"selected_row_id":null,"rows":[...],"timestamp":1730000000000}
//! {"event":"badge_forwarded","kind":"status","id":5,"label":"Blocked","timestamp":1730000000100}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use jobdash_app::{BadgeClick, BadgeKind, Message, RowView, SortSpec};
use jobdash_core::{Field, RowId, SortField};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent<'a> {
    /// Rows were loaded from the data source
    DatasetLoaded {
        source: String,
        rows: usize,
        timestamp: i64,
    },

    /// Rows in display order plus sort and selection
    View {
        sort: Option<SortSpec>,
        selected_row_id: Option<RowId>,
        rows: Vec<RowView<'a>>,
        timestamp: i64,
    },

    /// A badge click reached the interaction sink
    BadgeForwarded {
        kind: BadgeKind,
        id: RowId,
        label: String,
        timestamp: i64,
    },

    /// A link was activated
    LinkOpened { url: String, timestamp: i64 },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl<'a> HeadlessEvent<'a> {
    /// Write this event as one NDJSON line
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Emit this event to stdout
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn dataset_loaded(source: impl Into<String>, rows: usize) -> Self {
        Self::DatasetLoaded {
            source: source.into(),
            rows,
            timestamp: Self::now(),
        }
    }

    pub fn view(
        sort: Option<SortSpec>,
        selected_row_id: Option<RowId>,
        rows: Vec<RowView<'a>>,
    ) -> Self {
        Self::View {
            sort,
            selected_row_id,
            rows,
            timestamp: Self::now(),
        }
    }

    pub fn badge_forwarded(click: &BadgeClick) -> Self {
        Self::BadgeForwarded {
            kind: click.kind,
            id: click.id,
            label: click.label.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn link_opened(url: impl Into<String>) -> Self {
        Self::LinkOpened {
            url: url.into(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

/// Commands accepted on stdin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HeadlessCommand {
    ColumnHeaderClicked {
        #[serde(deserialize_with = "column_key")]
        field: SortField,
    },
    RowClicked { id: RowId },
    BadgeClicked { kind: BadgeKind, id: RowId },
    LinkClicked { id: RowId },
    /// Load rows from the data source again
    Reload,
    Quit,
}

/// Resolve a column key, telling unknown columns apart from unsortable ones
fn column_key<'de, D>(deserializer: D) -> Result<SortField, D::Error>
where
    D: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Field::from_key(&key)
        .and_then(SortField::try_from)
        .map_err(serde::de::Error::custom)
}

impl HeadlessCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> serde_json::Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(trimmed).map(Some)
    }

    pub fn into_message(self) -> Message {
        match self {
            HeadlessCommand::ColumnHeaderClicked { field } => {
                Message::ColumnHeaderClicked { field }
            }
            HeadlessCommand::RowClicked { id } => Message::RowClicked { id },
            HeadlessCommand::BadgeClicked { kind, id } => Message::BadgeClicked { kind, id },
            HeadlessCommand::LinkClicked { id } => Message::LinkClicked { id },
            HeadlessCommand::Reload => Message::ReloadRows,
            HeadlessCommand::Quit => Message::Quit,
        }
    }
}
