//! Row schema for job request records
//!
//! Raw records come from an external data source with loosely typed
//! `status` and `priority` strings. [`ingest`] turns each one into a
//! canonical [`Row`] exactly once; everything downstream (ordering,
//! presentation) trusts the enums and never re-validates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Stable identity of a row for the lifetime of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u32);

impl RowId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status / Priority
// ─────────────────────────────────────────────────────────────────────────────

/// Workflow status of a job request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Status {
    #[serde(rename = "In-process")]
    InProcess,
    /// Fallback for any unrecognised raw status
    #[default]
    #[serde(rename = "Need to start")]
    NeedToStart,
    #[serde(rename = "Complete")]
    Complete,
    #[serde(rename = "Blocked")]
    Blocked,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::InProcess,
        Status::NeedToStart,
        Status::Complete,
        Status::Blocked,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Status::InProcess => "In-process",
            Status::NeedToStart => "Need to start",
            Status::Complete => "Complete",
            Status::Blocked => "Blocked",
        }
    }

    /// Exact, case-sensitive match against the display labels
    pub fn parse(raw: &str) -> Option<Status> {
        Self::ALL.into_iter().find(|s| s.label() == raw)
    }

    /// Parse with the ingestion fallback (`Need to start`)
    pub fn from_raw(raw: &str) -> Status {
        Self::parse(raw).unwrap_or_default()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Priority of a job request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Priority {
    High,
    /// Fallback for any unrecognised raw priority
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn parse(raw: &str) -> Option<Priority> {
        Self::ALL.into_iter().find(|p| p.label() == raw)
    }

    /// Parse with the ingestion fallback (`Medium`)
    pub fn from_raw(raw: &str) -> Priority {
        Self::parse(raw).unwrap_or_default()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A record as delivered by a data source, before ingestion
///
/// Every field except `id` defaults, so partial records still ingest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    pub id: u32,
    #[serde(default)]
    pub job_request: String,
    #[serde(default)]
    pub submitted: String,
    #[serde(default, deserialize_with = "loose_label")]
    pub status: String,
    #[serde(default)]
    pub submitter: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub assigned: String,
    #[serde(default, deserialize_with = "loose_label")]
    pub priority: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub est_value: String,
}

/// Accept any JSON value for an enum label; non-strings become `""` and
/// fall back at ingestion
fn loose_label<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(label) => label,
        _ => String::new(),
    })
}

/// A canonical job request row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: RowId,
    pub job_request: String,
    /// Date string, compared as stored
    pub submitted: String,
    pub status: Status,
    pub submitter: String,
    /// May lack a scheme; see the presenter for normalization
    pub url: Option<String>,
    pub assigned: String,
    pub priority: Priority,
    /// Date string, compared as stored
    pub due_date: String,
    /// Display-only value, never parsed as a number
    pub est_value: String,
}

impl Row {
    /// Key used by the sorter for a sortable field
    pub fn sort_key(&self, field: SortField) -> &str {
        match field {
            SortField::Submitted => &self.submitted,
            SortField::DueDate => &self.due_date,
        }
    }
}

/// Turn a raw record into a canonical row. Never fails.
pub fn ingest(raw: RawRow) -> Row {
    let status = Status::parse(&raw.status).unwrap_or_else(|| {
        tracing::debug!(
            "Row {}: unknown status {:?}, using '{}'",
            raw.id,
            raw.status,
            Status::default()
        );
        Status::default()
    });
    let priority = Priority::parse(&raw.priority).unwrap_or_else(|| {
        tracing::debug!(
            "Row {}: unknown priority {:?}, using '{}'",
            raw.id,
            raw.priority,
            Priority::default()
        );
        Priority::default()
    });

    Row {
        id: RowId(raw.id),
        job_request: raw.job_request,
        submitted: raw.submitted,
        status,
        submitter: raw.submitter,
        url: raw.url,
        assigned: raw.assigned,
        priority,
        due_date: raw.due_date,
        est_value: raw.est_value,
    }
}

impl From<RawRow> for Row {
    fn from(raw: RawRow) -> Self {
        ingest(raw)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fields
// ─────────────────────────────────────────────────────────────────────────────

/// Every column of the job request table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    JobRequest,
    Submitted,
    Status,
    Submitter,
    Url,
    Assigned,
    Priority,
    DueDate,
    EstValue,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Id,
        Field::JobRequest,
        Field::Submitted,
        Field::Status,
        Field::Submitter,
        Field::Url,
        Field::Assigned,
        Field::Priority,
        Field::DueDate,
        Field::EstValue,
    ];

    /// Record key, as spelled by the data source
    pub fn key(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::JobRequest => "jobRequest",
            Field::Submitted => "submitted",
            Field::Status => "status",
            Field::Submitter => "submitter",
            Field::Url => "url",
            Field::Assigned => "assigned",
            Field::Priority => "priority",
            Field::DueDate => "dueDate",
            Field::EstValue => "estValue",
        }
    }

    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            Field::Id => "#",
            Field::JobRequest => "Job Request",
            Field::Submitted => "Submitted",
            Field::Status => "Status",
            Field::Submitter => "Submitter",
            Field::Url => "URL",
            Field::Assigned => "Assigned",
            Field::Priority => "Priority",
            Field::DueDate => "Due Date",
            Field::EstValue => "Est. Value",
        }
    }

    pub fn is_sortable(&self) -> bool {
        SortField::try_from(*self).is_ok()
    }

    pub fn from_key(key: &str) -> Result<Field> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| Error::unknown_field(key))
    }
}

/// The subset of fields the table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "submitted")]
    Submitted,
    #[serde(rename = "dueDate")]
    DueDate,
}

impl SortField {
    pub const ALL: [SortField; 2] = [SortField::Submitted, SortField::DueDate];

    pub fn field(&self) -> Field {
        match self {
            SortField::Submitted => Field::Submitted,
            SortField::DueDate => Field::DueDate,
        }
    }

    pub fn key(&self) -> &'static str {
        self.field().key()
    }
}

impl TryFrom<Field> for SortField {
    type Error = Error;

    fn try_from(field: Field) -> Result<Self> {
        match field {
            Field::Submitted => Ok(SortField::Submitted),
            Field::DueDate => Ok(SortField::DueDate),
            other => Err(Error::invalid_field(other.key())),
        }
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "submitted" => Ok(SortField::Submitted),
            "dueDate" | "due-date" | "due_date" => Ok(SortField::DueDate),
            other => Err(Error::invalid_field(other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
