//! Row data sources and dataset ingestion
//!
//! A [`RowSource`] hands out raw records; [`Dataset::from_raw`] ingests
//! them once and checks id uniqueness. Nothing downstream reads raw records.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::row::{ingest, RawRow, Row, RowId};

/// Read interface over an external set of raw job request records
pub trait RowSource {
    /// Human-readable description for logs and headless output
    fn name(&self) -> String;

    /// Fetch every raw record
    fn load(&self) -> Result<Vec<RawRow>>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in seed data
// ─────────────────────────────────────────────────────────────────────────────

/// The built-in job request dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedRows;

impl RowSource for SeedRows {
    fn name(&self) -> String {
        "built-in seed data".to_string()
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        Ok(seed_rows())
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u32,
    job_request: &str,
    submitted: &str,
    status: &str,
    submitter: &str,
    url: Option<&str>,
    assigned: &str,
    priority: &str,
    due_date: &str,
    est_value: &str,
) -> RawRow {
    RawRow {
        id,
        job_request: job_request.to_string(),
        submitted: submitted.to_string(),
        status: status.to_string(),
        submitter: submitter.to_string(),
        url: url.map(str::to_string),
        assigned: assigned.to_string(),
        priority: priority.to_string(),
        due_date: due_date.to_string(),
        est_value: est_value.to_string(),
    }
}

/// Raw seed records (ids 1..=5)
pub fn seed_rows() -> Vec<RawRow> {
    vec![
        seed(
            1,
            "Launch social media campaign for product XYZ",
            "15-11-2024",
            "In-process",
            "Aisha Patel",
            Some("www.aishapatel.com"),
            "Sophie Choudhury",
            "Medium",
            "20-11-2024",
            "6,200,000",
        ),
        seed(
            2,
            "Update press kit for company redesign",
            "28-10-2024",
            "Need to start",
            "Irfan Khan",
            Some("www.irfankhanportfolio.com"),
            "Tejas Pandey",
            "High",
            "30-10-2024",
            "3,500,000",
        ),
        seed(
            3,
            "Finalize user testing feedback for app update",
            "05-12-2024",
            "In-process",
            "Mark Johnson",
            Some("https://www.markjohnsondesigns.com/portfolio"),
            "Rachel Lee",
            "Medium",
            "10-12-2024",
            "4,750,000",
        ),
        seed(
            4,
            "Design new features for the website",
            "10-01-2025",
            "Complete",
            "Emily Green",
            Some("www.emilygreenart.com"),
            "Tom Wright",
            "Low",
            "15-01-2025",
            "5,900,000",
        ),
        seed(
            5,
            "Prepare financial report for Q4",
            "25-01-2025",
            "Blocked",
            "Jessica Brown",
            None,
            "Kevin Smith",
            "Low",
            "30-01-2025",
            "2,800,000",
        ),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// JSON file source
// ─────────────────────────────────────────────────────────────────────────────

/// Raw records read from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse already-read file contents
    pub fn parse(content: &str) -> Result<Vec<RawRow>> {
        Ok(serde_json::from_str(content)?)
    }
}

impl RowSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        let content = std::fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dataset
// ─────────────────────────────────────────────────────────────────────────────

/// Ingested rows in insertion order, with unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Ingest every raw record exactly once
    pub fn from_raw(raw: Vec<RawRow>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(raw.len());
        let mut rows = Vec::with_capacity(raw.len());

        for record in raw {
            if !seen.insert(record.id) {
                return Err(Error::DuplicateRowId { id: record.id });
            }
            rows.push(ingest(record));
        }

        Ok(Self { rows })
    }

    /// Load and ingest from a source
    pub fn load(source: &dyn RowSource) -> Result<Self> {
        let raw = source.load()?;
        tracing::info!("Loaded {} raw rows from {}", raw.len(), source.name());
        Self::from_raw(raw)
    }

    /// The built-in dataset
    pub fn seed() -> Self {
        // Seed ids are distinct, so this only ingests
        Self {
            rows: seed_rows().into_iter().map(ingest).collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Highest id in the set, used to number filler rows
    pub fn max_id(&self) -> Option<RowId> {
        self.rows.iter().map(|r| r.id).max()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
