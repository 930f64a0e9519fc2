//! Configuration types for the job dashboard
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `TableSettings`, `LinkSettings`, `UiSettings` - Per-area sections

use jobdash_core::{Result, SortField};
use serde::{Deserialize, Serialize};

use crate::presenter::DEFAULT_CURRENCY_SUFFIX;
use crate::view_state::{SortDirection, SortSpec};

/// Application settings (.jobdash/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub table: TableSettings,

    #[serde(default)]
    pub links: LinkSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Initial sort from `[table]`, validated against the sortable fields
    pub fn initial_sort(&self) -> Result<Option<SortSpec>> {
        let Some(key) = self.table.initial_sort.as_deref() else {
            return Ok(None);
        };
        let field: SortField = key.parse()?;
        Ok(Some(SortSpec {
            field,
            direction: self.table.initial_direction,
        }))
    }
}

/// Table settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableSettings {
    /// Field to sort by at startup ("submitted" or "dueDate"); unset = insertion order
    #[serde(default)]
    pub initial_sort: Option<String>,

    /// Direction for `initial_sort`
    #[serde(default)]
    pub initial_direction: SortDirection,

    /// Suffix appended to estimated values
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Number of empty numbered rows rendered after the data
    #[serde(default = "default_filler_rows")]
    pub filler_rows: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            initial_sort: None,
            initial_direction: SortDirection::Ascending,
            currency_suffix: default_currency_suffix(),
            filler_rows: default_filler_rows(),
        }
    }
}

fn default_currency_suffix() -> String {
    DEFAULT_CURRENCY_SUFFIX.to_string()
}

fn default_filler_rows() -> usize {
    20
}

fn default_true() -> bool {
    true
}

/// Link handling settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkSettings {
    /// Open clicked links in a browser (otherwise they are only logged)
    #[serde(default = "default_true")]
    pub open_in_browser: bool,

    /// Browser command; empty = platform default opener
    #[serde(default)]
    pub browser: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            open_in_browser: true,
            browser: String::new(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render header, toolbar, tab bars around the table
    #[serde(default = "default_true")]
    pub show_chrome: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_chrome: true }
    }
}
