//! Display derivation for table rows
//!
//! Pure functions from a [`Row`] to what a renderer needs: badge style
//! tokens, a safe link target and its host, and the value column text.
//! No styling system is referenced here; renderers map [`StyleToken`]s to
//! their own colors.

use jobdash_core::prelude::*;
use jobdash_core::{Priority, Row, Status};
use serde::Serialize;
use url::Url;

use crate::view_state::ViewState;

/// Default suffix appended to estimated values
pub const DEFAULT_CURRENCY_SUFFIX: &str = "₹";

/// Text shown in place of a missing URL
pub const MISSING_URL_TEXT: &str = "N/A";

/// Opaque presentation style for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleToken {
    Warning,
    Neutral,
    Success,
    Danger,
    /// Neutral fallback for labels outside the known enums
    Default,
}

pub fn status_style(status: Status) -> StyleToken {
    match status {
        Status::InProcess => StyleToken::Warning,
        Status::NeedToStart => StyleToken::Neutral,
        Status::Complete => StyleToken::Success,
        Status::Blocked => StyleToken::Danger,
    }
}

pub fn priority_style(priority: Priority) -> StyleToken {
    match priority {
        Priority::High => StyleToken::Danger,
        Priority::Medium => StyleToken::Warning,
        Priority::Low => StyleToken::Neutral,
    }
}

/// Style for a raw status label; unknown labels get [`StyleToken::Default`]
pub fn status_style_label(label: &str) -> StyleToken {
    Status::parse(label)
        .map(status_style)
        .unwrap_or(StyleToken::Default)
}

/// Style for a raw priority label; unknown labels get [`StyleToken::Default`]
pub fn priority_style_label(label: &str) -> StyleToken {
    Priority::parse(label)
        .map(priority_style)
        .unwrap_or(StyleToken::Default)
}

// ─────────────────────────────────────────────────────────────────────────────
// URLs
// ─────────────────────────────────────────────────────────────────────────────

/// Prefix `http://` onto scheme-less URLs
///
/// Empty or absent input yields `None`. This is a heuristic, not validation:
/// malformed hosts pass through and surface later in [`hostname`].
pub fn normalize_url(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;
    if raw.starts_with("http://") || raw.starts_with("https://") {
        Some(raw.to_string())
    } else {
        Some(format!("http://{raw}"))
    }
}

/// Host component of an already normalized URL
///
/// Does not normalize on its own; pass the output of [`normalize_url`].
pub fn hostname(normalized_url: &str) -> Result<String> {
    let parsed = Url::parse(normalized_url)
        .map_err(|e| Error::invalid_url(normalized_url, e.to_string()))?;
    parsed
        .host_str()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_url(normalized_url, "URL has no host"))
}

/// What the URL cell shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UrlDisplay {
    /// Clickable link showing only the host
    Link { href: String, host: String },
    /// Normalized text that failed to parse; shown as-is, not clickable
    Raw { text: String },
    /// No URL on the row
    Missing,
}

impl UrlDisplay {
    pub fn text(&self) -> &str {
        match self {
            UrlDisplay::Link { host, .. } => host,
            UrlDisplay::Raw { text } => text,
            UrlDisplay::Missing => MISSING_URL_TEXT,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            UrlDisplay::Link { href, .. } => Some(href),
            _ => None,
        }
    }
}

/// Normalize then extract the host, falling back to the raw text on failure
pub fn present_url(raw: Option<&str>) -> UrlDisplay {
    let Some(href) = normalize_url(raw) else {
        return UrlDisplay::Missing;
    };

    match hostname(&href) {
        Ok(host) => UrlDisplay::Link { href, host },
        Err(e) => {
            debug!("Showing raw URL text: {}", e);
            UrlDisplay::Raw { text: href }
        }
    }
}

/// Value column text: the stored string plus a currency suffix
pub fn format_est_value(value: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        value.to_string()
    } else {
        format!("{value} {suffix}")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Row views
// ─────────────────────────────────────────────────────────────────────────────

/// A row plus everything derived for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView<'a> {
    pub row: &'a Row,
    pub status_style: StyleToken,
    pub priority_style: StyleToken,
    pub url: UrlDisplay,
    pub est_value: String,
    pub selected: bool,
}

impl<'a> RowView<'a> {
    pub fn new(row: &'a Row, view: &ViewState, currency_suffix: &str) -> Self {
        Self {
            row,
            status_style: status_style(row.status),
            priority_style: priority_style(row.priority),
            url: present_url(row.url.as_deref()),
            est_value: format_est_value(&row.est_value, currency_suffix),
            selected: view.is_selected(row.id),
        }
    }
}

/// Present already ordered rows
pub fn present<'a>(
    ordered: &[&'a Row],
    view: &ViewState,
    currency_suffix: &str,
) -> Vec<RowView<'a>> {
    ordered
        .iter()
        .map(|row| RowView::new(row, view, currency_suffix))
        .collect()
}
