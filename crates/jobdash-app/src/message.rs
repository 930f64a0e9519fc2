//! Message types for the application (TEA pattern)

use jobdash_core::{Dataset, RowId, SortField};

use crate::chrome::{BottomTab, HeaderDropdown, ToolbarButton};
use crate::controller::BadgeKind;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Table Messages
    // ─────────────────────────────────────────────────────────
    /// Sortable column header activated
    ColumnHeaderClicked { field: SortField },
    /// Row activated anywhere outside its badges and link
    RowClicked { id: RowId },
    /// Status or priority badge activated; never selects the row
    BadgeClicked { kind: BadgeKind, id: RowId },
    /// URL cell link activated; never selects the row
    LinkClicked { id: RowId },
    /// Empty row after the data
    FillerRowClicked { number: u32 },

    TableCursorUp,
    TableCursorDown,
    TableCursorFirst,
    TableCursorLast,

    /// Ask the event loop to reload rows from the data source
    ReloadRows,
    /// Freshly loaded rows from the data source
    RowsLoaded { dataset: Dataset },
    /// A forwarded action failed; shown in the status line
    ActionFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    ChromeCursorLeft,
    ChromeCursorRight,

    // ─────────────────────────────────────────────────────────
    // Header Messages
    // ─────────────────────────────────────────────────────────
    HeaderDropdownClicked(HeaderDropdown),
    /// Enter search input mode
    StartSearch,
    /// Search text changed
    SearchInput { text: String },
    /// Leave search input mode, keeping the query
    EndSearch,
    NotificationsClicked,
    AvatarClicked,

    // ─────────────────────────────────────────────────────────
    // Toolbar Messages
    // ─────────────────────────────────────────────────────────
    ToolbarDropdownClicked,
    HideFieldsClicked,
    ToolbarButtonClicked(ToolbarButton),

    // ─────────────────────────────────────────────────────────
    // Tab Navigation Messages
    // ─────────────────────────────────────────────────────────
    OverviewTabClicked,
    AbcBadgeClicked,
    AnswerClicked,
    ExtractClicked,
    NavAddClicked,

    // ─────────────────────────────────────────────────────────
    // Bottom Tab Messages
    // ─────────────────────────────────────────────────────────
    BottomTabClicked(BottomTab),
    BottomAddClicked,
}
