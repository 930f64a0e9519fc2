//! Page chrome state: header, toolbar, tab navigation, bottom tabs
//!
//! All of it is local toggle state with no effect on the table rows.

use std::time::{Duration, Instant};

use crate::view_state::SortDirection;

/// How long a transient toolbar button stays highlighted
pub const TOOLBAR_FLASH: Duration = Duration::from_millis(1000);

/// Unread count shown on the notification bell
pub const NOTIFICATION_COUNT: usize = 2;

pub const NOTIFICATIONS: [&str; NOTIFICATION_COUNT] =
    ["New message from Alice", "Document shared with you"];

pub const TOOLBAR_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDropdown {
    Workspace,
    Folder,
}

impl HeaderDropdown {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderDropdown::Workspace => "Workspace",
            HeaderDropdown::Folder => "Folder 2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderItem {
    Workspace,
    Folder,
    Search,
    Notifications,
    Avatar,
}

impl HeaderItem {
    pub const ALL: [HeaderItem; 5] = [
        HeaderItem::Workspace,
        HeaderItem::Folder,
        HeaderItem::Search,
        HeaderItem::Notifications,
        HeaderItem::Avatar,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    /// At most one breadcrumb dropdown open
    pub active_dropdown: Option<HeaderDropdown>,
    pub search_query: String,
    pub notifications_open: bool,
}

impl HeaderState {
    /// Same dropdown closes, the other one switches
    pub fn toggle_dropdown(&mut self, dropdown: HeaderDropdown) {
        self.active_dropdown = if self.active_dropdown == Some(dropdown) {
            None
        } else {
            Some(dropdown)
        };
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Toolbar
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Sort,
    Filter,
    CellView,
    Import,
    Export,
    Share,
    NewAction,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 7] = [
        ToolbarButton::Sort,
        ToolbarButton::Filter,
        ToolbarButton::CellView,
        ToolbarButton::Import,
        ToolbarButton::Export,
        ToolbarButton::Share,
        ToolbarButton::NewAction,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ToolbarButton::Sort => "sort",
            ToolbarButton::Filter => "filter",
            ToolbarButton::CellView => "cellView",
            ToolbarButton::Import => "import",
            ToolbarButton::Export => "export",
            ToolbarButton::Share => "share",
            ToolbarButton::NewAction => "newAction",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarButton::Sort => "Sort",
            ToolbarButton::Filter => "Filter",
            ToolbarButton::CellView => "Cell view",
            ToolbarButton::Import => "Import",
            ToolbarButton::Export => "Export",
            ToolbarButton::Share => "Share",
            ToolbarButton::NewAction => "New Action",
        }
    }

    /// Whether the highlight fades on its own after [`TOOLBAR_FLASH`]
    pub fn is_transient(&self) -> bool {
        !matches!(self, ToolbarButton::Sort | ToolbarButton::NewAction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Dropdown,
    HideFields,
    Button(ToolbarButton),
}

impl ToolbarItem {
    pub fn all() -> Vec<ToolbarItem> {
        let mut items = vec![ToolbarItem::Dropdown, ToolbarItem::HideFields];
        items.extend(ToolbarButton::ALL.into_iter().map(ToolbarItem::Button));
        items
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToolbarState {
    pub dropdown_open: bool,
    pub fields_hidden: bool,
    pub active_button: Option<ToolbarButton>,
    /// Toolbar's own arrow; independent of the table sort
    pub sort_direction: SortDirection,
    /// Pending highlight reset
    clear_at: Option<Instant>,
}

impl ToolbarState {
    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn toggle_fields_hidden(&mut self) {
        self.fields_hidden = !self.fields_hidden;
    }

    /// Toggle a button's highlight; Sort also flips the arrow
    pub fn click(&mut self, button: ToolbarButton, now: Instant) {
        self.active_button = if self.active_button == Some(button) {
            None
        } else {
            Some(button)
        };

        if button == ToolbarButton::Sort {
            self.sort_direction = self.sort_direction.toggled();
        } else if button.is_transient() {
            self.clear_at = Some(now + TOOLBAR_FLASH);
        }
    }

    /// Clear the highlight once a pending reset is due
    ///
    /// Returns true when something changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                self.active_button.take().is_some()
            }
            _ => false,
        }
    }

    pub fn has_pending_reset(&self) -> bool {
        self.clear_at.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tab navigation
// ─────────────────────────────────────────────────────────────────────────────

pub const OVERVIEW_TAB_TITLE: &str = "Q3 Financial Overview";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabNavItem {
    Overview,
    AbcBadge,
    Answer,
    Extract,
    Add,
}

impl TabNavItem {
    pub const ALL: [TabNavItem; 5] = [
        TabNavItem::Overview,
        TabNavItem::AbcBadge,
        TabNavItem::Answer,
        TabNavItem::Extract,
        TabNavItem::Add,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct TabNavState {
    pub overview_active: bool,
    pub answer_active: bool,
    pub extract_active: bool,
}

impl TabNavState {
    pub fn new() -> Self {
        Self {
            overview_active: true,
            ..Default::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bottom tabs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BottomTab {
    #[default]
    AllOrders,
    Pending,
    Reviewed,
    Arrived,
}

impl BottomTab {
    pub const ALL: [BottomTab; 4] = [
        BottomTab::AllOrders,
        BottomTab::Pending,
        BottomTab::Reviewed,
        BottomTab::Arrived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BottomTab::AllOrders => "All Orders",
            BottomTab::Pending => "Pending",
            BottomTab::Reviewed => "Reviewed",
            BottomTab::Arrived => "Arrived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomItem {
    Tab(BottomTab),
    Add,
}

impl BottomItem {
    pub fn all() -> Vec<BottomItem> {
        let mut items: Vec<BottomItem> = BottomTab::ALL.into_iter().map(BottomItem::Tab).collect();
        items.push(BottomItem::Add);
        items
    }
}

/// All chrome regions together
#[derive(Debug, Clone)]
pub struct ChromeState {
    pub header: HeaderState,
    pub toolbar: ToolbarState,
    pub tab_nav: TabNavState,
    pub bottom_tab: BottomTab,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            header: HeaderState::default(),
            toolbar: ToolbarState::default(),
            tab_nav: TabNavState::new(),
            bottom_tab: BottomTab::default(),
        }
    }
}
