//! Application state (Model in TEA pattern)

use jobdash_core::Dataset;

use crate::chrome::{BottomItem, ChromeState, HeaderItem, TabNavItem, ToolbarItem};
use crate::config::Settings;
use crate::controller::TableController;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Keys drive focus, the table, and the chrome
    #[default]
    Normal,

    /// Search input mode - capturing text for the header search box
    SearchInput,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Region receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Header,
    Toolbar,
    TabNav,
    #[default]
    Table,
    BottomTabs,
}

impl Focus {
    /// Tab order, top to bottom
    pub const ORDER: [Focus; 5] = [
        Focus::Header,
        Focus::Toolbar,
        Focus::TabNav,
        Focus::Table,
        Focus::BottomTabs,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }

    /// Number of activatable items in a chrome region (0 for the table)
    pub fn item_count(self) -> usize {
        match self {
            Focus::Header => HeaderItem::ALL.len(),
            Focus::Toolbar => ToolbarItem::all().len(),
            Focus::TabNav => TabNavItem::ALL.len(),
            Focus::Table => 0,
            Focus::BottomTabs => BottomItem::all().len(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Rows, view state, and display order
    pub table: TableController,

    /// Header, toolbar, tab bars
    pub chrome: ChromeState,

    pub settings: Settings,

    pub ui_mode: UiMode,

    pub phase: AppPhase,

    pub focus: Focus,

    /// Highlighted item within the focused chrome region
    pub chrome_cursor: usize,

    /// Last interaction, shown in the status line
    pub status: Option<String>,
}

impl AppState {
    pub fn new(table: TableController, settings: Settings) -> Self {
        Self {
            table,
            chrome: ChromeState::default(),
            settings,
            ui_mode: UiMode::default(),
            phase: AppPhase::default(),
            focus: Focus::default(),
            chrome_cursor: 0,
            status: None,
        }
    }

    /// Seed rows, default settings
    pub fn with_seed() -> Self {
        Self::new(TableController::new(Dataset::seed()), Settings::default())
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn chrome_visible(&self) -> bool {
        self.settings.ui.show_chrome
    }

    /// Move focus one region forward; the table is the only stop without chrome
    pub fn focus_next(&mut self) {
        if self.chrome_visible() {
            self.set_focus(self.focus.next());
        }
    }

    pub fn focus_previous(&mut self) {
        if self.chrome_visible() {
            self.set_focus(self.focus.previous());
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.chrome_cursor = 0;
        }
    }

    pub fn chrome_cursor_left(&mut self) {
        self.chrome_cursor = self.chrome_cursor.saturating_sub(1);
    }

    pub fn chrome_cursor_right(&mut self) {
        let count = self.focus.item_count();
        if self.chrome_cursor + 1 < count {
            self.chrome_cursor += 1;
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }
}
