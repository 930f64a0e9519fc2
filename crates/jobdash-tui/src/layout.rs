//! Screen layout definitions for the TUI
//!
//! Top to bottom: header, toolbar, tab navigation, table, bottom tabs,
//! status line. Without chrome only the table and status line remain.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Breadcrumb, search, notifications, avatar (bordered)
    pub header: Option<Rect>,
    pub toolbar: Option<Rect>,
    pub tab_nav: Option<Rect>,
    /// Data table (bordered)
    pub table: Rect,
    pub bottom_tabs: Option<Rect>,
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_chrome: bool) -> ScreenAreas {
    if !show_chrome {
        let [table, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        return ScreenAreas {
            header: None,
            toolbar: None,
            tab_nav: None,
            table,
            bottom_tabs: None,
            status,
        };
    }

    let [header, toolbar, tab_nav, table, bottom_tabs, status] = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Length(1), // Toolbar
        Constraint::Length(1), // Tab navigation
        Constraint::Min(3),    // Table (bordered)
        Constraint::Length(1), // Bottom tabs
        Constraint::Length(1), // Status line
    ])
    .areas(area);

    ScreenAreas {
        header: Some(header),
        toolbar: Some(toolbar),
        tab_nav: Some(tab_nav),
        table,
        bottom_tabs: Some(bottom_tabs),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_chrome() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.header.map(|r| r.height), Some(3));
        assert_eq!(layout.table.y, 5);
        assert_eq!(layout.table.height, 17); // 24 - 3 - 1 - 1 - 1 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_without_chrome() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert!(layout.header.is_none());
        assert!(layout.bottom_tabs.is_none());
        assert_eq!(layout.table.height, 23);
        assert_eq!(layout.table.height + layout.status.height, area.height);
    }
}
