//! Main render/view function (View in TEA pattern)
//!
//! Rendering also records where every clickable item landed, so mouse
//! clicks are resolved against exactly what is on screen.


use jobdash_app::chrome::{NOTIFICATIONS, TOOLBAR_OPTIONS};
use jobdash_app::handler::item_message;
use jobdash_app::{AppState, Focus, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::hit_test::HitMap;
use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    scroll_offset, BottomTabsBar, DashboardHeader, DataTable, ListPopup, StatusBar, TabNavBar,
    TableGeometry, ToolbarBar,
};

/// Render-side state that outlives a single frame
#[derive(Debug, Default)]
pub struct FrameState {
    /// Click targets of the last frame
    pub hit_map: HitMap,
    /// First table line shown; follows the cursor
    pub table_offset: usize,
}

impl FrameState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn register(hit_map: &mut HitMap, focus: Focus, rects: &[Rect]) {
    for (index, rect) in rects.iter().enumerate() {
        if let Some(message) = item_message(focus, index) {
            hit_map.push(*rect, message);
        }
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `AppState`; only the scroll offset and the hit map
/// in `frame_state` are updated.
pub fn view(frame: &mut Frame, state: &AppState, frame_state: &mut FrameState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(palette::PAGE_BG)), area);

    frame_state.hit_map.clear();
    let areas = layout::create(area, state.chrome_visible());
    let focused = |focus: Focus| (state.focus == focus).then_some(state.chrome_cursor);

    let mut header_items = Vec::new();
    if let Some(rect) = areas.header {
        let header = DashboardHeader::new(&state.chrome.header)
            .focused(focused(Focus::Header))
            .searching(state.ui_mode == UiMode::SearchInput);
        header_items = header.item_areas(rect);
        register(&mut frame_state.hit_map, Focus::Header, &header_items);
        frame.render_widget(header, rect);
    }

    let mut toolbar_items = Vec::new();
    if let Some(rect) = areas.toolbar {
        let toolbar = ToolbarBar::new(&state.chrome.toolbar).focused(focused(Focus::Toolbar));
        toolbar_items = toolbar.item_areas(rect);
        register(&mut frame_state.hit_map, Focus::Toolbar, &toolbar_items);
        frame.render_widget(toolbar, rect);
    }

    if let Some(rect) = areas.tab_nav {
        let tab_nav = TabNavBar::new(&state.chrome.tab_nav).focused(focused(Focus::TabNav));
        register(&mut frame_state.hit_map, Focus::TabNav, &tab_nav.item_areas(rect));
        frame.render_widget(tab_nav, rect);
    }

    render_table(frame, state, frame_state, areas.table);

    if let Some(rect) = areas.bottom_tabs {
        let tabs = BottomTabsBar::new(state.chrome.bottom_tab).focused(focused(Focus::BottomTabs));
        register(&mut frame_state.hit_map, Focus::BottomTabs, &tabs.item_areas(rect));
        frame.render_widget(tabs, rect);
    }

    frame.render_widget(
        StatusBar::new(state.status.as_deref(), state.ui_mode),
        areas.status,
    );

    // Popups paint last and swallow clicks on whatever they cover
    if state.chrome.header.notifications_open {
        if let Some(anchor) = header_items.get(3) {
            render_popup(frame, &mut frame_state.hit_map, &NOTIFICATIONS, *anchor, area);
        }
    }
    if state.chrome.toolbar.dropdown_open {
        if let Some(anchor) = toolbar_items.first() {
            render_popup(frame, &mut frame_state.hit_map, &TOOLBAR_OPTIONS, *anchor, area);
        }
    }
}

fn render_table(frame: &mut Frame, state: &AppState, frame_state: &mut FrameState, area: Rect) {
    let table = &state.table;
    let views = table.row_views(&state.settings.table.currency_suffix);
    let visible = TableGeometry::new(area).visible_rows();

    let cursor = (!table.is_empty()).then(|| table.cursor());
    if let Some(cursor) = cursor {
        frame_state.table_offset = scroll_offset(frame_state.table_offset, cursor, visible);
    } else {
        frame_state.table_offset = 0;
    }

    let widget = DataTable::new(&views, table.view_state())
        .filler(table.filler_numbers(state.settings.table.filler_rows))
        .cursor(cursor)
        .offset(frame_state.table_offset)
        .focused(state.focus == Focus::Table);

    for (rect, message) in widget.click_targets(area) {
        frame_state.hit_map.push(rect, message);
    }
    frame.render_widget(widget, area);
}

fn render_popup(frame: &mut Frame, hit_map: &mut HitMap, items: &[&str], anchor: Rect, bounds: Rect) {
    let popup = ListPopup::new(items);
    let rect = popup.area_below(anchor, bounds);
    hit_map.push_blocker(rect);
    frame.render_widget(popup, rect);
}
