//! Tab navigation row under the toolbar

use jobdash_app::chrome::{TabNavItem, TabNavState, OVERVIEW_TAB_TITLE};
use jobdash_app::StyleToken;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::{draw_item, layout_left, text_width};
use crate::theme::{palette, styles};

pub struct TabNavBar<'a> {
    state: &'a TabNavState,
    focused: Option<usize>,
}

impl<'a> TabNavBar<'a> {
    pub fn new(state: &'a TabNavState) -> Self {
        Self {
            state,
            focused: None,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    fn label(item: TabNavItem) -> String {
        match item {
            TabNavItem::Overview => format!(" {} ", OVERVIEW_TAB_TITLE),
            TabNavItem::AbcBadge => " ABC ".to_string(),
            TabNavItem::Answer => " Answer a question ".to_string(),
            TabNavItem::Extract => " Extract ".to_string(),
            TabNavItem::Add => " + ".to_string(),
        }
    }

    fn style(&self, item: TabNavItem) -> Style {
        match item {
            TabNavItem::Overview if self.state.overview_active => Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::HEADER_ROW_BG)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            TabNavItem::Overview => styles::text_primary(),
            TabNavItem::AbcBadge => styles::badge(StyleToken::Success),
            TabNavItem::Answer => Style::default().fg(palette::ANSWER_FG).bg(
                if self.state.answer_active {
                    palette::ANSWER_ACTIVE_BG
                } else {
                    palette::ANSWER_BG
                },
            ),
            TabNavItem::Extract => Style::default().fg(palette::EXTRACT_FG).bg(
                if self.state.extract_active {
                    palette::EXTRACT_ACTIVE_BG
                } else {
                    palette::EXTRACT_BG
                },
            ),
            TabNavItem::Add => styles::text_muted(),
        }
    }

    /// Clickable rects in `TabNavItem::ALL` order
    pub fn item_areas(&self, area: Rect) -> Vec<Rect> {
        let widths: Vec<u16> = TabNavItem::ALL
            .iter()
            .map(|item| text_width(&Self::label(*item)))
            .collect();
        let row = Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
            ..area
        };
        layout_left(row, &widths, 1)
    }
}

impl Widget for TabNavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::PAGE_BG));

        let rects = self.item_areas(area);
        for (index, (item, rect)) in TabNavItem::ALL.into_iter().zip(rects).enumerate() {
            let style = if self.focused == Some(index) {
                styles::focused_item()
            } else {
                self.style(item)
            };
            draw_item(buf, rect, &Self::label(item), style);
        }
    }
}
