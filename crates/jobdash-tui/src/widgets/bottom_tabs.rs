//! Bottom sheet tabs

use jobdash_app::chrome::{BottomItem, BottomTab};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::{draw_item, layout_left, text_width};
use crate::theme::{palette, styles};

pub struct BottomTabsBar {
    active: BottomTab,
    focused: Option<usize>,
}

impl BottomTabsBar {
    pub fn new(active: BottomTab) -> Self {
        Self {
            active,
            focused: None,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    fn label(item: BottomItem) -> String {
        match item {
            BottomItem::Tab(tab) => format!(" {} ", tab.label()),
            BottomItem::Add => " + ".to_string(),
        }
    }

    /// Clickable rects in `BottomItem::all()` order
    pub fn item_areas(&self, area: Rect) -> Vec<Rect> {
        let widths: Vec<u16> = BottomItem::all()
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

impl Widget for BottomTabsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::PAGE_BG));

        let rects = self.item_areas(area);
        for (index, (item, rect)) in BottomItem::all().into_iter().zip(rects).enumerate() {
            let style = if self.focused == Some(index) {
                styles::focused_item()
            } else if item == BottomItem::Tab(self.active) {
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::HOVER_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                styles::text_muted()
            };
            draw_item(buf, rect, &Self::label(item), style);
        }
    }
}
