//! Bottom status line: last interaction on the left, key hints on the right

use jobdash_app::UiMode;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::{draw_item, text_width, truncate};
use crate::theme::{palette, styles};

const HINTS: &str = "Tab focus  ↑↓ move  ⏎ select  s/p badge  o link  1/2 sort  / search  r reload  q quit";
const SEARCH_HINTS: &str = "⏎/Esc done  ^U clear";

pub struct StatusBar<'a> {
    status: Option<&'a str>,
    mode: UiMode,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a str>, mode: UiMode) -> Self {
        Self { status, mode }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(palette::HEADER_ROW_BG));
        if area.width < 2 || area.height == 0 {
            return;
        }

        let hints = match self.mode {
            UiMode::Normal => HINTS,
            UiMode::SearchInput => SEARCH_HINTS,
        };
        let hints_width = text_width(hints).min(area.width / 2 + area.width / 4);
        let hints_rect = Rect::new(
            area.right() - hints_width - 1,
            area.y,
            hints_width,
            1,
        );
        draw_item(
            buf,
            hints_rect,
            &truncate(hints, hints_width),
            styles::text_muted().bg(palette::HEADER_ROW_BG),
        );

        if let Some(status) = self.status {
            let width = hints_rect.x.saturating_sub(area.x + 2);
            let rect = Rect::new(area.x + 1, area.y, width, 1);
            draw_item(
                buf,
                rect,
                &truncate(status, width),
                styles::text_primary().bg(palette::HEADER_ROW_BG),
            );
        }
    }
}
