//! Small bordered list shown under a toggle (notifications, toolbar options)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Clear, Widget},
};

use super::{draw_item, text_width, truncate};
use crate::theme::styles;

pub struct ListPopup<'a> {
    items: &'a [&'a str],
}

impl<'a> ListPopup<'a> {
    pub fn new(items: &'a [&'a str]) -> Self {
        Self { items }
    }

    /// Area below `anchor`, right-aligned to it and kept inside `bounds`
    pub fn area_below(&self, anchor: Rect, bounds: Rect) -> Rect {
        let content = self
            .items
            .iter()
            .map(|s| text_width(s))
            .max()
            .unwrap_or(0);
        let width = (content + 4).min(bounds.width);
        let height = (self.items.len() as u16 + 2).min(bounds.height);

        let x = anchor
            .right()
            .saturating_sub(width)
            .max(bounds.x)
            .min(bounds.right().saturating_sub(width));
        let y = anchor.bottom().min(bounds.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Widget for ListPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block();
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, item) in self.items.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let row = Rect::new(inner.x + 1, y, inner.width.saturating_sub(1), 1);
            draw_item(buf, row, &truncate(item, row.width), styles::text_primary());
        }
    }
}
