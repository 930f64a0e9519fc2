//! Custom widget components

mod bottom_tabs;
mod data_table;
mod header;
mod popup;
mod status_bar;
mod tab_nav;
mod toolbar;

pub use bottom_tabs::BottomTabsBar;
pub use data_table::{scroll_offset, DataTable, TableGeometry};
pub use header::DashboardHeader;
pub use popup::ListPopup;
pub use status_bar::StatusBar;
pub use tab_nav::TabNavBar;
pub use toolbar::ToolbarBar;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in cells
pub(crate) fn text_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

/// Cut `text` to at most `max` cells, marking the cut with an ellipsis
pub(crate) fn truncate(text: &str, max: u16) -> String {
    let max = max as usize;
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Lay out items of the given widths left to right from `area.x`
///
/// Items that do not fit are clipped to the area (possibly to zero width).
pub(crate) fn layout_left(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let mut x = area.x;
    widths
        .iter()
        .map(|w| {
            let rect = clip(area, x, *w);
            x = x.saturating_add(*w).saturating_add(gap);
            rect
        })
        .collect()
}

/// Lay out items so the last one ends at the right edge of `area`
pub(crate) fn layout_right(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    let total: u16 = widths
        .iter()
        .fold(0u16, |acc, w| acc.saturating_add(*w))
        .saturating_add(gap.saturating_mul(widths.len().saturating_sub(1) as u16));
    let start = area.right().saturating_sub(total).max(area.x);
    layout_left(Rect { x: start, ..area }, widths, gap)
}

fn clip(area: Rect, x: u16, width: u16) -> Rect {
    let x = x.min(area.right());
    let width = width.min(area.right() - x);
    Rect::new(x, area.y, width, area.height.min(1))
}

/// Draw `text` into a one-row item rect, truncated to fit
pub(crate) fn draw_item(buf: &mut Buffer, rect: Rect, text: &str, style: Style) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    buf.set_style(rect, style);
    buf.set_stringn(rect.x, rect.y, text, rect.width as usize, style);
}
