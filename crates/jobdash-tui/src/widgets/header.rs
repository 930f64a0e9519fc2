//! Header bar: breadcrumb, sheet search, notifications, avatar

use jobdash_app::chrome::{HeaderDropdown, HeaderState, NOTIFICATION_COUNT};
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};

use super::{draw_item, layout_left, layout_right, text_width};
use crate::theme::{palette, styles};

const SEARCH_PLACEHOLDER: &str = "Search within sheet";
const SEARCH_WIDTH: u16 = 26;
const SHEET_NAME: &str = "Spreadsheet 3";

/// Header with rects for each item in `HeaderItem::ALL` order
pub struct DashboardHeader<'a> {
    state: &'a HeaderState,
    focused: Option<usize>,
    searching: bool,
}

impl<'a> DashboardHeader<'a> {
    pub fn new(state: &'a HeaderState) -> Self {
        Self {
            state,
            focused: None,
            searching: false,
        }
    }

    /// Highlight the item at `index` as keyboard-focused
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn searching(mut self, searching: bool) -> Self {
        self.searching = searching;
        self
    }

    fn dropdown_label(&self, dropdown: HeaderDropdown) -> String {
        let chevron = if self.state.active_dropdown == Some(dropdown) {
            "▴"
        } else {
            "▾"
        };
        format!(" {} {} ", dropdown.label(), chevron)
    }

    fn search_label(&self) -> String {
        if self.state.search_query.is_empty() && !self.searching {
            format!(" ⌕ {}", SEARCH_PLACEHOLDER)
        } else if self.searching {
            format!(" ⌕ {}▏", self.state.search_query)
        } else {
            format!(" ⌕ {}", self.state.search_query)
        }
    }

    /// Labels in `HeaderItem::ALL` order
    fn labels(&self) -> [String; 5] {
        [
            self.dropdown_label(HeaderDropdown::Workspace),
            self.dropdown_label(HeaderDropdown::Folder),
            self.search_label(),
            format!(" ◉ {} ", NOTIFICATION_COUNT),
            " JD John Doe ".to_string(),
        ]
    }

    /// Clickable rects in `HeaderItem::ALL` order
    pub fn item_areas(&self, area: Rect) -> Vec<Rect> {
        let inner = content_row(area);
        let labels = self.labels();

        let left_widths = [text_width(&labels[0]), text_width(&labels[1])];
        let right_widths = [
            SEARCH_WIDTH,
            text_width(&labels[3]),
            text_width(&labels[4]),
        ];

        let mut rects = layout_left(inner, &left_widths, 0);
        rects.extend(layout_right(inner, &right_widths, 1));
        rects
    }
}

/// Single content row inside the border, with one cell of padding
fn content_row(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2).min(1),
    }
}

impl Widget for DashboardHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        block.render(area, buf);

        let inner = content_row(area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let labels = self.labels();
        let rects = self.item_areas(area);

        for (index, (label, rect)) in labels.iter().zip(rects.iter()).enumerate() {
            let style = if self.focused == Some(index) {
                styles::focused_item()
            } else {
                match index {
                    0 => styles::chrome_item(
                        self.state.active_dropdown == Some(HeaderDropdown::Workspace),
                    ),
                    1 => styles::chrome_item(
                        self.state.active_dropdown == Some(HeaderDropdown::Folder),
                    ),
                    2 if self.state.search_query.is_empty() && !self.searching => {
                        styles::text_muted().bg(palette::HEADER_ROW_BG)
                    }
                    2 => styles::text_primary().bg(palette::HEADER_ROW_BG),
                    3 => styles::chrome_item(self.state.notifications_open),
                    _ => styles::text_primary(),
                }
            };
            draw_item(buf, *rect, label, style);
        }

        // Non-clickable tail of the breadcrumb
        let crumb_x = rects[1].right();
        let crumb = format!("/ {}", SHEET_NAME);
        let crumb_rect = Rect {
            x: crumb_x,
            width: inner.right().saturating_sub(crumb_x).min(text_width(&crumb)),
            ..inner
        };
        draw_item(
            buf,
            crumb_rect,
            &crumb,
            styles::text_primary().add_modifier(Modifier::BOLD),
        );
    }
}
