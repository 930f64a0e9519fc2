//! Toolbar: dropdown, hide fields, action buttons

use jobdash_app::chrome::{ToolbarButton, ToolbarItem, ToolbarState};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::{draw_item, layout_left, layout_right, text_width};
use crate::theme::{palette, styles};

pub struct ToolbarBar<'a> {
    state: &'a ToolbarState,
    focused: Option<usize>,
}

impl<'a> ToolbarBar<'a> {
    pub fn new(state: &'a ToolbarState) -> Self {
        Self {
            state,
            focused: None,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    fn label(&self, item: ToolbarItem) -> String {
        match item {
            ToolbarItem::Dropdown => {
                let chevron = if self.state.dropdown_open { "▴" } else { "▾" };
                format!(" Tool bar {} ", chevron)
            }
            ToolbarItem::HideFields => {
                let eye = if self.state.fields_hidden { "◌" } else { "◉" };
                format!(" {} Hide fields ", eye)
            }
            ToolbarItem::Button(ToolbarButton::Sort) => {
                format!(" Sort {} ", self.state.sort_direction.arrow())
            }
            ToolbarItem::Button(ToolbarButton::NewAction) => " + New Action ".to_string(),
            ToolbarItem::Button(button) => format!(" {} ", button.label()),
        }
    }

    fn style(&self, item: ToolbarItem) -> ratatui::style::Style {
        match item {
            ToolbarItem::Dropdown => styles::chrome_item(self.state.dropdown_open),
            ToolbarItem::HideFields => styles::chrome_item(self.state.fields_hidden),
            ToolbarItem::Button(ToolbarButton::NewAction) => styles::primary_button(
                self.state.active_button == Some(ToolbarButton::NewAction),
            ),
            ToolbarItem::Button(button) => {
                styles::chrome_item(self.state.active_button == Some(button))
            }
        }
    }

    /// Clickable rects in `ToolbarItem::all()` order
    pub fn item_areas(&self, area: Rect) -> Vec<Rect> {
        let row = padded(area);
        let items = ToolbarItem::all();
        let widths: Vec<u16> = items
            .iter()
            .map(|item| text_width(&self.label(*item)))
            .collect();

        let mut rects = layout_left(row, &widths[..1], 0);
        rects.extend(layout_right(row, &widths[1..], 1));
        rects
    }
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.min(1),
        ..area
    }
}

impl Widget for ToolbarBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, ratatui::style::Style::default().bg(palette::PAGE_BG));

        let rects = self.item_areas(area);
        for (index, (item, rect)) in ToolbarItem::all().into_iter().zip(rects).enumerate() {
            let style = if self.focused == Some(index) {
                styles::focused_item()
            } else {
                self.style(item)
            };
            draw_item(buf, rect, &self.label(item), style);
        }
    }
}
