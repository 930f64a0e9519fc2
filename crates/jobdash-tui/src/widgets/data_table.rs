//! Job request table: sortable headers, badges, links, filler rows
//!
//! Cells are painted directly so the same geometry drives both rendering
//! and mouse hit-testing.

use std::ops::Range;

use jobdash_app::{BadgeKind, Message, RowView, UrlDisplay, ViewState};
use jobdash_core::{Field, SortField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};

use super::{draw_item, text_width, truncate};
use crate::theme::{palette, styles};

/// Column widths in `Field::ALL` order
const COLUMN_WIDTHS: [Constraint; 10] = [
    Constraint::Length(3),  // #
    Constraint::Fill(3),    // Job Request
    Constraint::Length(11), // Submitted
    Constraint::Length(15), // Status
    Constraint::Fill(2),    // Submitter
    Constraint::Fill(2),    // URL
    Constraint::Fill(2),    // Assigned
    Constraint::Length(8),  // Priority
    Constraint::Length(10), // Due Date
    Constraint::Length(12), // Est. Value
];

/// Where the header row, columns, and body rows sit inside the table area
#[derive(Debug, Clone)]
pub struct TableGeometry {
    pub header: Rect,
    /// One rect per column, on the header row
    pub columns: Vec<(Field, Rect)>,
    pub body: Rect,
}

impl TableGeometry {
    pub fn new(area: Rect) -> Self {
        let inner = styles::panel_block(false).inner(area);
        let header = Rect { height: inner.height.min(1), ..inner };
        let body = Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        };

        let cells = Layout::horizontal(COLUMN_WIDTHS)
            .spacing(1)
            .split(Rect {
                x: header.x.saturating_add(1),
                width: header.width.saturating_sub(2),
                ..header
            });
        let columns = Field::ALL.into_iter().zip(cells.iter().copied()).collect();

        Self {
            header,
            columns,
            body,
        }
    }

    /// Rows that fit under the header
    pub fn visible_rows(&self) -> usize {
        self.body.height as usize
    }

    fn row_rect(&self, line: usize) -> Rect {
        Rect::new(self.body.x, self.body.y + line as u16, self.body.width, 1)
    }

    fn cell(&self, column: usize, line: usize) -> Rect {
        let col = self.columns[column].1;
        Rect::new(col.x, self.body.y + line as u16, col.width, 1)
    }
}

/// Keep `cursor` inside the `visible` window starting at `offset`
pub fn scroll_offset(offset: usize, cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    if cursor < offset {
        cursor
    } else if cursor >= offset + visible {
        cursor + 1 - visible
    } else {
        offset
    }
}

pub struct DataTable<'a> {
    rows: &'a [RowView<'a>],
    view: &'a ViewState,
    filler: Range<u32>,
    cursor: Option<usize>,
    offset: usize,
    focused: bool,
}

enum Line<'r, 'a> {
    Data(&'r RowView<'a>),
    Filler(u32),
}

impl<'a> DataTable<'a> {
    pub fn new(rows: &'a [RowView<'a>], view: &'a ViewState) -> Self {
        Self {
            rows,
            view,
            filler: 0..0,
            cursor: None,
            offset: 0,
            focused: false,
        }
    }

    /// Empty numbered rows after the data
    pub fn filler(mut self, numbers: Range<u32>) -> Self {
        self.filler = numbers;
        self
    }

    /// Highlight the data row at `index` in display order
    pub fn cursor(mut self, index: Option<usize>) -> Self {
        self.cursor = index;
        self
    }

    /// First line shown under the header
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len() + self.filler.len()
    }

    fn line(&self, index: usize) -> Option<Line<'_, 'a>> {
        if let Some(row) = self.rows.get(index) {
            return Some(Line::Data(row));
        }
        let filler_index = (index - self.rows.len()) as u32;
        let number = self.filler.start + filler_index;
        self.filler.contains(&number).then_some(Line::Filler(number))
    }

    /// Visible lines with their on-screen line number
    fn visible<'s>(
        &'s self,
        geometry: &TableGeometry,
    ) -> impl Iterator<Item = (usize, Line<'s, 'a>)> + 's {
        let offset = self.offset;
        (0..geometry.visible_rows()).filter_map(move |line| self.line(offset + line).map(|l| (line, l)))
    }

    /// Click targets for the area this table will render into
    ///
    /// Row rects come before the badge and link cells they contain, so
    /// with topmost-wins hit-testing a click yields exactly one message.
    pub fn click_targets(&self, area: Rect) -> Vec<(Rect, Message)> {
        let geometry = TableGeometry::new(area);
        let mut targets = Vec::new();

        for (field, rect) in &geometry.columns {
            if let Ok(sort_field) = SortField::try_from(*field) {
                targets.push((*rect, Message::ColumnHeaderClicked { field: sort_field }));
            }
        }

        for (line, item) in self.visible(&geometry) {
            match item {
                Line::Data(view) => {
                    let id = view.row.id;
                    targets.push((geometry.row_rect(line), Message::RowClicked { id }));
                    for (column, (field, _)) in geometry.columns.iter().enumerate() {
                        let cell = geometry.cell(column, line);
                        match field {
                            Field::Status => targets.push((
                                cell,
                                Message::BadgeClicked {
                                    kind: BadgeKind::Status,
                                    id,
                                },
                            )),
                            Field::Priority => targets.push((
                                cell,
                                Message::BadgeClicked {
                                    kind: BadgeKind::Priority,
                                    id,
                                },
                            )),
                            Field::Url if view.url.href().is_some() => {
                                targets.push((cell, Message::LinkClicked { id }))
                            }
                            _ => {}
                        }
                    }
                }
                Line::Filler(number) => {
                    targets.push((
                        geometry.row_rect(line),
                        Message::FillerRowClicked { number },
                    ));
                }
            }
        }

        targets
    }

    fn render_header(&self, geometry: &TableGeometry, buf: &mut Buffer) {
        buf.set_style(geometry.header, styles::column_header());
        for (field, rect) in &geometry.columns {
            let title = match SortField::try_from(*field) {
                Ok(sort_field) => {
                    let arrow = self.view.sort_indicator(sort_field);
                    if arrow.is_empty() {
                        format!("{} ⇅", field.title())
                    } else {
                        format!("{} {}", field.title(), arrow)
                    }
                }
                Err(_) => field.title().to_string(),
            };
            draw_item(buf, *rect, &truncate(&title, rect.width), styles::column_header());
        }
    }

    fn render_row(
        &self,
        geometry: &TableGeometry,
        line: usize,
        index: usize,
        view: &RowView<'_>,
        buf: &mut Buffer,
    ) {
        let under_cursor = self.focused && self.cursor == Some(index);
        let base = styles::row(view.selected, under_cursor);
        let row_rect = geometry.row_rect(line);
        buf.set_style(row_rect, base);
        if under_cursor {
            buf.set_string(row_rect.x, row_rect.y, "▸", base.fg(palette::ACCENT));
        }

        let row = view.row;
        for (column, (field, _)) in geometry.columns.iter().enumerate() {
            let cell = geometry.cell(column, line);
            let (text, style): (String, Style) = match field {
                Field::Id => (row.id.to_string(), base.patch(styles::text_muted())),
                Field::JobRequest => (row.job_request.clone(), base.patch(styles::text_primary())),
                Field::Submitted => (row.submitted.clone(), base.patch(styles::text_muted())),
                Field::Status => {
                    let badge = format!(" {} ", row.status.label());
                    let badge = truncate(&badge, cell.width);
                    let width = text_width(&badge);
                    draw_item(
                        buf,
                        Rect { width, ..cell },
                        &badge,
                        base.patch(styles::badge(view.status_style)),
                    );
                    continue;
                }
                Field::Submitter => (row.submitter.clone(), base.patch(styles::text_primary())),
                Field::Url => match &view.url {
                    UrlDisplay::Link { host, .. } => (host.clone(), base.patch(styles::link())),
                    UrlDisplay::Raw { text } => (text.clone(), base.patch(styles::text_primary())),
                    UrlDisplay::Missing => {
                        (view.url.text().to_string(), base.patch(styles::text_muted()))
                    }
                },
                Field::Assigned => (row.assigned.clone(), base.patch(styles::text_primary())),
                Field::Priority => {
                    let badge = format!(" {} ", row.priority.label());
                    let badge = truncate(&badge, cell.width);
                    let width = text_width(&badge);
                    draw_item(
                        buf,
                        Rect { width, ..cell },
                        &badge,
                        base.patch(styles::badge(view.priority_style)),
                    );
                    continue;
                }
                Field::DueDate => (row.due_date.clone(), base.patch(styles::text_muted())),
                Field::EstValue => (
                    view.est_value.clone(),
                    base.patch(styles::text_primary()).add_modifier(Modifier::BOLD),
                ),
            };
            draw_item(buf, cell, &truncate(&text, cell.width), style);
        }
    }

    fn render_filler(&self, geometry: &TableGeometry, line: usize, number: u32, buf: &mut Buffer) {
        let base = styles::row(false, false);
        buf.set_style(geometry.row_rect(line), base);
        let cell = geometry.cell(0, line);
        draw_item(
            buf,
            cell,
            &number.to_string(),
            base.patch(styles::text_muted()),
        );
    }
}

impl Widget for DataTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        styles::panel_block(self.focused).render(area, buf);

        let geometry = TableGeometry::new(area);
        if geometry.header.height == 0 || geometry.header.width == 0 {
            return;
        }

        self.render_header(&geometry, buf);

        for (line, item) in self.visible(&geometry) {
            match item {
                Line::Data(view) => {
                    let index = self.offset + line;
                    self.render_row(&geometry, line, index, view, buf)
                }
                Line::Filler(number) => self.render_filler(&geometry, line, number, buf),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use jobdash_app::TableController;
    use jobdash_core::{Dataset, RowId};
    use ratatui::layout::Position;

    fn controller() -> TableController {
        TableController::new(Dataset::seed())
    }

    fn area() -> Rect {
        Rect::new(0, 0, 160, 30)
    }

    #[test]
    fn test_renders_headers_and_rows() {
        let c = controller();
        let views = c.row_views("₹");
        let mut term = TestTerminal::with_size(160, 30);
        term.render_widget(DataTable::new(&views, c.view_state()), area());

        for title in ["Job Request", "Submitted ⇅", "Status", "URL", "Due Date ⇅", "Est. Value"] {
            assert!(term.buffer_contains(title), "missing {title}");
        }
        assert!(term.buffer_contains("In-process"));
        assert!(term.buffer_contains("Need to start"));
        assert!(term.buffer_contains("www.aishapatel.com"));
        assert!(term.buffer_contains("N/A"));
        assert!(term.buffer_contains("6,200,000 ₹"));
    }

    #[test]
    fn test_sorted_header_shows_arrow() {
        let mut c = controller();
        c.on_column_header_click(SortField::DueDate);
        c.on_column_header_click(SortField::DueDate);
        let views = c.row_views("₹");

        let mut term = TestTerminal::with_size(160, 30);
        term.render_widget(DataTable::new(&views, c.view_state()), area());

        assert!(term.buffer_contains("Due Date ↓"));
        assert!(term.buffer_contains("Submitted ⇅"));
    }

    #[test]
    fn test_rows_follow_display_order() {
        let mut c = controller();
        c.on_column_header_click(SortField::DueDate);
        let views = c.row_views("₹");

        let mut term = TestTerminal::with_size(160, 30);
        term.render_widget(DataTable::new(&views, c.view_state()), area());

        // First body line is the earliest due-date string (row 3)
        let geometry = TableGeometry::new(area());
        assert!(term.line_contains(geometry.body.y, "Finalize user testing"));
    }

    #[test]
    fn test_filler_rows_continue_numbering() {
        let c = controller();
        let views = c.row_views("₹");
        let mut term = TestTerminal::with_size(160, 30);
        term.render_widget(
            DataTable::new(&views, c.view_state()).filler(c.filler_numbers(20)),
            area(),
        );

        let geometry = TableGeometry::new(area());
        assert!(term.line_contains(geometry.body.y + 5, "6"));
        assert!(term.line_contains(geometry.body.y + 19, "20"));
    }

    #[test]
    fn test_selected_row_is_highlighted() {
        let mut c = controller();
        c.on_row_click(RowId(2));
        let views = c.row_views("₹");
        let mut term = TestTerminal::with_size(160, 30);
        term.render_widget(DataTable::new(&views, c.view_state()), area());

        let geometry = TableGeometry::new(area());
        let cell = &term.buffer()[(geometry.body.x, geometry.body.y + 1)];
        assert_eq!(cell.bg, palette::SELECTED_ROW_BG);
    }

    fn hit(targets: &[(Rect, Message)], x: u16, y: u16) -> Option<&Message> {
        targets
            .iter()
            .rev()
            .find(|(r, _)| r.contains(Position::new(x, y)))
            .map(|(_, m)| m)
    }

    fn column(geometry: &TableGeometry, field: Field) -> Rect {
        geometry
            .columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, r)| *r)
            .unwrap()
    }

    #[test]
    fn test_click_targets_resolve_one_message() {
        let c = controller();
        let views = c.row_views("₹");
        let table = DataTable::new(&views, c.view_state()).filler(c.filler_numbers(20));
        let targets = table.click_targets(area());
        let geometry = TableGeometry::new(area());
        let first = geometry.body.y;

        let status = column(&geometry, Field::Status);
        assert!(matches!(
            hit(&targets, status.x, first),
            Some(Message::BadgeClicked { kind: BadgeKind::Status, id: RowId(1) })
        ));

        let priority = column(&geometry, Field::Priority);
        assert!(matches!(
            hit(&targets, priority.x, first + 1),
            Some(Message::BadgeClicked { kind: BadgeKind::Priority, id: RowId(2) })
        ));

        let url = column(&geometry, Field::Url);
        assert!(matches!(
            hit(&targets, url.x, first),
            Some(Message::LinkClicked { id: RowId(1) })
        ));
        // Row 5 has no URL, so its URL cell selects the row
        assert!(matches!(
            hit(&targets, url.x, first + 4),
            Some(Message::RowClicked { id: RowId(5) })
        ));

        let job = column(&geometry, Field::JobRequest);
        assert!(matches!(
            hit(&targets, job.x, first + 2),
            Some(Message::RowClicked { id: RowId(3) })
        ));

        assert!(matches!(
            hit(&targets, job.x, first + 5),
            Some(Message::FillerRowClicked { number: 6 })
        ));
    }

    #[test]
    fn test_only_sortable_headers_are_clickable() {
        let c = controller();
        let views = c.row_views("₹");
        let targets = DataTable::new(&views, c.view_state()).click_targets(area());
        let geometry = TableGeometry::new(area());

        let submitted = column(&geometry, Field::Submitted);
        assert!(matches!(
            hit(&targets, submitted.x, geometry.header.y),
            Some(Message::ColumnHeaderClicked { field: SortField::Submitted })
        ));

        let status = column(&geometry, Field::Status);
        assert!(hit(&targets, status.x, geometry.header.y).is_none());
    }

    #[test]
    fn test_offset_scrolls_rows() {
        let c = controller();
        let views = c.row_views("₹");
        let table = DataTable::new(&views, c.view_state())
            .filler(c.filler_numbers(20))
            .offset(3);
        let targets = table.click_targets(area());
        let geometry = TableGeometry::new(area());
        let job = column(&geometry, Field::JobRequest);

        assert!(matches!(
            hit(&targets, job.x, geometry.body.y),
            Some(Message::RowClicked { id: RowId(4) })
        ));
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 3, 10), 0);
        assert_eq!(scroll_offset(0, 12, 10), 3);
        assert_eq!(scroll_offset(5, 2, 10), 2);
        assert_eq!(scroll_offset(4, 0, 0), 0);
    }
}
