use crate::app::state::QueryInput;
use crate::domain::router::CommandRouter;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub const PALETTE_WIDTH_PERCENT: u16 = 60;
pub const MAX_VISIBLE_ROWS: u16 = 8;

/// Geometry shared by the renderer and the mouse hit-testing in `input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub separator: Rect,
    pub list: Rect,
}

pub fn palette_layout(area: Rect) -> PaletteLayout {
    // Borders + query + separator around the result rows
    let modal = centered_rect_fixed_height(PALETTE_WIDTH_PERCENT, MAX_VISIBLE_ROWS + 4, area);
    let inner = Block::default().borders(Borders::ALL).inner(modal);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Query input
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Results
        ])
        .split(inner);

    PaletteLayout {
        modal,
        query: rows[0],
        separator: rows[1],
        list: rows[2],
    }
}

impl PaletteLayout {
    /// Index of the match drawn on the first result row. The list scrolls
    /// just far enough to keep `selected` on screen.
    pub fn scroll_offset(&self, selected: usize) -> usize {
        match usize::from(self.list.height) {
            0 => 0,
            rows => selected.saturating_sub(rows - 1),
        }
    }

    /// Position in the match list drawn at (`column`, `row`) while
    /// `selected` is highlighted.
    pub fn entry_at(&self, column: u16, row: u16, selected: usize) -> Option<usize> {
        self.list
            .contains(Position::new(column, row))
            .then(|| self.scroll_offset(selected) + usize::from(row - self.list.y))
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.modal.contains(Position::new(column, row))
    }
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub router: &'a CommandRouter,
    pub input: &'a QueryInput<'a>,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        if layout.modal.width == 0 || layout.modal.height == 0 {
            return;
        }

        draw_drop_shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        let state = self.router.state();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {}/{} ", state.matches.len(), self.router.registry().len()),
                    self.theme.dimmed,
                ))
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(layout.modal, buf);
        if layout.query.is_empty() {
            return;
        }

        // Query
        let query = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(layout.query);
        buf.set_string(query[0].x, query[0].y, " > ", self.theme.footer_segment_key);
        Widget::render(self.input, query[1], buf);

        if layout.separator.is_empty() {
            return;
        }
        let separator = "─".repeat(usize::from(layout.separator.width));
        buf.set_string(
            layout.separator.x,
            layout.separator.y,
            separator,
            self.theme.border_focus,
        );

        // Results
        let list = layout.list;
        if list.is_empty() {
            return;
        }
        if state.matches.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No commands found",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(list.x, list.y, &no_results, list.width);
            return;
        }

        let offset = layout.scroll_offset(state.selected_index);
        for (i, entry) in self
            .router
            .visible_entries()
            .enumerate()
            .skip(offset)
            .take(usize::from(list.height))
        {
            let y = list.y + (i - offset) as u16;
            let selected = i == state.selected_index;
            let style = if selected {
                self.theme.list_selected
            } else {
                self.theme.list_item
            };
            if selected {
                buf.set_style(Rect::new(list.x, y, list.width, 1), style);
            }

            let line = Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, style),
                Span::styled(format!("{:<18}", entry.label), style),
                Span::styled(
                    format!(" {}", entry.description),
                    style.add_modifier(Modifier::DIM),
                ),
            ]);
            buf.set_line(list.x, y, &line, list.width);
        }
    }
}
