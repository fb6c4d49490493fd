use crate::app::state::AppState;
use crate::domain::models::View;
use crate::domain::sample;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub const SIDEBAR_WIDTH: u16 = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    View(View),
    Workspace(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SidebarRow {
    Section(&'static str),
    Item(SidebarItem),
    Blank,
}

const NAV_ITEMS: [View; 4] = [View::Inbox, View::Tasks, View::Calendar, View::Settings];

fn rows() -> Vec<SidebarRow> {
    let mut rows = vec![SidebarRow::Section("NAVIGATE")];
    rows.extend(NAV_ITEMS.map(|v| SidebarRow::Item(SidebarItem::View(v))));
    rows.push(SidebarRow::Blank);
    rows.push(SidebarRow::Section("WORKSPACES"));
    rows.extend(
        (0..sample::WORKSPACES.len()).map(|i| SidebarRow::Item(SidebarItem::Workspace(i))),
    );
    rows
}

fn frame() -> Block<'static> {
    Block::default().borders(Borders::RIGHT)
}

/// The clickable item drawn at (`column`, `row`) inside a sidebar at `area`.
pub fn item_at(area: Rect, column: u16, row: u16) -> Option<SidebarItem> {
    let inner = frame().inner(area);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    match rows().get(usize::from(row - inner.y))? {
        SidebarRow::Item(item) => Some(*item),
        _ => None,
    }
}

pub struct Sidebar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Sidebar<'_> {
    fn item_line(&self, item: SidebarItem) -> (Line<'static>, bool) {
        let views = &self.state.views;
        let (icon, label, badge, active) = match item {
            SidebarItem::View(view) => {
                let icon = match view {
                    View::Inbox => "✉",
                    View::Tasks => "✓",
                    View::Calendar => "▦",
                    _ => "⚙",
                };
                let badge = match view {
                    View::Inbox => sample::INBOX_BADGE,
                    View::Tasks => sample::TASKS_BADGE,
                    _ => 0,
                };
                (icon, view.label(), badge, views.current == view)
            }
            SidebarItem::Workspace(i) => {
                let workspace = &sample::WORKSPACES[i];
                let active = views.current == View::Workspace && views.workspace_index == i;
                ("#", workspace.name, workspace.unread, active)
            }
        };

        let style = if active {
            self.theme.sidebar_active
        } else {
            self.theme.sidebar_item
        };
        let mut spans = vec![Span::styled(format!(" {icon} {label}"), style)];
        if badge > 0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {badge} "), self.theme.badge));
        }
        (Line::from(spans), active)
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = frame()
            .border_style(self.theme.border)
            .style(self.theme.sidebar);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        for (i, row) in rows().into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            match row {
                SidebarRow::Section(name) => {
                    buf.set_string(inner.x + 1, y, name, self.theme.sidebar_section);
                }
                SidebarRow::Item(item) => {
                    let (line, active) = self.item_line(item);
                    if active {
                        buf.set_style(
                            Rect::new(inner.x, y, inner.width, 1),
                            self.theme.sidebar_active,
                        );
                    }
                    buf.set_line(inner.x, y, &line, inner.width);
                }
                SidebarRow::Blank => {}
            }
        }

        // User card pinned to the bottom
        let user = [
            (format!(" {}", sample::USER_NAME), self.theme.list_item),
            (format!(" {}", sample::USER_EMAIL), self.theme.dimmed),
        ];
        let top = inner.bottom().saturating_sub(user.len() as u16);
        if top > inner.y + rows().len() as u16 {
            for (offset, (text, style)) in user.into_iter().enumerate() {
                buf.set_stringn(
                    inner.x,
                    top + offset as u16,
                    text,
                    usize::from(inner.width),
                    style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_resolve_to_items() {
        let area = Rect::new(0, 1, SIDEBAR_WIDTH, 20);
        // Row 0 of the inner area is the NAVIGATE heading
        assert_eq!(item_at(area, 2, 1), None);
        assert_eq!(item_at(area, 2, 2), Some(SidebarItem::View(View::Inbox)));
        assert_eq!(item_at(area, 2, 5), Some(SidebarItem::View(View::Settings)));
        assert_eq!(item_at(area, 2, 6), None);
        assert_eq!(item_at(area, 2, 8), Some(SidebarItem::Workspace(0)));
        assert_eq!(item_at(area, 2, 10), Some(SidebarItem::Workspace(2)));
        assert_eq!(item_at(area, 2, 11), None);
        // The right border is not clickable
        assert_eq!(item_at(area, SIDEBAR_WIDTH - 1, 2), None);
    }

    #[test]
    fn renders_badges_and_user() {
        let state = AppState::default();
        let area = Rect::new(0, 0, SIDEBAR_WIDTH, 20);
        let mut buf = Buffer::empty(area);
        Sidebar {
            state: &state,
            theme: &state.theme,
        }
        .render(area, &mut buf);

        let text: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        assert!(text[1].contains("Inbox") && text[1].contains(" 12 "));
        assert!(text[7].contains("Acme Corp"));
        assert!(text[19].contains("john@example.com"));
    }
}
