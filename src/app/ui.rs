use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{helpers::dim_area, CommandPaletteModal};
use crate::components::sidebar::{Sidebar, SIDEBAR_WIDTH};
use crate::components::timer_card::{card_rect, TimerCard};
use crate::components::views;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Below this width the sidebar is dropped and the view takes the full row.
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Sidebar + view
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let sidebar_width = if area.width >= MIN_WIDTH_FOR_SIDEBAR {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(main[1]);

    AppLayout {
        header: main[0],
        sidebar: middle[0],
        body: middle[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.is_empty() {
        return;
    }
    let layout = get_layout(area);

    // --- Main view ---
    views::render(f, layout.body, app_state);

    let state = &*app_state;
    let theme = &state.theme;

    // --- Chrome ---
    if !layout.header.is_empty() {
        let clock = chrono::Local::now().format("%a %d %b  %H:%M").to_string();
        f.render_widget(Header { state, theme, clock }, layout.header);
    }
    if !layout.sidebar.is_empty() {
        f.render_widget(Sidebar { state, theme }, layout.sidebar);
    }
    if !layout.footer.is_empty() {
        f.render_widget(Footer { state, theme }, layout.footer);
    }

    // --- Timer card ---
    if let Some(card) = card_rect(layout.body, state.timer_display) {
        f.render_widget(
            TimerCard {
                timer: &state.timer,
                display: state.timer_display,
                daily_target: state.daily_target(),
                theme,
            },
            card,
        );
    }

    // --- Command palette ---
    if state.mode() == AppMode::CommandPalette {
        dim_area(f.buffer_mut(), area);
        f.render_widget(
            CommandPaletteModal {
                theme,
                router: &state.router,
                input: &state.palette_input,
            },
            area,
        );
    }
}
