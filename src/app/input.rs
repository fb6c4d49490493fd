use crate::app::{
    action::Action,
    state::{AppMode, AppState, TimerDisplay},
    ui,
};
use crate::components::modals::palette_layout;
use crate::components::sidebar::{self, SidebarItem};
use crate::components::timer_card::card_rect;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => match app_state.mode() {
            // Anything that isn't a palette binding edits the query
            AppMode::CommandPalette => app_state
                .keymap
                .get_action(key, AppMode::CommandPalette)
                .or(Some(Action::PaletteInput(key))),
            AppMode::Normal => app_state.keymap.get_action(key, AppMode::Normal),
        },
        Event::Mouse(mouse) => match app_state.mode() {
            AppMode::CommandPalette => map_palette_mouse(mouse, app_state, area),
            AppMode::Normal => map_normal_mouse(mouse, app_state, area),
        },
        _ => None,
    }
}

fn map_palette_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = palette_layout(area);
    let palette = app_state.router.state();
    let visible = palette.matches.len();
    let row = layout
        .entry_at(mouse.column, mouse.row, palette.selected_index)
        .filter(|&i| i < visible);

    match mouse.kind {
        MouseEventKind::Moved => row.map(Action::PaletteHover),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(i) = row {
                Some(Action::PaletteClick(i))
            } else if layout.contains(mouse.column, mouse.row) {
                None
            } else {
                Some(Action::ClosePalette)
            }
        }
        MouseEventKind::ScrollDown => Some(Action::PaletteNext),
        MouseEventKind::ScrollUp => Some(Action::PalettePrev),
        _ => None,
    }
}

fn map_normal_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    let layout = ui::get_layout(area);
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(card) = card_rect(layout.body, app_state.timer_display) {
                if card.contains(pos) {
                    return (app_state.timer_display == TimerDisplay::Mini)
                        .then_some(Action::ExpandTimer);
                }
            }
            match sidebar::item_at(layout.sidebar, mouse.column, mouse.row)? {
                SidebarItem::View(view) => Some(Action::ShowView(view)),
                SidebarItem::Workspace(i) => Some(Action::SelectWorkspace(i)),
            }
        }
        MouseEventKind::ScrollDown if layout.body.contains(pos) => Some(Action::SelectNext),
        MouseEventKind::ScrollUp if layout.body.contains(pos) => Some(Action::SelectPrev),
        _ => None,
    }
}
