use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, QueryInput},
};
use crate::domain::router::Direction;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenPalette => {
            state.router.open();
            state.palette_input = QueryInput::default();
        }
        Action::ClosePalette => {
            state.router.close();
        }
        Action::PaletteInput(key) => {
            state.palette_input.input(*key);
            let text = state.palette_input.text();
            if text != state.router.state().query {
                state.router.set_query(&text);
                debug!(
                    query = %text,
                    matches = state.router.state().matches.len(),
                    "palette query"
                );
            }
        }
        Action::PaletteNext => state.router.move_selection(Direction::Next),
        Action::PalettePrev => state.router.move_selection(Direction::Previous),
        Action::PaletteHover(index) => {
            state.router.hover(*index);
        }
        Action::PaletteSelect => commit(state),
        Action::PaletteClick(index) => {
            if state.router.hover(*index) {
                commit(state);
            }
        }
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn commit(state: &mut AppState) {
    let id = state.router.selected_entry().map(|entry| entry.id);
    if let Some(view) = state.router.commit() {
        info!(command = id.unwrap_or_default(), %view, "palette commit");
        state.views.current = view;
    }
}
