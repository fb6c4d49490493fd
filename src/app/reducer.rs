use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};
use std::time::Duration;

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if let Some(set_at) = state.status_clear_time {
                if set_at.elapsed() >= STATUS_TTL {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
            return None;
        }
        Action::Resize(..) => return None, // Layout is recomputed on every draw
        Action::Quit => {
            state.should_quit = true;
            return None;
        }
        _ => {}
    }

    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::palette::update,
        features::timer::update,
        features::navigation::update,
    ];
    for handler in handlers {
        if let UpdateResult::Handled(cmd) = handler(state, &action) {
            return cmd;
        }
    }
    None
}
