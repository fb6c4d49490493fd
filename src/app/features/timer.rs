use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, TimerDisplay},
};
use crate::domain::timer::TimerStatus;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let before = state.timer.status();
    let changed = match action {
        Action::TimerToggle => state.timer.toggle(),
        Action::TimerStop => state.timer.stop(),
        Action::TimerSkip => state.timer.skip(),
        Action::TimerTick => state.timer.tick(),
        Action::CycleTimerDisplay => {
            state.timer_display = state.timer_display.next();
            return UpdateResult::Handled(None);
        }
        Action::ExpandTimer => {
            state.timer_display = TimerDisplay::Panel;
            return UpdateResult::Handled(None);
        }
        _ => return UpdateResult::NotHandled,
    };

    let after = state.timer.status();
    if changed && before != after {
        debug!(from = ?before, to = ?after, "timer transition");
    }
    if before != TimerStatus::Completed && after == TimerStatus::Completed {
        announce_completion(state, action);
    }

    UpdateResult::Handled(ticker_command(
        before == TimerStatus::Running,
        after == TimerStatus::Running,
    ))
}

/// What the runtime must do with the tick driver after a status change.
pub fn ticker_command(was_running: bool, is_running: bool) -> Option<Command> {
    match (was_running, is_running) {
        (false, true) => Some(Command::ArmTicker),
        (true, false) => Some(Command::DisarmTicker),
        _ => None,
    }
}

fn announce_completion(state: &mut AppState, action: &Action) {
    let session = state.timer.session();
    let task = session.task_label.clone();
    let sessions = session.session_index;
    if *action == Action::TimerSkip {
        info!(task = %task, sessions, "focus session skipped");
        state.set_status(format!("Skipped: {task}"));
    } else {
        info!(task = %task, sessions, "focus session completed");
        state.set_status(format!("Session complete: {task}"));
    }
}
