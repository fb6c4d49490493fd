use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crate::domain::models::{View, WorkspaceTab};
use crate::domain::sample;
use ratatui::widgets::ListState;
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ShowView(view) => {
            state.views.current = *view;
        }
        Action::SelectWorkspace(index) => {
            if *index < sample::WORKSPACES.len() {
                open_workspace(state, *index);
            }
        }
        Action::NextWorkspace => {
            let next = calculate_new_index(
                Some(state.views.workspace_index),
                1,
                sample::WORKSPACES.len(),
            );
            open_workspace(state, next);
        }
        Action::PrevWorkspace => {
            let prev = calculate_new_index(
                Some(state.views.workspace_index),
                -1,
                sample::WORKSPACES.len(),
            );
            open_workspace(state, prev);
        }
        Action::NextTab => match state.views.current {
            View::Workspace => state.views.workspace_tab = state.views.workspace_tab.next(),
            View::Inbox => {
                state.views.inbox_tab = state.views.inbox_tab.next();
                let first = (!state.views.visible_emails().is_empty()).then_some(0);
                state.views.email_list.select(first);
            }
            _ => {}
        },
        Action::SelectNext => move_selection(state, 1),
        Action::SelectPrev => move_selection(state, -1),
        Action::FocusSelectedTask => focus_selected_task(state),
        _ => return UpdateResult::NotHandled,
    }
    UpdateResult::Handled(None)
}

fn open_workspace(state: &mut AppState, index: usize) {
    if state.views.workspace_index != index {
        state.views.workspace_tab = WorkspaceTab::Overview;
    }
    state.views.workspace_index = index;
    state.views.current = View::Workspace;
}

fn move_selection(state: &mut AppState, delta: isize) {
    let (list, len): (&mut ListState, usize) = match state.views.current {
        View::Inbox => {
            let len = state.views.visible_emails().len();
            (&mut state.views.email_list, len)
        }
        View::Tasks => (&mut state.views.task_list, sample::TASKS.len()),
        _ => return,
    };
    if len == 0 {
        list.select(None);
        return;
    }
    list.select(Some(calculate_new_index(list.selected(), delta, len)));
}

fn calculate_new_index(current: Option<usize>, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    match current {
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
        None => 0,
    }
}

fn focus_selected_task(state: &mut AppState) {
    if state.views.current != View::Tasks {
        return;
    }
    let Some(task) = state
        .views
        .task_list
        .selected()
        .and_then(|i| sample::TASKS.get(i))
    else {
        return;
    };

    if task.done {
        state.set_status(format!("Already done: {}", task.title));
    } else if state.timer.assign_task(task.title) {
        info!(task = task.title, "timer task assigned");
        state.set_status(format!("Focusing on: {}", task.title));
    } else {
        state.set_status("Stop the timer before switching tasks");
    }
}
