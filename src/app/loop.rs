use crate::app::{
    action::Action,
    command::Command,
    input::map_event_to_action,
    reducer,
    state::AppState,
    ticker::{TickDriver, TickSource},
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

/// Redraw cadence. Countdown ticks come from the [`TickDriver`] instead.
const FRAME_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    ticks: Box<dyn TickSource>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, ticks, event_rx)
        .await
        .map(|_| ())
}

/// Runs until the user quits and hands back the final state.
pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    ticks: Box<dyn TickSource>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState<'a>> {
    let mut frames = interval(FRAME_RATE);
    let mut ticker = TickDriver::new(ticks);
    info!(view = %app_state.views.current, "event loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let armed = ticker.is_armed();
        let action = tokio::select! {
            _ = frames.tick() => Some(Action::Tick),

            // Countdown, only polled while the timer runs
            () = ticker.wait(), if armed => Some(Action::TimerTick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Some(cmd) = reducer::update(&mut app_state, action) {
                apply_command(&mut ticker, cmd);
            }
            if app_state.should_quit {
                break;
            }
        }
    }

    // Nothing may tick after the loop is gone
    ticker.disarm();
    info!(
        sessions = app_state.timer.session().session_index,
        "event loop stopped"
    );
    Ok(app_state)
}

fn apply_command(ticker: &mut TickDriver, command: Command) {
    debug!(?command, "runtime command");
    match command {
        Command::ArmTicker => ticker.arm(),
        Command::DisarmTicker => ticker.disarm(),
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
