use super::*;
use crate::app::command::Command;
use crate::app::ticker::{ManualTicks, MockTickSource};
use crate::domain::models::View;
use crate::domain::timer::{TimerEngine, TimerStatus};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars()
        .map(|c| press(KeyCode::Char(c), KeyModifiers::NONE))
        .collect()
}

async fn run_with(
    state: AppState<'static>,
    ticks: Box<dyn TickSource>,
    event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> AppState<'static> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(10),
        run_loop_with_events(&mut terminal, state, ticks, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Event loop did not stop"),
    }
}

#[test]
fn test_apply_command_arms_and_disarms() {
    let mut source = MockTickSource::new();
    source.expect_restart().times(1).return_const(());
    let mut ticker = TickDriver::new(Box::new(source));

    apply_command(&mut ticker, Command::ArmTicker);
    assert!(ticker.is_armed());
    apply_command(&mut ticker, Command::DisarmTicker);
    assert!(!ticker.is_armed());
}

#[tokio::test]
async fn test_palette_navigation_end_to_end() {
    let (event_tx, event_rx) = mpsc::channel(100);
    let mut events = vec![press(KeyCode::Char('k'), KeyModifiers::CONTROL)];
    events.extend(typed("tasks"));
    events.push(press(KeyCode::Enter, KeyModifiers::NONE));
    events.push(press(KeyCode::Char('q'), KeyModifiers::NONE));
    for event in events {
        event_tx.send(Ok(event)).await.unwrap();
    }

    let (ticks, _tick_tx) = ManualTicks::new();
    let state = run_with(AppState::default(), Box::new(ticks), event_rx).await;

    assert_eq!(state.views.current, View::Tasks);
    assert!(!state.router.is_open());
    assert!(state.should_quit);
}

#[tokio::test]
async fn test_ticks_only_count_while_running() {
    let (event_tx, event_rx) = mpsc::channel(100);
    let (ticks, tick_tx) = ManualTicks::new();

    // Queued before the timer starts; the loop must not consume them early
    for _ in 0..3 {
        tick_tx.send(()).unwrap();
    }

    let state = AppState {
        timer: TimerEngine::new(3, "Write report"),
        ..Default::default()
    };

    let driver = tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        event_tx
            .send(Ok(press(KeyCode::Char(' '), KeyModifiers::NONE)))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        event_tx
            .send(Ok(press(KeyCode::Char('q'), KeyModifiers::NONE)))
            .await
            .unwrap();
    });

    let state = run_with(state, Box::new(ticks), event_rx).await;
    driver.await.unwrap();

    assert_eq!(state.timer.status(), TimerStatus::Completed);
    assert_eq!(state.timer.session().remaining_secs, 0);
    assert_eq!(state.timer.session().session_index, 1);
    assert_eq!(
        state.status_message.as_deref(),
        Some("Session complete: Write report")
    );
}

#[tokio::test]
async fn test_pause_stops_the_countdown() {
    let (event_tx, event_rx) = mpsc::channel(100);
    let (ticks, tick_tx) = ManualTicks::new();

    let driver = tokio::spawn(async move {
        let pause = std::time::Duration::from_millis(50);
        event_tx
            .send(Ok(press(KeyCode::Char(' '), KeyModifiers::NONE)))
            .await
            .unwrap();
        tokio::time::sleep(pause).await;
        tick_tx.send(()).unwrap();
        tokio::time::sleep(pause).await;
        event_tx
            .send(Ok(press(KeyCode::Char(' '), KeyModifiers::NONE)))
            .await
            .unwrap();
        tokio::time::sleep(pause).await;
        // Paused: these stay queued
        tick_tx.send(()).unwrap();
        tick_tx.send(()).unwrap();
        tokio::time::sleep(pause).await;
        event_tx
            .send(Ok(press(KeyCode::Char('q'), KeyModifiers::NONE)))
            .await
            .unwrap();
        tick_tx
    });

    let state = run_with(AppState::default(), Box::new(ticks), event_rx).await;
    let _tick_tx = driver.await.unwrap();

    assert_eq!(state.timer.status(), TimerStatus::Paused);
    assert_eq!(
        state.timer.session().remaining_secs,
        state.timer.session().duration_secs - 1
    );
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();
    let (ticks, tick_tx) = ManualTicks::new();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=25 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            if rng.gen_bool(0.05) {
                let _ = tick_tx.send(());
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Leave the palette if it is open, then quit
        let _ = event_tx.send(Ok(press(KeyCode::Esc, KeyModifiers::NONE))).await;
        let _ = event_tx
            .send(Ok(press(KeyCode::Char('q'), KeyModifiers::NONE)))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, Box::new(ticks), event_rx),
    )
    .await;

    match result {
        Ok(res) => {
            let state = res.unwrap();
            let session = state.timer.session();
            assert!(session.remaining_secs <= session.duration_secs);
            assert_eq!(
                session.remaining_secs == 0,
                session.status == TimerStatus::Completed
            );
        }
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    press(code, modifiers)
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
