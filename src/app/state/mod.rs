use super::keymap::{KeyConfig, KeyMap};
use crate::config::AppConfig;
use crate::domain::registry::navigation_commands;
use crate::domain::router::CommandRouter;
use crate::domain::timer::TimerEngine;
use std::sync::Arc;
use std::time::Instant;

pub mod input;
pub mod views;

// Re-exports
pub use input::QueryInput;
pub use views::ViewState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Navigating views, driving the timer
    CommandPalette, // Filtering and committing navigation commands
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TimerDisplay {
    Hidden,
    #[default]
    Mini,
    Panel,
}

impl TimerDisplay {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            TimerDisplay::Hidden => TimerDisplay::Mini,
            TimerDisplay::Mini => TimerDisplay::Panel,
            TimerDisplay::Panel => TimerDisplay::Hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub status_message: Option<String>, // "Session complete."
    pub status_clear_time: Option<Instant>,

    // --- Engines (the "Source of Truth") ---
    pub timer: TimerEngine,
    pub router: CommandRouter,

    // --- UI State ---
    pub views: ViewState,
    pub timer_display: TimerDisplay,
    pub palette_input: QueryInput<'a>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub config: AppConfig,
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let timer = TimerEngine::new(config.timer.focus_secs(), config.timer.task.clone())
            .counting_skips(config.timer.count_skipped);
        Self {
            timer,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme: crate::theme::Theme::from_palette_type(config.theme),
            config,
            ..Default::default()
        }
    }

    /// The palette captures all keyboard input while it is open.
    #[must_use]
    pub fn mode(&self) -> AppMode {
        if self.router.is_open() {
            AppMode::CommandPalette
        } else {
            AppMode::Normal
        }
    }

    #[must_use]
    pub fn daily_target(&self) -> u32 {
        self.config.timer.daily_target.max(1)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_clear_time = Some(Instant::now());
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            should_quit: false,
            status_message: None,
            status_clear_time: None,
            timer: TimerEngine::new(config.timer.focus_secs(), config.timer.task.clone()),
            router: CommandRouter::new(navigation_commands()),
            views: ViewState::default(),
            timer_display: TimerDisplay::default(),
            palette_input: QueryInput::default(),
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme: crate::theme::Theme::default(),
            config,
        }
    }
}
