use super::action::Action;
use super::state::AppMode;
use crate::domain::models::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub palette: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();
        let mut palette = HashMap::new();

        // --- Navigation ---
        global.insert(ctrl('k'), Action::OpenPalette);
        global.insert(char_key(':'), Action::OpenPalette);
        global.insert(ctrl('1'), Action::ShowView(View::Inbox));
        global.insert(ctrl('2'), Action::ShowView(View::Tasks));
        global.insert(ctrl('3'), Action::ShowView(View::Calendar));
        global.insert(char_key('i'), Action::ShowView(View::Inbox));
        global.insert(char_key('t'), Action::ShowView(View::Tasks));
        global.insert(char_key('c'), Action::ShowView(View::Calendar));
        global.insert(char_key('w'), Action::ShowView(View::Workspace));
        global.insert(char_key(','), Action::ShowView(View::Settings));
        global.insert(char_key('['), Action::PrevWorkspace);
        global.insert(char_key(']'), Action::NextWorkspace);
        global.insert(key(KeyCode::Tab), Action::NextTab);
        global.insert(char_key('j'), Action::SelectNext);
        global.insert(key(KeyCode::Down), Action::SelectNext);
        global.insert(char_key('k'), Action::SelectPrev);
        global.insert(key(KeyCode::Up), Action::SelectPrev);
        global.insert(key(KeyCode::Enter), Action::FocusSelectedTask);
        global.insert(char_key('q'), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);

        // --- Timer ---
        global.insert(char_key(' '), Action::TimerToggle);
        global.insert(char_key('x'), Action::TimerStop);
        global.insert(char_key('>'), Action::TimerSkip);
        global.insert(char_key('f'), Action::CycleTimerDisplay);

        // --- Command Palette ---
        palette.insert(key(KeyCode::Esc), Action::ClosePalette);
        palette.insert(ctrl('k'), Action::ClosePalette);
        palette.insert(ctrl('c'), Action::ClosePalette);
        palette.insert(key(KeyCode::Enter), Action::PaletteSelect);
        palette.insert(key(KeyCode::Down), Action::PaletteNext);
        palette.insert(key(KeyCode::Up), Action::PalettePrev);
        palette.insert(ctrl('n'), Action::PaletteNext);
        palette.insert(ctrl('p'), Action::PalettePrev);

        match config.profile.as_str() {
            "standard" => {}
            "vim" => {
                palette.insert(ctrl('j'), Action::PaletteNext);
                palette.insert(ctrl('k'), Action::PalettePrev);
            }
            other => warn!(profile = other, "unknown key profile, using standard"),
        }

        if let Some(custom) = &config.custom {
            for (binding, name) in custom {
                match (parse_key(binding), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        global.insert(event, action);
                    }
                    (None, _) => warn!(key = %binding, "ignoring binding with unknown key"),
                    (_, None) => warn!(action = %name, "ignoring binding with unknown action"),
                }
            }
        }

        Self { global, palette }
    }

    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        let event = normalize(event);
        match mode {
            AppMode::CommandPalette => self.palette.get(&event).cloned(),
            AppMode::Normal => self.global.get(&event).cloned(),
        }
    }
}

/// Drops the parts of a key event that bindings don't distinguish on: the
/// event kind/state, and SHIFT on characters (already reflected in the char).
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

/// Parses a key binding such as `ctrl+k`, `shift+tab`, `space` or `>`.
/// Modifier and key names ignore case; a single character keeps it, and
/// `shift+<letter>` means the uppercase letter.
pub fn parse_key(binding: &str) -> Option<KeyEvent> {
    let binding = binding.trim();
    let (mods, name) = match binding.rsplit_once('+') {
        // "+" on its own, or "ctrl++"
        Some((head, "")) => (head.trim_end_matches('+'), "+"),
        Some((head, tail)) => (head, tail),
        None => ("", binding),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let mut chars = name.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
            KeyCode::Char(c.to_ascii_uppercase())
        }
        (Some(c), None) => KeyCode::Char(c),
        _ => match name.to_lowercase().as_str() {
            "space" => KeyCode::Char(' '),
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            _ => return None,
        },
    };

    Some(normalize(KeyEvent::new(code, modifiers)))
}

pub fn parse_action(name: &str) -> Option<Action> {
    let action = match name.trim() {
        "open_palette" => Action::OpenPalette,
        "inbox" => Action::ShowView(View::Inbox),
        "tasks" => Action::ShowView(View::Tasks),
        "calendar" => Action::ShowView(View::Calendar),
        "workspace" => Action::ShowView(View::Workspace),
        "settings" => Action::ShowView(View::Settings),
        "timer_toggle" => Action::TimerToggle,
        "timer_stop" => Action::TimerStop,
        "timer_skip" => Action::TimerSkip,
        "timer_display" => Action::CycleTimerDisplay,
        "next_workspace" => Action::NextWorkspace,
        "prev_workspace" => Action::PrevWorkspace,
        "next_tab" => Action::NextTab,
        "select_next" => Action::SelectNext,
        "select_prev" => Action::SelectPrev,
        "focus_task" => Action::FocusSelectedTask,
        "quit" => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
