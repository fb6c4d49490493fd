use crate::app::command::Command;
use crate::domain::models::View;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation ---
    ShowView(View),
    SelectWorkspace(usize),
    NextWorkspace,
    PrevWorkspace,
    NextTab,
    SelectNext,
    SelectPrev,
    FocusSelectedTask, // Hand the highlighted task to the idle timer

    // --- Focus Timer ---
    TimerToggle,       // Start/pause button
    TimerStop,         // Reset to a fresh session
    TimerSkip,         // Jump straight to completion
    TimerTick,         // One second elapsed (from the tick driver)
    CycleTimerDisplay, // Hidden -> Mini -> Panel
    ExpandTimer,       // Click on the mini card

    // --- Command Palette ---
    OpenPalette,
    ClosePalette,
    PaletteInput(crossterm::event::KeyEvent), // Edit the query
    PaletteNext,
    PalettePrev,
    PaletteHover(usize), // Pointer over a visible row
    PaletteSelect,       // Commit the highlighted entry
    PaletteClick(usize), // Commit the clicked row
}
