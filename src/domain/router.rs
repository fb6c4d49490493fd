//! Command palette: a live filter over a fixed registry plus a selection
//! cursor. Filtering keeps registry order; nothing is ranked.

use super::models::View;

#[derive(Debug, Clone, PartialEq)]
pub struct CommandEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub target: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandPaletteState {
    pub query: String,
    pub matches: Vec<usize>, // Indices into the registry
    pub selected_index: usize,
    pub is_open: bool,
}

/// Indices of the entries whose label or description contains `query`,
/// ignoring case, in registry order.
#[must_use]
pub fn filter_registry(registry: &[CommandEntry], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    registry
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            entry.label.to_lowercase().contains(&query_lower)
                || entry.description.to_lowercase().contains(&query_lower)
        })
        .map(|(i, _)| i)
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandRouter {
    registry: Vec<CommandEntry>,
    state: CommandPaletteState,
}

impl CommandRouter {
    #[must_use]
    pub fn new(registry: Vec<CommandEntry>) -> Self {
        let matches = (0..registry.len()).collect();
        Self {
            registry,
            state: CommandPaletteState {
                matches,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &CommandPaletteState {
        &self.state
    }

    pub fn registry(&self) -> &[CommandEntry] {
        &self.registry
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.state.matches.iter().map(|&i| &self.registry[i])
    }

    pub fn selected_entry(&self) -> Option<&CommandEntry> {
        self.state
            .matches
            .get(self.state.selected_index)
            .map(|&i| &self.registry[i])
    }

    /// Opens the palette with an empty query and the cursor on the first
    /// entry.
    pub fn open(&mut self) {
        self.state.is_open = true;
        self.set_query("");
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    pub fn set_query(&mut self, text: &str) {
        self.state.query = text.to_string();
        self.state.matches = filter_registry(&self.registry, text);
        self.state.selected_index = 0;
    }

    pub fn move_selection(&mut self, direction: Direction) {
        let n = self.state.matches.len();
        if n == 0 {
            return;
        }
        let i = self.state.selected_index;
        self.state.selected_index = match direction {
            Direction::Next => (i + 1) % n,
            Direction::Previous => (i + n - 1) % n,
        };
    }

    /// Moves the cursor to `index`. Out-of-range indices are rejected.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.state.matches.len() {
            return false;
        }
        self.state.selected_index = index;
        true
    }

    /// Returns the selected target and closes the palette. With no matches
    /// nothing happens and the palette stays open.
    pub fn commit(&mut self) -> Option<View> {
        let target = self.selected_entry()?.target;
        self.close();
        Some(target)
    }
}
