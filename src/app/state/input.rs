use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const PALETTE_PLACEHOLDER: &str = "Search commands...";

/// Single-line text input backing the palette query. Wraps `TextArea` so it
/// can live inside the cloneable, comparable `AppState`.
pub struct QueryInput<'a>(pub TextArea<'a>);

impl QueryInput<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }
}

impl Default for QueryInput<'_> {
    fn default() -> Self {
        Self(styled(TextArea::default()))
    }
}

impl Clone for QueryInput<'_> {
    fn clone(&self) -> Self {
        let mut area = styled(TextArea::new(self.0.lines().to_vec()));
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

fn styled(mut area: TextArea<'_>) -> TextArea<'_> {
    area.set_placeholder_text(PALETTE_PLACEHOLDER);
    area.set_cursor_line_style(Style::default());
    area
}

impl std::fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryInput")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryInput<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryInput<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryInput<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn clone_keeps_text_and_cursor() {
        let mut input = QueryInput::default();
        for c in "inbox".chars() {
            input.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        input.input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));

        let copy = input.clone();
        assert_eq!(copy.text(), "inbox");
        assert_eq!(copy.cursor(), (0, 4));
        assert_eq!(copy, input);
    }
}
