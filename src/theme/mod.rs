use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_view: Style,
    pub header_clock: Style,
    pub header_active: Style,

    pub sidebar: Style,
    pub sidebar_item: Style,
    pub sidebar_active: Style,
    pub sidebar_section: Style,
    pub badge: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,

    pub email_unread: Style,
    pub email_starred: Style,
    pub email_summary: Style,
    pub priority_high: Style,
    pub priority_medium: Style,
    pub priority_low: Style,
    pub task_done: Style,
    pub activity_email: Style,
    pub activity_task: Style,
    pub activity_doc: Style,

    pub timer_clock: Style,
    pub timer_gauge: Style,
    pub timer_gauge_done: Style,
    pub timer_gauge_track: Style,
    pub timer_idle: Style,
    pub timer_running: Style,
    pub timer_paused: Style,
    pub timer_completed: Style,

    pub status_info: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let badge = |bg: Color| Style::default().bg(bg).fg(p.crust).add_modifier(Modifier::BOLD);

        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: badge(p.blue),
            header_view: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_clock: Style::default().bg(p.surface0).fg(p.subtext0),
            header_active: badge(p.green),

            sidebar: Style::default().bg(p.mantle).fg(p.text),
            sidebar_item: Style::default().fg(p.subtext0),
            sidebar_active: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            sidebar_section: Style::default()
                .fg(p.overlay0)
                .add_modifier(Modifier::BOLD),
            badge: badge(p.red),

            tab_active: Style::default()
                .fg(p.blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tab_inactive: Style::default().fg(p.subtext0),

            email_unread: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            email_starred: Style::default().fg(p.yellow),
            email_summary: Style::default().fg(p.blue).add_modifier(Modifier::ITALIC),
            priority_high: Style::default().fg(p.red),
            priority_medium: Style::default().fg(p.yellow),
            priority_low: Style::default().fg(p.green),
            task_done: Style::default()
                .fg(p.overlay0)
                .add_modifier(Modifier::CROSSED_OUT),
            activity_email: Style::default().fg(p.blue),
            activity_task: Style::default().fg(p.green),
            activity_doc: Style::default().fg(p.mauve),

            timer_clock: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            timer_gauge: Style::default().fg(p.mauve).bg(p.surface0),
            timer_gauge_done: Style::default().fg(p.green).bg(p.surface0),
            timer_gauge_track: Style::default().fg(p.surface1),
            timer_idle: badge(p.overlay0),
            timer_running: badge(p.green),
            timer_paused: badge(p.yellow),
            timer_completed: badge(p.mauve),

            status_info: badge(p.teal),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            highlight: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(dim_color(p.blue, 0.35))
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_produce_distinct_themes() {
        let mocha = Theme::from_palette_type(PaletteType::CatppuccinMocha);
        let nord = Theme::from_palette_type(PaletteType::Nord);
        assert_ne!(mocha, nord);
        assert_eq!(mocha, Theme::default());
    }

    #[test]
    fn palette_type_reads_lowercase_names() {
        #[derive(Deserialize)]
        struct Doc {
            theme: PaletteType,
        }
        let doc: Doc = toml::from_str("theme = \"nord\"").unwrap();
        assert_eq!(doc.theme, PaletteType::Nord);
        assert_eq!(doc.theme.label(), "Nord");
    }
}
