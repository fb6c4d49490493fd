use crate::app::state::{AppState, TimerDisplay};
use crate::domain::timer::TimerStatus;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
    pub clock: String,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        // Separator styles: fg = current segment bg, bg = next segment bg
        let logo_bg = theme.header_logo.bg.unwrap_or(Color::Reset);
        let view_bg = theme.header_view.bg.unwrap_or(Color::Reset);
        let base_bg = theme.header.bg.unwrap_or(Color::Reset);

        let mut spans = vec![
            Span::styled(" ◆ FocusHub ", theme.header_logo),
            Span::styled(SEP_RIGHT, Style::default().fg(logo_bg).bg(view_bg)),
            Span::styled(format!(" {} ", self.state.views.current), theme.header_view),
            Span::styled(SEP_RIGHT, Style::default().fg(view_bg).bg(base_bg)),
        ];

        // Keep a running countdown visible when the card is hidden
        let session = self.state.timer.session();
        if self.state.timer_display == TimerDisplay::Hidden
            && session.status != TimerStatus::Idle
        {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" ⏱ {} ", session.clock()),
                status_style(theme, session.status),
            ));
        }

        let used: usize = spans.iter().map(Span::width).sum();
        let clock = format!(" {} ", self.clock);
        let padding = usize::from(area.width).saturating_sub(used + clock.chars().count());
        spans.push(Span::styled(" ".repeat(padding), theme.header));
        spans.push(Span::styled(clock, theme.header_clock));

        Paragraph::new(Line::from(spans))
            .style(theme.header)
            .render(area, buf);
    }
}

pub fn status_style(theme: &Theme, status: TimerStatus) -> Style {
    match status {
        TimerStatus::Idle => theme.timer_idle,
        TimerStatus::Running => theme.timer_running,
        TimerStatus::Paused => theme.timer_paused,
        TimerStatus::Completed => theme.timer_completed,
    }
}
