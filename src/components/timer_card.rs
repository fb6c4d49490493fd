use super::header::status_style;
use super::modals::helpers::bottom_right_rect;
use crate::app::state::TimerDisplay;
use crate::domain::timer::{TimerEngine, TimerStatus};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, LineGauge, Paragraph, Widget},
};

const MINI_SIZE: (u16, u16) = (30, 5);
const PANEL_SIZE: (u16, u16) = (44, 11);

/// Where the card floats over the main view, if it is shown at all.
pub fn card_rect(body: Rect, display: TimerDisplay) -> Option<Rect> {
    let (width, height) = match display {
        TimerDisplay::Hidden => return None,
        TimerDisplay::Mini => MINI_SIZE,
        TimerDisplay::Panel => PANEL_SIZE,
    };
    let rect = bottom_right_rect(width, height, 1, body);
    (!rect.is_empty()).then_some(rect)
}

pub struct TimerCard<'a> {
    pub timer: &'a TimerEngine,
    pub display: TimerDisplay,
    pub daily_target: u32,
    pub theme: &'a Theme,
}

impl TimerCard<'_> {
    fn status_badge(&self) -> Span<'static> {
        let status = self.timer.status();
        Span::styled(format!(" {} ", status.label()), status_style(self.theme, status))
    }

    fn progress_style(&self) -> ratatui::style::Style {
        if self.timer.status() == TimerStatus::Completed {
            self.theme.timer_gauge_done
        } else {
            self.theme.timer_gauge
        }
    }

    fn render_mini(&self, inner: Rect, buf: &mut Buffer) {
        let session = self.timer.session();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 3])
            .split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(session.clock(), self.theme.timer_clock),
            Span::raw("  "),
            self.status_badge(),
        ]))
        .render(rows[0], buf);
        Paragraph::new(Span::styled(session.task_label.as_str(), self.theme.dimmed))
            .render(rows[1], buf);
        LineGauge::default()
            .filled_style(self.progress_style())
            .unfilled_style(self.theme.timer_gauge_track)
            .line_set(symbols::line::THICK)
            .label("")
            .ratio(session.progress_fraction())
            .render(rows[2], buf);
    }

    fn render_panel(&self, inner: Rect, buf: &mut Buffer) {
        let session = self.timer.session();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status
                Constraint::Length(1),
                Constraint::Length(1), // Clock
                Constraint::Length(1), // Session number
                Constraint::Length(1), // Task
                Constraint::Length(1), // Session progress
                Constraint::Length(1),
                Constraint::Length(1), // Daily progress
                Constraint::Length(1), // Hints
            ])
            .split(inner);

        Paragraph::new(Line::from(self.status_badge()))
            .alignment(Alignment::Center)
            .render(rows[0], buf);
        Paragraph::new(Span::styled(session.clock(), self.theme.timer_clock))
            .alignment(Alignment::Center)
            .render(rows[2], buf);
        Paragraph::new(Span::styled(
            format!("Session {}", session.number()),
            self.theme.dimmed,
        ))
        .alignment(Alignment::Center)
        .render(rows[3], buf);
        Paragraph::new(Line::from(vec![
            Span::styled("Task: ", self.theme.dimmed),
            Span::styled(session.task_label.as_str(), self.theme.list_item),
        ]))
        .alignment(Alignment::Center)
        .render(rows[4], buf);

        let progress = session.progress_fraction();
        Gauge::default()
            .gauge_style(self.progress_style())
            .ratio(progress)
            .label(format!("{:.0}%", progress * 100.0))
            .render(rows[5], buf);

        let target = self.daily_target.max(1);
        let done = self.timer.completed_today();
        LineGauge::default()
            .filled_style(self.theme.timer_gauge_done)
            .unfilled_style(self.theme.timer_gauge_track)
            .line_set(symbols::line::THICK)
            .label(Span::styled(
                format!("Today's sessions {done}/{target} "),
                self.theme.list_item,
            ))
            .ratio((done as f64 / f64::from(target)).min(1.0))
            .render(rows[7], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Space", self.theme.footer_segment_key),
            Span::styled(" start/pause  ", self.theme.dimmed),
            Span::styled("x", self.theme.footer_segment_key),
            Span::styled(" stop  ", self.theme.dimmed),
            Span::styled(">", self.theme.footer_segment_key),
            Span::styled(" skip", self.theme.dimmed),
        ]))
        .alignment(Alignment::Center)
        .render(rows[8], buf);
    }
}

impl Widget for TimerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.display == TimerDisplay::Hidden || area.is_empty() {
            return;
        }
        Clear.render(area, buf);

        let border_style = if self.timer.is_running() {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let title = match self.display {
            TimerDisplay::Panel => " Focus Timer ",
            _ => " Focus ",
        };
        let block = Block::default()
            .title(Span::styled(title, self.theme.highlight))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        match self.display {
            TimerDisplay::Mini => self.render_mini(inner, buf),
            TimerDisplay::Panel => self.render_panel(inner, buf),
            TimerDisplay::Hidden => {}
        }
    }
}
