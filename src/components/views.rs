//! Main content area, one renderer per [`View`]. All content comes from the
//! static sample data; only selection and tab state live in `AppState`.

use crate::app::state::AppState;
use crate::config;
use crate::domain::models::{
    ActivityKind, Email, InboxTab, Priority, Task, View, Workspace, WorkspaceTab,
};
use crate::domain::sample;
use crate::logging;
use crate::theme::Theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, state: &mut AppState) {
    if area.is_empty() {
        return;
    }
    match state.views.current {
        View::Inbox => render_inbox(f, area, state),
        View::Workspace => render_workspace(f, area, state),
        View::Tasks => render_tasks(f, area, state),
        View::Calendar => render_calendar(f, area, &state.theme),
        View::Settings => render_settings(f, area, state),
    }
}

fn panel<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
}

fn hints<'a>(theme: &Theme, pairs: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in pairs {
        spans.push(Span::styled(*key, theme.footer_segment_key));
        spans.push(Span::styled(format!(": {desc} "), theme.dimmed));
    }
    Line::from(spans)
}

fn tabs<'a, T: Into<Line<'a>>>(titles: Vec<T>, selected: usize, theme: &Theme) -> Tabs<'a> {
    Tabs::new(titles)
        .select(selected)
        .style(theme.tab_inactive)
        .highlight_style(theme.tab_active)
        .divider("│")
}

// --- Inbox ---

/// Below this width the message pane is dropped and the list fills the view.
const MIN_WIDTH_FOR_DETAIL: u16 = 70;

fn email_item(email: &'static Email, theme: &Theme) -> ListItem<'static> {
    let from_style = if email.unread {
        theme.email_unread
    } else {
        theme.list_item
    };
    let mut header = vec![
        Span::styled(if email.unread { "● " } else { "  " }, theme.border_focus),
        Span::styled(email.from, from_style),
        Span::styled(format!("  {}", email.time), theme.dimmed),
    ];
    if !email.workspace.is_empty() {
        header.push(Span::styled(format!("  #{}", email.workspace), theme.dimmed));
    }
    if email.starred {
        header.push(Span::styled("  ★", theme.email_starred));
    }
    if email.has_attachment {
        header.push(Span::styled("  [att]", theme.dimmed));
    }

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(format!("  {}", email.subject), from_style)),
        Line::from(Span::styled(format!("  {}", email.preview), theme.dimmed)),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("[{}]", email.priority.label()),
                priority_style(email.priority, theme),
            ),
            Span::styled(format!(" {}", email.summary), theme.email_summary),
        ]),
    ])
}

fn render_inbox(f: &mut Frame, area: Rect, state: &mut AppState) {
    let columns = if area.width >= MIN_WIDTH_FOR_DETAIL {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0)])
            .split(area)
    };

    render_email_list(f, columns[0], state);
    if let Some(&detail) = columns.get(1) {
        render_email_detail(f, detail, state.views.selected_email(), &state.theme);
    }
}

fn render_email_list(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;
    let block = panel(" Inbox ", theme).title_bottom(hints(
        theme,
        &[("Tab", "filter"), ("j/k", "move"), ("^K", "commands")],
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1),
            Constraint::Min(0), // Messages
        ])
        .split(inner);

    let selected_tab = InboxTab::ALL
        .iter()
        .position(|t| *t == state.views.inbox_tab)
        .unwrap_or(0);
    let titles = InboxTab::ALL
        .iter()
        .map(|tab| {
            let count = sample::EMAILS.iter().filter(|e| tab.admits(e)).count();
            format!("{} {count}", tab.label())
        })
        .collect::<Vec<_>>();
    f.render_widget(tabs(titles, selected_tab, theme), rows[0]);

    let emails = state.views.visible_emails();
    if emails.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("  No messages", theme.dimmed)),
            rows[2],
        );
        return;
    }

    let items: Vec<ListItem> = emails.into_iter().map(|e| email_item(e, theme)).collect();
    let list = List::new(items).highlight_style(theme.list_selected);
    f.render_stateful_widget(list, rows[2], &mut state.views.email_list);
}

fn render_email_detail(
    f: &mut Frame,
    area: Rect,
    email: Option<&'static Email>,
    theme: &Theme,
) {
    let block = panel(" Message ", theme);
    let Some(email) = email else {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let [_, middle, _] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Fill(1),
            ])
            .areas(inner);
        f.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("Select an email to read", theme.list_item)),
                Line::from(Span::styled(
                    "Choose an email from the list to view its contents",
                    theme.dimmed,
                )),
            ])
            .alignment(Alignment::Center),
            middle,
        );
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            email.subject,
            theme.list_item.add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(email.from, theme.email_unread),
            Span::styled(format!(" <{}>", email.address), theme.dimmed),
        ]),
        Line::from(Span::styled(email.time, theme.dimmed)),
        Line::default(),
        Line::from(Span::styled("AI Summary", theme.highlight)),
        Line::from(Span::styled(email.summary, theme.email_summary)),
        Line::default(),
        Line::from(Span::styled(email.preview, theme.list_item)),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

// --- Workspace ---

fn activity_line(
    kind: ActivityKind,
    content: &'static str,
    time: &'static str,
    theme: &Theme,
) -> Line<'static> {
    let (icon, style) = match kind {
        ActivityKind::Email => ("✉", theme.activity_email),
        ActivityKind::Task => ("✓", theme.activity_task),
        ActivityKind::Doc => ("✎", theme.activity_doc),
    };
    Line::from(vec![
        Span::styled(format!(" {icon} "), style),
        Span::styled(content, theme.list_item),
        Span::styled(format!("  {time}"), theme.dimmed),
    ])
}

fn empty_line(text: String, theme: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(format!(" {text}"), theme.dimmed))]
}

fn workspace_tab_lines(
    workspace: &'static Workspace,
    tab: WorkspaceTab,
    theme: &Theme,
) -> Vec<Line<'static>> {
    match tab {
        WorkspaceTab::Overview => {
            let mut lines = vec![Line::from(Span::styled(
                " Recent activity",
                theme.sidebar_section,
            ))];
            if workspace.activity.is_empty() {
                lines.extend(empty_line("No recent activity".to_string(), theme));
            }
            lines.extend(
                workspace
                    .activity
                    .iter()
                    .map(|a| activity_line(a.kind, a.content, a.time, theme)),
            );
            lines
        }
        WorkspaceTab::Email => {
            let lines: Vec<Line> = sample::EMAILS
                .iter()
                .filter(|e| e.workspace == workspace.name)
                .map(|e| {
                    Line::from(vec![
                        Span::styled(format!(" {}", e.from), theme.email_unread),
                        Span::styled(format!("  {}", e.subject), theme.list_item),
                        Span::styled(format!("  {}", e.time), theme.dimmed),
                    ])
                })
                .collect();
            if lines.is_empty() {
                empty_line("No emails for this workspace".to_string(), theme)
            } else {
                lines
            }
        }
        WorkspaceTab::Tasks => {
            let lines: Vec<Line> = sample::TASKS
                .iter()
                .filter(|t| t.workspace == workspace.name)
                .map(|t| task_line(t, false, theme))
                .collect();
            if lines.is_empty() {
                empty_line("No tasks for this workspace".to_string(), theme)
            } else {
                lines
            }
        }
        WorkspaceTab::People => workspace
            .members
            .iter()
            .map(|m| Line::from(Span::styled(format!(" • {m}"), theme.list_item)))
            .collect(),
        WorkspaceTab::Docs | WorkspaceTab::Events => {
            empty_line(format!("No {} yet", tab.label().to_lowercase()), theme)
        }
    }
}

fn render_workspace(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;
    let workspace = state.views.workspace();
    let block = panel(
        Line::from(Span::styled(format!(" {} ", workspace.name), theme.header_view)),
        theme,
    )
    .title_bottom(hints(theme, &[("Tab", "section"), ("[ ]", "workspace")]));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Stats
            Constraint::Length(1),
            Constraint::Length(1), // Tabs
            Constraint::Length(1),
            Constraint::Min(0), // Tab content
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(format!(" {}", workspace.description), theme.dimmed)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(
                " {} members · {} unread",
                workspace.members.len(),
                workspace.unread
            ),
            theme.list_item,
        )),
        rows[1],
    );

    let selected_tab = WorkspaceTab::ALL
        .iter()
        .position(|t| *t == state.views.workspace_tab)
        .unwrap_or(0);
    f.render_widget(
        tabs(
            WorkspaceTab::ALL.iter().map(WorkspaceTab::label).collect(),
            selected_tab,
            theme,
        ),
        rows[3],
    );
    f.render_widget(
        Paragraph::new(workspace_tab_lines(workspace, state.views.workspace_tab, theme)),
        rows[5],
    );
}

// --- Tasks ---

fn priority_style(priority: Priority, theme: &Theme) -> Style {
    match priority {
        Priority::High => theme.priority_high,
        Priority::Medium => theme.priority_medium,
        Priority::Low => theme.priority_low,
    }
}

fn priority_span(priority: Priority, theme: &Theme) -> Span<'static> {
    let label = match priority {
        Priority::High => " HIGH ",
        Priority::Medium => " MED  ",
        Priority::Low => " LOW  ",
    };
    Span::styled(label, priority_style(priority, theme))
}

fn task_line(task: &'static Task, focused: bool, theme: &Theme) -> Line<'static> {
    let title_style = if task.done {
        theme.task_done
    } else {
        theme.list_item
    };
    Line::from(vec![
        Span::styled(if task.done { " [x] " } else { " [ ] " }, theme.dimmed),
        priority_span(task.priority, theme),
        Span::styled(task.title, title_style),
        Span::styled(format!("  {} · {}", task.workspace, task.due), theme.dimmed),
        Span::styled(if focused { "  ⏱" } else { "" }, theme.highlight),
    ])
}

fn render_tasks(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;
    let block = panel(" Tasks ", theme).title_bottom(hints(
        theme,
        &[("Enter", "focus"), ("j/k", "move"), ("Space", "timer")],
    ));

    let current = state.timer.session().task_label.as_str();
    let items: Vec<ListItem> = sample::TASKS
        .iter()
        .map(|t| ListItem::new(task_line(t, t.title == current, theme)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.list_selected)
        .highlight_symbol("▶");
    f.render_stateful_widget(list, area, &mut state.views.task_list);
}

// --- Calendar ---

fn render_calendar(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = panel(" Calendar ", theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let top = inner.y + inner.height.saturating_sub(2) / 2;
    let centered = Rect {
        y: top,
        height: 2.min(inner.bottom().saturating_sub(top)),
        ..inner
    };
    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("▦", theme.border_focus)),
            Line::from(Span::styled("Calendar integration coming soon", theme.dimmed)),
        ])
        .alignment(Alignment::Center),
        centered,
    );
}

// --- Settings ---

fn setting<'a>(name: &'a str, value: String, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {name:<24}"), theme.dimmed),
        Span::styled(value, theme.list_item),
    ])
}

fn render_settings(f: &mut Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;
    let config = &state.config;
    let path_or_none = |path: Option<std::path::PathBuf>| {
        path.map_or_else(
            || "(no home directory)".to_string(),
            |p| p.display().to_string(),
        )
    };
    let custom = config.keys.custom.as_ref().map_or(0, |c| c.len());

    let heading_style = theme.sidebar_section.add_modifier(Modifier::UNDERLINED);
    let heading = |text: &'static str| Line::from(Span::styled(text, heading_style));
    let lines = vec![
        heading(" Appearance"),
        setting("Theme", config.theme.label().to_string(), theme),
        Line::from(""),
        heading(" Focus timer"),
        setting(
            "Session length",
            format!("{} min", config.timer.focus_minutes),
            theme,
        ),
        setting(
            "Daily target",
            format!("{} sessions", state.daily_target()),
            theme,
        ),
        setting("Default task", config.timer.task.clone(), theme),
        setting(
            "Count skipped sessions",
            if config.timer.count_skipped { "yes" } else { "no" }.to_string(),
            theme,
        ),
        Line::from(""),
        heading(" Keys"),
        setting("Profile", config.keys.profile.clone(), theme),
        setting("Custom bindings", custom.to_string(), theme),
        Line::from(""),
        heading(" Files"),
        setting("Config file", path_or_none(config::get_config_path()), theme),
        setting("Log file", path_or_none(logging::log_path()), theme),
        setting("Log filter", format!("${}", logging::LOG_ENV), theme),
    ];

    let block = panel(" Settings ", theme);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| render(f, f.area(), state)).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn inbox_lists_sample_mail() {
        let mut state = AppState::default();
        let screen = draw(&mut state);
        assert!(screen.contains("Sarah Connor"));
        assert!(screen.contains("Priority 2"));
        assert!(screen.contains("Newsletters 1"));
        assert!(screen.contains("Bundled 0"));
        assert!(screen.contains("high"));
        assert!(!screen.contains("Marketing Weekly"));
    }

    #[test]
    fn inbox_detail_follows_selection() {
        let mut state = AppState::default();
        let screen = draw(&mut state);
        assert!(screen.contains("sarah@acme-corp.com"));
        assert!(screen.contains("AI Summary"));

        state.views.email_list.select(Some(1));
        let screen = draw(&mut state);
        assert!(screen.contains("noreply@github.com"));
        assert!(screen.contains("Code review needed"));

        state.views.inbox_tab = InboxTab::Bundled;
        state.views.email_list.select(None);
        let screen = draw(&mut state);
        assert!(screen.contains("No messages"));
        assert!(screen.contains("Select an email to read"));
    }

    #[test]
    fn workspace_overview_shows_activity() {
        let mut state = AppState::default();
        state.views.current = View::Workspace;
        let screen = draw(&mut state);
        assert!(screen.contains("Acme Corp"));
        assert!(screen.contains("4 members · 3 unread"));
        assert!(screen.contains("Recent activity"));
        assert!(screen.contains("Q4 review"));
    }

    #[test]
    fn workspace_people_tab() {
        let mut state = AppState::default();
        state.views.current = View::Workspace;
        state.views.workspace_tab = WorkspaceTab::People;
        assert!(draw(&mut state).contains("• Kyle Reese"));

        state.views.workspace_tab = WorkspaceTab::Docs;
        assert!(draw(&mut state).contains("No docs yet"));
    }

    #[test]
    fn tasks_mark_the_timer_task() {
        let mut state = AppState::default();
        state.views.current = View::Tasks;
        let screen = draw(&mut state);
        let line = screen
            .lines()
            .find(|l| l.contains("Review Acme proposal"))
            .unwrap();
        assert!(line.contains("⏱"));
        assert!(screen.contains("HIGH"));
    }

    #[test]
    fn calendar_is_a_placeholder() {
        let mut state = AppState::default();
        state.views.current = View::Calendar;
        assert!(draw(&mut state).contains("Calendar integration coming soon"));
    }

    #[test]
    fn settings_reflect_config() {
        let mut state = AppState::default();
        state.views.current = View::Settings;
        let screen = draw(&mut state);
        assert!(screen.contains("25 min"));
        assert!(screen.contains("8 sessions"));
        assert!(screen.contains("Catppuccin (Mocha)"));
        assert!(screen.contains("$FOCUSHUB_LOG"));
    }

    #[test]
    fn tiny_areas_do_not_panic() {
        let mut state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(4, 3)).unwrap();
        for view in [
            View::Inbox,
            View::Workspace,
            View::Tasks,
            View::Calendar,
            View::Settings,
        ] {
            state.views.current = view;
            terminal.draw(|f| render(f, f.area(), &mut state)).unwrap();
        }
    }
}
