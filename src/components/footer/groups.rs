use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState};
use crate::domain::models::View;
use crate::domain::timer::TimerStatus;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode() {
        AppMode::CommandPalette => vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                FooterItem::new("↑/↓", "move"),
                FooterItem::new("Enter", "open"),
                FooterItem::new("Esc", "close"),
            ],
        }],
        AppMode::Normal => {
            let status = state.timer.status();
            let mut nav = vec![
                FooterItem::new("^K", "commands"),
                FooterItem::new("i/t/c/w", "views"),
            ];
            match state.views.current {
                View::Inbox => {
                    nav.push(FooterItem::new("Tab", "filter"));
                    nav.push(FooterItem::new("j/k", "move"));
                }
                View::Tasks => {
                    nav.push(FooterItem::new("j/k", "move"));
                    nav.push(FooterItem::new("Enter", "focus"));
                }
                View::Workspace => {
                    nav.push(FooterItem::new("Tab", "section"));
                    nav.push(FooterItem::new("[/]", "switch"));
                }
                View::Calendar | View::Settings => {}
            }

            vec![
                FooterGroup {
                    name: "NAV",
                    items: nav,
                },
                FooterGroup {
                    name: "TIMER",
                    items: vec![
                        FooterItem::new("Space", toggle_label(status))
                            .highlighted(status == TimerStatus::Running),
                        FooterItem::new("x", "stop"),
                        FooterItem::new(">", "skip"),
                        FooterItem::new("f", "card"),
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![FooterItem::new("q", "quit")],
                },
            ]
        }
    }
}

fn toggle_label(status: TimerStatus) -> &'static str {
    match status {
        TimerStatus::Running => "pause",
        TimerStatus::Paused => "resume",
        TimerStatus::Idle | TimerStatus::Completed => "start",
    }
}
