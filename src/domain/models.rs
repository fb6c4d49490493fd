use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Inbox,
    Workspace,
    Tasks,
    Calendar,
    Settings,
}

impl View {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            View::Inbox => "Inbox",
            View::Workspace => "Workspace",
            View::Tasks => "Tasks",
            View::Calendar => "Calendar",
            View::Settings => "Settings",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    #[default]
    Overview,
    Email,
    Tasks,
    Docs,
    Events,
    People,
}

impl WorkspaceTab {
    pub const ALL: [WorkspaceTab; 6] = [
        WorkspaceTab::Overview,
        WorkspaceTab::Email,
        WorkspaceTab::Tasks,
        WorkspaceTab::Docs,
        WorkspaceTab::Events,
        WorkspaceTab::People,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::Overview => "Overview",
            WorkspaceTab::Email => "Email",
            WorkspaceTab::Tasks => "Tasks",
            WorkspaceTab::Docs => "Docs",
            WorkspaceTab::Events => "Events",
            WorkspaceTab::People => "People",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InboxTab {
    #[default]
    Priority,
    Newsletters,
    Bundled,
}

impl InboxTab {
    pub const ALL: [InboxTab; 3] = [InboxTab::Priority, InboxTab::Newsletters, InboxTab::Bundled];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InboxTab::Priority => "Priority",
            InboxTab::Newsletters => "Newsletters",
            InboxTab::Bundled => "Bundled",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Bundling has no rule yet, so that tab is always empty.
    #[must_use]
    pub fn admits(&self, email: &Email) -> bool {
        match self {
            InboxTab::Priority => matches!(email.priority, Priority::High | Priority::Medium),
            InboxTab::Newsletters => {
                email.from.contains("Weekly") || email.from.contains("Newsletter")
            }
            InboxTab::Bundled => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unread: u32,
    pub members: &'static [&'static str],
    pub activity: &'static [Activity],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityKind {
    Email,
    Task,
    Doc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub kind: ActivityKind,
    pub content: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub from: &'static str,
    pub address: &'static str,
    pub subject: &'static str,
    pub preview: &'static str,
    pub time: &'static str,
    pub unread: bool,
    pub starred: bool,
    pub has_attachment: bool,
    pub priority: Priority,
    pub summary: &'static str,
    pub workspace: &'static str, // Empty when unfiled
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub title: &'static str,
    pub workspace: &'static str,
    pub due: &'static str,
    pub priority: Priority,
    pub done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_tabs_cycle() {
        let mut tab = WorkspaceTab::Overview;
        for _ in 0..WorkspaceTab::ALL.len() {
            tab = tab.next();
        }
        assert_eq!(tab, WorkspaceTab::Overview);
        assert_eq!(WorkspaceTab::People.next(), WorkspaceTab::Overview);
    }

    fn email(from: &'static str, priority: Priority) -> Email {
        Email {
            from,
            address: "",
            subject: "",
            preview: "",
            time: "3 hours ago",
            unread: false,
            starred: false,
            has_attachment: false,
            priority,
            summary: "",
            workspace: "",
        }
    }

    #[test]
    fn priority_tab_keeps_high_and_medium() {
        assert!(InboxTab::Priority.admits(&email("Sarah Connor", Priority::High)));
        assert!(InboxTab::Priority.admits(&email("GitHub", Priority::Medium)));
        assert!(!InboxTab::Priority.admits(&email("Marketing Weekly", Priority::Low)));
    }

    #[test]
    fn newsletter_tab_matches_sender_name() {
        let weekly = email("Marketing Weekly", Priority::Low);
        assert!(InboxTab::Newsletters.admits(&weekly));
        assert!(InboxTab::Newsletters.admits(&email("Rust Newsletter", Priority::High)));
        assert!(!InboxTab::Newsletters.admits(&email("GitHub", Priority::Medium)));
        assert!(!InboxTab::Bundled.admits(&weekly));
    }

    #[test]
    fn inbox_tabs_cycle() {
        assert_eq!(InboxTab::default(), InboxTab::Priority);
        assert_eq!(InboxTab::Priority.next(), InboxTab::Newsletters);
        assert_eq!(InboxTab::Bundled.next(), InboxTab::Priority);
    }
}
