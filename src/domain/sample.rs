//! Hard-coded sample data rendered by the views.

use super::models::{Activity, ActivityKind, Email, Priority, Task, Workspace};

pub static WORKSPACES: &[Workspace] = &[
    Workspace {
        id: "acme-corp",
        name: "Acme Corp",
        description: "Enterprise client - Software development project",
        unread: 3,
        members: &["Sarah Connor", "Kyle Reese", "Miles Dyson", "John Doe"],
        activity: &[
            Activity {
                kind: ActivityKind::Email,
                content: "New email from Sarah Connor about Q4 review",
                time: "2 min ago",
            },
            Activity {
                kind: ActivityKind::Task,
                content: "Completed \"Review project proposal\"",
                time: "1 hour ago",
            },
            Activity {
                kind: ActivityKind::Doc,
                content: "Updated \"Technical Specifications v2.1\"",
                time: "3 hours ago",
            },
        ],
    },
    Workspace {
        id: "startup-x",
        name: "Startup X",
        description: "Early-stage product team",
        unread: 0,
        members: &["Ada Park", "John Doe"],
        activity: &[Activity {
            kind: ActivityKind::Email,
            content: "Pull Request #47 ready for review",
            time: "1 hour ago",
        }],
    },
    Workspace {
        id: "freelance",
        name: "Freelance",
        description: "Independent client work",
        unread: 7,
        members: &["John Doe"],
        activity: &[],
    },
];

pub static EMAILS: &[Email] = &[
    Email {
        from: "Sarah Connor",
        address: "sarah@acme-corp.com",
        subject: "Q4 Review Meeting - Urgent",
        preview: "Hi team, we need to schedule our Q4 review meeting for next week. \
                  Please let me know your availability.",
        time: "2 min ago",
        unread: true,
        starred: true,
        has_attachment: true,
        priority: Priority::High,
        summary: "Meeting request for Q4 review with availability check",
        workspace: "Acme Corp",
    },
    Email {
        from: "GitHub",
        address: "noreply@github.com",
        subject: "Pull Request #47 ready for review",
        preview: "A new pull request has been submitted for the user authentication feature.",
        time: "1 hour ago",
        unread: true,
        starred: false,
        has_attachment: false,
        priority: Priority::Medium,
        summary: "Code review needed for authentication feature",
        workspace: "Startup X",
    },
    Email {
        from: "Marketing Weekly",
        address: "newsletter@marketing.com",
        subject: "This Week in Marketing: AI Tools",
        preview: "Discover the latest AI marketing tools that are transforming how teams work.",
        time: "3 hours ago",
        unread: false,
        starred: false,
        has_attachment: false,
        priority: Priority::Low,
        summary: "Newsletter about AI marketing tools",
        workspace: "",
    },
];

pub static TASKS: &[Task] = &[
    Task {
        title: "Review Acme proposal",
        workspace: "Acme Corp",
        due: "Today",
        priority: Priority::High,
        done: false,
    },
    Task {
        title: "Reply to Q4 review meeting request",
        workspace: "Acme Corp",
        due: "Today",
        priority: Priority::High,
        done: false,
    },
    Task {
        title: "Review PR #47 (authentication)",
        workspace: "Startup X",
        due: "Tomorrow",
        priority: Priority::Medium,
        done: false,
    },
    Task {
        title: "Update Technical Specifications v2.1",
        workspace: "Acme Corp",
        due: "Fri",
        priority: Priority::Medium,
        done: true,
    },
    Task {
        title: "Send invoice for October",
        workspace: "Freelance",
        due: "Next week",
        priority: Priority::Low,
        done: false,
    },
];

/// Badge counts shown next to the sidebar navigation items.
pub const INBOX_BADGE: u32 = 12;
pub const TASKS_BADGE: u32 = 5;

pub const USER_NAME: &str = "John Doe";
pub const USER_EMAIL: &str = "john@example.com";
