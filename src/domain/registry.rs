use super::models::View;
use super::router::CommandEntry;

#[must_use]
pub fn navigation_commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry {
            id: "inbox",
            label: "Go to Inbox",
            description: "View your email inbox",
            target: View::Inbox,
        },
        CommandEntry {
            id: "tasks",
            label: "Go to Tasks",
            description: "Manage your tasks",
            target: View::Tasks,
        },
        CommandEntry {
            id: "calendar",
            label: "Go to Calendar",
            description: "View your calendar",
            target: View::Calendar,
        },
        CommandEntry {
            id: "settings",
            label: "Open Settings",
            description: "Configure your preferences",
            target: View::Settings,
        },
        CommandEntry {
            id: "workspace",
            label: "Go to Workspace",
            description: "Switch to workspace view",
            target: View::Workspace,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let commands = navigation_commands();
        let ids: HashSet<_> = commands.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), commands.len());
    }

    #[test]
    fn every_view_is_reachable() {
        let targets: HashSet<_> = navigation_commands().iter().map(|c| c.target).collect();
        for view in [
            View::Inbox,
            View::Workspace,
            View::Tasks,
            View::Calendar,
            View::Settings,
        ] {
            assert!(targets.contains(&view), "{view} has no command");
        }
    }
}
