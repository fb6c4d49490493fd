use crate::domain::models::{Email, InboxTab, View, Workspace, WorkspaceTab};
use crate::domain::sample;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub current: View,
    pub workspace_index: usize,
    pub workspace_tab: WorkspaceTab,
    pub inbox_tab: InboxTab,
    pub email_list: ListState,
    pub task_list: ListState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current: View::Inbox,
            workspace_index: 0,
            workspace_tab: WorkspaceTab::Overview,
            inbox_tab: InboxTab::Priority,
            email_list: ListState::default().with_selected(Some(0)),
            task_list: ListState::default().with_selected(Some(0)),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn workspace(&self) -> &'static Workspace {
        &sample::WORKSPACES[self.workspace_index % sample::WORKSPACES.len()]
    }

    #[must_use]
    pub fn visible_emails(&self) -> Vec<&'static Email> {
        sample::EMAILS
            .iter()
            .filter(|email| self.inbox_tab.admits(email))
            .collect()
    }

    /// The email the inbox detail pane shows.
    #[must_use]
    pub fn selected_email(&self) -> Option<&'static Email> {
        let index = self.email_list.selected()?;
        self.visible_emails().get(index).copied()
    }
}
