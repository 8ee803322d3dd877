//! View-local state for the clients page.

use menuflow_core::client::Client;
use menuflow_core::stage::Stage;

/// Which of the two clients-page presentations is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Flat client table.
    #[default]
    List,
    /// Workflow tab container.
    Workflow,
}

/// State owned by the clients page: the list/workflow toggle plus the
/// list-mode filters. Carries no data of its own; the visible rows are a
/// pure derivation over the directory cache.
#[derive(Debug, Default)]
pub struct ClientsView {
    pub mode: ViewMode,
    search: String,
    status_filter: Option<Stage>,
}

impl ClientsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_list(&mut self) {
        self.mode = ViewMode::List;
    }

    pub fn show_workflow(&mut self) {
        self.mode = ViewMode::Workflow;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_status_filter(&mut self, status: Option<Stage>) {
        self.status_filter = status;
    }

    /// Apply the view's filters to a client listing.
    pub fn visible<'a>(&self, clients: &'a [Client]) -> Vec<&'a Client> {
        clients
            .iter()
            .filter(|c| c.matches(&self.search))
            .filter(|c| self.status_filter.map_or(true, |s| c.status == s))
            .collect()
    }
}
