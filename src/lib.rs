// Re-export modules for testing purposes

pub mod api;
pub mod components;
pub mod config;
pub mod logging;

pub use crate::components::*;

/// Ephemeral UI state for one window. Nothing here survives a restart;
/// tasks and sessions live on the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerState {
    pub task_id: Option<String>,
    pub active_session: Option<String>,
    pub last_task_desc: Option<String>,
}

impl ExplorerState {
    /// Record a freshly created task. Any session that belonged to the
    /// previous task is no longer meaningful and is cleared.
    pub fn task_created(&mut self, task_id: String, description: String) {
        self.task_id = Some(task_id);
        self.active_session = None;
        self.last_task_desc = Some(description);
    }

    /// Make a session the active one for the current task
    pub fn session_opened(&mut self, session_id: String) {
        self.active_session = Some(session_id);
    }

    pub fn has_task(&self) -> bool {
        self.task_id.is_some()
    }

    pub fn has_active_session(&self) -> bool {
        self.active_session.is_some()
    }
}
