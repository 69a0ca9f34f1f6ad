#[cfg(test)]
mod tests {
    use ai_explorer_desk::ExplorerState;

    #[test]
    fn test_initial_state_has_nothing() {
        let state = ExplorerState::default();
        assert!(!state.has_task());
        assert!(!state.has_active_session());
        assert_eq!(state.last_task_desc, None);
    }

    #[test]
    fn test_task_created_stores_id_and_description() {
        let mut state = ExplorerState::default();
        state.task_created("task-1".to_string(), "Summarize my meeting notes".to_string());

        assert_eq!(state.task_id.as_deref(), Some("task-1"));
        assert_eq!(
            state.last_task_desc.as_deref(),
            Some("Summarize my meeting notes")
        );
        assert!(state.has_task());
    }

    #[test]
    fn test_new_task_clears_previous_session() {
        let mut state = ExplorerState::default();
        state.task_created("task-1".to_string(), "First task description".to_string());
        state.session_opened("session-9".to_string());
        assert!(state.has_active_session());

        // A fresh task must never keep a session from the previous one
        state.task_created("task-2".to_string(), "Second task description".to_string());
        assert_eq!(state.task_id.as_deref(), Some("task-2"));
        assert!(!state.has_active_session());
    }

    #[test]
    fn test_session_opened_sets_active_session() {
        let mut state = ExplorerState::default();
        state.task_created("task-1".to_string(), "First task description".to_string());

        state.session_opened("session-1".to_string());
        assert_eq!(state.active_session.as_deref(), Some("session-1"));

        // Switching sessions replaces the active one
        state.session_opened("session-2".to_string());
        assert_eq!(state.active_session.as_deref(), Some("session-2"));
    }
}
