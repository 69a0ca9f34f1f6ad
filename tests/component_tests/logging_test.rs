#[cfg(test)]
mod tests {
    use ai_explorer_desk::logging;
    use tracing::Level;

    // Single test on purpose: installing a second global subscriber in
    // the same process would fail.
    #[test]
    fn test_init_simple_installs_console_logger() {
        let result = logging::init_simple(Level::DEBUG);
        assert!(result.is_ok(), "console logging init failed: {:?}", result.err());

        // A second init must report an error, not panic
        assert!(logging::init_simple(Level::INFO).is_err());
    }
}
