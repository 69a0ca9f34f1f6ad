// This file acts as the test harness for integration tests

#[cfg(test)]
mod component_tests {
    // Include component test modules
    mod task_intake_test;
    mod explorer_state_test;
    mod api_types_test;
    mod config_test;
    mod logging_test;
}
