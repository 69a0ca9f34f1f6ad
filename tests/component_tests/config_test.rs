#[cfg(test)]
mod tests {
    use ai_explorer_desk::config::Settings;

    fn from_vars(vars: Vec<(&str, &str)>) -> Settings {
        let iter = vars
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter::<_, Settings>(iter)
            .expect("settings should deserialize")
            .normalized()
    }

    #[test]
    fn test_defaults_apply_without_environment() {
        let settings = from_vars(vec![]);
        assert_eq!(settings.api_base, "http://localhost:3000");
        assert_eq!(settings.api_token, None);
    }

    #[test]
    fn test_api_base_trailing_slash_is_stripped() {
        let settings = from_vars(vec![("API_BASE", "https://explorer.example/")]);
        assert_eq!(settings.api_base, "https://explorer.example");

        let settings = from_vars(vec![("API_BASE", "https://explorer.example///")]);
        assert_eq!(settings.api_base, "https://explorer.example");
    }

    #[test]
    fn test_blank_token_is_treated_as_absent() {
        let settings = from_vars(vec![("API_TOKEN", "   ")]);
        assert_eq!(settings.api_token, None);

        let settings = from_vars(vec![("API_TOKEN", "")]);
        assert_eq!(settings.api_token, None);
    }

    #[test]
    fn test_token_is_trimmed() {
        let settings = from_vars(vec![("API_TOKEN", "  secret-token  ")]);
        assert_eq!(settings.api_token.as_deref(), Some("secret-token"));
    }
}
