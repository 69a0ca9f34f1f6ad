use serde::Deserialize;
use tracing::warn;

/// Environment-driven settings for the desktop client.
///
/// `API_BASE` points at the AI Explorer API (default localhost:3000);
/// `API_TOKEN` is an optional bearer token forwarded on every request.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_api_base() -> String {
    "http://localhost:3000".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_token: None,
        }
    }
}

impl Settings {
    /// Read settings from the process environment. A malformed
    /// environment falls back to the defaults with a warning rather
    /// than preventing the window from opening.
    pub fn from_env() -> Self {
        match envy::from_env::<Settings>() {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                warn!("Invalid environment configuration: {}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Strip the trailing slash from the base URL and treat a blank
    /// token as absent, so request paths can be appended verbatim.
    pub fn normalized(mut self) -> Self {
        while self.api_base.ends_with('/') {
            self.api_base.pop();
        }

        if let Some(token) = &self.api_token {
            if token.trim().is_empty() {
                self.api_token = None;
            } else if token.trim().len() != token.len() {
                self.api_token = Some(token.trim().to_string());
            }
        }

        self
    }
}
