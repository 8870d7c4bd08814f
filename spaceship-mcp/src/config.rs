//! Environment configuration
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `SPACESHIP_API_KEY` | for live calls | API key |
//! | `SPACESHIP_API_SECRET` | for live calls | API secret |
//! | `SPACESHIP_API_URL` | no | Base URL override |
//!
//! Missing credentials do not stop the server: it starts and every upstream call
//! is rejected by the registrar instead.

use spaceship_provider::SpaceshipCredentials;

pub const API_KEY_VAR: &str = "SPACESHIP_API_KEY";
pub const API_SECRET_VAR: &str = "SPACESHIP_API_SECRET";
pub const API_URL_VAR: &str = "SPACESHIP_API_URL";

/// Settings resolved at startup.
#[derive(Debug)]
pub struct Config {
    pub credentials: SpaceshipCredentials,
    /// Human-readable problems found while loading; logged as warnings.
    pub warnings: Vec<String>,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an arbitrary lookup so tests never touch the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut warnings = Vec::new();
        let mut required = |name: &str| {
            read(name).unwrap_or_else(|| {
                warnings.push(format!("{name} is not set; Spaceship API calls will fail"));
                String::new()
            })
        };

        let api_key = required(API_KEY_VAR);
        let api_secret = required(API_SECRET_VAR);

        let mut credentials = SpaceshipCredentials::new(api_key, api_secret);
        if let Some(base_url) = read(API_URL_VAR) {
            credentials = credentials.with_base_url(base_url);
        }

        Self {
            credentials,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use spaceship_provider::DEFAULT_BASE_URL;

    fn load(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn full_configuration() {
        let config = load(&[
            (API_KEY_VAR, "key"),
            (API_SECRET_VAR, "secret"),
            (API_URL_VAR, "http://localhost:4000/api/"),
        ]);
        assert!(config.warnings.is_empty());
        assert_eq!(config.credentials.api_key, "key");
        assert_eq!(config.credentials.api_secret, "secret");
        assert_eq!(config.credentials.base_url, "http://localhost:4000/api");
    }

    #[test]
    fn missing_credentials_only_warn() {
        let config = load(&[]);
        assert_eq!(config.warnings.len(), 2);
        assert!(config.warnings[0].contains(API_KEY_VAR));
        assert!(config.warnings[1].contains(API_SECRET_VAR));
        assert_eq!(config.credentials.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = load(&[(API_KEY_VAR, "  "), (API_SECRET_VAR, "secret"), (API_URL_VAR, "")]);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.credentials.api_key.is_empty());
        assert_eq!(config.credentials.base_url, DEFAULT_BASE_URL);
    }
}
