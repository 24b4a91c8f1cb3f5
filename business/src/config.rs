use log::info;
use serde::Deserialize;

/// Endpoint the app fetches when nothing overrides it.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Environment overrides. Every field is optional; missing ones fall back to defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    users_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Full URL of the users endpoint (a JSON array of users).
    pub users_url: String,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }

    /// Builds the config from `USERS_URL`, falling back to [`DEFAULT_USERS_URL`].
    ///
    /// On the web the process environment is empty, so this is the default config.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let raw: RawConfig = match serde_env::from_iter(vars) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("Ignoring malformed environment config: {err}");
                RawConfig::default()
            }
        };

        match raw.users_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                info!("Using provided USERS_URL: {url}");
                Self::new(url)
            }
            None => Self::default(),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_default_points_at_public_endpoint() {
        let config = BusinessConfig::default();
        assert_eq!(config.users_url(), DEFAULT_USERS_URL);
    }

    #[test]
    fn test_users_url_from_env() {
        let config = BusinessConfig::from_vars(vars(&[("USERS_URL", "http://localhost:9000/users")]));
        assert_eq!(config.users_url(), "http://localhost:9000/users");
    }

    #[test]
    fn test_blank_users_url_falls_back_to_default() {
        let config = BusinessConfig::from_vars(vars(&[("USERS_URL", "  ")]));
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let config = BusinessConfig::from_vars(vars(&[("HOME", "/root"), ("RUST_LOG", "debug")]));
        assert_eq!(config, BusinessConfig::default());
    }
}
