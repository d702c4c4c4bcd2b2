use serde::{Deserialize, Serialize};

use crate::{CurrentUser, DEFAULT_QUOTE_INTERVAL_MS};

fn default_quote_interval_ms() -> u64 {
    DEFAULT_QUOTE_INTERVAL_MS
}

fn default_title() -> String {
    "KidneyAI Analysis System".to_string()
}

/// Dashboard presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardConfig {
    #[serde(default = "default_quote_interval_ms")]
    pub quote_interval_ms: u64,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            quote_interval_ms: default_quote_interval_ms(),
            title: default_title(),
        }
    }
}

impl DashboardConfig {
    /// Rotation period, with zero replaced by the default.
    pub fn quote_interval_ms(&self) -> u64 {
        if self.quote_interval_ms == 0 {
            DEFAULT_QUOTE_INTERVAL_MS
        } else {
            self.quote_interval_ms
        }
    }
}

/// Identity the local session starts with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionConfig {
    /// The configured user, or `None` when no identity is set.
    pub fn initial_user(&self) -> Option<CurrentUser> {
        if self.display_name.is_none() && self.email.is_none() {
            return None;
        }
        Some(CurrentUser {
            display_name: self.display_name.clone(),
            email: self.email.clone(),
        })
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dashboard.quote_interval_ms(), 5_000);
        assert_eq!(config.dashboard.title, "KidneyAI Analysis System");
        assert!(config.session.initial_user().is_none());
    }

    #[test]
    fn deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [dashboard]
            quote_interval_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.quote_interval_ms(), 1_500);
        assert_eq!(config.dashboard.title, "KidneyAI Analysis System");
    }

    #[test]
    fn zero_interval_falls_back_to_default() {
        let config: AppConfig = toml::from_str(
            r#"
            [dashboard]
            quote_interval_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.quote_interval_ms(), DEFAULT_QUOTE_INTERVAL_MS);
    }

    #[test]
    fn session_section_seeds_user() {
        let config: AppConfig = toml::from_str(
            r#"
            [session]
            display_name = "Alice"
            email = "alice@example.com"
            "#,
        )
        .unwrap();
        let user = config.session.initial_user().unwrap();
        assert_eq!(user.label(), "Alice");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
