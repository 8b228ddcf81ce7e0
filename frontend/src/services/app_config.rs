//! Build-time configuration of the web shell.
//!
//! `DASHBOARD_CONFIG` may hold a complete JSON configuration. On top of it,
//! `DASHBOARD_API_URL`, `DASHBOARD_PROVIDER_ID`, `DASHBOARD_LOCALE` and
//! `DASHBOARD_FETCH_ORDERING` override single fields; all of them are read at
//! compile time and anything unset keeps the dashboard defaults. The
//! signed-in user's id overrides the provider id.

use dashboard::{DashboardConfig, FetchOrdering, LocaleTag};
use serde::de::DeserializeOwned;

use super::session::Session;

/// Raw configuration values, as found in the build environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides<'a> {
    pub config_json: Option<&'a str>,
    pub api_url: Option<&'a str>,
    pub provider_id: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub fetch_ordering: Option<&'a str>,
}

impl ConfigOverrides<'static> {
    pub fn from_build_env() -> Self {
        Self {
            config_json: option_env!("DASHBOARD_CONFIG"),
            api_url: option_env!("DASHBOARD_API_URL"),
            provider_id: option_env!("DASHBOARD_PROVIDER_ID"),
            locale: option_env!("DASHBOARD_LOCALE"),
            fetch_ordering: option_env!("DASHBOARD_FETCH_ORDERING"),
        }
    }
}

fn parse_tag<T: DeserializeOwned>(name: &str, value: &str) -> Option<T> {
    match serde_json::from_value(serde_json::Value::String(value.to_string())) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("⚙️ CONFIG: ignoring {}='{}': {}", name, value, e);
            None
        }
    }
}

fn base_config(config_json: Option<&str>) -> DashboardConfig {
    let Some(json) = config_json else {
        return DashboardConfig::default();
    };

    match DashboardConfig::from_json_str(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("⚙️ CONFIG: ignoring DASHBOARD_CONFIG: {:#}", e);
            DashboardConfig::default()
        }
    }
}

/// Configuration from the given overrides, on top of the defaults
pub fn build_config(overrides: &ConfigOverrides<'_>, session: &Session) -> DashboardConfig {
    let mut config = base_config(overrides.config_json);

    if let Some(api_url) = overrides.api_url {
        config.api_base_url = api_url.to_string();
    }
    if let Some(provider_id) = overrides.provider_id {
        config.provider_id = provider_id.to_string();
    }
    if let Some(locale) = overrides
        .locale
        .and_then(|value| parse_tag::<LocaleTag>("DASHBOARD_LOCALE", value))
    {
        config.locale = locale;
    }
    if let Some(ordering) = overrides
        .fetch_ordering
        .and_then(|value| parse_tag::<FetchOrdering>("DASHBOARD_FETCH_ORDERING", value))
    {
        config.fetch_ordering = ordering;
    }
    if let Some(user) = &session.user {
        config = config.with_provider_id(user.id.to_string());
    }

    if let Err(e) = config.validate() {
        log::warn!("⚙️ CONFIG: {}", e);
    }

    config
}

pub fn load(session: &Session) -> DashboardConfig {
    build_config(&ConfigOverrides::from_build_env(), session)
}

/// Title and description of the toast shown for an unusable configuration
pub fn config_problem(config: &DashboardConfig) -> Option<(String, String)> {
    config
        .validate()
        .err()
        .map(|e| ("Dashboard is not configured".to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SessionUser;
    use uuid::Uuid;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_defaults_without_overrides() {
        let config = build_config(&ConfigOverrides::default(), &Session::default());
        assert_eq!(config, DashboardConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_overrides_and_session_provider() {
        let user_id = Uuid::new_v4();
        let session = Session {
            token: Some("t".to_string()),
            user: Some(SessionUser {
                id: user_id,
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                avatar_url: None,
            }),
        };
        let overrides = ConfigOverrides {
            api_url: Some("https://api.example.com"),
            provider_id: Some("ignored"),
            locale: Some("en-US"),
            fetch_ordering: Some("last_resolved"),
            ..ConfigOverrides::default()
        };

        let config = build_config(&overrides, &session);

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.provider_id, user_id.to_string());
        assert_eq!(config.locale, LocaleTag::EnUs);
        assert_eq!(config.fetch_ordering, FetchOrdering::LastResolved);
    }

    #[wasm_bindgen_test]
    fn test_unknown_locale_is_ignored() {
        let overrides = ConfigOverrides {
            provider_id: Some("p1"),
            locale: Some("fr-FR"),
            ..ConfigOverrides::default()
        };
        let config = build_config(&overrides, &Session::default());
        assert_eq!(config.locale, LocaleTag::default());
        assert_eq!(config.provider_id, "p1");
    }

    #[wasm_bindgen_test]
    fn test_json_config_with_field_override() {
        let overrides = ConfigOverrides {
            config_json: Some(r#"{"provider_id":"p1","locale":"en-US"}"#),
            api_url: Some("https://api.example.com"),
            ..ConfigOverrides::default()
        };
        let config = build_config(&overrides, &Session::default());

        assert_eq!(config.provider_id, "p1");
        assert_eq!(config.locale, LocaleTag::EnUs);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[wasm_bindgen_test]
    fn test_invalid_json_config_falls_back_to_defaults() {
        let overrides = ConfigOverrides {
            config_json: Some("{not json"),
            ..ConfigOverrides::default()
        };
        assert_eq!(build_config(&overrides, &Session::default()), DashboardConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_missing_provider_is_a_config_problem() {
        let (title, description) = config_problem(&DashboardConfig::default()).unwrap();
        assert_eq!(title, "Dashboard is not configured");
        assert!(description.contains("provider_id is required"));

        let config = DashboardConfig::default().with_provider_id("p1");
        assert_eq!(config_problem(&config), None);
    }
}
