use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::fetch_tracker::FetchOrdering;
use crate::domain::locale::LocaleTag;
use crate::error::DashboardError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the booking API, without trailing slash
    pub api_base_url: String,
    /// Provider whose month availability is shown
    pub provider_id: String,
    pub locale: LocaleTag,
    pub fetch_ordering: FetchOrdering,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            provider_id: String::new(),
            locale: LocaleTag::default(),
            fetch_ordering: FetchOrdering::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse dashboard configuration")?;
        config.validate().context("Dashboard configuration is invalid")?;
        Ok(config)
    }

    pub fn with_provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        let url = &self.api_base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        if self.provider_id.trim().is_empty() {
            return Err(DashboardError::Config("provider_id is required".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = DashboardConfig::from_json_str(r#"{"provider_id":"abc"}"#).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.locale, LocaleTag::PtBr);
        assert_eq!(config.fetch_ordering, FetchOrdering::LatestIssued);
    }

    #[test]
    fn test_full_config() {
        let config = DashboardConfig::from_json_str(
            r#"{
                "api_base_url": "https://api.example.com/",
                "provider_id": "abc",
                "locale": "en-US",
                "fetch_ordering": "last_resolved"
            }"#,
        )
        .unwrap();

        assert_eq!(config.locale, LocaleTag::EnUs);
        assert_eq!(config.fetch_ordering, FetchOrdering::LastResolved);
        assert_eq!(config.api_base_url, "https://api.example.com/");
    }

    #[test]
    fn test_missing_provider_is_rejected() {
        let result = DashboardConfig::from_json_str("{}");
        assert!(result.is_err());

        assert_eq!(
            DashboardConfig::default().validate(),
            Err(DashboardError::Config("provider_id is required".to_string()))
        );
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let config = DashboardConfig::default().with_provider_id("abc");
        assert!(config.validate().is_ok());

        let config = DashboardConfig { api_base_url: "localhost:3333".to_string(), ..config };
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let error = DashboardConfig::from_json_str("{not json").unwrap_err();
        assert!(error.to_string().contains("Failed to parse dashboard configuration"));
    }
}
