//! Configuration for banking API clients.
//!
//! Holds the base URL and request settings a transport layer needs, and
//! assembles request URLs from an endpoint path plus an encoded filter set.

use crate::query::{QueryParams, QueryString};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for a banking API client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClientConfig {
    /// API base URL
    #[validate(url)]
    pub base_url: String,

    /// Optional version prefix inserted before every endpoint path (e.g. "v1")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 16))]
    pub api_version: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Create a new client configuration with required parameters.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API base URL (e.g., "https://api.bank.example")
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            api_version: None,
            request_timeout_secs: default_request_timeout_secs(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Set the API version prefix.
    #[must_use]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Build the full URL for an endpoint, appending the encoded filters.
    ///
    /// `path` is a relative endpoint path such as `"accounts"` or
    /// `"cards/search"`. It is appended below the base URL path and the
    /// version prefix; any query or fragment of the base URL is dropped.
    /// `params` of `None` means no filtering was requested, and the URL then
    /// carries no query string at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `path` contains `?`, `#` or a
    /// `.`/`..` segment, and [`Error::ConfigError`] if the base URL cannot
    /// carry a path.
    pub fn request_url<T>(&self, path: &str, params: Option<&T>) -> Result<Url, Error>
    where
        T: QueryString + ?Sized,
    {
        let segments = endpoint_segments(path)?;
        let mut url = self.parse_base_url()?;

        {
            let mut url_path = url.path_segments_mut().map_err(|()| {
                Error::ConfigError(format!("Base URL cannot carry a path: {}", self.base_url))
            })?;
            url_path.pop_if_empty();
            if let Some(version) = self.api_version.as_deref() {
                url_path.extend(version.split('/').filter(|segment| !segment.is_empty()));
            }
            url_path.extend(segments);
        }

        let query = params.map_or_else(QueryParams::new, |params| params.query_params());
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query.to_form_body()));
        }
        url.set_fragment(None);

        tracing::debug!(url = %url, "built request url");
        Ok(url)
    }
}

fn endpoint_segments(path: &str) -> Result<Vec<&str>, Error> {
    if path.contains(['?', '#']) {
        return Err(Error::InvalidEndpoint(format!(
            "Endpoint path must not carry a query or fragment: {path:?}"
        )));
    }

    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    if segments.iter().any(|segment| matches!(*segment, "." | "..")) {
        return Err(Error::InvalidEndpoint(format!(
            "Endpoint path must not contain dot segments: {path:?}"
        )));
    }
    Ok(segments)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_version: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::filter_params! {
        /// Filters used by the tests below.
        struct ListParams {
            /// Status filter.
            status: String => "status",
            /// Page size.
            max: i32 => "max",
        }
    }

    #[test]
    fn test_client_config_new() {
        let config = ClientConfig::new("https://api.bank.example").unwrap();
        assert_eq!(config.base_url, "https://api.bank.example");
        assert!(config.api_version.is_none());
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_client_config_invalid_url() {
        let result = ClientConfig::new("not-a-url");
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new("https://api.bank.example")
            .unwrap()
            .with_api_version("v2")
            .with_timeout(60);

        assert_eq!(config.api_version.as_deref(), Some("v2"));
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = ClientConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 301;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialization_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "https://api.bank.example"}"#).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.api_version.is_none());
    }

    #[test]
    fn test_request_url_without_filters() {
        let config = ClientConfig::new("https://api.bank.example").unwrap();
        let url = config.request_url::<ListParams>("accounts", None).unwrap();
        assert_eq!(url.as_str(), "https://api.bank.example/accounts");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_request_url_with_empty_filters() {
        let config = ClientConfig::new("https://api.bank.example").unwrap();
        let url = config
            .request_url("/accounts", Some(&ListParams::new()))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.bank.example/accounts");
    }

    #[test]
    fn test_request_url_with_filters_and_version() {
        let config = ClientConfig::new("https://api.bank.example/base/")
            .unwrap()
            .with_api_version("v1");
        let params = ListParams::new().status("ACTIVE").max(0);
        let url = config.request_url("cards", Some(&params)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.bank.example/base/v1/cards?status=ACTIVE&max=0"
        );
    }

    #[test]
    fn test_request_url_single_filter_has_clean_query() {
        let config = ClientConfig::new("https://api.bank.example").unwrap();
        let params = ListParams::new().max(10);
        let url = config.request_url("banks", Some(&params)).unwrap();
        assert_eq!(url.query(), Some("max=10"));
    }

    #[test]
    fn test_request_url_nested_path() {
        let config = ClientConfig::new("https://api.bank.example/base").unwrap();
        let url = config
            .request_url::<ListParams>("/cards/search/", None)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.bank.example/base/cards/search");
    }

    #[test]
    fn test_request_url_rejects_dot_segments() {
        let config = ClientConfig::new("https://api.bank.example/base/")
            .unwrap()
            .with_api_version("v1");
        for path in ["../../admin", "cards/../admin", "./cards"] {
            let err = config.request_url::<ListParams>(path, None).unwrap_err();
            assert!(matches!(err, Error::InvalidEndpoint(_)), "path {path:?}");
        }
    }

    #[test]
    fn test_request_url_rejects_query_and_fragment_in_path() {
        let config = ClientConfig::new("https://api.bank.example").unwrap();
        let params = ListParams::new().status("ACTIVE");
        for path in ["cards?page=2", "cards#x"] {
            let err = config.request_url(path, Some(&params)).unwrap_err();
            assert!(matches!(err, Error::InvalidEndpoint(_)), "path {path:?}");
        }
    }

    #[test]
    fn test_request_url_replaces_base_query_and_fragment() {
        let config = ClientConfig::new("https://api.bank.example/base?token=abc#top").unwrap();
        let params = ListParams::new().status("BLOCKED");
        let url = config.request_url("accounts", Some(&params)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.bank.example/base/accounts?status=BLOCKED"
        );

        let url = config.request_url::<ListParams>("accounts", None).unwrap();
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_request_url_cannot_be_base() {
        let config = ClientConfig {
            base_url: "mailto:ops@bank.example".to_string(),
            ..ClientConfig::default()
        };
        let err = config.request_url::<ListParams>("accounts", None).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_parse_base_url_invalid() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(
            config.parse_base_url(),
            Err(Error::InvalidEndpoint(_))
        ));
    }
}
