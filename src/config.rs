//! Client configuration
//!
//! A serde-friendly description of one API endpoint and the identity used to
//! talk to it. Host applications can embed it in their own YAML or JSON
//! settings and hand it to [`ApiClient::from_config`](crate::ApiClient::from_config).
//!
//! ```yaml
//! user_agent: "ExampleBot/1.0 (https://example.org/bot; bot@example.org)"
//! api_url: "https://en.wikipedia.org/w/api.php"
//! timeout_secs: 10
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

fn default_timeout_secs() -> u64 {
    30
}

/// Endpoint and identity for an [`ApiClient`](crate::ApiClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Full URL of `api.php`
    pub api_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config with the default timeout
    pub fn new(user_agent: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            api_url: api_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Set the request timeout
    ///
    /// The config stores whole seconds, so a fractional timeout is rounded up
    /// and anything shorter than a second becomes one second.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = secs.max(1);
        self
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the config and return the parsed endpoint
    pub fn validate(&self) -> Result<Url> {
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than zero"));
        }
        validate_endpoint(&self.user_agent, &self.api_url)
    }
}

/// Check a user agent and API URL pair, returning the parsed URL
pub(crate) fn validate_endpoint(user_agent: &str, api_url: &str) -> Result<Url> {
    if user_agent.trim().is_empty() {
        return Err(Error::config("user_agent must not be empty"));
    }

    let url = Url::parse(api_url)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::config(format!(
            "api_url must use http or https, got '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_timeout() {
        let config = ClientConfig::new("bot/1.0", "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
user_agent: "ExampleBot/1.0"
api_url: "https://www.mediawiki.org/w/api.php"
timeout_secs: 10
"#;
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.user_agent, "ExampleBot/1.0");
        assert_eq!(config.api_url, "https://www.mediawiki.org/w/api.php");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_from_yaml_default_timeout() {
        let yaml = "user_agent: bot\napi_url: https://example.org/w/api.php\n";
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_yaml_missing_field() {
        let err = ClientConfig::from_yaml_str("user_agent: bot\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_validate_rejects_empty_user_agent() {
        let err = ClientConfig::new("  ", "https://example.org/w/api.php")
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let err = ClientConfig::new("bot", "not a url").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientConfig::new("bot", "ftp://example.org/api.php")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_with_timeout_rounds_up_to_whole_seconds() {
        let config = ClientConfig::new("bot", "https://example.org/w/api.php");

        let config = config.with_timeout(Duration::from_millis(1500));
        assert_eq!(config.timeout_secs, 2);

        let config = config.with_timeout(Duration::from_secs(7));
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn test_with_timeout_sub_second_is_one_second() {
        let config = ClientConfig::new("bot", "https://example.org/w/api.php")
            .with_timeout(Duration::from_millis(200));
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert!(config.validate().is_ok());

        let config = config.with_timeout(Duration::ZERO);
        assert_eq!(config.timeout_secs, 1);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let yaml = "user_agent: bot\napi_url: https://example.org/w/api.php\ntimeout_secs: 0\n";
        let err = ClientConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
