//! Webhook endpoint resolution from environment variables, `.env` files and
//! the configuration file.
//!
//! The environment wins over `postforge.toml` so a deployment can point at a
//! different webhook without editing the file. An absent endpoint is a value
//! ([`WebhookEndpoint::Missing`]), not an error, so callers decide when it
//! matters.

use crate::config::constants::webhook;
use crate::config::loader::SuggestionsConfig;
use reqwest::Url;
use std::env;
use thiserror::Error;
use tracing::{debug, warn};

/// Where suggestion requests go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEndpoint {
    Configured(Url),
    Missing,
}

impl WebhookEndpoint {
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Webhook URL '{value}' from {source_name} is not a valid absolute URL")]
    InvalidWebhookUrl { value: String, source_name: String },
    #[error("{0}")]
    Load(String),
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is fine; a malformed one is logged and ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded environment variables"),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }
}

/// Resolve the webhook endpoint from the process environment and `config`.
pub fn resolve_webhook_endpoint(
    config: &SuggestionsConfig,
) -> Result<WebhookEndpoint, ConfigError> {
    resolve_with(config, |key| env::var(key).ok())
}

/// Same as [`resolve_webhook_endpoint`] with an injectable variable lookup.
pub fn resolve_with<F>(config: &SuggestionsConfig, lookup: F) -> Result<WebhookEndpoint, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let from_env = lookup(webhook::URL_ENV).filter(|v| !v.trim().is_empty());
    let (value, source_name) = match from_env {
        Some(value) => (value, webhook::URL_ENV.to_string()),
        None => match config.webhook_url.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => (value.to_string(), "postforge.toml".to_string()),
            _ => return Ok(WebhookEndpoint::Missing),
        },
    };

    let value = value.trim().to_string();
    match Url::parse(&value) {
        Ok(url) if url.host_str().is_some() => {
            debug!(source = %source_name, "webhook endpoint configured");
            Ok(WebhookEndpoint::Configured(url))
        }
        _ => Err(ConfigError::InvalidWebhookUrl { value, source_name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(url: Option<&str>) -> SuggestionsConfig {
        SuggestionsConfig {
            webhook_url: url.map(str::to_string),
            ..SuggestionsConfig::default()
        }
    }

    #[test]
    fn missing_when_nothing_is_set() {
        let endpoint = resolve_with(&config_with(None), |_| None).unwrap();
        assert_eq!(endpoint, WebhookEndpoint::Missing);
        assert!(!endpoint.is_configured());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let endpoint = resolve_with(&config_with(Some("  ")), |_| Some(String::new())).unwrap();
        assert_eq!(endpoint, WebhookEndpoint::Missing);
    }

    #[test]
    fn environment_overrides_file() {
        let endpoint = resolve_with(&config_with(Some("https://file.example.com/hook")), |key| {
            (key == webhook::URL_ENV).then(|| "https://env.example.com/hook".to_string())
        })
        .unwrap();
        match endpoint {
            WebhookEndpoint::Configured(url) => assert_eq!(url.host_str(), Some("env.example.com")),
            WebhookEndpoint::Missing => panic!("expected configured endpoint"),
        }
    }

    #[test]
    fn falls_back_to_file() {
        let endpoint =
            resolve_with(&config_with(Some("https://file.example.com/hook")), |_| None).unwrap();
        assert!(endpoint.is_configured());
    }

    #[test]
    fn rejects_malformed_url() {
        let err = resolve_with(&config_with(Some("not a url")), |_| None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidWebhookUrl {
                value: "not a url".to_string(),
                source_name: "postforge.toml".to_string(),
            }
        );
    }
}
