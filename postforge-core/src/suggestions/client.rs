use super::{Suggestion, SuggestionError, SuggestionRequest, parse_suggestions};
use crate::config::endpoint::WebhookEndpoint;
use crate::config::loader::SuggestionsConfig;
use reqwest::{Client as HttpClient, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP client for the suggestion webhook. One request per call, no retry.
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    http_client: HttpClient,
    endpoint: Url,
}

impl SuggestionClient {
    pub fn new(endpoint: Url, settings: &SuggestionsConfig) -> Self {
        let mut builder = HttpClient::builder().user_agent(settings.user_agent.clone());
        if settings.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        }
        let http_client = builder.build().unwrap_or_else(|error| {
            warn!(
                ?error,
                "Failed to build dedicated webhook client; falling back to default"
            );
            HttpClient::new()
        });

        Self {
            http_client,
            endpoint,
        }
    }

    /// Build a client for a resolved endpoint. Fails before any network
    /// activity when the endpoint is not configured.
    pub fn from_endpoint(
        endpoint: WebhookEndpoint,
        settings: &SuggestionsConfig,
    ) -> Result<Self, SuggestionError> {
        match endpoint {
            WebhookEndpoint::Configured(url) => Ok(Self::new(url, settings)),
            WebhookEndpoint::Missing => Err(SuggestionError::MissingEndpoint),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Ask the webhook for topic ideas matching `description` in `category`.
    pub async fn fetch(
        &self,
        category: &str,
        description: &str,
    ) -> Result<Vec<Suggestion>, SuggestionError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(SuggestionError::EmptyQuery);
        }

        let request = SuggestionRequest::new(category, description);
        debug!(endpoint = %self.endpoint, category, "requesting topic suggestions");

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| SuggestionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestionError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SuggestionError::Network(e.to_string()))?;

        let ideas = parse_suggestions(&body)?;
        debug!(count = ideas.len(), "received topic suggestions");
        Ok(ideas)
    }
}
