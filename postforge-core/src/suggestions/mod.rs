//! Topic suggestions from the external webhook

pub mod board;
pub mod client;

pub use board::{FetchStatus, SuggestionBoard};
pub use client::SuggestionClient;

use crate::config::constants::webhook;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single suggested topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub topic: String,
    pub tone: String,
}

/// Body posted to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionRequest {
    pub action: &'static str,
    pub category: String,
    pub description: String,
}

impl SuggestionRequest {
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            action: webhook::ACTION_SUGGEST_TOPICS,
            category: category.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SuggestionResponse {
    #[serde(default)]
    ideas: Option<Vec<Suggestion>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestionError {
    #[error(
        "Suggestion webhook is not configured. Set {} or [suggestions] webhook_url in postforge.toml",
        webhook::URL_ENV
    )]
    MissingEndpoint,
    #[error("Please describe what you want suggestions for")]
    EmptyQuery,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Suggestion webhook returned HTTP {status}")]
    Status { status: u16 },
    #[error("Unexpected response from suggestion webhook: {0}")]
    Decode(String),
}

/// Parse a webhook reply. A missing or null `ideas` field yields no
/// suggestions rather than an error.
pub fn parse_suggestions(body: &str) -> Result<Vec<Suggestion>, SuggestionError> {
    let response: SuggestionResponse =
        serde_json::from_str(body).map_err(|e| SuggestionError::Decode(e.to_string()))?;
    Ok(response.ideas.unwrap_or_default())
}
