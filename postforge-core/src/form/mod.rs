//! Post form model and submission-time validation
//!
//! [`PostForm`] holds what the user typed; [`validate`] turns it into
//! [`PromptInputs`] the composer accepts, normalizing URL topics on the way.

pub mod labels;
pub mod url;

pub use labels::{Category, Tone};
pub use url::{normalize_url, parse_absolute};

use crate::prompts::{PromptInputs, TopicType};
use crate::suggestions::Suggestion;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input rejected at submission time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a content category")]
    MissingCategory,
    #[error("Unknown content category '{0}'")]
    UnknownCategory(String),
    #[error("Please enter a topic")]
    MissingTopic,
    #[error("Please enter a valid URL (got '{0}')")]
    InvalidUrl(String),
    #[error("Please select a tone")]
    MissingTone,
    #[error("Unknown tone '{0}'")]
    UnknownTone(String),
    #[error("A transcript can only be attached to a video URL topic")]
    TranscriptNeedsUrl,
}

/// Raw form state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    pub category: Option<String>,
    pub topic: String,
    pub topic_type: TopicType,
    pub tone: Option<String>,
}

impl PostForm {
    /// Fill topic and tone from a picked suggestion. Suggestions are always
    /// free-text topics; the category is left as is.
    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        self.topic = suggestion.topic.clone();
        self.tone = Some(suggestion.tone.clone());
        self.topic_type = TopicType::Text;
    }
}

/// Validate `form` and produce composer inputs with canonical labels.
pub fn validate(form: &PostForm) -> Result<PromptInputs, ValidationError> {
    let category = match non_blank(form.category.as_deref()) {
        None => return Err(ValidationError::MissingCategory),
        Some(raw) => raw
            .parse::<Category>()
            .map_err(|_| ValidationError::UnknownCategory(raw.to_string()))?,
    };

    let topic = match form.topic_type {
        TopicType::Text => {
            let topic = form.topic.trim();
            if topic.is_empty() {
                return Err(ValidationError::MissingTopic);
            }
            topic.to_string()
        }
        TopicType::Url => {
            if form.topic.trim().is_empty() {
                return Err(ValidationError::MissingTopic);
            }
            let normalized = normalize_url(&form.topic);
            if parse_absolute(&normalized).is_none() {
                return Err(ValidationError::InvalidUrl(form.topic.trim().to_string()));
            }
            normalized
        }
    };

    let tone = match non_blank(form.tone.as_deref()) {
        None => return Err(ValidationError::MissingTone),
        Some(raw) => raw
            .parse::<Tone>()
            .map_err(|_| ValidationError::UnknownTone(raw.to_string()))?,
    };

    Ok(PromptInputs::new(
        category.label(),
        topic,
        form.topic_type,
        tone.label(),
    ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
