use crate::config::constants::{models, placeholders};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::templates;

/// Whether the topic is free text or a URL pointing at video content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicType {
    #[default]
    Text,
    Url,
}

impl TopicType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for TopicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "url" => Ok(Self::Url),
            other => Err(format!("unknown topic type '{other}' (expected text or url)")),
        }
    }
}

/// Downstream model family the prompts are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelLabel {
    #[serde(rename = "general-purpose text model")]
    GeneralText,
    #[serde(rename = "video-capable model")]
    VideoCapable,
}

impl ModelLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralText => models::GENERAL_TEXT,
            Self::VideoCapable => models::VIDEO_CAPABLE,
        }
    }
}

impl From<TopicType> for ModelLabel {
    fn from(topic_type: TopicType) -> Self {
        match topic_type {
            TopicType::Text => Self::GeneralText,
            TopicType::Url => Self::VideoCapable,
        }
    }
}

impl fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Composer input. Category and tone are free-form here; membership is
/// enforced by [`crate::form::validate`], not by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptInputs {
    pub category: String,
    pub topic: String,
    pub topic_type: TopicType,
    pub tone: String,
}

impl PromptInputs {
    pub fn new(
        category: impl Into<String>,
        topic: impl Into<String>,
        topic_type: TopicType,
        tone: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            topic: topic.into(),
            topic_type,
            tone: tone.into(),
        }
    }
}

/// Composer output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPrompts {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: ModelLabel,
}

impl GeneratedPrompts {
    /// Whether the user prompt still carries an unfilled transcript marker
    pub fn needs_transcript(&self) -> bool {
        self.user_prompt.contains(placeholders::TRANSCRIPT_MARKER)
    }

    /// Copy with the transcript placeholder filled in
    pub fn with_transcript(&self, transcript: &str) -> Self {
        Self {
            system_prompt: self.system_prompt.clone(),
            user_prompt: templates::render(
                &self.user_prompt,
                &[(placeholders::TRANSCRIPT, transcript)],
            ),
            model: self.model,
        }
    }
}
