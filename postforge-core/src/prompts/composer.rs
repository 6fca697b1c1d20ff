//! Prompt composition: pick the template family for the topic type and fill
//! in the form fields.

use super::templates::{
    self, TEXT_SYSTEM_PROMPT, TEXT_USER_TEMPLATE, VIDEO_SYSTEM_PROMPT, VIDEO_USER_TEMPLATE,
};
use super::types::{GeneratedPrompts, ModelLabel, PromptInputs, TopicType};
use crate::config::constants::placeholders;
use tracing::debug;

/// Compose the system and user prompts for `inputs`.
///
/// Total and deterministic. Category, tone and topic are interpolated as
/// given; nothing is validated here.
pub fn compose(inputs: &PromptInputs) -> GeneratedPrompts {
    let (system_prompt, user_prompt) = match inputs.topic_type {
        TopicType::Url => (
            VIDEO_SYSTEM_PROMPT,
            // The transcript marker stays in place for the caller to fill.
            templates::render(
                VIDEO_USER_TEMPLATE,
                &[
                    (placeholders::CATEGORY, inputs.category.as_str()),
                    (placeholders::TONE, inputs.tone.as_str()),
                ],
            ),
        ),
        TopicType::Text => (
            TEXT_SYSTEM_PROMPT,
            templates::render(
                TEXT_USER_TEMPLATE,
                &[
                    (placeholders::TOPIC, inputs.topic.as_str()),
                    (placeholders::CATEGORY, inputs.category.as_str()),
                    (placeholders::TONE, inputs.tone.as_str()),
                ],
            ),
        ),
    };

    let model = ModelLabel::from(inputs.topic_type);
    debug!(
        topic_type = %inputs.topic_type,
        %model,
        user_prompt_len = user_prompt.len(),
        "composed prompts"
    );

    GeneratedPrompts {
        system_prompt: system_prompt.to_string(),
        user_prompt,
        model,
    }
}
