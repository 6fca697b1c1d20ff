//! System and user prompt composition

pub mod composer;
pub mod templates;
pub mod types;

pub use composer::compose;
pub use templates::{TEXT_SYSTEM_PROMPT, VIDEO_SYSTEM_PROMPT};
pub use types::{GeneratedPrompts, ModelLabel, PromptInputs, TopicType};
