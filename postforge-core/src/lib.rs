//! # postforge-core - prompt composition for social posts
//!
//! `postforge-core` turns a small form (content category, topic or video URL,
//! tone) into a ready-to-paste pair of system and user prompts, and fetches
//! topic ideas from an external suggestion webhook.
//!
//! ## Modules
//!
//! - `prompts/`: embedded prompt templates, the placeholder renderer and the
//!   pure [`compose`] function.
//! - `form/`: category and tone vocabularies, URL normalization and
//!   submission-time validation.
//! - `suggestions/`: webhook client, reply parsing and the suggestion board.
//! - `config/`: `postforge.toml` loading and webhook endpoint resolution.
//! - `output`: text, markdown and JSON rendering of generated prompts.
//! - `notify`: the single user-facing notification channel.
//!
//! ## Quickstart
//!
//! ```rust
//! use postforge_core::form::{PostForm, validate};
//! use postforge_core::prompts::{ModelLabel, TopicType, compose};
//!
//! let form = PostForm {
//!     category: Some("educational".to_string()),
//!     topic: "time management".to_string(),
//!     topic_type: TopicType::Text,
//!     tone: Some("Casual".to_string()),
//! };
//!
//! let inputs = validate(&form).unwrap();
//! let prompts = compose(&inputs);
//! assert_eq!(prompts.model, ModelLabel::GeneralText);
//! assert!(prompts.user_prompt.contains("time management"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod output;
pub mod prompts;
pub mod suggestions;

pub use config::{ConfigManager, PostforgeConfig, WebhookEndpoint};
pub use error::{ErrorKind, PostforgeError};
pub use form::{Category, PostForm, Tone, ValidationError, normalize_url, validate};
pub use prompts::{GeneratedPrompts, ModelLabel, PromptInputs, TopicType, compose};
pub use suggestions::{Suggestion, SuggestionBoard, SuggestionClient, SuggestionError};
