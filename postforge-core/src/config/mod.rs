//! postforge configuration module
//!
//! Loads `postforge.toml`, resolves the suggestion webhook endpoint and keeps
//! the fixed labels and constants in one place.

pub mod constants;
pub mod endpoint;
pub mod loader;

pub use endpoint::{ConfigError, WebhookEndpoint, load_dotenv, resolve_webhook_endpoint};
pub use loader::{ConfigManager, DefaultsConfig, OutputConfig, PostforgeConfig, SuggestionsConfig};
