use crate::config::constants::{files, webhook};
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suggestion webhook settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuggestionsConfig {
    /// Webhook address; `POSTFORGE_WEBHOOK_URL` takes precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Request timeout in seconds, 0 waits until the webhook answers
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with webhook requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    webhook::DEFAULT_TIMEOUT_SECS
}
fn default_user_agent() -> String {
    webhook::DEFAULT_USER_AGENT.to_string()
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Output rendering settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Form values used when a flag is omitted
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

/// Main configuration structure for postforge
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostforgeConfig {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl PostforgeConfig {
    /// Write a sample `postforge.toml` into `workspace`. Returns the created
    /// file names; an existing file is kept unless `force` is set.
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Vec<String>> {
        let config_path = workspace.as_ref().join(files::CONFIG_FILE);
        let mut created_files = Vec::new();

        if !config_path.exists() || force {
            Self::create_sample_config(&config_path)?;
            created_files.push(files::CONFIG_FILE.to_string());
        }

        Ok(created_files)
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = Self::sample_toml()?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }

    fn sample_toml() -> Result<String> {
        let body = toml::to_string_pretty(&PostforgeConfig::default())
            .context("Failed to serialize default configuration")?;
        Ok(format!(
            "# postforge configuration\n\
             # Set [suggestions] webhook_url or export {} to enable `postforge suggest`.\n\n{body}",
            webhook::URL_ENV
        ))
    }
}

/// Configuration manager for loading configuration files
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PostforgeConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    fn get_home_dir() -> Option<PathBuf> {
        dirs::home_dir()
    }

    /// Search `workspace/postforge.toml`, `workspace/.postforge/postforge.toml`
    /// and `~/.postforge/postforge.toml` in that order, falling back to
    /// defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(files::CONFIG_FILE),
            workspace.join(files::CONFIG_DIR).join(files::CONFIG_FILE),
        ];
        if let Some(home_dir) = Self::get_home_dir() {
            candidates.push(home_dir.join(files::CONFIG_DIR).join(files::CONFIG_FILE));
        }

        for candidate in candidates {
            if candidate.exists() {
                return Self::load_from_file(&candidate);
            }
        }

        debug!(workspace = %workspace.display(), "no config file found, using defaults");
        Ok(Self {
            config: PostforgeConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PostforgeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PostforgeConfig {
        &self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_errors_and_defaults_are_empty() {
        let tmp = TempDir::new().unwrap();
        let manager = ConfigManager::load_from_file(tmp.path().join("missing.toml"));
        assert!(manager.is_err());

        let config = PostforgeConfig::default();
        assert!(config.suggestions.webhook_url.is_none());
        assert_eq!(config.suggestions.timeout_secs, 0);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn loads_workspace_file_first() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(files::CONFIG_DIR)).unwrap();
        fs::write(
            tmp.path().join(files::CONFIG_DIR).join(files::CONFIG_FILE),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join(files::CONFIG_FILE),
            "[suggestions]\nwebhook_url = \"https://hooks.example.com/a\"\ntimeout_secs = 15\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(tmp.path()).unwrap();
        let config = manager.config();
        assert_eq!(
            config.suggestions.webhook_url.as_deref(),
            Some("https://hooks.example.com/a")
        );
        assert_eq!(config.suggestions.timeout_secs, 15);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(
            manager.config_path(),
            Some(tmp.path().join(files::CONFIG_FILE).as_path())
        );
    }

    #[test]
    fn falls_back_to_dot_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(files::CONFIG_DIR)).unwrap();
        fs::write(
            tmp.path().join(files::CONFIG_DIR).join(files::CONFIG_FILE),
            "[defaults]\ntone = \"Humorous\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(tmp.path()).unwrap();
        assert_eq!(manager.config().defaults.tone.as_deref(), Some("Humorous"));
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(files::CONFIG_FILE);
        fs::write(&path, "[suggestions\n").unwrap();

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn bootstrap_respects_force() {
        let tmp = TempDir::new().unwrap();
        let created = PostforgeConfig::bootstrap_project(tmp.path(), false).unwrap();
        assert_eq!(created, vec![files::CONFIG_FILE.to_string()]);

        let again = PostforgeConfig::bootstrap_project(tmp.path(), false).unwrap();
        assert!(again.is_empty());

        let forced = PostforgeConfig::bootstrap_project(tmp.path(), true).unwrap();
        assert_eq!(forced.len(), 1);

        let written = fs::read_to_string(tmp.path().join(files::CONFIG_FILE)).unwrap();
        let parsed: PostforgeConfig = toml::from_str(&written).unwrap();
        assert_eq!(parsed.suggestions.user_agent, webhook::DEFAULT_USER_AGENT);
    }
}
