//! postforge CLI - compose LLM prompts for social posts

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use postforge_core::config::{ConfigError, ConfigManager, load_dotenv};
use postforge_core::notify::{Level, Notifier};
use postforge_core::PostforgeError;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(&args.log_level);
    load_dotenv();

    let notifier = Notifier::new();
    match run(args, &notifier).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PostforgeError>() {
                Some(known) => notifier.error(known),
                None => notifier.notify(Level::Error, &format!("{err:#}")),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load `postforge.toml`, reporting read and parse failures as configuration errors
fn load_config(
    explicit: Option<&Path>,
    workspace: &Path,
) -> std::result::Result<ConfigManager, PostforgeError> {
    let loaded = match explicit {
        Some(path) => ConfigManager::load_from_file(path),
        None => ConfigManager::load_from_workspace(workspace),
    };
    loaded.map_err(|err| ConfigError::Load(format!("{err:#}")).into())
}

async fn run(args: Cli, notifier: &Notifier) -> Result<()> {
    let workspace = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let manager = load_config(args.config.as_deref(), &workspace)?;
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "using configuration file");
    }
    let config = manager.config();

    match &args.command {
        Commands::Compose(compose) => cli::handle_compose_command(config, compose, notifier),
        Commands::Suggest(suggest) => cli::handle_suggest_command(config, suggest, notifier).await,
        Commands::Categories => {
            cli::handle_categories_command();
            Ok(())
        }
        Commands::Tones => {
            cli::handle_tones_command();
            Ok(())
        }
        Commands::Init { force } => cli::handle_init_command(&workspace, *force, notifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postforge_core::error::ErrorKind;
    use postforge_core::notify::describe;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unreadable_config_is_a_configuration_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("postforge.toml");
        fs::write(&path, "[suggestions\n").unwrap();

        let err = load_config(Some(&path), tmp.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        let message = describe(&err);
        assert!(message.starts_with("Configuration error: Failed to parse config file"));
    }

    #[test]
    fn workspace_without_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let manager = load_config(None, tmp.path()).unwrap();
        assert!(manager.config().suggestions.webhook_url.is_none());
    }
}
