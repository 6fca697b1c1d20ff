use anyhow::{Context, Result};
use console::style;
use postforge_core::PostforgeConfig;
use postforge_core::notify::Notifier;
use std::path::Path;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool, notifier: &Notifier) -> Result<()> {
    println!("{}", style("Initialize postforge configuration").blue().bold());
    println!("Workspace: {}", workspace.display());

    let created = PostforgeConfig::bootstrap_project(workspace, force)
        .with_context(|| "failed to initialize configuration files")?;

    if created.is_empty() {
        notifier.warning("postforge.toml already exists; use --force to overwrite it");
    } else {
        for file in created {
            notifier.success(&format!("Created {file}"));
        }
    }

    Ok(())
}
