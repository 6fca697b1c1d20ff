//! Rendering generated prompts for the terminal or a file

use crate::prompts::GeneratedPrompts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize prompts: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write prompts to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render `prompts` in the requested format
pub fn render(prompts: &GeneratedPrompts, format: OutputFormat) -> Result<String, OutputError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(prompts)?,
        OutputFormat::Markdown => format!(
            "# Generated prompts\n\n**Model:** {}\n\n## System prompt\n\n{}\n\n## User prompt\n\n{}\n",
            prompts.model,
            fenced(prompts.system_prompt.trim_end()),
            fenced(prompts.user_prompt.trim_end()),
        ),
        OutputFormat::Text => format!(
            "=== Model ===\n{}\n\n=== System prompt ===\n{}\n\n=== User prompt ===\n{}\n",
            prompts.model,
            prompts.system_prompt.trim_end(),
            prompts.user_prompt.trim_end(),
        ),
    };
    Ok(rendered)
}

/// Wrap `body` in a code fence longer than any backtick run inside it
fn fenced(body: &str) -> String {
    let longest_run = body.split(|c| c != '`').map(str::len).max().unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);
    format!("{fence}text\n{body}\n{fence}")
}

/// Write already-rendered output to `path`
pub fn write_to(path: &Path, rendered: &str) -> Result<(), OutputError> {
    fs::write(path, rendered).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
