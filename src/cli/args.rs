//! CLI argument parsing

use clap::{Args, Parser, Subcommand, ValueHint};
use postforge_core::output::OutputFormat;
use std::path::PathBuf;

/// Compose ready-to-paste LLM prompts for social posts
#[derive(Parser, Debug)]
#[command(
    name = "postforge",
    version,
    about = "Compose ready-to-paste LLM prompts for social posts\n\nQuick Start:\n  postforge compose --category educational --tone Casual --topic \"time management\"\n  postforge compose --category case-study --tone Authoritative --url youtube.com/watch?v=abc"
)]
pub struct Cli {
    /// Configuration file path
    ///
    /// Default locations: ./postforge.toml, ./.postforge/postforge.toml,
    /// ~/.postforge/postforge.toml
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory to look for configuration in; defaults to current directory
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::DirPath)]
    pub workspace: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace). RUST_LOG wins when set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build system and user prompts from the form fields
    Compose(ComposeArgs),

    /// Ask the suggestion webhook for topic ideas
    Suggest(SuggestArgs),

    /// List accepted content categories
    Categories,

    /// List accepted tones
    Tones,

    /// Write a sample postforge.toml into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Where and how generated prompts are emitted
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (text, markdown, json); defaults to [output] format
    #[arg(long, value_parser = clap::value_parser!(OutputFormat))]
    pub format: Option<OutputFormat>,

    /// Also write the prompts to this file
    #[arg(long, short, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ComposeArgs {
    /// Content category label or short name (educational, case-study, story, promo)
    #[arg(long, short)]
    pub category: Option<String>,

    /// Tone label (Casual, Authoritative, Inspirational, Humorous, Professional)
    #[arg(long, short = 'T')]
    pub tone: Option<String>,

    /// Free-text topic
    #[arg(long, short, conflicts_with = "url", required_unless_present = "url")]
    pub topic: Option<String>,

    /// Video URL; a missing scheme defaults to https://
    #[arg(long, short)]
    pub url: Option<String>,

    /// Transcript to paste into the video user prompt
    #[arg(
        long,
        requires = "url",
        conflicts_with = "topic",
        value_hint = ValueHint::FilePath
    )]
    pub transcript_file: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SuggestArgs {
    /// Content category label or short name
    #[arg(long, short)]
    pub category: Option<String>,

    /// What you want ideas about
    #[arg(required = true, num_args = 1..)]
    pub description: Vec<String>,

    /// Tone for the picked suggestion instead of the one the webhook proposed
    #[arg(long, short = 'T')]
    pub tone: Option<String>,

    /// Apply suggestion N (1-based) and compose prompts from it
    #[arg(long, value_name = "N")]
    pub pick: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}
