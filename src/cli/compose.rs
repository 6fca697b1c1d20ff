use crate::cli::{ComposeArgs, OutputArgs};
use anyhow::{Context, Result};
use postforge_core::form::{PostForm, ValidationError, validate};
use postforge_core::notify::Notifier;
use postforge_core::output::{self, OutputFormat};
use postforge_core::prompts::{GeneratedPrompts, TopicType, compose};
use postforge_core::{PostforgeConfig, PostforgeError};
use std::fs;

/// Handle the compose command
pub fn handle_compose_command(
    config: &PostforgeConfig,
    args: &ComposeArgs,
    notifier: &Notifier,
) -> Result<()> {
    let form = form_from_args(config, args);
    let inputs = validate(&form).map_err(PostforgeError::from)?;
    if args.transcript_file.is_some() && inputs.topic_type == TopicType::Text {
        return Err(PostforgeError::from(ValidationError::TranscriptNeedsUrl).into());
    }
    let mut prompts = compose(&inputs);

    if let Some(path) = &args.transcript_file {
        let transcript = fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()))?;
        prompts = prompts.with_transcript(transcript.trim_end());
    } else if prompts.needs_transcript() {
        notifier.info("Paste the video transcript where the user prompt says {{transcript}}");
    }

    emit_prompts(config, &args.output, &prompts, notifier)
}

pub(crate) fn form_from_args(config: &PostforgeConfig, args: &ComposeArgs) -> PostForm {
    let (topic, topic_type) = match (&args.url, &args.topic) {
        (Some(url), _) => (url.clone(), TopicType::Url),
        (None, topic) => (topic.clone().unwrap_or_default(), TopicType::Text),
    };

    PostForm {
        category: args
            .category
            .clone()
            .or_else(|| config.defaults.category.clone()),
        topic,
        topic_type,
        tone: args.tone.clone().or_else(|| config.defaults.tone.clone()),
    }
}

/// Print prompts to stdout and, when requested, save them to a file.
///
/// Prompts are printed before the file is written, so a failed write still
/// leaves them on screen.
pub(crate) fn emit_prompts(
    config: &PostforgeConfig,
    args: &OutputArgs,
    prompts: &GeneratedPrompts,
    notifier: &Notifier,
) -> Result<()> {
    let format: OutputFormat = args.format.unwrap_or(config.output.format);
    let rendered = output::render(prompts, format).map_err(PostforgeError::from)?;
    print!("{rendered}");

    if let Some(path) = &args.output {
        output::write_to(path, &rendered).map_err(PostforgeError::from)?;
        notifier.success(&format!("Prompts saved to {}", path.display()));
    }

    Ok(())
}
