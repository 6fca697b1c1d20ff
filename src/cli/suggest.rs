use crate::cli::SuggestArgs;
use crate::cli::compose::emit_prompts;
use anyhow::{Result, anyhow};
use console::style;
use postforge_core::config::resolve_webhook_endpoint;
use postforge_core::form::{Category, PostForm, Tone, ValidationError, validate};
use postforge_core::notify::Notifier;
use postforge_core::prompts::compose;
use postforge_core::suggestions::{FetchStatus, Suggestion, SuggestionBoard, SuggestionClient};
use postforge_core::{PostforgeConfig, PostforgeError};

/// Handle the suggest command
pub async fn handle_suggest_command(
    config: &PostforgeConfig,
    args: &SuggestArgs,
    notifier: &Notifier,
) -> Result<()> {
    let category = args
        .category
        .clone()
        .or_else(|| config.defaults.category.clone())
        .ok_or_else(|| PostforgeError::from(ValidationError::MissingCategory))?;
    let category_label = category
        .parse::<Category>()
        .map(|c| c.label().to_string())
        .map_err(|_| PostforgeError::from(ValidationError::UnknownCategory(category.clone())))?;

    // Configuration problems surface before anything touches the network.
    let endpoint = resolve_webhook_endpoint(&config.suggestions).map_err(PostforgeError::from)?;
    let client = SuggestionClient::from_endpoint(endpoint, &config.suggestions)
        .map_err(PostforgeError::from)?;

    let mut board = SuggestionBoard::new();
    board.begin();
    notifier.info("Fetching topic suggestions...");
    board.finish(
        client
            .fetch(&category_label, &args.description.join(" "))
            .await,
    );

    match board.status() {
        FetchStatus::Failed(err) => return Err(PostforgeError::from(err.clone()).into()),
        FetchStatus::Done(0) => {
            notifier.warning("The webhook returned no suggestions");
            return Ok(());
        }
        _ => {}
    }

    let Some(position) = args.pick else {
        print_suggestions(&board);
        notifier.success(&format!(
            "{} suggestions ready; rerun with --pick N to compose prompts",
            board.suggestions().len()
        ));
        return Ok(());
    };

    let suggestion = board.pick(position).ok_or_else(|| {
        anyhow!(
            "No suggestion #{position}; the webhook returned {}",
            board.suggestions().len()
        )
    })?;
    notifier.success(&format!("Using suggestion: {}", suggestion.title));

    let form = form_from_suggestion(config, args, category_label, suggestion, notifier);
    let inputs = validate(&form).map_err(PostforgeError::from)?;
    emit_prompts(config, &args.output, &compose(&inputs), notifier)
}

/// Build the form for a picked suggestion. `--tone` wins over the proposed
/// tone; a proposed tone outside the vocabulary falls back to `[defaults] tone`.
fn form_from_suggestion(
    config: &PostforgeConfig,
    args: &SuggestArgs,
    category_label: String,
    suggestion: &Suggestion,
    notifier: &Notifier,
) -> PostForm {
    let mut form = PostForm {
        category: Some(category_label),
        ..PostForm::default()
    };
    form.apply_suggestion(suggestion);

    if let Some(tone) = &args.tone {
        form.tone = Some(tone.clone());
    } else if suggestion.tone.parse::<Tone>().is_err() {
        if let Some(fallback) = &config.defaults.tone {
            notifier.warning(&format!(
                "Suggested tone '{}' is not supported; using {fallback}",
                suggestion.tone
            ));
            form.tone = Some(fallback.clone());
        }
    }

    form
}

fn print_suggestions(board: &SuggestionBoard) {
    for (idx, suggestion) in board.suggestions().iter().enumerate() {
        println!(
            "{} {}",
            style(format!("{}.", idx + 1)).cyan().bold(),
            style(&suggestion.title).bold()
        );
        println!("   Topic: {}", suggestion.topic);
        println!("   Tone:  {}", style(&suggestion.tone).dim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArgs;
    use postforge_core::config::{DefaultsConfig, SuggestionsConfig};
    use postforge_core::output::OutputFormat;
    use postforge_core::suggestions::SuggestionError;
    use serde_json::json;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> PostforgeConfig {
        PostforgeConfig {
            suggestions: SuggestionsConfig {
                webhook_url: Some(format!("{}/suggest", server.uri())),
                ..SuggestionsConfig::default()
            },
            ..PostforgeConfig::default()
        }
    }

    fn suggest_args(category: Option<&str>, pick: Option<usize>) -> SuggestArgs {
        SuggestArgs {
            category: category.map(str::to_string),
            description: vec!["spring".to_string(), "sale".to_string()],
            tone: None,
            pick,
            output: OutputArgs::default(),
        }
    }

    fn json_output(args: &mut SuggestArgs, tmp: &TempDir) -> PathBuf {
        let path = tmp.path().join("prompts.json");
        args.output = OutputArgs {
            format: Some(OutputFormat::Json),
            output: Some(path.clone()),
        };
        path
    }

    fn saved_prompts(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    async fn webhook_with_ideas(ideas: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/suggest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ideas": ideas })))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn sends_canonical_category_label() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/suggest"))
            .and(body_json(json!({
                "action": "suggest_topics",
                "category": "Promotional/Offer",
                "description": "spring sale",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ideas": [{"title": "A", "topic": "B", "tone": "Casual"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        handle_suggest_command(
            &config_for(&server),
            &suggest_args(Some("promo"), None),
            &Notifier::new(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn missing_category_skips_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = handle_suggest_command(
            &config_for(&server),
            &suggest_args(None, None),
            &Notifier::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PostforgeError>(),
            Some(PostforgeError::Validation(ValidationError::MissingCategory))
        ));
    }

    #[tokio::test]
    async fn empty_reply_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let tmp = TempDir::new().unwrap();
        let mut args = suggest_args(Some("promo"), Some(1));
        let output = json_output(&mut args, &tmp);

        handle_suggest_command(&config_for(&server), &args, &Notifier::new())
            .await
            .unwrap();
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn webhook_failure_is_reported_with_its_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = handle_suggest_command(
            &config_for(&server),
            &suggest_args(Some("promo"), None),
            &Notifier::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PostforgeError>(),
            Some(PostforgeError::Suggestion(SuggestionError::Status { status: 502 }))
        ));
    }

    #[tokio::test]
    async fn pick_out_of_range_is_an_error() {
        let server =
            webhook_with_ideas(json!([{"title": "A", "topic": "B", "tone": "Casual"}])).await;

        let err = handle_suggest_command(
            &config_for(&server),
            &suggest_args(Some("promo"), Some(3)),
            &Notifier::new(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("No suggestion #3"));
    }

    #[tokio::test]
    async fn pick_composes_from_the_chosen_idea() {
        let server = webhook_with_ideas(json!([
            {"title": "A", "topic": "first idea", "tone": "Casual"},
            {"title": "B", "topic": "Launch week recap", "tone": "Humorous"}
        ]))
        .await;

        let tmp = TempDir::new().unwrap();
        let mut args = suggest_args(Some("promo"), Some(2));
        let output = json_output(&mut args, &tmp);

        handle_suggest_command(&config_for(&server), &args, &Notifier::new())
            .await
            .unwrap();

        let saved = saved_prompts(&output);
        let user_prompt = saved["user_prompt"].as_str().unwrap();
        assert!(user_prompt.contains("Launch week recap"));
        assert!(user_prompt.contains("Promotional/Offer"));
        assert!(user_prompt.contains("Humorous"));
        assert_eq!(saved["model"], "general-purpose text model");
    }

    #[tokio::test]
    async fn tone_flag_overrides_unsupported_suggested_tone() {
        let server =
            webhook_with_ideas(json!([{"title": "A", "topic": "B", "tone": "Motivational"}]))
                .await;

        let tmp = TempDir::new().unwrap();
        let mut args = suggest_args(Some("promo"), Some(1));
        args.tone = Some("inspirational".to_string());
        let output = json_output(&mut args, &tmp);

        handle_suggest_command(&config_for(&server), &args, &Notifier::new())
            .await
            .unwrap();

        let user_prompt = saved_prompts(&output)["user_prompt"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(user_prompt.contains("Inspirational"));
        assert!(!user_prompt.contains("Motivational"));
    }

    #[tokio::test]
    async fn unsupported_suggested_tone_falls_back_to_default() {
        let server =
            webhook_with_ideas(json!([{"title": "A", "topic": "B", "tone": "Motivational"}]))
                .await;
        let mut config = config_for(&server);
        config.defaults = DefaultsConfig {
            category: None,
            tone: Some("Professional".to_string()),
        };

        let tmp = TempDir::new().unwrap();
        let mut args = suggest_args(Some("promo"), Some(1));
        let output = json_output(&mut args, &tmp);

        handle_suggest_command(&config, &args, &Notifier::new())
            .await
            .unwrap();

        let user_prompt = saved_prompts(&output)["user_prompt"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(user_prompt.contains("Professional"));
    }

    #[tokio::test]
    async fn unsupported_tone_without_fallback_names_the_tone() {
        let server =
            webhook_with_ideas(json!([{"title": "A", "topic": "B", "tone": "Motivational"}]))
                .await;

        let err = handle_suggest_command(
            &config_for(&server),
            &suggest_args(Some("promo"), Some(1)),
            &Notifier::new(),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PostforgeError>(),
            Some(PostforgeError::Validation(ValidationError::UnknownTone(tone))) if tone == "Motivational"
        ));
    }
}
