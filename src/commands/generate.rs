use crate::api::{GeneratedPost, Platform, Provider};
use crate::cli::GenerateArgs;
use crate::core::models::{default_model, model_by_id};
use crate::core::storage::AppCtx;
use console::style;
use spinners::{Spinner, Spinners};

/// Run one generation round with the saved config, keys and CLI overrides.
pub async fn run(ctx: &AppCtx, args: GenerateArgs) -> Result<(), String> {
    let mut config = ctx.load_content_config().map_err(|e| e.to_string())?;
    if let Some(tone) = args.tone {
        config.tone = tone;
    }
    if let Some(length) = args.length {
        config.post_length = length;
    }
    if let Some(topic) = args.topic {
        config.topic = topic;
    }
    if let Some(audience) = args.audience {
        config.target_audience = audience;
    }
    if let Some(kb) = args.knowledge_base {
        config.knowledge_base = kb;
    }

    let platforms = if args.platforms.is_empty() {
        vec![Platform::Linkedin]
    } else {
        args.platforms
    };
    if let Some(count) = args.count {
        for platform in &platforms {
            config.posts_per_platform.set(*platform, count);
        }
    }

    let (provider, model) = resolve_model(args.provider, args.model)?;

    let keys = ctx.load_encoded_keys().map_err(|e| e.to_string())?;
    let api_key = keys.for_provider(provider).to_string();
    if api_key.is_empty() {
        let flag = match provider {
            Provider::OpenAI => "--openai",
            Provider::Google => "--gemini",
        };
        return Err(format!(
            "Please add your {} API key with `post-forge keys set {}`.",
            provider, flag
        ));
    }
    let base_url = ctx.load_base_url().map_err(|e| e.to_string())?;

    let orchestrator = ctx.orchestrator();
    let round = orchestrator
        .round(args.prompt)
        .platforms(platforms)
        .config(config)
        .model(provider, model.clone())
        .api_key(api_key)
        .openai_base_url(base_url);

    let mut spinner = (!args.json).then(|| {
        Spinner::new(
            Spinners::Dots9,
            format!("Generating with {} ({})...", model, provider),
        )
    });

    let result = tokio::select! {
        result = round.run() => result,
        _ = tokio::signal::ctrl_c() => {
            if let Some(sp) = spinner.as_mut() {
                sp.stop_with_message("✖ Cancelled.".into());
            }
            return Err("Generation cancelled".to_string());
        }
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            if let Some(sp) = spinner.as_mut() {
                sp.stop_with_message("✖ Generation failed.".into());
            }
            return Err(format!("Failed to generate content: {}", e));
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&output).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    if let Some(sp) = spinner.as_mut() {
        sp.stop_with_message(format!(
            "✔ Generated {} posts successfully.",
            output.posts.len()
        ));
    }
    for post in &output.posts {
        print_post(post);
    }
    Ok(())
}

/// Picks provider and model from flags, falling back to the catalog.
fn resolve_model(
    provider: Option<Provider>,
    model: Option<String>,
) -> Result<(Provider, String), String> {
    match (provider, model) {
        (Some(provider), Some(model)) => Ok((provider, model)),
        (None, Some(model)) => model_by_id(&model)
            .map(|info| (info.provider, model.clone()))
            .ok_or_else(|| {
                format!(
                    "Unknown model '{}'. Pass --provider to use it anyway, or see `post-forge models`.",
                    model
                )
            }),
        (provider, None) => default_model(provider)
            .map(|info| (info.provider, info.id.to_string()))
            .ok_or_else(|| "No model available".to_string()),
    }
}

fn print_post(post: &GeneratedPost) {
    println!();
    match &post.title {
        Some(title) => println!(
            "{} {}",
            style(format!("[{}]", post.platform.display_name())).cyan().bold(),
            style(title).bold()
        ),
        None => println!(
            "{}",
            style(format!("[{}]", post.platform.display_name())).cyan().bold()
        ),
    }
    println!("{}", post.content);
    if !post.hashtags.is_empty() {
        println!("{}", style(post.hashtags.join(" ")).green());
    }
    println!("{}", style(post.share_url()).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_alone_infers_provider() {
        let (provider, model) = resolve_model(None, Some("gemini-2.0-flash-001".into())).unwrap();
        assert_eq!(provider, Provider::Google);
        assert_eq!(model, "gemini-2.0-flash-001");
    }

    #[test]
    fn unknown_model_needs_provider() {
        assert!(resolve_model(None, Some("my-finetune".into())).is_err());
        let (provider, model) =
            resolve_model(Some(Provider::OpenAI), Some("my-finetune".into())).unwrap();
        assert_eq!(provider, Provider::OpenAI);
        assert_eq!(model, "my-finetune");
    }

    #[test]
    fn provider_alone_uses_its_default_model() {
        let (_, model) = resolve_model(Some(Provider::OpenAI), None).unwrap();
        assert_eq!(model, "gpt-4o");
    }
}
