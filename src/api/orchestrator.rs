//! The main entry point for running generation rounds.

use futures::future;
use std::sync::Arc;

use crate::core::obfuscation::Obfuscator;

use super::error::{GenerateError, PlatformError, ProviderError};
use super::llm_bridge::LlmResolver;
use super::parse::parse_drafts;
use super::provider::{
    ClientResolver, GenerationCall, GenerationClient, OutputSchema, Provider, TEMPERATURE,
};
use super::runner::RoundRunner;
use super::templates::{system_prompt, user_prompt};
use super::types::{ContentConfig, GeneratedPost, GenerationOutput, GenerationRequest, Platform};

/// A request that passed validation, holding the decoded credential.
struct ValidatedRequest {
    prompt: String,
    platforms: Vec<Platform>,
    config: ContentConfig,
    model: String,
    provider: Provider,
    credential: String,
    base_url: Option<String>,
}

/// Outcome of one platform iteration.
pub struct PlatformOutcome {
    pub platform: Platform,
    pub result: Result<Vec<GeneratedPost>, PlatformError>,
}

/// Drives generation rounds across platforms.
///
/// Holds only read-only state, so one instance can serve concurrent rounds.
#[derive(Clone)]
pub struct Orchestrator {
    obfuscator: Arc<Obfuscator>,
    resolver: Arc<dyn ClientResolver>,
}

impl Orchestrator {
    /// Creates an orchestrator talking to real providers through the `llm` crate.
    pub fn new(obfuscator: Obfuscator) -> Self {
        Self::with_resolver(obfuscator, Arc::new(LlmResolver))
    }

    /// Creates an orchestrator with a custom client resolver.
    pub fn with_resolver(obfuscator: Obfuscator, resolver: Arc<dyn ClientResolver>) -> Self {
        Self {
            obfuscator: Arc::new(obfuscator),
            resolver,
        }
    }

    pub fn obfuscator(&self) -> &Obfuscator {
        &self.obfuscator
    }

    /// Starts a fluent builder for one round.
    pub fn round<'a>(&'a self, prompt: impl Into<String>) -> RoundRunner<'a> {
        RoundRunner::new(self, prompt.into())
    }

    /// Runs one generation round.
    ///
    /// Validation errors are returned before any provider is contacted.
    /// Platform failures are logged and skipped; the round fails only when
    /// no platform produced a post. Dropping the future cancels the round and
    /// discards any partial results.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationOutput, GenerateError> {
        let request = self.validate(request)?;
        let client = self.resolver.resolve(
            request.provider,
            &request.credential,
            request.base_url.as_deref(),
        );

        tracing::info!(
            provider = %request.provider,
            model = %request.model,
            platforms = request.platforms.len(),
            "Starting generation round"
        );

        let outcomes = future::join_all(
            request
                .platforms
                .iter()
                .map(|platform| self.run_platform(client.as_ref(), &request, *platform)),
        )
        .await;

        collect_posts(outcomes)
    }

    fn validate(&self, request: GenerationRequest) -> Result<ValidatedRequest, GenerateError> {
        let mut missing = Vec::new();
        if request.prompt.trim().is_empty() {
            missing.push("prompt");
        }
        if request.platforms.is_empty() {
            missing.push("platforms");
        }
        if request.model.trim().is_empty() {
            missing.push("model");
        }
        if request.provider.trim().is_empty() {
            missing.push("provider");
        }
        if request.api_key.is_empty() {
            missing.push("apiKey");
        }
        if !missing.is_empty() {
            return Err(GenerateError::InvalidRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let credential = self.obfuscator.decode(&request.api_key);
        if credential.trim().is_empty() {
            return Err(GenerateError::InvalidCredential);
        }

        let provider = Provider::from_wire(&request.provider)
            .ok_or_else(|| GenerateError::UnsupportedProvider(request.provider.clone()))?;

        let mut platforms: Vec<Platform> = Vec::with_capacity(request.platforms.len());
        for platform in request.platforms {
            if !platforms.contains(&platform) {
                platforms.push(platform);
            }
        }

        for platform in &platforms {
            if request.config.posts_per_platform.get(*platform) == 0 {
                return Err(GenerateError::InvalidRequest(format!(
                    "postsPerPlatform.{} must be a positive integer",
                    platform
                )));
            }
        }

        Ok(ValidatedRequest {
            prompt: request.prompt,
            platforms,
            config: request.config,
            model: request.model.trim().to_string(),
            provider,
            credential,
            base_url: request.openai_base_url,
        })
    }

    async fn run_platform(
        &self,
        client: &dyn GenerationClient,
        request: &ValidatedRequest,
        platform: Platform,
    ) -> PlatformOutcome {
        let count = request.config.posts_per_platform.get(platform);
        let call = GenerationCall {
            platform,
            model: request.model.clone(),
            system_prompt: system_prompt(platform, &request.config, count),
            user_prompt: user_prompt(platform, &request.prompt, count),
            temperature: TEMPERATURE,
            schema: OutputSchema::posts(),
        };

        let result = match client.generate(&call).await {
            Ok(text) => normalize(platform, &text),
            Err(e) => Err(e),
        }
        .map_err(|source| PlatformError::new(platform, source));

        PlatformOutcome { platform, result }
    }
}

/// Turns a response body into posts for `platform`.
fn normalize(platform: Platform, text: &str) -> Result<Vec<GeneratedPost>, ProviderError> {
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    let (drafts, strategy) = parse_drafts(text);
    tracing::debug!(%platform, ?strategy, items = drafts.len(), "Parsed provider response");

    let posts: Vec<GeneratedPost> = drafts
        .into_iter()
        .filter(|draft| !draft.content.trim().is_empty())
        .map(|draft| {
            let title = draft.title.filter(|t| !t.trim().is_empty());
            GeneratedPost::new(
                platform,
                draft.content,
                title,
                draft.hashtags.unwrap_or_default(),
            )
        })
        .collect();

    if posts.is_empty() {
        return Err(ProviderError::NoPosts);
    }
    Ok(posts)
}

/// Concatenates successful outcomes in platform order, logging failures.
fn collect_posts(outcomes: Vec<PlatformOutcome>) -> Result<GenerationOutput, GenerateError> {
    let mut posts = Vec::new();
    let mut failed = 0;

    for outcome in outcomes {
        match outcome.result {
            Ok(mut platform_posts) => {
                tracing::debug!(
                    platform = %outcome.platform,
                    posts = platform_posts.len(),
                    "Platform succeeded"
                );
                posts.append(&mut platform_posts);
            }
            Err(e) => {
                failed += 1;
                tracing::warn!(platform = %outcome.platform, error = %e, "Skipping platform");
            }
        }
    }

    if posts.is_empty() {
        tracing::error!(failed, "Every platform failed, no content generated");
        return Err(GenerateError::NoContentGenerated { failed });
    }

    tracing::info!(posts = posts.len(), failed, "Generation round complete");
    Ok(GenerationOutput { posts })
}
