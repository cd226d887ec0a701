//! Fluent builder for a single generation round.

use super::error::GenerateError;
use super::orchestrator::Orchestrator;
use super::provider::Provider;
use super::types::{ContentConfig, GenerationOutput, GenerationRequest, Platform};

/// A fluent builder to configure and execute one round.
pub struct RoundRunner<'a> {
    orchestrator: &'a Orchestrator,
    request: GenerationRequest,
}

impl<'a> RoundRunner<'a> {
    pub(crate) fn new(orchestrator: &'a Orchestrator, prompt: String) -> Self {
        Self {
            orchestrator,
            request: GenerationRequest {
                prompt,
                ..GenerationRequest::default()
            },
        }
    }

    /// Adds a target platform. Duplicates are ignored at run time.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.request.platforms.push(platform);
        self
    }

    /// Replaces the target platforms.
    pub fn platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.request.platforms = platforms.into_iter().collect();
        self
    }

    /// Sets the content configuration (tone, audience, counts...).
    pub fn config(mut self, config: ContentConfig) -> Self {
        self.request.config = config;
        self
    }

    /// Sets the provider and model to generate with.
    pub fn model(mut self, provider: Provider, model: impl Into<String>) -> Self {
        self.request.provider = provider.to_string();
        self.request.model = model.into();
        self
    }

    /// Sets the credential, obfuscated or plain.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.request.api_key = api_key.into();
        self
    }

    /// Overrides the OpenAI-compatible endpoint.
    pub fn openai_base_url(mut self, base_url: Option<String>) -> Self {
        self.request.openai_base_url = base_url;
        self
    }

    /// Returns the request without running it.
    pub fn into_request(self) -> GenerationRequest {
        self.request
    }

    /// Validates and runs the round.
    pub async fn run(self) -> Result<GenerationOutput, GenerateError> {
        self.orchestrator.generate(self.request).await
    }
}
