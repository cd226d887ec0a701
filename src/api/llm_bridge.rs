//! Bridge between the provider capability interface and the `llm` crate.

use async_trait::async_trait;
use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::{ChatMessage, StructuredOutputFormat};
use serde_json::json;

use super::error::ProviderError;
use super::provider::{ClientResolver, GenerationCall, GenerationClient, Provider};

impl Provider {
    fn backend(&self) -> LLMBackend {
        match self {
            Provider::OpenAI => LLMBackend::OpenAI,
            Provider::Google => LLMBackend::Google,
        }
    }
}

/// A provider client backed by an `llm` crate backend.
pub struct LlmClient {
    provider: Provider,
    api_key: String,
    base_url: Option<String>,
}

impl LlmClient {
    /// `base_url` is only honoured for OpenAI-compatible gateways.
    pub fn new(provider: Provider, api_key: &str, base_url: Option<&str>) -> Self {
        let base_url = match provider {
            Provider::OpenAI => base_url
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string),
            Provider::Google => None,
        };
        Self {
            provider,
            api_key: api_key.to_string(),
            base_url,
        }
    }

    fn output_format(&self, call: &GenerationCall) -> Result<StructuredOutputFormat, ProviderError> {
        let (schema, strict) = match self.provider {
            Provider::OpenAI => (call.schema.schema.clone(), true),
            Provider::Google => (call.schema.without_additional_properties(), false),
        };
        Ok(serde_json::from_value(json!({
            "name": call.schema.name,
            "description": call.schema.description,
            "schema": schema,
            "strict": strict,
        }))?)
    }
}

#[async_trait]
impl GenerationClient for LlmClient {
    async fn generate(&self, call: &GenerationCall) -> Result<String, ProviderError> {
        let mut builder = LLMBuilder::new()
            .backend(self.provider.backend())
            .api_key(self.api_key.clone())
            .model(&call.model)
            .temperature(call.temperature)
            .system(&call.system_prompt)
            .schema(self.output_format(call)?);
        if let Some(base_url) = &self.base_url {
            builder = builder.base_url(base_url);
        }
        let llm = builder.build()?;

        tracing::debug!(
            platform = %call.platform,
            provider = %self.provider,
            model = %call.model,
            "Sending generation request"
        );

        let messages = vec![ChatMessage::user().content(&call.user_prompt).build()];
        let response = llm.chat(&messages).await?;
        response
            .text()
            .filter(|text| !text.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

/// Resolves providers to [`LlmClient`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct LlmResolver;

impl ClientResolver for LlmResolver {
    fn resolve(
        &self,
        provider: Provider,
        credential: &str,
        base_url: Option<&str>,
    ) -> Box<dyn GenerationClient> {
        Box::new(LlmClient::new(provider, credential, base_url))
    }
}
