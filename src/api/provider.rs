//! The provider capability interface and the closed set of supported providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use super::error::ProviderError;
use super::types::Platform;

/// Sampling temperature used for every generation call.
pub const TEMPERATURE: f32 = 0.8;

/// Supported LLM vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    OpenAI,
    Google,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::OpenAI, Provider::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "OpenAI",
            Provider::Google => "Google",
        }
    }

    /// Exact match on the request body tag; the wire is case-sensitive.
    pub fn from_wire(tag: &str) -> Option<Provider> {
        Provider::ALL.into_iter().find(|p| p.as_str() == tag)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAI),
            "google" => Ok(Provider::Google),
            _ => Err(format!(
                "Unknown provider '{}'. Valid options: OpenAI, Google",
                s
            )),
        }
    }
}

/// Declared shape of the structured output.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub schema: Value,
}

impl OutputSchema {
    /// An object wrapping an array of `{content, title, hashtags}` items.
    pub fn posts() -> Self {
        Self {
            name: "social_posts",
            description: "Generated social media posts",
            schema: json!({
                "type": "object",
                "properties": {
                    "posts": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "content": {
                                    "type": "string",
                                    "description": "The main post content"
                                },
                                "title": {
                                    "type": "string",
                                    "description": "Optional title for the post (if applicable)"
                                },
                                "hashtags": {
                                    "type": "array",
                                    "items": { "type": "string" },
                                    "description": "hashtags for post ranking e.g. ['hashtag1', 'hashtag2', 'hashtag3', ...]"
                                }
                            },
                            "required": ["content", "title", "hashtags"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": ["posts"],
                "additionalProperties": false
            }),
        }
    }

    /// The schema with `additionalProperties` removed at every level,
    /// for providers that reject the keyword.
    pub fn without_additional_properties(&self) -> Value {
        fn strip(value: &Value) -> Value {
            match value {
                Value::Object(map) => Value::Object(
                    map.iter()
                        .filter(|(k, _)| k.as_str() != "additionalProperties")
                        .map(|(k, v)| (k.clone(), strip(v)))
                        .collect(),
                ),
                Value::Array(items) => Value::Array(items.iter().map(strip).collect()),
                other => other.clone(),
            }
        }
        strip(&self.schema)
    }
}

/// One provider round-trip.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub platform: Platform,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub schema: OutputSchema,
}

/// Capability shared by every provider client: one structured generation call
/// returning the raw response text.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, call: &GenerationCall) -> Result<String, ProviderError>;
}

/// Builds a client for a provider from a decoded credential.
pub trait ClientResolver: Send + Sync {
    fn resolve(
        &self,
        provider: Provider,
        credential: &str,
        base_url: Option<&str>,
    ) -> Box<dyn GenerationClient>;
}
