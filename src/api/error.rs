//! Error types for the library API.

use llm::error::LLMError;
use thiserror::Error;

use super::types::Platform;

/// Errors raised while loading process configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The obfuscation secret environment variable is not set.
    #[error("Environment variable '{0}' must be set to the API key obfuscation secret")]
    MissingSecret(&'static str),

    /// The obfuscation secret is set but empty.
    #[error("The API key obfuscation secret must not be empty")]
    EmptySecret,

    /// Neither the state directory override nor `HOME` is available.
    #[error("Unable to determine the state directory: {0}")]
    StateDir(String),
}

/// Errors related to the local persisted state (keys, base URL, content config).
#[derive(Error, Debug)]
pub enum StoreError {
    /// An error occurred during state directory initialization.
    #[error("Failed to initialize local state: {0}")]
    Init(String),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize data.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single provider round-trip failure.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// An error originating from the underlying LLM backend.
    #[error("LLM backend error: {0}")]
    Backend(#[from] LLMError),

    /// The structured output schema could not be handed to the backend.
    #[error("Invalid output schema: {0}")]
    Schema(#[from] serde_json::Error),

    /// The provider answered without any text.
    #[error("Provider returned an empty response")]
    EmptyResponse,

    /// The response was parsed but held no usable post.
    #[error("Provider returned no posts")]
    NoPosts,
}

/// Generation failure for one platform. Contained at the platform boundary
/// and never surfaced to the caller on its own.
#[derive(Error, Debug)]
#[error("{platform} generation failed: {source}")]
pub struct PlatformError {
    pub platform: Platform,
    pub source: ProviderError,
}

impl PlatformError {
    pub fn new(platform: Platform, source: ProviderError) -> Self {
        Self { platform, source }
    }
}

/// Operation-level errors of a generation round.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    InvalidRequest(String),

    /// The credential did not decode to a non-empty key.
    #[error("Invalid or corrupted API key")]
    InvalidCredential,

    /// The provider identifier is not one of the supported providers.
    #[error("Invalid provider selected: '{0}'")]
    UnsupportedProvider(String),

    /// Every selected platform failed.
    #[error("Failed to generate any content ({failed} platform(s) failed)")]
    NoContentGenerated { failed: usize },

    /// Anything else. The detail is for server-side logs only.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GenerateError {
    /// HTTP status code of the inbound contract.
    pub fn status(&self) -> u16 {
        match self {
            GenerateError::InvalidRequest(_)
            | GenerateError::InvalidCredential
            | GenerateError::UnsupportedProvider(_) => 400,
            GenerateError::NoContentGenerated { .. } | GenerateError::Internal(_) => 500,
        }
    }

    /// Message that is safe to hand back to a client.
    pub fn public_message(&self) -> String {
        match self {
            GenerateError::NoContentGenerated { .. } => "Failed to generate any content".to_string(),
            GenerateError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
