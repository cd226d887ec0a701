//! High-level API for generating posts across platforms.

mod error;
pub mod http;
mod llm_bridge;
mod orchestrator;
mod parse;
mod provider;
mod runner;
mod templates;
mod types;

pub use error::{ConfigError, GenerateError, PlatformError, ProviderError, StoreError};
pub use llm_bridge::{LlmClient, LlmResolver};
pub use orchestrator::{Orchestrator, PlatformOutcome};
pub use parse::{parse_drafts, ParseStrategy, PostDraft};
pub use provider::{
    ClientResolver, GenerationCall, GenerationClient, OutputSchema, Provider, TEMPERATURE,
};
pub use runner::RoundRunner;
pub use templates::{system_prompt, user_prompt, PlatformTemplate};
pub use types::{
    post_id, ContentConfig, GeneratedPost, GenerationOutput, GenerationRequest, Platform,
    PostsPerPlatform, StoredCredentialPair,
};
