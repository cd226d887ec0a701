pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod logging;

pub use api::{
    ContentConfig, GenerateError, GeneratedPost, GenerationOutput, GenerationRequest,
    Orchestrator, Platform, Provider,
};
pub use core::obfuscation::Obfuscator;
