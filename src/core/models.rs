//! Catalog of selectable models.

use crate::api::Provider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: Provider,
    pub available: bool,
}

pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gemini-1.5-flash",
        name: "Gemini 1.5 Flash",
        provider: Provider::Google,
        available: true,
    },
    ModelInfo {
        id: "gemini-2.5-flash-preview-04-17",
        name: "Gemini 2.5 Flash",
        provider: Provider::Google,
        available: true,
    },
    ModelInfo {
        id: "gemini-2.0-flash-001",
        name: "Gemini 2.0 Flash",
        provider: Provider::Google,
        available: true,
    },
    ModelInfo {
        id: "gpt-4o",
        name: "GPT-4o",
        provider: Provider::OpenAI,
        available: true,
    },
    ModelInfo {
        id: "gpt-4o-mini",
        name: "GPT-4o Mini",
        provider: Provider::OpenAI,
        available: true,
    },
    ModelInfo {
        id: "gpt-4.1",
        name: "GPT-4.1",
        provider: Provider::OpenAI,
        available: true,
    },
    ModelInfo {
        id: "gpt-4o-2024-11-20",
        name: "GPT-4o (Nov 2024)",
        provider: Provider::OpenAI,
        available: true,
    },
    ModelInfo {
        id: "o4-mini",
        name: "GPT o4-mini",
        provider: Provider::OpenAI,
        available: true,
    },
];

pub fn model_by_id(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}

pub fn available_models() -> impl Iterator<Item = &'static ModelInfo> {
    MODELS.iter().filter(|m| m.available)
}

/// The first available model, optionally restricted to one provider.
pub fn default_model(provider: Option<Provider>) -> Option<&'static ModelInfo> {
    available_models().find(|m| provider.map_or(true, |p| m.provider == p))
}
