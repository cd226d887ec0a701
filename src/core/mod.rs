//! Local plumbing: settings, key obfuscation, persisted state and the model catalog.

pub mod config;
pub mod models;
pub mod obfuscation;
pub mod storage;
pub mod utils;
