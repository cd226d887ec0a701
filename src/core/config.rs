//! Process-wide settings, read once at startup.

use std::env;
use std::path::PathBuf;

use crate::api::ConfigError;
use crate::core::obfuscation::Obfuscator;

/// Shared secret for API key obfuscation.
pub const ENCRYPTION_KEY_ENV: &str = "POST_FORGE_ENCRYPTION_KEY";
/// Overrides the local state directory.
pub const HOME_ENV: &str = "POST_FORGE_HOME";

/// Runtime settings taken from the environment.
#[derive(Clone)]
pub struct Settings {
    pub encryption_key: String,
    pub state_dir: PathBuf,
}

impl Settings {
    /// Loads settings. A missing or empty obfuscation secret is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let encryption_key =
            env::var(ENCRYPTION_KEY_ENV).map_err(|_| ConfigError::MissingSecret(ENCRYPTION_KEY_ENV))?;
        if encryption_key.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let state_dir = match env::var(HOME_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let home = env::var("HOME")
                    .map_err(|_| ConfigError::StateDir("HOME is not set".to_string()))?;
                PathBuf::from(home).join(".post-forge")
            }
        };

        Ok(Self {
            encryption_key,
            state_dir,
        })
    }

    pub fn obfuscator(&self) -> Result<Obfuscator, ConfigError> {
        Obfuscator::new(self.encryption_key.as_bytes())
    }
}
