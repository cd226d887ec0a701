//! Local persisted state: obfuscated API keys, the OpenAI base URL override
//! and the content configuration, one file each under the state directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::config::Settings;
use super::obfuscation::Obfuscator;
use super::utils::{ensure_dir, write_private};
use crate::api::{ContentConfig, Orchestrator, StoreError, StoredCredentialPair};

pub const KEYS_FILE: &str = "ai-api-keys.json";
pub const BASE_URL_FILE: &str = "openai-base-url";
pub const CONFIG_FILE: &str = "post-config.json";

/// Runtime context holding paths and the obfuscation codec.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub keys_path: PathBuf,
    pub base_url_path: PathBuf,
    pub config_path: PathBuf,
    pub obfuscator: Obfuscator,
}

impl AppCtx {
    /// Loads settings from the environment and prepares the state directory.
    pub fn init() -> Result<Self, String> {
        let settings = Settings::from_env().map_err(|e| e.to_string())?;
        Self::with_settings(&settings).map_err(|e| e.to_string())
    }

    pub fn with_settings(settings: &Settings) -> Result<Self, StoreError> {
        let obfuscator = settings
            .obfuscator()
            .map_err(|e| StoreError::Init(e.to_string()))?;
        Self::open(&settings.state_dir, obfuscator)
    }

    pub fn open(base_dir: &Path, obfuscator: Obfuscator) -> Result<Self, StoreError> {
        ensure_dir(base_dir).map_err(StoreError::Init)?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            keys_path: base_dir.join(KEYS_FILE),
            base_url_path: base_dir.join(BASE_URL_FILE),
            config_path: base_dir.join(CONFIG_FILE),
            obfuscator,
        })
    }

    /// An orchestrator sharing this context's codec.
    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::new(self.obfuscator.clone())
    }

    /// Reads the stored key pair as-is (still obfuscated).
    ///
    /// A file that is not a `{openai, gemini}` object is treated as absent.
    pub fn load_encoded_keys(&self) -> Result<StoredCredentialPair, StoreError> {
        if !self.keys_path.exists() {
            return Ok(StoredCredentialPair::default());
        }
        let raw = fs::read_to_string(&self.keys_path)?;
        match serde_json::from_str(&raw) {
            Ok(pair) => Ok(pair),
            Err(e) => {
                tracing::warn!(path = %self.keys_path.display(), error = %e, "Ignoring unreadable API key file");
                Ok(StoredCredentialPair::default())
            }
        }
    }

    /// Reads and decodes the stored key pair.
    pub fn load_keys(&self) -> Result<StoredCredentialPair, StoreError> {
        Ok(self.obfuscator.decode_pair(&self.load_encoded_keys()?))
    }

    /// Encodes and stores a plaintext key pair.
    pub fn save_keys(&self, keys: &StoredCredentialPair) -> Result<(), StoreError> {
        let encoded = self.obfuscator.encode_pair(keys);
        write_private(&self.keys_path, &serde_json::to_string(&encoded)?)?;
        Ok(())
    }

    /// The OpenAI base URL override, if one is saved.
    pub fn load_base_url(&self) -> Result<Option<String>, StoreError> {
        if !self.base_url_path.exists() {
            return Ok(None);
        }
        let url = fs::read_to_string(&self.base_url_path)?;
        let url = url.trim();
        Ok((!url.is_empty()).then(|| url.to_string()))
    }

    /// Saves the override; `None` or a blank URL clears it.
    pub fn save_base_url(&self, url: Option<&str>) -> Result<(), StoreError> {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => fs::write(&self.base_url_path, url)?,
            None if self.base_url_path.exists() => fs::remove_file(&self.base_url_path)?,
            None => {}
        }
        Ok(())
    }

    /// The saved content configuration, or defaults when absent or unreadable.
    pub fn load_content_config(&self) -> Result<ContentConfig, StoreError> {
        if !self.config_path.exists() {
            return Ok(ContentConfig::default());
        }
        let raw = fs::read_to_string(&self.config_path)?;
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(path = %self.config_path.display(), error = %e, "Ignoring unreadable post config");
                Ok(ContentConfig::default())
            }
        }
    }

    pub fn save_content_config(&self, config: &ContentConfig) -> Result<(), StoreError> {
        fs::write(&self.config_path, serde_json::to_string_pretty(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Platform;
    use tempfile::TempDir;

    fn ctx() -> (AppCtx, TempDir) {
        let dir = TempDir::new().unwrap();
        let obfuscator = Obfuscator::new("test-secret").unwrap();
        let ctx = AppCtx::open(&dir.path().join("state"), obfuscator).unwrap();
        (ctx, dir)
    }

    #[test]
    fn missing_files_give_defaults() {
        let (ctx, _dir) = ctx();
        assert_eq!(ctx.load_keys().unwrap(), StoredCredentialPair::default());
        assert_eq!(ctx.load_base_url().unwrap(), None);
        assert_eq!(ctx.load_content_config().unwrap(), ContentConfig::default());
    }

    #[test]
    fn keys_are_stored_obfuscated() {
        let (ctx, _dir) = ctx();
        let keys = StoredCredentialPair {
            openai: "sk-openai-123".into(),
            gemini: "AIza-456".into(),
        };
        ctx.save_keys(&keys).unwrap();

        let on_disk = fs::read_to_string(&ctx.keys_path).unwrap();
        assert!(!on_disk.contains("sk-openai-123"));
        assert!(on_disk.contains("encrypted:"));
        assert_eq!(ctx.load_keys().unwrap(), keys);
    }

    #[test]
    fn legacy_plaintext_keys_still_load() {
        let (ctx, _dir) = ctx();
        fs::write(&ctx.keys_path, r#"{"openai":"sk-plain","gemini":""}"#).unwrap();
        assert_eq!(ctx.load_keys().unwrap().openai, "sk-plain");
    }

    #[test]
    fn corrupt_key_file_is_ignored() {
        let (ctx, _dir) = ctx();
        fs::write(&ctx.keys_path, "not json").unwrap();
        assert_eq!(ctx.load_keys().unwrap(), StoredCredentialPair::default());
    }

    #[test]
    fn base_url_save_and_clear() {
        let (ctx, _dir) = ctx();
        ctx.save_base_url(Some(" https://gateway.example/v1 ")).unwrap();
        assert_eq!(
            ctx.load_base_url().unwrap().as_deref(),
            Some("https://gateway.example/v1")
        );
        ctx.save_base_url(None).unwrap();
        assert_eq!(ctx.load_base_url().unwrap(), None);
        ctx.save_base_url(None).unwrap();
    }

    #[test]
    fn content_config_round_trips_and_tolerates_garbage() {
        let (ctx, _dir) = ctx();
        let mut config = ContentConfig {
            tone: "humorous".into(),
            ..ContentConfig::default()
        };
        config.posts_per_platform.set(Platform::Reddit, 7);
        ctx.save_content_config(&config).unwrap();
        assert_eq!(ctx.load_content_config().unwrap(), config);

        fs::write(&ctx.config_path, "{{{").unwrap();
        assert_eq!(ctx.load_content_config().unwrap(), ContentConfig::default());
    }
}
