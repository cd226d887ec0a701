//! Reversible obfuscation of API keys kept in local storage.
//!
//! This is NOT encryption. Anyone holding the shared secret, or enough
//! encoded samples, can recover the keys. It only keeps raw keys out of
//! plaintext files.

use base64::{engine::general_purpose, Engine as _};

use crate::api::{ConfigError, StoredCredentialPair};

/// Marks a value produced by [`Obfuscator::encode`].
pub const ENCODED_PREFIX: &str = "encrypted:";

/// XOR-with-secret + base64 codec.
#[derive(Clone)]
pub struct Obfuscator {
    secret: Vec<u8>,
}

impl std::fmt::Debug for Obfuscator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Obfuscator")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl Obfuscator {
    /// Creates a codec from the shared secret. An empty secret is a
    /// configuration error.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self { secret })
    }

    /// Whether `value` carries the encoded marker.
    pub fn is_encoded(value: &str) -> bool {
        value.starts_with(ENCODED_PREFIX)
    }

    /// Encodes `plaintext`. Empty input gives empty output.
    pub fn encode(&self, plaintext: &str) -> String {
        if plaintext.is_empty() {
            return String::new();
        }
        let masked = self.xor(plaintext.as_bytes());
        format!("{}{}", ENCODED_PREFIX, general_purpose::STANDARD.encode(masked))
    }

    /// Decodes `encoded`.
    ///
    /// Values without the marker are returned unchanged (legacy plaintext).
    /// Any decode failure yields an empty string.
    pub fn decode(&self, encoded: &str) -> String {
        match self.try_decode(encoded) {
            Ok(plain) => plain,
            Err(e) => {
                tracing::warn!(error = %e, "API key decode failed");
                String::new()
            }
        }
    }

    fn try_decode(&self, encoded: &str) -> Result<String, String> {
        let Some(payload) = encoded.strip_prefix(ENCODED_PREFIX) else {
            return Ok(encoded.to_string());
        };
        let masked = general_purpose::STANDARD
            .decode(payload.trim())
            .map_err(|_| "Invalid Base64 data.".to_string())?;
        String::from_utf8(self.xor(&masked)).map_err(|_| "Decoded key is not valid UTF-8.".to_string())
    }

    /// `out[i] = input[i] ^ secret[i % secret.len()]`. Self-inverse.
    fn xor(&self, input: &[u8]) -> Vec<u8> {
        input
            .iter()
            .zip(self.secret.iter().cycle())
            .map(|(b, k)| b ^ k)
            .collect()
    }

    /// Encodes both keys of a pair.
    pub fn encode_pair(&self, pair: &StoredCredentialPair) -> StoredCredentialPair {
        StoredCredentialPair {
            openai: self.encode(&pair.openai),
            gemini: self.encode(&pair.gemini),
        }
    }

    /// Decodes both keys of a pair independently. A corrupt field decodes
    /// to empty without affecting the other.
    pub fn decode_pair(&self, pair: &StoredCredentialPair) -> StoredCredentialPair {
        StoredCredentialPair {
            openai: self.decode(&pair.openai),
            gemini: self.decode(&pair.gemini),
        }
    }
}
