//! Data model shared by the orchestrator, the HTTP contract and the CLI.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

use super::provider::Provider;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A social-media target with its own style template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linkedin,
    Reddit,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linkedin, Platform::Reddit, Platform::Twitter];

    /// Wire identifier, also used as the post id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linkedin => "linkedin",
            Platform::Reddit => "reddit",
            Platform::Twitter => "twitter",
        }
    }

    /// Human-facing name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Linkedin => "LinkedIn",
            Platform::Reddit => "Reddit",
            Platform::Twitter => "X",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" => Ok(Platform::Linkedin),
            "reddit" => Ok(Platform::Reddit),
            "twitter" | "x" => Ok(Platform::Twitter),
            _ => Err(format!(
                "Unknown platform '{}'. Valid options: linkedin, reddit, twitter",
                s
            )),
        }
    }
}

/// Desired number of posts for each platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsPerPlatform {
    pub linkedin: u32,
    pub reddit: u32,
    pub twitter: u32,
}

impl PostsPerPlatform {
    pub fn uniform(count: u32) -> Self {
        Self {
            linkedin: count,
            reddit: count,
            twitter: count,
        }
    }

    pub fn get(&self, platform: Platform) -> u32 {
        match platform {
            Platform::Linkedin => self.linkedin,
            Platform::Reddit => self.reddit,
            Platform::Twitter => self.twitter,
        }
    }

    pub fn set(&mut self, platform: Platform, count: u32) {
        match platform {
            Platform::Linkedin => self.linkedin = count,
            Platform::Reddit => self.reddit = count,
            Platform::Twitter => self.twitter = count,
        }
    }
}

impl Default for PostsPerPlatform {
    fn default() -> Self {
        Self::uniform(3)
    }
}

/// User-defined generation parameters. Persisted as `post-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    pub knowledge_base: String,
    pub topic: String,
    pub tone: String,
    pub target_audience: String,
    pub post_length: String,
    pub posts_per_platform: PostsPerPlatform,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            knowledge_base: String::new(),
            topic: String::new(),
            tone: "professional".to_string(),
            target_audience: String::new(),
            post_length: "medium".to_string(),
            posts_per_platform: PostsPerPlatform::default(),
        }
    }
}

/// One unit of generated content. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub id: String,
    pub platform: Platform,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl GeneratedPost {
    pub(crate) fn new(
        platform: Platform,
        content: String,
        title: Option<String>,
        hashtags: Vec<String>,
    ) -> Self {
        Self {
            id: post_id(platform),
            platform,
            content,
            title,
            hashtags,
        }
    }

    /// Compose/share URL for the post's platform.
    pub fn share_url(&self) -> String {
        match self.platform {
            Platform::Linkedin => "https://www.linkedin.com/sharing/share-offsite/".to_string(),
            Platform::Reddit => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("title", self.title.as_deref().unwrap_or_default())
                    .append_pair("text", &self.content)
                    .finish();
                format!("https://www.reddit.com/submit?{}", query)
            }
            Platform::Twitter => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("text", &self.content)
                    .finish();
                format!("https://twitter.com/intent/tweet?{}", query)
            }
        }
    }
}

/// Best-effort unique id: `<platform>-<unix millis>-<9 base36 chars>`.
pub fn post_id(platform: Platform) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!(
        "{}-{}-{}",
        platform,
        chrono::Utc::now().timestamp_millis(),
        suffix
    )
}

/// Input of one generation round, in its wire shape.
///
/// `api_key` carries the credential as stored, either obfuscated or plain;
/// the orchestrator decodes it during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub config: ContentConfig,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(
        default,
        rename = "openAIBaseURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub openai_base_url: Option<String>,
}

/// Result of a successful round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOutput {
    pub posts: Vec<GeneratedPost>,
}

/// The `{openai, gemini}` key pair as kept in local storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentialPair {
    #[serde(default)]
    pub openai: String,
    #[serde(default)]
    pub gemini: String,
}

impl StoredCredentialPair {
    /// The key used for `provider`.
    pub fn for_provider(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAI => &self.openai,
            Provider::Google => &self.gemini,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_parses_wire_names_and_x_alias() {
        assert_eq!("linkedin".parse::<Platform>().unwrap(), Platform::Linkedin);
        assert_eq!("Reddit".parse::<Platform>().unwrap(), Platform::Reddit);
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::Twitter);
        assert!("mastodon".parse::<Platform>().is_err());
    }

    #[test]
    fn post_id_has_platform_prefix_and_suffix() {
        let id = post_id(Platform::Linkedin);
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "linkedin");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn post_id_suffix_draws_digits_and_letters() {
        let suffixes: String = (0..200)
            .map(|_| post_id(Platform::Reddit).rsplit('-').next().unwrap().to_string())
            .collect();
        let digits = suffixes.chars().filter(|c| c.is_ascii_digit()).count();
        // 10 of 36 symbols are digits: expect ~500 of 1800.
        assert!((300..700).contains(&digits), "digits: {}", digits);
    }

    #[test]
    fn credential_pair_picks_provider_key() {
        let pair = StoredCredentialPair {
            openai: "sk-1".into(),
            gemini: "AIza-2".into(),
        };
        assert_eq!(pair.for_provider(Provider::OpenAI), "sk-1");
        assert_eq!(pair.for_provider(Provider::Google), "AIza-2");
    }

    #[test]
    fn config_uses_camel_case_and_defaults() {
        let cfg: ContentConfig =
            serde_json::from_str(r#"{"targetAudience":"devs","postsPerPlatform":{"linkedin":1,"reddit":2,"twitter":5}}"#)
                .unwrap();
        assert_eq!(cfg.target_audience, "devs");
        assert_eq!(cfg.tone, "professional");
        assert_eq!(cfg.post_length, "medium");
        assert_eq!(cfg.posts_per_platform.get(Platform::Twitter), 5);

        let json = serde_json::to_value(ContentConfig::default()).unwrap();
        assert!(json.get("knowledgeBase").is_some());
        assert_eq!(json["postsPerPlatform"]["reddit"], 3);
    }

    #[test]
    fn request_reads_wire_field_names() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"prompt":"p","platforms":["reddit"],"model":"gpt-4o","provider":"OpenAI","apiKey":"k","openAIBaseURL":"http://gw"}"#,
        )
        .unwrap();
        assert_eq!(req.api_key, "k");
        assert_eq!(req.openai_base_url.as_deref(), Some("http://gw"));
        assert_eq!(req.platforms, vec![Platform::Reddit]);
        assert_eq!(req.config, ContentConfig::default());
    }

    #[test]
    fn untitled_post_omits_title_field() {
        let post = GeneratedPost::new(Platform::Twitter, "hi".into(), None, vec![]);
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["platform"], "twitter");
        assert_eq!(json["hashtags"], serde_json::json!([]));
    }

    #[test]
    fn share_urls_encode_content() {
        let tweet = GeneratedPost::new(Platform::Twitter, "a b&c".into(), None, vec![]);
        assert_eq!(tweet.share_url(), "https://twitter.com/intent/tweet?text=a+b%26c");

        let reddit = GeneratedPost::new(
            Platform::Reddit,
            "body".into(),
            Some("Why Rust?".into()),
            vec![],
        );
        assert_eq!(
            reddit.share_url(),
            "https://www.reddit.com/submit?title=Why+Rust%3F&text=body"
        );

        let linkedin = GeneratedPost::new(Platform::Linkedin, "x".into(), None, vec![]);
        assert_eq!(
            linkedin.share_url(),
            "https://www.linkedin.com/sharing/share-offsite/"
        );
    }
}
