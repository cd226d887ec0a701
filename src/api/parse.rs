//! Normalizes provider responses into post drafts.
//!
//! Schema-validated JSON is tried first. Anything else goes through a JSON
//! array extraction pass, and as a last resort the raw text becomes a single
//! untitled post, so a non-empty response always yields content.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

/// One item as returned by a provider, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { posts: Vec<PostDraft> },
    Bare(Vec<PostDraft>),
    Single(PostDraft),
}

impl Envelope {
    fn into_drafts(self) -> Vec<PostDraft> {
        match self {
            Envelope::Wrapped { posts } => posts,
            Envelope::Bare(posts) => posts,
            Envelope::Single(post) => vec![post],
        }
    }
}

/// How a response was turned into drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    Structured,
    Extracted,
    RawText,
}

/// Parses a response body into drafts. Returns an empty list only for
/// blank input or a well-formed but empty array.
pub fn parse_drafts(text: &str) -> (Vec<PostDraft>, ParseStrategy) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (Vec::new(), ParseStrategy::RawText);
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(trimmed) {
        return (envelope.into_drafts(), ParseStrategy::Structured);
    }

    if let Some(found) = JSON_ARRAY.find(trimmed) {
        if let Ok(drafts) = serde_json::from_str::<Vec<PostDraft>>(found.as_str()) {
            return (drafts, ParseStrategy::Extracted);
        }
    }

    let raw = PostDraft {
        content: trimmed.to_string(),
        title: None,
        hashtags: None,
    };
    (vec![raw], ParseStrategy::RawText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_structured_output() {
        let (drafts, strategy) = parse_drafts(
            r##"{"posts":[{"content":"Tip: timebox your inbox.","title":"Productivity","hashtags":["#productivity"]}]}"##,
        );
        assert_eq!(strategy, ParseStrategy::Structured);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title.as_deref(), Some("Productivity"));
        assert_eq!(drafts[0].hashtags.as_deref(), Some(&["#productivity".to_string()][..]));
    }

    #[test]
    fn parses_bare_array_without_hashtags() {
        let (drafts, strategy) = parse_drafts(r#"[{"content":"a"},{"content":"b","title":"t"}]"#);
        assert_eq!(strategy, ParseStrategy::Structured);
        assert_eq!(drafts.len(), 2);
        assert!(drafts[0].hashtags.is_none());
    }

    #[test]
    fn accepts_single_object() {
        let (drafts, strategy) = parse_drafts(r#"{"content":"solo","title":"One"}"#);
        assert_eq!(strategy, ParseStrategy::Structured);
        assert_eq!(drafts[0].content, "solo");
    }

    #[test]
    fn extracts_array_from_surrounding_text() {
        let text = "Here are your posts:\n```json\n[{\"content\":\"hello\",\"hashtags\":[\"#hi\"]}]\n```\nEnjoy!";
        let (drafts, strategy) = parse_drafts(text);
        assert_eq!(strategy, ParseStrategy::Extracted);
        assert_eq!(drafts[0].content, "hello");
    }

    #[test]
    fn falls_back_to_raw_text() {
        let (drafts, strategy) = parse_drafts("  Just one plain post [with brackets] ");
        assert_eq!(strategy, ParseStrategy::RawText);
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].content, "Just one plain post [with brackets]");
        assert!(drafts[0].title.is_none());
        assert!(drafts[0].hashtags.is_none());
    }

    #[test]
    fn blank_text_yields_nothing() {
        let (drafts, _) = parse_drafts("   \n");
        assert!(drafts.is_empty());
    }
}
