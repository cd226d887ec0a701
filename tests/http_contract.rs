//! Status codes and bodies of the generate-content contract.

mod common;

use common::{obfuscator, orchestrator, posts_json, Reply};
use post_forge::api::http::handle_generate;
use post_forge::Platform;
use serde_json::{json, Value};

fn body(overrides: Value) -> Vec<u8> {
    let mut base = json!({
        "prompt": "Share a productivity tip",
        "platforms": ["linkedin", "reddit", "twitter"],
        "config": {
            "knowledgeBase": "",
            "topic": "Productivity",
            "tone": "friendly",
            "targetAudience": "Remote workers",
            "postLength": "short",
            "postsPerPlatform": { "linkedin": 1, "reddit": 1, "twitter": 1 }
        },
        "model": "gpt-4o",
        "provider": "OpenAI",
        "apiKey": obfuscator().encode("sk-test"),
        "openAIBaseURL": ""
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in overrides {
            base.insert(k.clone(), v.clone());
        }
    }
    serde_json::to_vec(&base).unwrap()
}

#[tokio::test]
async fn success_returns_posts() {
    let (orchestrator, _) = orchestrator(vec![
        (Platform::Linkedin, Reply::Text(posts_json(Platform::Linkedin, 1))),
        (Platform::Reddit, Reply::Fail),
        (Platform::Twitter, Reply::Text(posts_json(Platform::Twitter, 1))),
    ]);

    let response = handle_generate(&orchestrator, &body(json!({}))).await;

    assert_eq!(response.status, 200);
    let posts = response.body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["platform"], "linkedin");
    assert_eq!(posts[1]["platform"], "twitter");
    assert!(response.body.get("error").is_none());
}

#[tokio::test]
async fn missing_api_key_is_bad_request() {
    let (orchestrator, recorder) = orchestrator(vec![]);

    let response = handle_generate(&orchestrator, &body(json!({ "apiKey": "" }))).await;

    assert_eq!(response.status, 400);
    assert!(response.body["error"].as_str().unwrap().contains("apiKey"));
    assert_eq!(recorder.call_count(), 0);
}

#[tokio::test]
async fn unsupported_provider_is_bad_request() {
    let (orchestrator, _) = orchestrator(vec![]);

    let response =
        handle_generate(&orchestrator, &body(json!({ "provider": "Anthropic" }))).await;

    assert_eq!(response.status, 400);
    assert_eq!(
        response.body["error"],
        "Invalid provider selected: 'Anthropic'"
    );
}

#[tokio::test]
async fn provider_tag_must_match_exactly() {
    let (orchestrator, recorder) = orchestrator(vec![(
        Platform::Linkedin,
        Reply::Text(posts_json(Platform::Linkedin, 1)),
    )]);

    for tag in ["openai", " Google ", "GOOGLE"] {
        let response = handle_generate(&orchestrator, &body(json!({ "provider": tag }))).await;
        assert_eq!(response.status, 400, "tag {:?}", tag);
        assert_eq!(
            response.body["error"],
            format!("Invalid provider selected: '{}'", tag)
        );
    }
    assert_eq!(recorder.resolve_count(), 0);
}

#[tokio::test]
async fn corrupted_key_is_bad_request() {
    let (orchestrator, _) = orchestrator(vec![]);

    let response =
        handle_generate(&orchestrator, &body(json!({ "apiKey": "encrypted:%%%" }))).await;

    assert_eq!(response.status, 400);
    assert_eq!(response.body["error"], "Invalid or corrupted API key");
}

#[tokio::test]
async fn malformed_json_and_unknown_platform_are_bad_request() {
    let (orchestrator, _) = orchestrator(vec![]);

    let response = handle_generate(&orchestrator, b"{not json").await;
    assert_eq!(response.status, 400);

    let response =
        handle_generate(&orchestrator, &body(json!({ "platforms": ["myspace"] }))).await;
    assert_eq!(response.status, 400);
}

#[tokio::test]
async fn total_failure_is_server_error() {
    let (orchestrator, _) = orchestrator(vec![]);

    let response = handle_generate(&orchestrator, &body(json!({}))).await;

    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "Failed to generate any content");
}
