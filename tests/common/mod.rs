//! Scripted provider used by the integration tests. No network.

#![allow(dead_code)]

use async_trait::async_trait;
use post_forge::api::{
    ClientResolver, GenerationCall, GenerationClient, Platform, Provider, ProviderError,
};
use post_forge::{Obfuscator, Orchestrator};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const SECRET: &str = "integration-secret";

/// What the scripted provider answers for one platform.
#[derive(Clone)]
pub enum Reply {
    Text(String),
    Fail,
    /// Never answers.
    Hang,
}

#[derive(Default)]
pub struct Recorder {
    pub resolved: Mutex<Vec<(Provider, String, Option<String>)>>,
    pub calls: Mutex<Vec<GenerationCall>>,
}

impl Recorder {
    pub fn resolve_count(&self) -> usize {
        self.resolved.lock().unwrap().len()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub struct ScriptedResolver {
    replies: HashMap<Platform, Reply>,
    recorder: Arc<Recorder>,
}

struct ScriptedClient {
    replies: HashMap<Platform, Reply>,
    recorder: Arc<Recorder>,
}

impl ClientResolver for ScriptedResolver {
    fn resolve(
        &self,
        provider: Provider,
        credential: &str,
        base_url: Option<&str>,
    ) -> Box<dyn GenerationClient> {
        self.recorder.resolved.lock().unwrap().push((
            provider,
            credential.to_string(),
            base_url.map(str::to_string),
        ));
        Box::new(ScriptedClient {
            replies: self.replies.clone(),
            recorder: Arc::clone(&self.recorder),
        })
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, call: &GenerationCall) -> Result<String, ProviderError> {
        self.recorder.calls.lock().unwrap().push(call.clone());
        match self.replies.get(&call.platform) {
            Some(Reply::Text(text)) => Ok(text.clone()),
            Some(Reply::Hang) => futures::future::pending().await,
            Some(Reply::Fail) | None => Err(ProviderError::EmptyResponse),
        }
    }
}

/// Structured reply holding `count` posts.
pub fn posts_json(platform: Platform, count: usize) -> String {
    let posts: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "content": format!("{} post {}", platform, i + 1),
                "title": format!("Title {}", i + 1),
                "hashtags": [format!("#{}", platform)],
            })
        })
        .collect();
    serde_json::json!({ "posts": posts }).to_string()
}

pub fn obfuscator() -> Obfuscator {
    Obfuscator::new(SECRET).unwrap()
}

pub fn orchestrator(replies: Vec<(Platform, Reply)>) -> (Orchestrator, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let resolver = ScriptedResolver {
        replies: replies.into_iter().collect(),
        recorder: Arc::clone(&recorder),
    };
    (
        Orchestrator::with_resolver(obfuscator(), Arc::new(resolver)),
        recorder,
    )
}
