use post_forge::{Obfuscator, Orchestrator, Platform, Provider};

#[tokio::main]
async fn main() {
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
    let obfuscator = Obfuscator::new("demo-secret").expect("non-empty secret");
    let orchestrator = Orchestrator::new(obfuscator);

    let output = orchestrator
        .round("Share a productivity tip")
        .platform(Platform::Linkedin)
        .platform(Platform::Twitter)
        .model(Provider::OpenAI, "gpt-4o-mini")
        .api_key(api_key)
        .run()
        .await
        .expect("Generation failed");

    for post in output.posts {
        println!("[{}] {}", post.platform.display_name(), post.content);
        println!("  {}", post.share_url());
    }
}
