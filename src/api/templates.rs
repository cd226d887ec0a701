//! Platform style templates and prompt composition.

use super::types::{ContentConfig, Platform};

/// Style guidance for one platform.
pub struct PlatformTemplate {
    pub instructions: &'static str,
    pub format: &'static str,
}

const LINKEDIN: PlatformTemplate = PlatformTemplate {
    instructions: "Create professional LinkedIn content that:
- Uses a professional yet engaging tone
- Includes industry insights and thought leadership
- Encourages professional networking and engagement
- Uses relevant professional hashtags
- Has a clear call-to-action for professional growth
- Follows LinkedIn best practices for visibility and engagement",
    format: "Professional post with insights and hashtags",
};

const REDDIT: PlatformTemplate = PlatformTemplate {
    instructions: "Create Reddit content that:
- Matches the conversational, authentic tone of Reddit
- Provides genuine value and insights
- Encourages discussion and community engagement
- Avoids overly promotional language
- Includes relevant context and background
- Follows Reddit etiquette and community guidelines",
    format: "Discussion-focused post with context and engagement hooks",
};

const TWITTER: PlatformTemplate = PlatformTemplate {
    instructions: "Create Twitter/X content that:
- Is concise and impactful
- Uses trending hashtags and mentions when relevant
- Includes engaging hooks and calls-to-action
- Encourages retweets and replies
- Uses thread format for longer content
- Optimized for Twitter's algorithm and engagement",
    format: "Concise, engaging tweet or thread",
};

impl Platform {
    pub fn template(&self) -> &'static PlatformTemplate {
        match self {
            Platform::Linkedin => &LINKEDIN,
            Platform::Reddit => &REDDIT,
            Platform::Twitter => &TWITTER,
        }
    }
}

/// Builds the system-level instructions for one platform.
pub fn system_prompt(platform: Platform, config: &ContentConfig, count: u32) -> String {
    let mut context = Vec::new();
    if !config.knowledge_base.trim().is_empty() {
        context.push(format!("Knowledge Base: {}", config.knowledge_base.trim()));
    }
    if !config.topic.trim().is_empty() {
        context.push(format!("Topic Focus: {}", config.topic.trim()));
    }
    if !config.target_audience.trim().is_empty() {
        context.push(format!("Target Audience: {}", config.target_audience.trim()));
    }
    context.push(format!("Tone: {}", config.tone));
    context.push(format!("Post Length: {}", config.post_length));

    format!(
        "You are an expert social media content creator specializing in {platform}.\n\n\
         User Context:\n{context}\n\n\
         Platform Instructions: {instructions}\n\n\
         Generate {count} unique, high-quality posts that will perform well on {platform}. \
         Each post should be optimized for maximum engagement and reach on this specific platform.\n\n\
         Make sure each post is unique, valuable, and tailored specifically for {platform}'s audience and algorithm.",
        platform = platform,
        context = context.join("\n"),
        instructions = platform.template().instructions,
        count = count,
    )
}

/// Builds the user-level instructions for one platform.
pub fn user_prompt(platform: Platform, prompt: &str, count: u32) -> String {
    format!(
        "Create {count} {platform} posts about: {prompt}\n\n\
         Format: {format}\n\n\
         Remember to make each post unique and optimized for {platform} specifically.",
        count = count,
        platform = platform,
        prompt = prompt.trim(),
        format = platform.template().format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_embeds_context_and_count() {
        let config = ContentConfig {
            knowledge_base: "We sell espresso machines".into(),
            topic: "Coffee".into(),
            target_audience: "Baristas".into(),
            tone: "casual".into(),
            ..ContentConfig::default()
        };
        let prompt = system_prompt(Platform::Reddit, &config, 4);

        assert!(prompt.contains("specializing in reddit"));
        assert!(prompt.contains("Knowledge Base: We sell espresso machines"));
        assert!(prompt.contains("Topic Focus: Coffee"));
        assert!(prompt.contains("Target Audience: Baristas"));
        assert!(prompt.contains("Tone: casual"));
        assert!(prompt.contains("Post Length: medium"));
        assert!(prompt.contains("Generate 4 unique"));
        assert!(prompt.contains(REDDIT.instructions));
    }

    #[test]
    fn system_prompt_skips_blank_optional_context() {
        let prompt = system_prompt(Platform::Linkedin, &ContentConfig::default(), 1);
        assert!(!prompt.contains("Knowledge Base"));
        assert!(!prompt.contains("Topic Focus"));
        assert!(!prompt.contains("Target Audience"));
        assert!(prompt.contains("Tone: professional"));
    }

    #[test]
    fn user_prompt_carries_format_hint() {
        let prompt = user_prompt(Platform::Twitter, "  Share a productivity tip ", 2);
        assert!(prompt.starts_with("Create 2 twitter posts about: Share a productivity tip\n"));
        assert!(prompt.contains("Format: Concise, engaging tweet or thread"));
    }
}
