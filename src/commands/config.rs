use crate::api::{ContentConfig, Platform};
use crate::core::storage::AppCtx;
use console::style;

/// Field updates for `config set`. `None` leaves a field unchanged.
#[derive(Default)]
pub struct ConfigChanges {
    pub tone: Option<String>,
    pub length: Option<String>,
    pub topic: Option<String>,
    pub audience: Option<String>,
    pub knowledge_base: Option<String>,
    pub count_linkedin: Option<u32>,
    pub count_reddit: Option<u32>,
    pub count_twitter: Option<u32>,
}

impl ConfigChanges {
    fn apply(self, config: &mut ContentConfig) -> Result<(), String> {
        if let Some(tone) = self.tone {
            config.tone = tone;
        }
        if let Some(length) = self.length {
            config.post_length = length;
        }
        if let Some(topic) = self.topic {
            config.topic = topic;
        }
        if let Some(audience) = self.audience {
            config.target_audience = audience;
        }
        if let Some(kb) = self.knowledge_base {
            config.knowledge_base = kb;
        }
        for (platform, count) in [
            (Platform::Linkedin, self.count_linkedin),
            (Platform::Reddit, self.count_reddit),
            (Platform::Twitter, self.count_twitter),
        ] {
            if let Some(count) = count {
                if count == 0 {
                    return Err(format!("Post count for {} must be at least 1", platform));
                }
                config.posts_per_platform.set(platform, count);
            }
        }
        Ok(())
    }
}

/// Print the saved configuration.
pub fn show(ctx: &AppCtx) -> Result<(), String> {
    let config = ctx.load_content_config().map_err(|e| e.to_string())?;
    println!("{}", style("Post Configuration").bold().underlined());
    println!("{}: {}", style("Tone").cyan(), config.tone);
    println!("{}: {}", style("Post Length").cyan(), config.post_length);
    println!("{}: {}", style("Topic").cyan(), or_unset(&config.topic));
    println!(
        "{}: {}",
        style("Target Audience").cyan(),
        or_unset(&config.target_audience)
    );
    println!(
        "{}: {}",
        style("Knowledge Base").cyan(),
        or_unset(&config.knowledge_base)
    );
    println!("\n{}", style("Posts per Platform").bold().underlined());
    for platform in Platform::ALL {
        println!(
            "  - {} ({})",
            style(platform.display_name()).green(),
            config.posts_per_platform.get(platform)
        );
    }
    Ok(())
}

/// Update and save the configuration.
pub fn set(ctx: &AppCtx, changes: ConfigChanges) -> Result<(), String> {
    let mut config = ctx.load_content_config().map_err(|e| e.to_string())?;
    changes.apply(&mut config)?;
    ctx.save_content_config(&config).map_err(|e| e.to_string())?;
    println!("{}", style("Configuration saved").green().bold());
    Ok(())
}

/// Overwrite the saved configuration with defaults.
pub fn reset(ctx: &AppCtx) -> Result<(), String> {
    ctx.save_content_config(&ContentConfig::default())
        .map_err(|e| e.to_string())?;
    println!("{}", style("Configuration reset").green().bold());
    Ok(())
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not set)"
    } else {
        value
    }
}
