//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};

use crate::api::{Platform, Provider};

#[derive(Parser)]
#[command(
    name = "post-forge",
    version,
    about = "Generate LinkedIn, Reddit and X posts from one prompt"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Generate posts for one or more platforms
    Generate(GenerateArgs),
    /// Run a raw generate-content request body (JSON) and print the HTTP-style response
    Handle {
        /// File holding the request body; reads stdin when omitted
        #[arg(long)]
        file: Option<String>,
    },
    /// Manage stored API keys and the OpenAI base URL
    #[command(subcommand)]
    Keys(KeysCmd),
    /// Show or change the saved post configuration
    #[command(subcommand)]
    Config(ConfigCmd),
    /// Obfuscate a value the way stored API keys are
    Encode { value: String },
    /// Reverse `encode`; unprefixed values are printed unchanged
    Decode { value: String },
    /// List the selectable models
    Models,
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// What the posts should be about
    pub prompt: String,
    /// Target platform, repeatable (defaults to linkedin)
    #[arg(long = "platform", short = 'p')]
    pub platforms: Vec<Platform>,
    /// LLM provider (OpenAI or Google); inferred from --model when omitted
    #[arg(long)]
    pub provider: Option<Provider>,
    /// Model id, e.g. 'gpt-4o-mini'
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    /// Posts per selected platform, overriding the saved config
    #[arg(long, short = 'n')]
    pub count: Option<u32>,
    #[arg(long)]
    pub tone: Option<String>,
    /// Post length, e.g. short, medium, long
    #[arg(long)]
    pub length: Option<String>,
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub audience: Option<String>,
    /// Background text the posts may draw on
    #[arg(long)]
    pub knowledge_base: Option<String>,
    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum KeysCmd {
    /// Store API keys (prompts with hidden input)
    Set {
        #[arg(long, help = "Set the OpenAI key")]
        openai: bool,
        #[arg(long, help = "Set the Google Gemini key")]
        gemini: bool,
    },
    /// Show stored keys, masked
    Show,
    /// Show, set or clear the OpenAI-compatible base URL
    BaseUrl {
        url: Option<String>,
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the saved configuration
    Show,
    /// Update fields of the saved configuration
    Set {
        #[arg(long)]
        tone: Option<String>,
        #[arg(long)]
        length: Option<String>,
        #[arg(long)]
        topic: Option<String>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        knowledge_base: Option<String>,
        #[arg(long)]
        count_linkedin: Option<u32>,
        #[arg(long)]
        count_reddit: Option<u32>,
        #[arg(long)]
        count_twitter: Option<u32>,
    },
    /// Restore the default configuration
    Reset,
}
