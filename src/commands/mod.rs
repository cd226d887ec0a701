use crate::cli::{Cmd, ConfigCmd, KeysCmd};
use crate::core::storage::AppCtx;

pub mod config;
pub mod decode;
pub mod encode;
pub mod generate;
pub mod handle;
pub mod keys;
pub mod models;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::Generate(args) => generate::run(ctx, args).await,
        Cmd::Handle { file } => handle::run(ctx, file.as_deref()).await,
        Cmd::Keys(keys_cmd) => match keys_cmd {
            KeysCmd::Set { openai, gemini } => keys::set(ctx, openai, gemini),
            KeysCmd::Show => keys::show(ctx),
            KeysCmd::BaseUrl { url, clear } => keys::base_url(ctx, url.as_deref(), clear),
        },
        Cmd::Config(config_cmd) => match config_cmd {
            ConfigCmd::Show => config::show(ctx),
            ConfigCmd::Set {
                tone,
                length,
                topic,
                audience,
                knowledge_base,
                count_linkedin,
                count_reddit,
                count_twitter,
            } => config::set(
                ctx,
                config::ConfigChanges {
                    tone,
                    length,
                    topic,
                    audience,
                    knowledge_base,
                    count_linkedin,
                    count_reddit,
                    count_twitter,
                },
            ),
            ConfigCmd::Reset => config::reset(ctx),
        },
        Cmd::Encode { value } => encode::run(ctx, &value),
        Cmd::Decode { value } => decode::run(ctx, &value),
        Cmd::Models => models::run(),
    }
}
