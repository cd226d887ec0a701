use clap::Parser;
use post_forge::cli::Cli;
use post_forge::commands;
use post_forge::core::storage::AppCtx;
use post_forge::logging::LoggingConfig;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    LoggingConfig::from_env(cli.verbose).init();

    if let Err(e) = run(cli).await {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let ctx = AppCtx::init()?;
    commands::dispatch(cli.command, &ctx).await
}
