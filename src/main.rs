use anyhow::Result;
use clap::Parser;
use family_translate::{
    cli::{report_config_error, Cli},
    config::Config,
    fanout,
};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging on stderr so stdout carries only translations
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("family_translate=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::from_env(&cli) {
        Ok(config) => config,
        Err(e) => {
            let status = report_config_error(&e, &mut std::io::stderr());
            return Ok(ExitCode::from(status));
        }
    };

    info!(
        "Translating {:?} into the {} languages via {}",
        config.text, config.group, config.endpoint.provider
    );

    // Unlocked handles: worker tasks may log to stderr while results stream in
    let report = fanout::run(&config, &mut std::io::stdout(), &mut std::io::stderr()).await?;

    info!(
        "Finished: {}/{} languages translated",
        report.succeeded,
        report.total()
    );

    Ok(ExitCode::SUCCESS)
}
