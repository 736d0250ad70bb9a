//! Foliochat - Portfolio assistant chatbot CLI
//!
//! Main entry point for the Foliochat application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use foliochat::cli::{Cli, Commands};
use foliochat::commands;
use foliochat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat {
            responder,
            delay_ms,
        } => {
            tracing::info!("Starting interactive chat mode");
            if let Some(r) = &responder {
                tracing::debug!("Using responder override: {}", r);
            }
            if let Some(d) = delay_ms {
                tracing::debug!("Using reply delay override: {} ms", d);
            }

            commands::chat::run_chat(config, responder, delay_ms).await?;
            Ok(())
        }
        Commands::Ask {
            utterance,
            responder,
            json,
        } => {
            tracing::debug!("Resolving one-shot utterance");
            commands::ask::run_ask(&config, &utterance, responder, json)?;
            Ok(())
        }
        Commands::Rules { json } => {
            commands::rules::run_rules(json)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("foliochat=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
