// ABOUTME: Process bootstrap for the CLI
// ABOUTME: Loads .env, installs the tracing subscriber and builds the Gemini client

use std::sync::Arc;

use anyhow::Context;
use resonance_ai::GeminiClient;
use resonance_config::GeminiSettings;
use tracing::debug;

/// Load a `.env` file from the working directory if one exists
pub fn load_environment() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => eprintln!("Ignoring unreadable .env file: {}", e),
    }
}

/// Install the global subscriber, honouring `RUST_LOG` and defaulting to `info`
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn build_client() -> anyhow::Result<Arc<GeminiClient>> {
    let settings = GeminiSettings::from_env().context("Invalid Gemini configuration")?;
    debug!("Using Gemini settings: {:?}", settings);

    let client = GeminiClient::new(settings).context("Failed to create the Gemini client")?;
    Ok(Arc::new(client))
}
