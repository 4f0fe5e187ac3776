pub mod cli;
pub mod core;
pub mod providers;
pub mod server;

use crate::core::config::AppConfig;
use crate::core::convert::{Conversion, parse_brl};
use crate::core::rate::RateProvider;
use crate::server::AppState;
use anyhow::{Context, Result, anyhow};
use tokio::net::TcpListener;
use tracing::{debug, error, info};

pub enum AppCommand {
    Serve,
    Convert { real: String },
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    match config_path {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    }
}

/// Builds the shared handler state: the rate provider stack plus the
/// `Cache-Control` max-age advertised when caching is on.
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    Ok(AppState {
        rates: providers::build_rate_provider(config)?,
        cache_max_age: config.cache.enabled.then(|| config.cache.ttl()),
    })
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cambio starting...");

    let config = load_config(config_path)?;
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Serve => serve(&config).await,
        AppCommand::Convert { real } => convert(&config, &real).await,
    }
}

async fn serve(config: &AppConfig) -> Result<()> {
    let state = build_state(config)?;
    let listener = TcpListener::bind(&config.server.address)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.address))?;

    server::serve(listener, state, shutdown_signal()).await
}

async fn convert(config: &AppConfig, real: &str) -> Result<()> {
    let amount = parse_brl(real).ok_or_else(|| anyhow!("invalid BRL value: {real}"))?;
    let rates = providers::build_rate_provider(config)?
        .get_rates()
        .await
        .context("Failed to obtain exchange rates")?;
    debug!(?rates, "Fetched exchange rates");

    let conversion = Conversion::from_brl(amount, &rates)
        .ok_or_else(|| anyhow!("invalid BRL value: {real}"))?;
    println!("{}", serde_json::to_string_pretty(&conversion)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
