use tracing_subscriber::EnvFilter;

use cardano_compliance_engine::api;
use cardano_compliance_engine::config::Config;
use cardano_compliance_engine::datasource;
use cardano_compliance_engine::risk::RiskEngine;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Initialize structured logging (set RUST_LOG=info for output)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    tracing::info!("Cardano Compliance Engine starting");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path)?;
    tracing::info!(
        network = %config.blockfrost.network,
        "Configuration loaded from {}",
        config_path
    );

    let source = datasource::from_config(&config)?;
    let engine = RiskEngine::new(source);

    api::serve(engine, &config.api.host, config.api.port).await
}
