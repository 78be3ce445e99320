use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zucheck::checks::CheckRunner;
use zucheck::config;
use zucheck::http::MetricsServer;
use zucheck::lifecycle::{self, Shutdown};
use zucheck::status::StatusStore;

#[derive(Parser)]
#[command(name = "zucheck")]
#[command(about = "Blackbox health-check exporter", version)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zucheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = config::load_config(&cli.config)?;
    tracing::info!(
        listen_address = %config.listen_address,
        listen_port = config.listen_port,
        checks = config.checks.len(),
        "Configuration loaded"
    );

    let store = Arc::new(StatusStore::new());
    let runner = CheckRunner::start(&config.checks, store.clone());

    let listener =
        TcpListener::bind((config.listen_address.as_str(), config.listen_port)).await?;

    let shutdown = Shutdown::new();
    let server = MetricsServer::new(store);
    let server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    lifecycle::wait_for_termination().await;
    tracing::info!("Shutdown signal received");

    shutdown.trigger();
    runner.shutdown().await;
    server_task.await??;

    tracing::info!("Shutdown complete");
    Ok(())
}
