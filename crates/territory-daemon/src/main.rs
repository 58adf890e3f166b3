//! Territory Daemon - Distributor location access service
//!
//! The daemon provides:
//! - `GET /distributor` access checks answering `YES` or `NO`
//! - `POST /distributor` policy creation, with inheritance from a parent
//! - Optional seeding of policies from a JSON file at startup

use clap::Parser;
use std::net::SocketAddr;
use territory_daemon::config::{ConfigOverrides, DaemonConfig, LoggingConfig};
use territory_daemon::{DaemonError, DaemonResult, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Territory Daemon CLI
#[derive(Parser)]
#[command(name = "territoryd")]
#[command(about = "Territory Daemon - Distributor location access service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TERRITORY_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "TERRITORY_LISTEN_ADDR")]
    listen: Option<SocketAddr>,

    /// Seed file of policies to create at startup
    #[arg(short, long, env = "TERRITORY_SEED_FILE")]
    seed: Option<std::path::PathBuf>,

    /// Log level
    #[arg(long, env = "TERRITORY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "TERRITORY_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration, then let CLI arguments override it
    let mut config = DaemonConfig::load(cli.config.as_deref())
        .map_err(|e| DaemonError::Config(e.to_string()))?;

    config.apply_overrides(ConfigOverrides {
        listen_addr: cli.listen,
        seed_path: cli.seed,
        log_level: cli.log_level,
        json_logs: cli.json,
    });

    init_tracing(&config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        "Starting territory daemon"
    );

    let server = Server::new(config)?;
    server.run().await
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.clone().into());

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
