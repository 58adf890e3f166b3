//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::DaemonConfig;
use crate::error::{DaemonError, DaemonResult};
use crate::seed;
use std::sync::Arc;
use territory_registry::{InMemoryPolicyRegistry, PolicyRegistry};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Territory daemon server
pub struct Server {
    config: DaemonConfig,
    registry: Arc<InMemoryPolicyRegistry>,
}

impl Server {
    /// Create a new server, applying the configured seed file if any
    pub fn new(config: DaemonConfig) -> DaemonResult<Self> {
        let registry = Arc::new(InMemoryPolicyRegistry::new());

        if let Some(path) = &config.seed.path {
            let requests = seed::load_seed_file(path)?;
            let report = seed::apply_seed(registry.as_ref(), requests);
            tracing::info!(
                path = %path.display(),
                created = report.created,
                skipped = report.skipped,
                "Applied seed file"
            );
        }

        Ok(Self { config, registry })
    }

    /// Registry backing this server
    pub fn registry(&self) -> Arc<InMemoryPolicyRegistry> {
        Arc::clone(&self.registry)
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.listen_addr;

        let registry: Arc<dyn PolicyRegistry> = self.registry.clone();
        let mut app = create_router(AppState::new(registry));
        if self.config.server.enable_cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Territory daemon listening on {}", addr);
        tracing::info!(policies = self.registry.len(), "Registry ready");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("Territory daemon shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
