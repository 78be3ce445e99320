//! Exposition endpoint setup.
//!
//! # Responsibilities
//! - Create the Axum router with the single scrape handler
//! - Bind the server to its listener
//! - Serve until the shutdown signal arrives

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::exposition;
use crate::status::StatusStore;

/// HTTP server exposing the current status store as scrape text.
pub struct MetricsServer {
    router: Router,
}

impl MetricsServer {
    /// Create a new metrics server over the given store.
    pub fn new(store: Arc<StatusStore>) -> Self {
        let router = Router::new()
            .route("/", get(metrics_handler))
            .with_state(store)
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Serve scrape requests on the listener until shutdown.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Metrics server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Metrics server stopped");
        Ok(())
    }
}

/// The scrape handler: snapshot the store, render, reply as plain text.
async fn metrics_handler(State(store): State<Arc<StatusStore>>) -> impl IntoResponse {
    let snapshot = store.snapshot().await;
    let body = exposition::render(&snapshot);
    ([(header::CONTENT_TYPE, "text/plain")], body)
}
