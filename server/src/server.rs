//! Axum-based verification page server.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use credo_store::CertificateStore;
use credo_verify::VerificationFlow;

use crate::error::ServerError;
use crate::handlers;

/// Shared state for all request handlers.
pub struct AppState {
    pub flow: VerificationFlow,
}

/// HTTP server exposing the verification pages.
pub struct VerifyServer {
    port: u16,
    state: Arc<AppState>,
}

impl VerifyServer {
    pub fn new(
        port: u16,
        store: Arc<dyn CertificateStore>,
        lookup_timeout: Duration,
    ) -> Self {
        let flow = VerificationFlow::with_timeout(store, lookup_timeout);
        Self {
            port,
            state: Arc::new(AppState { flow }),
        }
    }

    /// Build the router. Exposed separately so tests can drive it without
    /// binding a socket.
    pub fn router(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/", get(handlers::landing))
            .route("/verify/:public_id", get(handlers::verify))
            .route("/health", get(handlers::health))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(&self) -> Result<(), ServerError> {
        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        info!("verification server listening on {addr}");
        let app = Self::router(self.state.clone());
        axum::serve(listener, app).await?;
        Ok(())
    }
}
