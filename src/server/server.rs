//! HTTP server assembly and lifecycle.
//!
//! Builds the combined router (contacts, docs, health) behind a permissive
//! CORS layer, binds the configured address, and serves until a shutdown
//! signal arrives. Construction takes an already-connected store, so by the
//! time the listener opens the backend is known to be reachable.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::{contact_routes, docs_routes, health_routes};
use crate::store::ContactStore;

use super::config::Config;
use super::errors::ServerError;

/// HTTP server for the contacts service.
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Assemble the server around a connected store.
    pub fn new<S: ContactStore + 'static>(config: Config, store: Arc<S>) -> Self {
        let router = build_router(store);
        Self { config, router }
    }

    /// The socket address the server will bind.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// The assembled router (for driving requests in tests).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c.
    pub async fn start(self) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "listening");
        tracing::info!("API docs available at http://{addr}/api-docs");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Build the combined router with all routes and middleware.
///
/// Every response carries the unrestricted cross-origin allow header.
pub fn build_router<S: ContactStore + 'static>(store: Arc<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health_routes())
        .merge(docs_routes())
        .merge(contact_routes(store))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Resolves when the process receives ctrl-c; in-flight requests are
/// allowed to complete before `start` returns.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("shutdown signal received");
}
