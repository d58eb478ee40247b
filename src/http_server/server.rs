//! # HTTP Server
//!
//! Combines the contact and health routers behind CORS and serves them.
//! The store handle is injected; the server never opens one itself.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::HttpServerConfig;
use super::contact_routes::{contact_routes, ContactState};
use super::observability_routes::health_routes;
use crate::observability::{log_event_with_fields, Event};
use crate::store::ContactStore;

/// HTTP server for the contact API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store
    pub fn new(config: HttpServerConfig, store: Arc<dyn ContactStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: Arc<dyn ContactStore>) -> Router {
        let contact_state = Arc::new(ContactState::new(store));

        Router::new()
            .merge(health_routes())
            .merge(contact_routes(contact_state))
            .layer(Self::cors_layer(config))
    }

    /// Any origin when none are configured, otherwise the listed ones.
    /// Origins are checked by `HttpServerConfig::validate` at load time.
    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        let origins = if config.cors_origins.is_empty() {
            AllowOrigin::from(Any)
        } else {
            AllowOrigin::list(
                config
                    .cors_origins
                    .iter()
                    .filter_map(|s| s.parse::<HeaderValue>().ok())
                    .collect::<Vec<_>>(),
            )
        };

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let addr = listener.local_addr()?.to_string();

        log_event_with_fields(Event::Serving, &[("addr", &addr)]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryContactStore;

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig {
            port: 9090,
            ..Default::default()
        };
        let server = HttpServer::new(config, Arc::new(MemoryContactStore::new()));
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = HttpServer::new(config, Arc::new(MemoryContactStore::new()));
        let _router = server.router();
    }
}
