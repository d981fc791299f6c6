//! REST API router and server.

use crate::handlers::{create_term_handler, list_terms_handler, update_term_handler};
use axum::{
    routing::{get, post},
    Router,
};
use glossary_core::application::GlossaryService;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_REST_HOST: &str = "0.0.0.0";
const DEFAULT_REST_PORT: u16 = 8000;

/// REST Server Configuration
#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RestServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REST_HOST.to_string(),
            port: DEFAULT_REST_PORT,
        }
    }
}

/// Create the REST API router.
pub fn create_router(service: GlossaryService) -> Router {
    Router::new()
        .route("/", get(list_terms_handler))
        .route(
            "/term/{keyword}",
            post(create_term_handler).put(update_term_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// REST Server
pub struct RestServer {
    config: RestServerConfig,
    service: GlossaryService,
}

impl RestServer {
    pub fn new(config: RestServerConfig, service: GlossaryService) -> Self {
        Self { config, service }
    }

    /// Bind the listener and serve in a background task
    pub async fn start(self) -> Result<RestServerHandle, String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting REST server"
        );

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| format!("Failed to read local address: {}", e))?;

        let router = create_router(self.service);
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(addr = %local_addr, "REST server started successfully");

        Ok(RestServerHandle {
            local_addr,
            shutdown_tx: Some(shutdown_tx),
            task,
        })
    }
}

/// Handle to a running REST server
pub struct RestServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::io::Result<()>>,
}

impl RestServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn stop(mut self) -> Result<(), String> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        match self.task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("REST server error: {}", e)),
            Err(e) => Err(format!("REST server task failed: {}", e)),
        }
    }
}
