//! Glossary Server - Main Entry Point
//! Serves one seeded term store over JSON-RPC and REST

mod config;

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import workspace crates
use config::{DaemonConfig, LogFormat};
use glossary_api_rest::RestServer;
use glossary_api_rpc::RpcServer;
use glossary_core::application::GlossaryService;
use glossary_core::port::TermRepository;
use glossary_infra_memory::InMemoryTermRepository;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let config = DaemonConfig::from_env();

    // 2. Initialize logging
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("glossary=info,tower_http=info"))?;

    match config.log_format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Glossary server v{} starting...", VERSION);

    // 3. Setup dependencies (DI wiring): one store shared by both adapters
    let term_repo: Arc<dyn TermRepository> = Arc::new(InMemoryTermRepository::seeded());
    let seeded = term_repo.count().await?;
    info!(terms = seeded, "Term store seeded");

    let service = GlossaryService::new(term_repo);

    // 4. Start JSON-RPC server
    let (rpc_addr, rpc_handle) = RpcServer::new(config.rpc.clone(), service.clone())
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    // 5. Start REST server
    let rest_handle = RestServer::new(config.rest.clone(), service)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("REST server start failed: {}", e))?;

    info!(
        rpc = %rpc_addr,
        rest = %rest_handle.local_addr(),
        "System ready"
    );
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;

    rest_handle
        .stop()
        .await
        .map_err(|e| anyhow::anyhow!("REST server stop failed: {}", e))?;

    info!("Shutdown complete.");

    Ok(())
}
