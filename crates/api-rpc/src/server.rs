//! JSON-RPC Server
//!
//! Implements the JSON-RPC 2.0 server over plaintext HTTP.

use crate::handler::RpcHandler;
use crate::types::{method, CreateTermParams, UpdateTermParams};
use glossary_core::application::GlossaryService;
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "0.0.0.0";
const DEFAULT_RPC_PORT: u16 = 50051;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig, service: GlossaryService) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(service)),
        }
    }

    /// Build the method table
    pub fn into_module(self) -> Result<RpcModule<()>, String> {
        build_module(self.handler)
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful with port 0) and the handle used to
    /// stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            max_connections = self.config.max_connections,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .max_connections(self.config.max_connections)
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read local address: {}", e))?;

        let module = build_module(self.handler)?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }
}

fn build_module(handler: Arc<RpcHandler>) -> Result<RpcModule<()>, String> {
    let mut module = RpcModule::new(());

    let h = handler.clone();
    module
        .register_async_method(method::GET_ALL_TERMS, move |_, _, _| {
            let handler = h.clone();
            async move { handler.get_all_terms().await }
        })
        .map_err(|e| e.to_string())?;

    let h = handler.clone();
    module
        .register_async_method(method::CREATE_TERM, move |params, _, _| {
            let handler = h.clone();
            async move {
                let req: CreateTermParams = params.parse()?;
                handler.create_term(req).await
            }
        })
        .map_err(|e| e.to_string())?;

    let h = handler;
    module
        .register_async_method(method::UPDATE_TERM, move |params, _, _| {
            let handler = h.clone();
            async move {
                let req: UpdateTermParams = params.parse()?;
                handler.update_term(req).await
            }
        })
        .map_err(|e| e.to_string())?;

    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossary_core::port::TermRepository;
    use glossary_infra_memory::InMemoryTermRepository;

    #[test]
    fn test_default_config_binds_all_interfaces() {
        let config = RpcServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 50051);
        assert_eq!(config.max_connections, 10);
    }

    #[tokio::test]
    async fn test_module_registers_three_methods() {
        let service = GlossaryService::new(Arc::new(InMemoryTermRepository::seeded()));
        let module = RpcServer::new(RpcServerConfig::default(), service)
            .into_module()
            .unwrap();

        let mut names: Vec<&str> = module.method_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["CreateTerm", "GetAllTerms", "UpdateTerm"]);
    }

    #[tokio::test]
    async fn test_module_call_create_term() {
        let service = GlossaryService::new(Arc::new(InMemoryTermRepository::new()));
        let module = RpcServer::new(RpcServerConfig::default(), service)
            .into_module()
            .unwrap();

        let (response, _) = module
            .raw_json_request(
                r#"{"jsonrpc":"2.0","id":1,"method":"CreateTerm","params":{"keyword":"lcp","term":{"title":"lcp","definition":"Largest paint","source_link":"https://web.dev/lcp"}}}"#,
                1,
            )
            .await
            .unwrap();

        assert!(response.contains(r#""title":"lcp""#), "{response}");
        assert!(response.contains("https://web.dev/lcp"), "{response}");
    }

    #[tokio::test]
    async fn test_create_without_term_is_invalid_params() {
        let repo = Arc::new(InMemoryTermRepository::seeded());
        let module = RpcServer::new(RpcServerConfig::default(), GlossaryService::new(repo.clone()))
            .into_module()
            .unwrap();
        let before = repo.list_all().await.unwrap();

        let (response, _) = module
            .raw_json_request(
                r#"{"jsonrpc":"2.0","id":1,"method":"CreateTerm","params":{"keyword":"fps"}}"#,
                1,
            )
            .await
            .unwrap();

        assert!(response.contains("-32602"), "{response}");
        assert_eq!(repo.list_all().await.unwrap(), before);
    }
}
