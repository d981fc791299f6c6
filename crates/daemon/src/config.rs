//! Daemon configuration from environment variables

use glossary_api_rest::RestServerConfig;
use glossary_api_rpc::RpcServerConfig;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub rpc: RpcServerConfig,
    pub rest: RestServerConfig,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    /// Read `GLOSSARY_*` variables from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rpc_defaults = RpcServerConfig::default();
        let rest_defaults = RestServerConfig::default();

        let rpc = RpcServerConfig {
            host: lookup("GLOSSARY_RPC_HOST").unwrap_or(rpc_defaults.host),
            port: lookup("GLOSSARY_RPC_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(rpc_defaults.port),
            max_connections: lookup("GLOSSARY_RPC_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(rpc_defaults.max_connections),
        };

        let rest = RestServerConfig {
            host: lookup("GLOSSARY_REST_HOST").unwrap_or(rest_defaults.host),
            port: lookup("GLOSSARY_REST_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(rest_defaults.port),
        };

        let log_format = match lookup("GLOSSARY_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Self {
            rpc,
            rest,
            log_format,
        }
    }
}
