// File: relay-common/src/traits/api.rs
//
// Narrow query/command interfaces the admin commands use to reach the rest
// of the proxy. The proxy itself implements them; tests mock them.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;
use crate::models::{ForcedHost, PluginDescriptor, ProxyVersion, ServerInfo};

/// Everything the `/relay` command needs from the running proxy.
pub trait ProxyApi: ConfigApi + PluginApi + ServerApi + InfoApi {}

impl<T> ProxyApi for T
where
    T: ConfigApi + PluginApi + ServerApi + InfoApi,
{
    // marker
}

#[async_trait]
pub trait ConfigApi: Send + Sync {
    /// Re-reads the configuration. `Ok(false)` means the new configuration
    /// was rejected and the old one stays live.
    async fn reload_configuration(&self) -> Result<bool, Error>;

    /// The live configuration as a document safe to hand out (no secrets).
    async fn config_document(&self) -> Value;

    /// Server names in the order new connections try them.
    async fn attempt_connection_order(&self) -> Vec<String>;

    async fn forced_hosts(&self) -> Vec<ForcedHost>;
}

#[async_trait]
pub trait PluginApi: Send + Sync {
    async fn list_plugins(&self) -> Vec<PluginDescriptor>;
}

#[async_trait]
pub trait ServerApi: Send + Sync {
    async fn list_servers(&self) -> Vec<ServerInfo>;

    /// Diagnostic document for a single registered server.
    async fn server_info(&self, server: &ServerInfo) -> Value;
}

pub trait InfoApi: Send + Sync {
    fn version(&self) -> ProxyVersion;

    /// Host/runtime description for diagnostics.
    fn environment_info(&self) -> Value;
}
