// File: relay-server/src/proxy.rs

use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::{info, warn};

use relay_common::models::{ForcedHost, PluginDescriptor, ProxyVersion, ServerInfo};
use relay_common::traits::{ConfigApi, InfoApi, PluginApi, ServerApi};
use relay_common::Error;
use relay_core::diagnostics::collect_environment_info;

use crate::config::ProxyConfigFile;

/// Proxy state backed by a JSON file; `reload` re-reads it.
pub struct FileProxy {
    path: PathBuf,
    config: RwLock<ProxyConfigFile>,
    version: ProxyVersion,
}

impl FileProxy {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        let config: ProxyConfigFile = serde_json::from_str(&raw)?;
        config
            .validate()
            .map_err(|reason| Error::Config(format!("{}: {}", path.display(), reason)))?;

        info!(
            "Loaded {} servers and {} plugins from {}",
            config.servers.len(),
            config.plugins.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            config: RwLock::new(config),
            version: ProxyVersion {
                name: "Relay".to_string(),
                vendor: "Relay Contributors".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }
}

#[async_trait]
impl ConfigApi for FileProxy {
    async fn reload_configuration(&self) -> Result<bool, Error> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let fresh: ProxyConfigFile = serde_json::from_str(&raw)?;
        if let Err(reason) = fresh.validate() {
            warn!("Rejected new configuration from {}: {}", self.path.display(), reason);
            return Ok(false);
        }
        *self.config.write().await = fresh;
        Ok(true)
    }

    async fn config_document(&self) -> Value {
        self.config.read().await.anonymized_document()
    }

    async fn attempt_connection_order(&self) -> Vec<String> {
        self.config.read().await.try_order.clone()
    }

    async fn forced_hosts(&self) -> Vec<ForcedHost> {
        self.config.read().await.forced_hosts.clone()
    }
}

#[async_trait]
impl PluginApi for FileProxy {
    async fn list_plugins(&self) -> Vec<PluginDescriptor> {
        self.config.read().await.plugins.clone()
    }
}

#[async_trait]
impl ServerApi for FileProxy {
    async fn list_servers(&self) -> Vec<ServerInfo> {
        self.config.read().await.servers.clone()
    }

    async fn server_info(&self, server: &ServerInfo) -> Value {
        describe_address(&server.address)
    }
}

impl InfoApi for FileProxy {
    fn version(&self) -> ProxyVersion {
        self.version.clone()
    }

    fn environment_info(&self) -> Value {
        collect_environment_info()
    }
}

/// Kind of address and port, without the host itself.
fn describe_address(address: &str) -> Value {
    let (host, port) = match address.rsplit_once(':') {
        Some((h, p)) => (h.trim_matches(|c| c == '[' || c == ']'), p.parse::<u16>().ok()),
        None => (address, None),
    };
    let kind = match host.parse::<IpAddr>() {
        Ok(IpAddr::V4(_)) => "IPv4",
        Ok(IpAddr::V6(_)) => "IPv6",
        Err(_) => "hostname",
    };
    json!({ "addressType": kind, "port": port })
}
