// File: relay-core/src/diagnostics/aggregator.rs

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

use relay_common::models::{ForcedHost, PluginDescriptor, ProxyVersion};
use relay_common::traits::ProxyApi;

/// The document written by `/relay dump`. All four sections are always
/// present, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxySnapshot {
    pub version_info: Value,
    pub platform: Value,
    pub config: Map<String, Value>,
    pub plugins: Value,
}

pub struct DumpAggregator<'a> {
    proxy: &'a dyn ProxyApi,
}

impl<'a> DumpAggregator<'a> {
    pub fn new(proxy: &'a dyn ProxyApi) -> Self {
        Self { proxy }
    }

    pub async fn collect(&self) -> ProxySnapshot {
        let servers = self.proxy.list_servers().await;
        let mut server_docs = Map::new();
        for server in &servers {
            let doc = self.proxy.server_info(server).await;
            server_docs.insert(server.name.clone(), doc);
        }

        let connect_order = self.proxy.attempt_connection_order().await;
        let forced_hosts = self.proxy.forced_hosts().await;

        // Keys from the merged config come first; the three collected
        // sections overwrite anything of the same name.
        let mut config = match self.proxy.config_document().await {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("proxy".to_string(), other);
                map
            }
        };
        config.insert("servers".to_string(), Value::Object(server_docs));
        config.insert(
            "connectOrder".to_string(),
            Value::Array(connect_order.into_iter().map(Value::String).collect()),
        );
        config.insert("forcedHosts".to_string(), forced_hosts_document(&forced_hosts));

        let plugins = self.proxy.list_plugins().await;
        debug!(
            "Collected dump: {} servers, {} forced hosts, {} plugins",
            servers.len(),
            forced_hosts.len(),
            plugins.len()
        );

        ProxySnapshot {
            version_info: version_document(&self.proxy.version()),
            platform: self.proxy.environment_info(),
            config,
            plugins: Value::Array(plugins.iter().map(plugin_document).collect()),
        }
    }
}

fn version_document(version: &ProxyVersion) -> Value {
    json!({
        "name": version.name,
        "vendor": version.vendor,
        "version": version.version,
    })
}

fn forced_hosts_document(hosts: &[ForcedHost]) -> Value {
    let map = hosts
        .iter()
        .map(|h| {
            let servers = h.servers.iter().cloned().map(Value::String).collect();
            (h.host.clone(), Value::Array(servers))
        })
        .collect();
    Value::Object(map)
}

fn plugin_document(plugin: &PluginDescriptor) -> Value {
    let mut doc = Map::new();
    doc.insert("id".to_string(), Value::String(plugin.id.clone()));
    let optional = [
        ("name", &plugin.name),
        ("version", &plugin.version),
        ("url", &plugin.url),
        ("description", &plugin.description),
    ];
    for (key, value) in optional {
        if let Some(v) = value {
            doc.insert(key.to_string(), Value::String(v.clone()));
        }
    }
    if !plugin.authors.is_empty() {
        doc.insert("authors".to_string(), json!(plugin.authors));
    }
    Value::Object(doc)
}
