// File: relay-core/tests/helpers/mod.rs
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use relay_common::models::{ForcedHost, PluginDescriptor, ProxyVersion, ServerInfo};
use relay_common::traits::{ConfigApi, InfoApi, PluginApi, ServerApi};
use relay_core::diagnostics::SnapshotWriter;
use relay_core::{CommandContext, CommandRouter, Error, MessageBundle, SubcommandRegistry};

mock! {
    pub Proxy {}

    #[async_trait]
    impl ConfigApi for Proxy {
        async fn reload_configuration(&self) -> Result<bool, Error>;
        async fn config_document(&self) -> Value;
        async fn attempt_connection_order(&self) -> Vec<String>;
        async fn forced_hosts(&self) -> Vec<ForcedHost>;
    }

    #[async_trait]
    impl PluginApi for Proxy {
        async fn list_plugins(&self) -> Vec<PluginDescriptor>;
    }

    #[async_trait]
    impl ServerApi for Proxy {
        async fn list_servers(&self) -> Vec<ServerInfo>;
        async fn server_info(&self, server: &ServerInfo) -> Value;
    }

    impl InfoApi for Proxy {
        fn version(&self) -> ProxyVersion;
        fn environment_info(&self) -> Value;
    }
}

pub const ROOT: &str = "relay";

pub fn version(name: &str) -> ProxyVersion {
    ProxyVersion {
        name: name.to_string(),
        vendor: "Relay Contributors".to_string(),
        version: "3.4.0".to_string(),
    }
}

pub fn router_with(proxy: MockProxy) -> CommandRouter {
    router_with_writer(proxy, SnapshotWriter::new(ROOT))
}

pub fn router_with_writer(proxy: MockProxy, writer: SnapshotWriter) -> CommandRouter {
    let ctx = CommandContext {
        root: ROOT.to_string(),
        proxy: Arc::new(proxy),
        localizer: Arc::new(MessageBundle::english()),
        snapshot_writer: writer,
    };
    CommandRouter::new(SubcommandRegistry::standard(), ctx)
}

pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|s| s.to_string()).collect()
}

/// Localized text for `key` with no arguments, as a user would see it.
pub fn english(key: &str) -> String {
    use relay_common::traits::Localizer;
    MessageBundle::english().translate(key, None, &[]).plain_text()
}
