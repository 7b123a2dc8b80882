// File: relay-server/src/config.rs
//
// On-disk proxy configuration backing the admin commands.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use relay_common::models::{ForcedHost, PluginDescriptor, ServerInfo};

fn default_bind() -> String {
    "0.0.0.0:25577".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyConfigFile {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub motd: String,
    #[serde(default)]
    pub show_max_players: u32,
    #[serde(default)]
    pub online_mode: bool,
    /// Shared with backends; never leaves this process.
    #[serde(default)]
    pub forwarding_secret: Option<String>,
    #[serde(default)]
    pub servers: Vec<ServerInfo>,
    #[serde(default, rename = "try")]
    pub try_order: Vec<String>,
    #[serde(default)]
    pub forced_hosts: Vec<ForcedHost>,
    #[serde(default)]
    pub plugins: Vec<PluginDescriptor>,
}

impl ProxyConfigFile {
    /// Checks cross references. The returned string explains the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.servers.is_empty() {
            return Err("no servers are configured".to_string());
        }

        let mut names = HashSet::new();
        for server in &self.servers {
            if !names.insert(server.name.to_lowercase()) {
                return Err(format!("server '{}' is defined twice", server.name));
            }
        }

        let known = |name: &str| names.contains(&name.to_lowercase());
        if let Some(missing) = self.try_order.iter().find(|s| !known(s.as_str())) {
            return Err(format!("try list names unknown server '{}'", missing));
        }
        for host in &self.forced_hosts {
            if let Some(missing) = host.servers.iter().find(|s| !known(s.as_str())) {
                return Err(format!(
                    "forced host '{}' names unknown server '{}'",
                    host.host, missing
                ));
            }
        }

        let mut ids = HashSet::new();
        for plugin in &self.plugins {
            if !ids.insert(plugin.id.as_str()) {
                return Err(format!("plugin '{}' is listed twice", plugin.id));
            }
        }
        Ok(())
    }

    /// Settings that are safe to put in a dump.
    pub fn anonymized_document(&self) -> Value {
        json!({
            "bind": self.bind,
            "motd": self.motd,
            "showMaxPlayers": self.show_max_players,
            "onlineMode": self.online_mode,
            "forwardingSecretConfigured": self.forwarding_secret.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ProxyConfigFile {
        serde_json::from_str(raw).unwrap()
    }

    const VALID: &str = r#"{
        "motd": "hello",
        "forwardingSecret": "hunter2",
        "servers": [
            { "name": "lobby", "address": "127.0.0.1:30066" },
            { "name": "minigames", "address": "play.example.com:30068" }
        ],
        "try": ["lobby"],
        "forcedHosts": [{ "host": "mg.example.com", "servers": ["minigames"] }],
        "plugins": [{ "id": "portal" }]
    }"#;

    #[test]
    fn valid_config_passes() {
        let cfg = parse(VALID);
        assert_eq!(cfg.bind, "0.0.0.0:25577");
        assert_eq!(cfg.try_order, vec!["lobby"]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_references_fail() {
        let mut cfg = parse(VALID);
        cfg.try_order.push("nowhere".into());
        assert!(cfg.validate().unwrap_err().contains("nowhere"));

        let mut cfg = parse(VALID);
        cfg.forced_hosts[0].servers.push("gone".into());
        assert!(cfg.validate().unwrap_err().contains("gone"));

        let mut cfg = parse(VALID);
        cfg.servers.clear();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn secret_is_not_exposed() {
        let doc = parse(VALID).anonymized_document();
        assert!(!doc.to_string().contains("hunter2"));
        assert_eq!(doc["forwardingSecretConfigured"], true);
    }
}
