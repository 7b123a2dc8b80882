use serde::{Deserialize, Serialize};

/// A backend server registered with the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub name: String,
    pub address: String,
}

/// One forced-host entry: connections arriving for `host` try `servers` in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedHost {
    pub host: String,
    pub servers: Vec<String>,
}
