use serde::{Deserialize, Serialize};

/// Name, vendor and version string of the running proxy build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyVersion {
    pub name: String,
    pub vendor: String,
    pub version: String,
}
