// File: relay-common/src/models/mod.rs
pub mod permission;
pub mod plugin;
pub mod server;
pub mod version;

pub use permission::Tristate;
pub use plugin::PluginDescriptor;
pub use server::{ForcedHost, ServerInfo};
pub use version::ProxyVersion;
