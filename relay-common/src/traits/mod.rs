pub mod api;
pub mod source;

pub use api::{ConfigApi, InfoApi, PluginApi, ProxyApi, ServerApi};
pub use source::{CommandSource, Localizer};
