// File: relay-core/src/commands/mod.rs
//
// The `/relay` root command and its sub-commands.

use std::sync::Arc;

use relay_common::traits::{Localizer, ProxyApi};

use crate::diagnostics::SnapshotWriter;

pub mod dump;
pub mod info;
pub mod invocation;
pub mod outcome;
pub mod permission;
pub mod plugins;
pub mod registry;
pub mod reload;
pub mod router;

pub use invocation::Invocation;
pub use outcome::Outcome;
pub use permission::Grant;
pub use registry::{RegistryBuilder, Subcommand, SubcommandRegistry};
pub use router::CommandRouter;

/// Shared handles every sub-command may use.
pub struct CommandContext {
    /// Root command name, e.g. `relay`. Used for usage text and permission nodes.
    pub root: String,
    pub proxy: Arc<dyn ProxyApi>,
    pub localizer: Arc<dyn Localizer>,
    pub snapshot_writer: SnapshotWriter,
}
