// src/lib.rs

pub mod commands;
pub mod diagnostics;
pub mod l10n;
pub mod test_utils;

pub use relay_common::error::Error;
pub use commands::{CommandContext, CommandRouter, Invocation, Outcome, Subcommand, SubcommandRegistry};
pub use l10n::MessageBundle;
