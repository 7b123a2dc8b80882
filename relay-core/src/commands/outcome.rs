use relay_common::text::{Component, TextColor};

use crate::Error;

/// How a sub-command finished.
///
/// User-facing replies and server-side detail travel in separate fields: the
/// router sends `reply` to the source and logs `detail`, never the reverse.
#[derive(Debug)]
pub enum Outcome {
    /// Output (if any) was already sent by the sub-command.
    Completed,
    /// Nothing to log; `reply` tells the user what went wrong.
    Failed { reply: Component },
    /// `detail` goes to the log under `context`; the user only gets `reply`.
    FailedWithDetail {
        reply: Component,
        detail: Error,
        context: &'static str,
    },
}

impl Outcome {
    /// Short red `/root name` hint for sub-commands that take no arguments.
    pub fn usage_hint(root: &str, name: &str) -> Self {
        Outcome::Failed {
            reply: Component::text(format!("/{root} {name}")).color(TextColor::RED),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}
