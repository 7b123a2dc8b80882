// File: relay-core/src/commands/router.rs

use relay_common::text::{Component, TextColor};
use relay_common::traits::CommandSource;
use tracing::{debug, error};

use crate::commands::{CommandContext, Invocation, Outcome, Subcommand, SubcommandRegistry};

/// Dispatches `/relay <sub-command> [args]` to the registered sub-commands.
pub struct CommandRouter {
    registry: SubcommandRegistry,
    ctx: CommandContext,
}

impl CommandRouter {
    pub fn new(registry: SubcommandRegistry, ctx: CommandContext) -> Self {
        debug!("Initializing CommandRouter for '/{}'", ctx.root);
        Self { registry, ctx }
    }

    pub fn root(&self) -> &str {
        &self.ctx.root
    }

    pub fn registry(&self) -> &SubcommandRegistry {
        &self.registry
    }

    /// Runs the invocation to completion. Unknown or forbidden sub-commands get
    /// the usage line; nothing else runs for them.
    pub async fn execute(&self, invocation: &Invocation<'_>) -> Outcome {
        let source = invocation.source;
        let outcome = match self.resolve(&invocation.arguments) {
            Some((command, rest)) if command.has_permission(self.root(), source, rest) => {
                debug!("Dispatching /{} {:?} args={:?}", self.root(), command, rest);
                command.execute(&self.ctx, source, rest).await
            }
            Some((command, _)) => {
                debug!("Source lacks permission for {:?}", command);
                Outcome::Failed { reply: self.usage(source) }
            }
            None => Outcome::Failed { reply: self.usage(source) },
        };
        self.finish(source, &outcome);
        outcome
    }

    /// Tab-completion candidates for the tokens typed so far.
    pub fn suggest(&self, invocation: &Invocation<'_>) -> Vec<String> {
        let source = invocation.source;
        let args = &invocation.arguments;

        match args.len() {
            0 => self.permitted_names(source),
            1 => {
                let prefix = args[0].to_lowercase();
                self.registry
                    .iter()
                    .filter(|(name, _)| name.to_lowercase().starts_with(&prefix))
                    .filter(|(_, cmd)| cmd.has_permission(self.root(), source, &[]))
                    .map(|(name, _)| name.to_string())
                    .collect()
            }
            _ => match self.resolve(args) {
                Some((command, rest)) => command.suggest(source, rest),
                None => Vec::new(),
            },
        }
    }

    /// Whether the root command should be visible/runnable for this invocation.
    /// Unknown sub-commands answer `true` so the source gets the usage line
    /// instead of a bare "no permission".
    pub fn has_permission(&self, invocation: &Invocation<'_>) -> bool {
        let source = invocation.source;
        let args = &invocation.arguments;

        if args.is_empty() {
            return self
                .registry
                .iter()
                .any(|(_, cmd)| cmd.has_permission(self.root(), source, args));
        }
        match self.resolve(args) {
            Some((command, rest)) => command.has_permission(self.root(), source, rest),
            None => true,
        }
    }

    /// `/relay <a|b|c>` listing only what `source` may use.
    pub fn usage(&self, source: &dyn CommandSource) -> Component {
        let available = self.permitted_names(source).join("|");
        Component::text(format!("/{} <{}>", self.root(), available)).color(TextColor::RED)
    }

    fn permitted_names(&self, source: &dyn CommandSource) -> Vec<String> {
        self.registry
            .iter()
            .filter(|(_, cmd)| cmd.has_permission(self.root(), source, &[]))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    fn resolve<'a>(&self, args: &'a [String]) -> Option<(Subcommand, &'a [String])> {
        let (first, rest) = args.split_first()?;
        self.registry.get(first).map(|cmd| (cmd, rest))
    }

    fn finish(&self, source: &dyn CommandSource, outcome: &Outcome) {
        match outcome {
            Outcome::Completed => {}
            Outcome::Failed { reply } => source.send_message(reply.clone()),
            Outcome::FailedWithDetail { reply, detail, context } => {
                error!("{}: {:?}", context, detail);
                source.send_message(reply.clone());
            }
        }
    }
}
