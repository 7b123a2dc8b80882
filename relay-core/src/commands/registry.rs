// File: relay-core/src/commands/registry.rs

use relay_common::traits::CommandSource;
use tracing::debug;

use crate::Error;
use crate::commands::permission::Grant;
use crate::commands::{dump, info, plugins, reload, CommandContext, Outcome};

/// The fixed set of `/relay` sub-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Info,
    Plugins,
    Reload,
    Dump,
}

impl Subcommand {
    pub fn grant(self) -> Grant {
        match self {
            Subcommand::Info => Grant::UnlessDenied("info"),
            Subcommand::Plugins => Grant::Strict("plugins"),
            Subcommand::Reload => Grant::Strict("reload"),
            // Dump has always been gated on the plugins node.
            Subcommand::Dump => Grant::Strict("plugins"),
        }
    }

    pub fn has_permission(self, root: &str, source: &dyn CommandSource, _args: &[String]) -> bool {
        self.grant().check(root, source)
    }

    pub async fn execute(
        self,
        ctx: &CommandContext,
        source: &dyn CommandSource,
        args: &[String],
    ) -> Outcome {
        match self {
            Subcommand::Info => info::execute(ctx, source, args),
            Subcommand::Plugins => plugins::execute(ctx, source, args).await,
            Subcommand::Reload => reload::execute(ctx, source, args).await,
            Subcommand::Dump => dump::execute(ctx, source, args).await,
        }
    }

    /// Completions for the arguments after the sub-command name. None of the
    /// built-in sub-commands take arguments.
    pub fn suggest(self, _source: &dyn CommandSource, _args: &[String]) -> Vec<String> {
        Vec::new()
    }
}

/// Insertion-ordered, case-insensitive map from sub-command name to
/// [`Subcommand`]. Built once; read-only afterwards.
#[derive(Debug, Clone)]
pub struct SubcommandRegistry {
    entries: Vec<(String, Subcommand)>,
}

impl SubcommandRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// `version`, `plugins`, `reload`, `dump`, in that order.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ("version".to_string(), Subcommand::Info),
                ("plugins".to_string(), Subcommand::Plugins),
                ("reload".to_string(), Subcommand::Reload),
                ("dump".to_string(), Subcommand::Dump),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<Subcommand> {
        let wanted = name.to_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == wanted)
            .map(|(_, cmd)| *cmd)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Subcommand)> + '_ {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<(String, Subcommand)>,
}

impl RegistryBuilder {
    pub fn register(mut self, name: &str, command: Subcommand) -> Self {
        self.entries.push((name.to_lowercase(), command));
        self
    }

    /// Fails if a name is empty, contains whitespace, or collides with an
    /// earlier one ignoring case.
    pub fn build(self) -> Result<SubcommandRegistry, Error> {
        for (i, (name, _)) in self.entries.iter().enumerate() {
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(Error::Registry(format!("invalid sub-command name '{}'", name)));
            }
            if self.entries[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(Error::Registry(format!("duplicate sub-command '{}'", name)));
            }
        }
        debug!("Built sub-command registry with {} entries", self.entries.len());
        Ok(SubcommandRegistry { entries: self.entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_matches_builder() {
        let built = SubcommandRegistry::builder()
            .register("version", Subcommand::Info)
            .register("plugins", Subcommand::Plugins)
            .register("reload", Subcommand::Reload)
            .register("dump", Subcommand::Dump)
            .build()
            .unwrap();
        let standard = SubcommandRegistry::standard();
        assert!(built.iter().eq(standard.iter()));
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = SubcommandRegistry::standard();
        for name in ["RELOAD", "Reload", "reload"] {
            assert_eq!(registry.get(name), Some(Subcommand::Reload));
        }
        assert_eq!(registry.get("bogus"), None);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = SubcommandRegistry::builder()
            .register("dump", Subcommand::Dump)
            .register("DUMP", Subcommand::Info)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Registry(_)));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(SubcommandRegistry::builder().register("", Subcommand::Dump).build().is_err());
        assert!(SubcommandRegistry::builder().register("a b", Subcommand::Dump).build().is_err());
    }

    #[test]
    fn insertion_order_is_kept() {
        let registry = SubcommandRegistry::builder()
            .register("zeta", Subcommand::Dump)
            .register("alpha", Subcommand::Info)
            .build()
            .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }
}
