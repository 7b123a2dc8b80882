use relay_common::models::Tristate;
use relay_common::traits::CommandSource;

/// How a sub-command checks its permission node `<root>.command.<node>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// Allowed unless the node is explicitly `False`.
    UnlessDenied(&'static str),
    /// Allowed only when the node is explicitly `True`.
    Strict(&'static str),
}

impl Grant {
    pub fn node(&self, root: &str) -> String {
        let suffix = match self {
            Grant::UnlessDenied(n) | Grant::Strict(n) => n,
        };
        format!("{root}.command.{suffix}")
    }

    pub fn check(&self, root: &str, source: &dyn CommandSource) -> bool {
        let value = source.permission_value(&self.node(root));
        match self {
            Grant::UnlessDenied(_) => value != Tristate::False,
            Grant::Strict(_) => value == Tristate::True,
        }
    }
}
