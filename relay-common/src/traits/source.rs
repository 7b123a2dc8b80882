use crate::models::Tristate;
use crate::text::Component;

/// Whoever runs a command: the console, a connected player, a plugin.
pub trait CommandSource: Send + Sync {
    fn permission_value(&self, node: &str) -> Tristate;

    fn send_message(&self, message: Component);

    /// Preferred locale tag (e.g. `en_US`), if the source has one.
    fn locale(&self) -> Option<String> {
        None
    }
}

/// Resolves message keys into components, splicing positional arguments.
pub trait Localizer: Send + Sync {
    fn translate(&self, key: &str, locale: Option<&str>, args: &[Component]) -> Component;
}
