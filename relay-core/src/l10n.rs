//! l10n.rs
//!
//! Built-in message bundle for the `/relay` command. Templates use `{0}`,
//! `{1}`, ... placeholders which are replaced by the argument components, so
//! a styled argument (e.g. the plugin list with its tooltips) keeps its style.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use relay_common::text::Component;
use relay_common::traits::Localizer;
use crate::Error;

pub const VERSION_COPYRIGHT: &str = "relay.command.version-copyright";
pub const NO_PLUGINS: &str = "relay.command.no-plugins";
pub const PLUGINS_LIST: &str = "relay.command.plugins-list";
pub const PLUGIN_TOOLTIP_WEBSITE: &str = "relay.command.plugin-tooltip-website";
pub const PLUGIN_TOOLTIP_AUTHOR: &str = "relay.command.plugin-tooltip-author";
pub const PLUGIN_TOOLTIP_AUTHORS: &str = "relay.command.plugin-tooltip-authors";
pub const RELOAD_SUCCESS: &str = "relay.command.reload-success";
pub const RELOAD_FAILURE: &str = "relay.command.reload-failure";
pub const DUMP_SUCCESS: &str = "relay.command.dump-success";
pub const DUMP_FAILURE: &str = "relay.command.dump-failure";

const ENGLISH: &[(&str, &str)] = &[
    (VERSION_COPYRIGHT, "Copyright {0}. {1} is licensed under the terms of the GNU General Public License v3."),
    (NO_PLUGINS, "There are no plugins currently installed."),
    (PLUGINS_LIST, "Plugins: {0}"),
    (PLUGIN_TOOLTIP_WEBSITE, "Website: {0}"),
    (PLUGIN_TOOLTIP_AUTHOR, "Author: {0}"),
    (PLUGIN_TOOLTIP_AUTHORS, "Authors: {0}"),
    (RELOAD_SUCCESS, "Configuration successfully reloaded."),
    (RELOAD_FAILURE, "Unable to reload your configuration. Check the console for more details."),
    (DUMP_SUCCESS, "An anonymised report containing useful information about this proxy has been saved at {0}"),
    (DUMP_FAILURE, "We could not save the anonymised dump. Check the console for more details."),
];

#[derive(Debug, Clone)]
pub struct MessageBundle {
    templates: HashMap<String, String>,
}

impl MessageBundle {
    pub fn english() -> Self {
        let templates = ENGLISH
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { templates }
    }

    /// Merges a JSON object of `key -> template` over the current templates.
    /// Returns how many keys were taken.
    pub fn merge_json(&mut self, value: &Value) -> Result<usize, Error> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::Config("message overrides must be a JSON object".into()))?;

        let mut merged = 0;
        for (key, template) in obj {
            match template.as_str() {
                Some(t) => {
                    self.templates.insert(key.clone(), t.to_string());
                    merged += 1;
                }
                None => warn!("Ignoring non-string message template for '{}'", key),
            }
        }
        Ok(merged)
    }

    pub fn load_overrides(&mut self, path: &Path) -> Result<usize, Error> {
        let raw = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&raw)?;
        let merged = self.merge_json(&value)?;
        debug!("Loaded {} message overrides from {}", merged, path.display());
        Ok(merged)
    }

    pub fn template(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }
}

impl Default for MessageBundle {
    fn default() -> Self {
        Self::english()
    }
}

impl Localizer for MessageBundle {
    // One bundle serves every locale for now.
    fn translate(&self, key: &str, _locale: Option<&str>, args: &[Component]) -> Component {
        match self.templates.get(key) {
            Some(template) => render_template(template, args),
            None => Component::text(key),
        }
    }
}

/// Splits `template` at `{n}` placeholders. Placeholders with no matching
/// argument are kept verbatim.
fn render_template(template: &str, args: &[Component]) -> Component {
    let mut out = Component::empty();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|idx| args.get(idx))
                .map(|c| (close, c))
        });

        match arg {
            Some((close, component)) => {
                literal.push_str(&rest[..open]);
                if !literal.is_empty() {
                    out.push(Component::text(std::mem::take(&mut literal)));
                }
                out.push(component.clone());
                rest = &after[close + 1..];
            }
            None => {
                literal.push_str(&rest[..=open]);
                rest = after;
            }
        }
    }
    literal.push_str(rest);
    if !literal.is_empty() {
        out.push(Component::text(literal));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_common::text::TextColor;
    use serde_json::json;

    #[test]
    fn placeholders_are_replaced_in_order() {
        let c = render_template("{1} then {0}", &[Component::text("a"), Component::text("b")]);
        assert_eq!(c.plain_text(), "b then a");
    }

    #[test]
    fn argument_styling_survives() {
        let arg = Component::text("x").color(TextColor::GRAY);
        let c = render_template("Plugins: {0}", &[arg.clone()]);
        assert_eq!(c.children.len(), 2);
        assert_eq!(c.children[1], arg);
    }

    #[test]
    fn unmatched_placeholders_stay() {
        let c = render_template("{0} {5} {x}", &[Component::text("a")]);
        assert_eq!(c.plain_text(), "a {5} {x}");
    }

    #[test]
    fn unknown_key_renders_as_key() {
        let bundle = MessageBundle::english();
        assert_eq!(bundle.translate("nope", None, &[]).plain_text(), "nope");
    }

    #[test]
    fn overrides_replace_defaults() {
        let mut bundle = MessageBundle::english();
        let merged = bundle
            .merge_json(&json!({ NO_PLUGINS: "Nothing here.", "bad": 3 }))
            .unwrap();
        assert_eq!(merged, 1);
        assert_eq!(bundle.translate(NO_PLUGINS, None, &[]).plain_text(), "Nothing here.");
        assert!(bundle.merge_json(&json!(["not", "an", "object"])).is_err());
    }
}
