use relay_common::models::PluginDescriptor;
use relay_common::text::{Component, TextColor};
use relay_common::traits::{CommandSource, Localizer};

use crate::commands::{CommandContext, Outcome};
use crate::l10n;

/// `/relay plugins`
pub async fn execute(ctx: &CommandContext, source: &dyn CommandSource, args: &[String]) -> Outcome {
    if !args.is_empty() {
        return Outcome::usage_hint(&ctx.root, "plugins");
    }

    let plugins = ctx.proxy.list_plugins().await;
    let locale = source.locale();
    let localizer = ctx.localizer.as_ref();

    if plugins.is_empty() {
        source.send_message(
            localizer
                .translate(l10n::NO_PLUGINS, locale.as_deref(), &[])
                .color(TextColor::YELLOW),
        );
        return Outcome::Completed;
    }

    let list = plugin_list(localizer, &plugins);
    let output = localizer
        .translate(l10n::PLUGINS_LIST, locale.as_deref(), &[list])
        .color(TextColor::YELLOW);
    source.send_message(output);
    Outcome::Completed
}

/// Every plugin id, `", "`-separated, each with its own tooltip.
pub fn plugin_list(localizer: &dyn Localizer, plugins: &[PluginDescriptor]) -> Component {
    let mut list = Component::empty();
    for (i, plugin) in plugins.iter().enumerate() {
        if i > 0 {
            list.push(Component::text(", "));
        }
        list.push(plugin_entry(localizer, plugin));
    }
    list
}

fn plugin_entry(localizer: &dyn Localizer, plugin: &PluginDescriptor) -> Component {
    let mut headline = plugin.display_name().to_string();
    if let Some(version) = &plugin.version {
        headline.push(' ');
        headline.push_str(version);
    }
    let mut hover = Component::text(headline);

    if let Some(url) = &plugin.url {
        hover.push(Component::newline());
        hover.push(localizer.translate(
            l10n::PLUGIN_TOOLTIP_WEBSITE,
            None,
            &[Component::text(url.as_str())],
        ));
    }
    match plugin.authors.as_slice() {
        [] => {}
        [author] => {
            hover.push(Component::newline());
            hover.push(localizer.translate(
                l10n::PLUGIN_TOOLTIP_AUTHOR,
                None,
                &[Component::text(author.as_str())],
            ));
        }
        authors => {
            hover.push(Component::newline());
            hover.push(localizer.translate(
                l10n::PLUGIN_TOOLTIP_AUTHORS,
                None,
                &[Component::text(authors.join(", "))],
            ));
        }
    }
    if let Some(description) = &plugin.description {
        hover.push(Component::newline());
        hover.push(Component::newline());
        hover.push(Component::text(description.as_str()));
    }

    Component::text(plugin.id.as_str())
        .color(TextColor::GRAY)
        .hover(hover)
}
