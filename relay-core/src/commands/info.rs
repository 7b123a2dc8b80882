use relay_common::text::{Component, TextColor};
use relay_common::traits::CommandSource;

use crate::commands::{CommandContext, Outcome};
use crate::l10n;

/// Only builds carrying this name get the homepage/source links.
pub const CANONICAL_NAME: &str = "Relay";
pub const HOMEPAGE_URL: &str = "https://relayproxy.org";
pub const SOURCE_URL: &str = "https://github.com/relayproxy/relay";

const BRAND_COLOR: TextColor = TextColor::Hex(0x09add3);

/// `/relay version`
pub fn execute(ctx: &CommandContext, source: &dyn CommandSource, args: &[String]) -> Outcome {
    if !args.is_empty() {
        return Outcome::usage_hint(&ctx.root, "version");
    }

    let version = ctx.proxy.version();
    let locale = source.locale();

    let banner = Component::text(format!("{} ", version.name))
        .bold(true)
        .color(BRAND_COLOR)
        .append(Component::text(version.version.as_str()).bold(false));
    let copyright = ctx.localizer.translate(
        l10n::VERSION_COPYRIGHT,
        locale.as_deref(),
        &[
            Component::text(version.vendor.as_str()),
            Component::text(version.name.as_str()),
        ],
    );
    source.send_message(banner);
    source.send_message(copyright);

    if version.name == CANONICAL_NAME {
        let links = Component::empty()
            .append(
                Component::text("relayproxy.org")
                    .color(TextColor::GREEN)
                    .click_url(HOMEPAGE_URL),
            )
            .append(Component::text(" - "))
            .append(
                Component::text("GitHub")
                    .color(TextColor::GREEN)
                    .underlined(true)
                    .click_url(SOURCE_URL),
            );
        source.send_message(links);
    }

    Outcome::Completed
}
