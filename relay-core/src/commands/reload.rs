use relay_common::text::TextColor;
use relay_common::traits::CommandSource;
use tracing::info;

use crate::commands::{CommandContext, Outcome};
use crate::l10n;

/// `/relay reload`
pub async fn execute(ctx: &CommandContext, source: &dyn CommandSource, args: &[String]) -> Outcome {
    if !args.is_empty() {
        return Outcome::usage_hint(&ctx.root, "reload");
    }

    let locale = source.locale();
    let failure = || {
        ctx.localizer
            .translate(l10n::RELOAD_FAILURE, locale.as_deref(), &[])
            .color(TextColor::RED)
    };

    match ctx.proxy.reload_configuration().await {
        Ok(true) => {
            info!("Configuration reloaded");
            source.send_message(
                ctx.localizer
                    .translate(l10n::RELOAD_SUCCESS, locale.as_deref(), &[])
                    .color(TextColor::GREEN),
            );
            Outcome::Completed
        }
        Ok(false) => Outcome::Failed { reply: failure() },
        Err(e) => Outcome::FailedWithDetail {
            reply: failure(),
            detail: e,
            context: "Unable to reload configuration",
        },
    }
}
