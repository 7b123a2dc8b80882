use relay_common::text::{Component, TextColor};
use relay_common::traits::CommandSource;
use tracing::info;

use crate::commands::{CommandContext, Outcome};
use crate::diagnostics::DumpAggregator;
use crate::l10n;

/// `/relay dump`: collect a snapshot of the proxy and save it next to the
/// process as `<product>-dump-<timestamp>.json`.
pub async fn execute(ctx: &CommandContext, source: &dyn CommandSource, args: &[String]) -> Outcome {
    if !args.is_empty() {
        return Outcome::usage_hint(&ctx.root, "dump");
    }

    let locale = source.locale();
    let snapshot = DumpAggregator::new(ctx.proxy.as_ref()).collect().await;

    match ctx.snapshot_writer.write(&snapshot).await {
        Ok(path) => {
            info!("Wrote proxy dump to {}", path.display());
            source.send_message(
                ctx.localizer
                    .translate(
                        l10n::DUMP_SUCCESS,
                        locale.as_deref(),
                        &[Component::text(path.display().to_string())],
                    )
                    .color(TextColor::GREEN),
            );
            Outcome::Completed
        }
        Err(e) => Outcome::FailedWithDetail {
            reply: ctx
                .localizer
                .translate(l10n::DUMP_FAILURE, locale.as_deref(), &[])
                .color(TextColor::RED),
            detail: e,
            context: "Failed to complete dump command",
        },
    }
}
