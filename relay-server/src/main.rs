use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use relay_core::diagnostics::SnapshotWriter;
use relay_core::{CommandContext, CommandRouter, MessageBundle, SubcommandRegistry};

mod config;
mod console;
mod proxy;

use console::{ConsoleModule, ConsoleSource};
use proxy::FileProxy;

const ROOT_COMMAND: &str = "relay";

#[derive(Parser, Debug, Clone)]
#[command(name = "relay")]
#[command(author, version, about = "Relay - admin console for the Relay proxy")]
struct Args {
    /// Proxy configuration file (JSON)
    #[arg(long, default_value = "relay.json")]
    config: PathBuf,

    /// Optional JSON file overriding the built-in English messages
    #[arg(long)]
    messages: Option<PathBuf>,

    /// Directory diagnostic dumps are written to
    #[arg(long, default_value = ".")]
    dump_dir: PathBuf,

    /// Run a single command line (e.g. "relay dump") and exit
    #[arg(long, short = 'c')]
    command: Option<String>,

    /// Do not read commands from the terminal; wait for Ctrl-C instead
    #[arg(long, default_value = "false")]
    no_console: bool,
}

fn init_tracing() {
    let filter = EnvFilter::from_default_env()
        .add_directive("relay=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(sub) {
        eprintln!("Failed to set global subscriber: {}", e);
    }
}

fn load_messages(path: Option<&PathBuf>) -> MessageBundle {
    let mut bundle = MessageBundle::english();
    if let Some(path) = path {
        match bundle.load_overrides(path) {
            Ok(count) => info!("Loaded {} message overrides from {}", count, path.display()),
            Err(e) => warn!("Ignoring message file {}: {:?}", path.display(), e),
        }
    }
    bundle
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let args = Args::parse();
    info!(
        "Relay starting. config={}, dump_dir={}",
        args.config.display(),
        args.dump_dir.display()
    );

    let proxy = FileProxy::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let ctx = CommandContext {
        root: ROOT_COMMAND.to_string(),
        proxy: Arc::new(proxy),
        localizer: Arc::new(load_messages(args.messages.as_ref())),
        snapshot_writer: SnapshotWriter::new(ROOT_COMMAND).with_directory(args.dump_dir.clone()),
    };
    let router = Arc::new(CommandRouter::new(SubcommandRegistry::standard(), ctx));
    info!(
        "Registered {} /{} sub-commands: {}",
        router.registry().len(),
        ROOT_COMMAND,
        router.registry().names().collect::<Vec<_>>().join(", ")
    );

    if let Some(line) = args.command.as_deref() {
        console::run_line(&router, &ConsoleSource, line).await;
    } else if args.no_console {
        info!("Console disabled; press Ctrl-C to stop.");
        tokio::signal::ctrl_c().await?;
    } else {
        let console = ConsoleModule::new(router.clone());
        if let Err(e) = console.run().await {
            error!("Console error: {:?}", e);
        }
        console.stop();
    }

    info!("Relay finished. Goodbye!");
    Ok(())
}
