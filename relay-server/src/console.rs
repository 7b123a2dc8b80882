// File: relay-server/src/console.rs
//
// Interactive server console. Lines are run as the console identity, which
// holds every permission.

use std::borrow::Cow;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Editor};
use rustyline_derive::Helper;
use tokio::runtime::Handle;
use tracing::{debug, info};

use relay_common::models::Tristate;
use relay_common::text::{Component, TextColor};
use relay_common::traits::CommandSource;
use relay_core::{CommandRouter, Invocation};

/// The operator at the terminal.
pub struct ConsoleSource;

impl CommandSource for ConsoleSource {
    fn permission_value(&self, _node: &str) -> Tristate {
        Tristate::True
    }

    fn send_message(&self, message: Component) {
        println!("{}", render_ansi(&message));
    }
}

#[derive(Clone, Copy, Default)]
struct Style {
    color: Option<TextColor>,
    bold: bool,
    underlined: bool,
}

/// Renders a component with ANSI styling. Hover text is not shown on a terminal.
pub fn render_ansi(component: &Component) -> String {
    let mut out = String::new();
    write_ansi(component, Style::default(), &mut out);
    out
}

fn write_ansi(component: &Component, parent: Style, out: &mut String) {
    let style = Style {
        color: component.color.or(parent.color),
        bold: component.bold.unwrap_or(parent.bold),
        underlined: component.underlined.unwrap_or(parent.underlined),
    };

    if !component.content.is_empty() {
        let mut piece = component.content.as_str().normal();
        if let Some(color) = style.color {
            let (r, g, b) = color.rgb();
            piece = piece.truecolor(r, g, b);
        }
        if style.bold {
            piece = piece.bold();
        }
        if style.underlined {
            piece = piece.underline();
        }
        out.push_str(&piece.to_string());
    }
    for child in &component.children {
        write_ansi(child, style, out);
    }
}

/// Runs one console line such as `relay dump` or `/relay version`.
/// Returns `false` if the line was not addressed to the root command.
pub async fn run_line(router: &CommandRouter, source: &dyn CommandSource, line: &str) -> bool {
    let body = line.trim().trim_start_matches('/');
    let (head, rest) = body
        .split_once(char::is_whitespace)
        .unwrap_or((body, ""));

    if !head.eq_ignore_ascii_case(router.root()) {
        source.send_message(
            Component::text(format!("Unknown command. Try /{}", router.root())).color(TextColor::RED),
        );
        return false;
    }
    router.execute(&Invocation::parse(source, rest)).await;
    true
}

#[derive(Helper)]
pub struct RelayHelper {
    router: Arc<CommandRouter>,
    highlighter: MatchingBracketHighlighter,
    hinter: HistoryHinter,
}

impl RelayHelper {
    pub fn new(router: Arc<CommandRouter>) -> Self {
        Self {
            router,
            highlighter: MatchingBracketHighlighter::new(),
            hinter: HistoryHinter::new(),
        }
    }

    /// Candidates for the word under the cursor and where that word starts.
    pub fn candidates(&self, before_cursor: &str) -> (usize, Vec<String>) {
        let current = before_cursor
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("");
        let mut start = before_cursor.len() - current.len();

        let body = before_cursor.trim_start().trim_start_matches('/');
        let root = self.router.root();
        let words = match body.split_once(char::is_whitespace) {
            None => {
                if current.starts_with('/') {
                    start += 1;
                }
                if root.starts_with(&body.to_lowercase()) {
                    vec![root.to_string()]
                } else {
                    Vec::new()
                }
            }
            Some((head, rest)) if head.eq_ignore_ascii_case(root) => self
                .router
                .suggest(&Invocation::for_completion(&ConsoleSource, rest)),
            Some(_) => Vec::new(),
        };
        (start, words)
    }
}

impl Completer for RelayHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|w| Pair { display: w.clone(), replacement: w })
            .collect();
        Ok((start, pairs))
    }
}

impl Validator for RelayHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Hinter for RelayHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for RelayHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{}\x1b[0m", hint))
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}

pub struct ConsoleModule {
    router: Arc<CommandRouter>,
    shutdown_flag: Arc<AtomicBool>,
}

impl ConsoleModule {
    pub fn new(router: Arc<CommandRouter>) -> Self {
        Self {
            router,
            shutdown_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Reads lines until `exit`/`shutdown`, EOF or Ctrl-C. Input is read on
    /// the blocking pool; each command is driven back on the runtime.
    pub async fn run(&self) -> anyhow::Result<()> {
        let router = self.router.clone();
        let shutdown_flag = self.shutdown_flag.clone();
        let handle = Handle::current();

        tokio::task::spawn_blocking(move || read_loop(router, shutdown_flag, handle)).await?
    }

    pub fn stop(&self) {
        self.shutdown_flag.store(true, Ordering::SeqCst);
    }
}

fn read_loop(
    router: Arc<CommandRouter>,
    shutdown_flag: Arc<AtomicBool>,
    handle: Handle,
) -> anyhow::Result<()> {
    let mut editor: Editor<RelayHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(RelayHelper::new(router.clone())));
    info!("Console ready. Type '/{} ' and press Tab for commands.", router.root());

    while !shutdown_flag.load(Ordering::SeqCst) {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                if matches!(line, "exit" | "end" | "shutdown") {
                    shutdown_flag.store(true, Ordering::SeqCst);
                    break;
                }
                handle.block_on(run_line(&router, &ConsoleSource, line));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("Console input closed");
                shutdown_flag.store(true, Ordering::SeqCst);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_core::diagnostics::SnapshotWriter;
    use relay_core::test_utils::RecordingSource;
    use relay_core::{CommandContext, MessageBundle, SubcommandRegistry};

    use crate::proxy::FileProxy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn router() -> (Arc<CommandRouter>, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "servers": [{ "name": "lobby", "address": "127.0.0.1:1" }] }"#)
            .unwrap();
        let proxy = FileProxy::load(file.path()).unwrap();
        let ctx = CommandContext {
            root: "relay".to_string(),
            proxy: Arc::new(proxy),
            localizer: Arc::new(MessageBundle::english()),
            snapshot_writer: SnapshotWriter::new("relay"),
        };
        (Arc::new(CommandRouter::new(SubcommandRegistry::standard(), ctx)), file)
    }

    #[test]
    fn completes_root_then_subcommands() {
        let (router, _file) = router();
        let helper = RelayHelper::new(router);

        assert_eq!(helper.candidates("re"), (0, vec!["relay".to_string()]));
        assert_eq!(helper.candidates("/re"), (1, vec!["relay".to_string()]));
        assert_eq!(helper.candidates("relay pl"), (6, vec!["plugins".to_string()]));
        assert_eq!(helper.candidates("relay ").1.len(), 4);
        assert!(helper.candidates("relay plugins ").1.is_empty());
        assert!(helper.candidates("other x").1.is_empty());
    }

    #[tokio::test]
    async fn run_line_requires_root() {
        let (router, _file) = router();
        let source = RecordingSource::allow_all();

        assert!(!run_line(&router, &source, "version").await);
        assert!(run_line(&router, &source, "/RELAY plugins").await);

        let shown = source.plain_messages();
        assert_eq!(shown[0], "Unknown command. Try /relay");
        assert_eq!(shown[1], "There are no plugins currently installed.");
    }

    #[test]
    fn ansi_rendering_inherits_style() {
        colored::control::set_override(false);
        let c = Component::text("a").color(TextColor::RED).append(Component::text("b"));
        assert_eq!(render_ansi(&c), "ab");
    }
}
