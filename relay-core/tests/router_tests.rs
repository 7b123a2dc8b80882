// File: relay-core/tests/router_tests.rs

mod helpers;

use helpers::{args, english, router_with, MockProxy};
use relay_common::models::Tristate;
use relay_common::text::TextColor;
use relay_core::test_utils::RecordingSource;
use relay_core::{l10n, Invocation, Outcome};

#[tokio::test]
async fn test_usage_lists_only_permitted_names_in_order() {
    let router = router_with(MockProxy::new());

    let cases = [
        (RecordingSource::new(), "/relay <version>"),
        (RecordingSource::allow_all(), "/relay <version|plugins|reload|dump>"),
        (
            RecordingSource::new().with_permission("relay.command.plugins", Tristate::True),
            "/relay <version|plugins|dump>",
        ),
        (
            RecordingSource::new()
                .with_permission("relay.command.info", Tristate::False)
                .with_permission("relay.command.reload", Tristate::True),
            "/relay <reload>",
        ),
        (
            RecordingSource::new().with_permission("relay.command.info", Tristate::False),
            "/relay <>",
        ),
    ];

    for (source, expected) in cases {
        let outcome = router.execute(&Invocation::new(&source, vec![])).await;
        assert!(matches!(outcome, Outcome::Failed { .. }));
        let messages = source.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].plain_text(), expected);
        assert_eq!(messages[0].color, Some(TextColor::RED));
    }
}

#[tokio::test]
async fn test_unknown_subcommand_matches_empty_invocation() {
    let router = router_with(MockProxy::new());

    let empty = RecordingSource::allow_all();
    router.execute(&Invocation::new(&empty, vec![])).await;

    let bogus = RecordingSource::allow_all();
    router.execute(&Invocation::new(&bogus, args(&["bogus"]))).await;

    assert_eq!(empty.messages(), bogus.messages());
}

#[tokio::test]
async fn test_lookup_is_case_insensitive() {
    let mut proxy = MockProxy::new();
    proxy
        .expect_reload_configuration()
        .times(3)
        .returning(|| Ok(true));
    let router = router_with(proxy);

    for spelling in ["RELOAD", "Reload", "reload"] {
        let source = RecordingSource::allow_all();
        let outcome = router.execute(&Invocation::new(&source, args(&[spelling]))).await;
        assert!(outcome.is_completed(), "{spelling} did not resolve");
        assert_eq!(source.plain_messages(), vec![english(l10n::RELOAD_SUCCESS)]);
    }
}

#[tokio::test]
async fn test_forbidden_subcommand_runs_nothing() {
    // No expectations: any collaborator call would panic.
    let router = router_with(MockProxy::new());
    let source = RecordingSource::new();

    let outcome = router.execute(&Invocation::new(&source, args(&["reload"]))).await;

    assert!(matches!(outcome, Outcome::Failed { .. }));
    assert_eq!(source.plain_messages(), vec!["/relay <version>".to_string()]);
}

#[test]
fn test_suggest_without_tokens_returns_permitted_names() {
    let router = router_with(MockProxy::new());

    let all = RecordingSource::allow_all();
    assert_eq!(
        router.suggest(&Invocation::new(&all, vec![])),
        vec!["version", "plugins", "reload", "dump"]
    );

    let reload_only = RecordingSource::new()
        .with_permission("relay.command.info", Tristate::False)
        .with_permission("relay.command.reload", Tristate::True);
    assert_eq!(router.suggest(&Invocation::new(&reload_only, vec![])), vec!["reload"]);
}

#[test]
fn test_suggest_filters_by_prefix() {
    let router = router_with(MockProxy::new());
    let source = RecordingSource::allow_all();

    assert_eq!(router.suggest(&Invocation::new(&source, args(&["pl"]))), vec!["plugins"]);
    assert_eq!(router.suggest(&Invocation::new(&source, args(&["PL"]))), vec!["plugins"]);
    assert_eq!(router.suggest(&Invocation::new(&source, args(&["d"]))), vec!["dump"]);
    assert!(router.suggest(&Invocation::new(&source, args(&["x"]))).is_empty());

    // An empty token is a prefix of everything.
    assert_eq!(
        router.suggest(&Invocation::new(&source, args(&[""]))),
        vec!["version", "plugins", "reload", "dump"]
    );

    let no_plugins = RecordingSource::new();
    assert!(router.suggest(&Invocation::new(&no_plugins, args(&["pl"]))).is_empty());
}

#[test]
fn test_suggest_beyond_first_token() {
    let router = router_with(MockProxy::new());
    let source = RecordingSource::allow_all();

    assert!(router.suggest(&Invocation::new(&source, args(&["plugins", ""]))).is_empty());
    assert!(router.suggest(&Invocation::new(&source, args(&["bogus", "x"]))).is_empty());

    let typed = Invocation::for_completion(&source, "plugins ");
    assert_eq!(typed.arguments, args(&["plugins", ""]));
    assert!(router.suggest(&typed).is_empty());

    let partial = Invocation::for_completion(&source, "pl");
    assert_eq!(router.suggest(&partial), vec!["plugins"]);

    let blank = Invocation::for_completion(&source, "   ");
    assert!(blank.arguments.is_empty());
}

#[test]
fn test_has_permission() {
    let router = router_with(MockProxy::new());

    let nobody = RecordingSource::new().with_permission("relay.command.info", Tristate::False);
    assert!(!router.has_permission(&Invocation::new(&nobody, vec![])));
    assert!(router.has_permission(&Invocation::new(&nobody, args(&["bogus"]))));
    assert!(!router.has_permission(&Invocation::new(&nobody, args(&["Reload"]))));

    let default = RecordingSource::new();
    assert!(router.has_permission(&Invocation::new(&default, vec![])));
    assert!(router.has_permission(&Invocation::new(&default, args(&["version"]))));
    assert!(!router.has_permission(&Invocation::new(&default, args(&["dump"]))));

    let plugins = RecordingSource::new().with_permission("relay.command.plugins", Tristate::True);
    assert!(router.has_permission(&Invocation::new(&plugins, args(&["dump"]))));
}

#[test]
fn test_parse_splits_on_whitespace() {
    let source = RecordingSource::new();
    let invocation = Invocation::parse(&source, "  dump \t extra  ");
    assert_eq!(invocation.arguments, args(&["dump", "extra"]));
}
