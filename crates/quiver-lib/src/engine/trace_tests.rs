use quiver_core::{Colors, parse_tagged};

use super::{MatchMode, Matcher, PrintTracer, Verbosity};
use crate::pattern::Pattern;

fn trace(pattern: &str, input: &str, verbosity: Verbosity) -> String {
    let matcher = Matcher::new(&Pattern::parse(pattern).unwrap()).unwrap();
    let tokens = parse_tagged(input).unwrap();
    let mut tracer = PrintTracer::new(matcher.program(), verbosity, Colors::OFF);
    matcher
        .match_with(&tokens, MatchMode::Full, &mut tracer)
        .unwrap();
    // Leading indentation is stripped so inline snapshots stay aligned.
    tracer
        .finish()
        .lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn default_verbosity() {
    insta::assert_snapshot!(
        trace("who be? <NN>", "Who/who/WP manager/manager/NN", Verbosity::Default),
        @r"
    0 ● lemma who  0 Who
    2 ○ lemma be  1 manager
    ❮❮❮ 3 at 1
    3 ● pos <NN>  1 manager
    ✓ accept at 2
    "
    );
}

#[test]
fn verbose_shows_control_flow_and_effects() {
    insta::assert_snapshot!(
        trace("<NN>+ @x", "club/club/NN", Verbosity::Verbose),
        @r"
    0 ε open @x
    ⬥ open @x at 0
    1 ● pos <NN>  0 club
    2 ε split 1 | 3
    1 ○ pos <NN>  1 ∅
    ❮❮❮ 3 at 1
    3 ε close @x
    ⬥ close @x at 1
    ✓ accept at 1
    "
    );
}

#[test]
fn very_verbose_shows_full_tokens() {
    let out = trace("_", "Madrid/Madrid/NNP", Verbosity::VeryVerbose);
    assert!(out.contains("Madrid/Madrid/NNP"));
}

#[test]
fn leftover_rejection_is_traced() {
    let out = trace("_ _?", "a/a/DT b/b/NN c/c/NN", Verbosity::Default);
    assert!(out.contains("○ accept at 2, 1 left over"));
    assert!(!out.contains("✓"));
}
