use quiver_core::{TaggedToken, parse_tagged};

use super::{FuelLimits, Matcher, RuntimeError, match_tokens};
use crate::pattern::{Pattern, PatternError};

fn tokens(text: &str) -> Vec<TaggedToken> {
    parse_tagged(text).unwrap()
}

fn matcher(text: &str) -> Matcher {
    Matcher::new(&Pattern::parse(text).unwrap()).unwrap()
}

#[test]
fn full_match_consumes_everything() {
    let tokens = tokens("Who/who/WP manages/manage/VBZ Arsenal/Arsenal/NNP");
    let m = matcher("who manage <NNP> @team")
        .match_tokens(&tokens)
        .unwrap()
        .unwrap();
    assert_eq!(m.span, 0..3);
    assert_eq!(m.len(), tokens.len());
    assert_eq!(m.get("team").unwrap().text(), "Arsenal");
}

#[test]
fn leftover_tokens_fail_full_match() {
    let tokens = tokens("Who/who/WP manages/manage/VBZ Arsenal/Arsenal/NNP ?/?/.");
    let m = matcher("who manage <NNP>");
    assert!(m.match_tokens(&tokens).unwrap().is_none());

    let prefix = m.match_prefix(&tokens).unwrap().unwrap();
    assert_eq!(prefix.span, 0..3);
}

#[test]
fn no_match() {
    let tokens = tokens("What/what/WP time/time/NN is/be/VBZ it/it/PRP");
    assert!(matcher("who be _+").match_tokens(&tokens).unwrap().is_none());
}

#[test]
fn alternation_backtracks_into_later_branch() {
    let tokens = tokens("Who/who/WP is/be/VBZ the/the/DT manager/manager/NN");
    let m = matcher("who be <NN> @a | who be <DT> <NN> @b")
        .match_tokens(&tokens)
        .unwrap()
        .unwrap();
    assert!(m.get("a").is_none());
    assert_eq!(m.get("b").unwrap().text(), "manager");
}

#[test]
fn greedy_repeat_gives_back_tokens() {
    let tokens = tokens("Real/Real/NNP Madrid/Madrid/NNP players/player/NNS");
    let m = matcher("(<NN> | <NNP> | <NNS>)+ @team player")
        .match_tokens(&tokens)
        .unwrap()
        .unwrap();
    assert_eq!(m.get("team").unwrap().text(), "Real Madrid");
    assert_eq!(m.get("team").unwrap().span, 0..2);
}

#[test]
fn greedy_star_gives_back_tokens() {
    let question = tokens("who/who/WP manages/manage/VBZ Arsenal/Arsenal/NNP");
    let m = matcher("(_* @rest) (<NNP> @x)")
        .match_tokens(&question)
        .unwrap()
        .unwrap();
    assert_eq!(m.get("rest").unwrap().span, 0..2);
    assert_eq!(m.get("x").unwrap().text(), "Arsenal");

    let single = tokens("Arsenal/Arsenal/NNP");
    let m = matcher("(_* @rest) (<NNP> @x)")
        .match_tokens(&single)
        .unwrap()
        .unwrap();
    assert_eq!(m.get("rest").unwrap().span, 0..0);
    assert_eq!(m.get("x").unwrap().span, 0..1);
}

#[test]
fn optional_is_greedy() {
    let tokens = tokens("the/the/DT club/club/NN");
    let m = matcher("(<DT>? <NN>) @x").match_tokens(&tokens).unwrap().unwrap();
    assert_eq!(m.get("x").unwrap().text(), "the club");

    let m = matcher("(_? @first) _").match_tokens(&tokens).unwrap().unwrap();
    assert_eq!(m.get("first").unwrap().text(), "the");
}

#[test]
fn optional_backtracks_when_needed() {
    let tokens = tokens("club/club/NN");
    let m = matcher("(<NN>? @x) <NN>").match_tokens(&tokens).unwrap().unwrap();
    assert_eq!(m.get("x").unwrap().span, 0..0);
    assert_eq!(m.get("x").unwrap().text(), "");
}

#[test]
fn last_repetition_wins() {
    let tokens = tokens("Barcelona/Barcelona/NNP Madrid/Madrid/NNP Sevilla/Sevilla/NNP");
    let m = matcher("(<NNP> @club)+").match_tokens(&tokens).unwrap().unwrap();
    assert_eq!(m.get("club").unwrap().text(), "Sevilla");
}

#[test]
fn nested_captures() {
    let tokens = tokens("the/the/DT Real/Real/NNP Madrid/Madrid/NNP");
    let m = matcher("(<DT>? (<NNP>+ @name)) @team")
        .match_tokens(&tokens)
        .unwrap()
        .unwrap();
    let team = m.get("team").unwrap();
    assert_eq!(team.text(), "the Real Madrid");
    assert_eq!(team.get("name").unwrap().text(), "Real Madrid");
    assert_eq!(m.get_path(&["team", "name"]).unwrap().span, 1..3);
    assert!(m.get_path(&["name"]).is_none());
    assert!(m.get_path(&[]).is_none());
}

#[test]
fn capture_from_failed_branch_is_discarded() {
    let tokens = tokens("Madrid/Madrid/NNP stadium/stadium/NN");
    let m = matcher("(<NNP> @x <VB>) | (<NNP> @y <NN>)")
        .match_tokens(&tokens)
        .unwrap()
        .unwrap();
    assert_eq!(m.captures.keys().collect::<Vec<_>>(), vec!["y"]);
}

#[test]
fn token_tests() {
    let tokens = tokens("Who/Who/WP");
    assert!(matcher("who").match_tokens(&tokens).unwrap().is_some());
    assert!(matcher("<WP>").match_tokens(&tokens).unwrap().is_some());
    assert!(matcher("<wp>").match_tokens(&tokens).unwrap().is_none());
    assert!(matcher("\"Who\"").match_tokens(&tokens).unwrap().is_some());
    assert!(matcher("\"who\"").match_tokens(&tokens).unwrap().is_none());
    assert!(matcher("_").match_tokens(&tokens).unwrap().is_some());
}

#[test]
fn empty_input() {
    let m = matcher("who?").match_tokens(&[]).unwrap().unwrap();
    assert!(m.is_empty());
    assert!(matcher("who").match_tokens(&[]).unwrap().is_none());
}

#[test]
fn fuel_exhaustion() {
    let text = vec!["a/a/DT"; 60].join(" ");
    let tokens = tokens(&text);
    let m = matcher("_* z").with_limits(FuelLimits::new().exec_fuel(100));
    assert_eq!(
        m.match_tokens(&tokens).unwrap_err(),
        RuntimeError::ExecFuelExhausted(100)
    );
    assert!(matcher("_* z").match_tokens(&tokens).unwrap().is_none());
}

#[test]
fn construction_errors() {
    let err = Matcher::new(&Pattern::parse("who Team").unwrap()).unwrap_err();
    assert!(matches!(err, PatternError::UndefinedReference { .. }));

    let err = Matcher::new(&Pattern::parse("(a?)*").unwrap()).unwrap_err();
    assert!(matches!(err, PatternError::EmptyLoop { .. }));
}

#[test]
fn one_shot_match() {
    let tokens = tokens("Who/who/WP");
    let m = match_tokens(&Pattern::lemma("who"), &tokens).unwrap();
    assert!(m.is_some());
}

#[test]
fn match_serializes_to_json() {
    let tokens = tokens("Madrid/Madrid/NNP");
    let m = matcher("<NNP> @name").match_tokens(&tokens).unwrap().unwrap();
    insta::assert_snapshot!(serde_json::to_string(&m).unwrap(), @r#"{"span":{"start":0,"end":1},"tokens":[{"word":"Madrid","lemma":"Madrid","pos":"NNP"}],"captures":{"name":{"name":"name","span":{"start":0,"end":1},"tokens":[{"word":"Madrid","lemma":"Madrid","pos":"NNP"}]}}}"#);
}
