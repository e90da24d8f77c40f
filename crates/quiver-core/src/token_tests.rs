use crate::{TaggedToken, TokenParseError, parse_tagged, parse_tagged_json};

#[test]
fn parse_text_form() {
    let tokens = parse_tagged("Who/who/WP is/be/VBZ ?/?/.").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0], TaggedToken::new("Who", "who", "WP"));
    assert_eq!(tokens[1].lemma, "be");
    assert_eq!(tokens[2].pos, ".");
}

#[test]
fn parse_splits_from_the_right() {
    let tokens = parse_tagged("AC/DC/ac/dc/NNP").unwrap();

    assert_eq!(tokens[0].word, "AC/DC/ac");
    assert_eq!(tokens[0].lemma, "dc");
    assert_eq!(tokens[0].pos, "NNP");
}

#[test]
fn parse_rejects_short_items() {
    let err = parse_tagged("Who/who").unwrap_err();
    insta::assert_snapshot!(err, @"item 0 `Who/who` is not in word/lemma/TAG form");
}

#[test]
fn parse_rejects_empty_fields() {
    let err = parse_tagged("Who/who/WP is//VBZ").unwrap_err();
    assert!(matches!(
        err,
        TokenParseError::EmptyField {
            index: 1,
            field: "lemma"
        }
    ));
}

#[test]
fn parse_empty_input() {
    assert!(parse_tagged("   ").unwrap().is_empty());
}

#[test]
fn parse_json_form() {
    let tokens =
        parse_tagged_json(r#"[{"word": "Madrid", "lemma": "madrid", "pos": "NNP"}]"#).unwrap();
    assert_eq!(tokens, vec![TaggedToken::new("Madrid", "madrid", "NNP")]);
}

#[test]
fn parse_json_rejects_missing_tag() {
    let err = parse_tagged_json(r#"[{"word": "x", "lemma": "x", "pos": ""}]"#).unwrap_err();
    assert!(matches!(err, TokenParseError::EmptyField { index: 0, .. }));
}

#[test]
fn lemma_comparison_ignores_case() {
    let token = TaggedToken::new("Who", "Who", "WP");
    assert!(token.lemma_is("who"));
    assert!(token.lemma_is("WHO"));
    assert!(!token.pos_is("wp"));
    assert!(!token.word_is("who"));
}

#[test]
fn display_uses_text_form() {
    let token = TaggedToken::new("players", "player", "NNS");
    assert_eq!(token.to_string(), "players/player/NNS");
}
