use super::{Pattern, PatternError};

#[test]
fn lemmas_builds_a_sequence() {
    assert_eq!(
        Pattern::lemmas("who be"),
        Pattern::Seq(vec![Pattern::lemma("who"), Pattern::lemma("be")])
    );
    assert_eq!(Pattern::lemmas("manager"), Pattern::lemma("manager"));
}

#[test]
fn seq_and_alt_flatten() {
    let pattern = Pattern::lemma("a")
        .then(Pattern::lemma("b"))
        .then(Pattern::lemma("c"));
    assert_eq!(pattern.to_string(), "a b c");

    let pattern = Pattern::lemma("a")
        .or(Pattern::lemma("b"))
        .or(Pattern::lemma("c"));
    assert_eq!(pattern, Pattern::Alt(vec![
        Pattern::lemma("a"),
        Pattern::lemma("b"),
        Pattern::lemma("c"),
    ]));
}

#[test]
fn display_parenthesizes_by_binding() {
    let pattern = Pattern::lemmas("of the").optional();
    assert_eq!(pattern.to_string(), "(of the)?");

    let pattern = Pattern::pos("NN").capture("x").repeat();
    assert_eq!(pattern.to_string(), "(<NN> @x)+");

    let pattern = Pattern::seq([
        Pattern::lemma("who"),
        Pattern::lemma("be").or(Pattern::lemma("manage")),
    ]);
    assert_eq!(pattern.to_string(), "who (be | manage)");
}

#[test]
fn display_quotes_non_identifier_atoms() {
    assert_eq!(Pattern::lemma("?").to_string(), "'?'");
    assert_eq!(Pattern::lemma("Madrid").to_string(), "'Madrid'");
    assert_eq!(Pattern::word("it's \"x\"").to_string(), r#""it's \"x\"""#);
}

#[test]
fn nullable() {
    assert!(!Pattern::lemma("a").is_nullable());
    assert!(Pattern::lemma("a").optional().is_nullable());
    assert!(Pattern::lemma("a").star().is_nullable());
    assert!(!Pattern::lemma("a").repeat().is_nullable());
    assert!(Pattern::seq([]).is_nullable());
    assert!(
        Pattern::seq([Pattern::lemma("a").optional(), Pattern::any().star()]).is_nullable()
    );
    assert!(Pattern::lemma("a").or(Pattern::lemma("b").optional()).is_nullable());
    assert!(!Pattern::reference("Team").is_nullable());
}

#[test]
fn references_in_first_use_order() {
    let pattern = Pattern::parse("Team of League | League Team").unwrap();
    assert_eq!(pattern.references(), vec!["Team", "League"]);
}

#[test]
fn resolve_replaces_refs_with_captures() {
    let team = Pattern::parse("<DT>? <NNP>+ @name").unwrap();
    let pattern = Pattern::parse("who manage Team").unwrap();

    let resolved = pattern
        .resolve(&|name: &str| (name == "Team").then_some(&team))
        .unwrap();
    assert_eq!(
        resolved.to_string(),
        "who manage (<DT>? <NNP>+ @name) @team"
    );
}

#[test]
fn resolve_snake_cases_particle_names() {
    let station = Pattern::pos("NN");
    let pattern = Pattern::reference("CareerStation");
    let resolved = pattern.resolve(&|_: &str| Some(&station)).unwrap();
    assert_eq!(resolved, Pattern::pos("NN").capture("career_station"));
}

#[test]
fn resolve_unknown_reference() {
    let pattern = Pattern::parse("who manage Team").unwrap();
    let err = pattern.resolve(&|_: &str| None).unwrap_err();
    assert!(matches!(err, PatternError::UndefinedReference { ref name } if name == "Team"));
    assert_eq!(err.to_string(), "`Team` is not a registered particle");
}

#[test]
fn from_str() {
    let pattern: Pattern = "who be".parse().unwrap();
    assert_eq!(pattern, Pattern::lemmas("who be"));
}
