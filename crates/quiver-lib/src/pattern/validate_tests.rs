use super::{Pattern, PatternError, validate};

fn check(text: &str) -> Result<(), PatternError> {
    validate(&Pattern::parse(text).unwrap())
}

#[test]
fn valid_patterns() {
    assert!(check("who be <DT>? manager of (<NN> | <NNP>)+ @team").is_ok());
    assert!(check("(<NN> @a)+ <VB> @b").is_ok());
}

#[test]
fn same_name_in_exclusive_branches() {
    assert!(check("who be <NNP> @team | <NNP> @team manager").is_ok());
}

#[test]
fn duplicate_in_sequence() {
    let err = check("<NNP> @team be <NNP> @team").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"capture `@team` appears twice on one match path");
}

#[test]
fn duplicate_nested() {
    let err = check("(<DT> <NN> @name) @name").unwrap_err();
    assert!(matches!(err, PatternError::DuplicateCapture { ref name } if name == "name"));
}

#[test]
fn duplicate_through_alternation_in_sequence() {
    let err = check("(<NN> @x | <VB>) <JJ> @x").unwrap_err();
    assert!(matches!(err, PatternError::DuplicateCapture { .. }));
}

#[test]
fn empty_loop() {
    let err = check("who (<DT>?)+").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"repetition body can match an empty sequence: `<DT>?+`");

    let err = check("(a* b?)*").unwrap_err();
    assert!(matches!(err, PatternError::EmptyLoop { .. }));
}

#[test]
fn invalid_capture_name_from_constructor() {
    let err = validate(&Pattern::pos("NN").capture("Team")).unwrap_err();
    assert!(matches!(err, PatternError::InvalidCaptureName { .. }));
}

#[test]
fn empty_alternation() {
    let err = validate(&Pattern::Alt(Vec::new())).unwrap_err();
    assert!(matches!(err, PatternError::EmptyAlternation));
}
