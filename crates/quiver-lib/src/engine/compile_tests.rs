use super::compile;
use crate::pattern::{Pattern, PatternError};

fn dump(text: &str) -> String {
    compile(&Pattern::parse(text).unwrap()).unwrap().dump()
}

#[test]
fn optional() {
    insta::assert_snapshot!(dump("who be?"), @r"
    0  lemma who
    1  split 2 | 3
    2  lemma be
    3  accept
    ");
}

#[test]
fn star() {
    insta::assert_snapshot!(dump("_* \"Madrid\""), @r#"
    0  split 1 | 3
    1  any
    2  jump 0
    3  word "Madrid"
    4  accept
    "#);
}

#[test]
fn repeated_alternation_with_capture() {
    insta::assert_snapshot!(dump("(a | b | <NN>)+ @x"), @r"
     0  open @x
     1  split 2 | 4
     2  lemma a
     3  jump 8
     4  split 5 | 7
     5  lemma b
     6  jump 8
     7  pos <NN>
     8  split 1 | 9
     9  close @x
    10  accept
    ");
}

#[test]
fn capture_names_are_interned_once() {
    let program = compile(&Pattern::parse("<NN> @x | <VB> @x").unwrap()).unwrap();
    assert_eq!(program.names().len(), 1);
}

#[test]
fn unresolved_reference() {
    let err = compile(&Pattern::reference("Team")).unwrap_err();
    assert!(matches!(err, PatternError::UndefinedReference { .. }));
}
