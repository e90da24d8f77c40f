use super::{RenderError, check_identifier, escape_literal};

#[test]
fn identifiers() {
    assert_eq!(check_identifier("dbo:manager").unwrap(), "dbo:manager");
    assert_eq!(check_identifier("<http://dbpedia.org/resource/Madrid>").unwrap(), "<http://dbpedia.org/resource/Madrid>");
    assert!(check_identifier("dbo:\u{1}x").is_err());
    assert!(check_identifier("dbo:a\tb").is_err());
}

#[test]
fn literal_strips_line_breaks() {
    assert_eq!(escape_literal("Real\r\nMadrid\u{b}").unwrap(), "RealMadrid");
}

#[test]
fn literal_escapes_quotes_and_backslashes() {
    assert_eq!(escape_literal(r#"a "b" \c"#).unwrap(), r#"a \"b\" \\c"#);
}

#[test]
fn literal_rejects_other_control_characters() {
    let err = escape_literal("nul\u{0}").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @r#"cannot render term "nul\0": literal contains control characters"#);
    assert!(matches!(err, RenderError::InvalidTerm { .. }));
}
