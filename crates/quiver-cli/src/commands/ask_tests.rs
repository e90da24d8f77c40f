use std::path::PathBuf;

use super::ask::{AskArgs, AskFailure, OutputFormat, answer};
use super::input::TokenInput;

fn args(tokens: &str) -> AskArgs {
    AskArgs {
        tokens: TokenInput {
            text: Some(tokens.to_owned()),
            ..TokenInput::default()
        },
        format: OutputFormat::Sparql,
        vocabulary: None,
        render_config: None,
        color: false,
    }
}

#[test]
fn answers_with_bundled_registry() {
    let answer = answer(&args("who/who/WP manages/manage/VBZ Arsenal/arsenal/NNP")).unwrap();
    assert_eq!(answer.template, "manager");
    assert!(answer.query.text.contains("\"Arsenal\"@en"));
}

#[test]
fn unanswerable_question_exits_one() {
    let failure = answer(&args("what/what/WP time/time/NN is/be/VBZ it/it/PRP")).unwrap_err();
    assert_eq!(failure, AskFailure::NoAnswer);
    assert_eq!(failure.exit_code(), 1);
}

#[test]
fn bad_inputs_exit_two() {
    let failure = answer(&args("who/WP")).unwrap_err();
    assert!(matches!(failure, AskFailure::Error(_)));
    assert_eq!(failure.exit_code(), 2);

    let mut missing_config = args("who/who/WP manages/manage/VBZ Arsenal/arsenal/NNP");
    missing_config.render_config = Some(PathBuf::from("/nonexistent/render.json"));
    assert_eq!(answer(&missing_config).unwrap_err().exit_code(), 2);

    let mut missing_vocabulary = args("who/who/WP manages/manage/VBZ Arsenal/arsenal/NNP");
    missing_vocabulary.vocabulary = Some(PathBuf::from("/nonexistent/vocabulary.json"));
    assert_eq!(answer(&missing_vocabulary).unwrap_err().exit_code(), 2);
}
