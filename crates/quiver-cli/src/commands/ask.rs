//! Translate a tagged question into a query.

use std::path::PathBuf;

use quiver_core::Colors;
use quiver_lib::{Answer, Pipeline};
use tracing::debug;

use super::input::{TokenInput, load_registry, load_render_config, load_tokens};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Sparql,
    Dot,
    /// Template, shape and query as one JSON object.
    Json,
}

pub struct AskArgs {
    pub tokens: TokenInput,
    pub format: OutputFormat,
    pub vocabulary: Option<PathBuf>,
    pub render_config: Option<PathBuf>,
    pub color: bool,
}

/// Why `ask` produced no query.
#[derive(Debug, PartialEq, Eq)]
pub enum AskFailure {
    /// No template matched the question.
    NoAnswer,
    /// Bad input, bad configuration, or a template that failed.
    Error(String),
}

impl AskFailure {
    /// 1 for an unanswerable question, 2 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AskFailure::NoAnswer => 1,
            AskFailure::Error(_) => 2,
        }
    }
}

/// Load inputs and interpret the question.
pub fn answer(args: &AskArgs) -> Result<Answer, AskFailure> {
    let tokens = load_tokens(&args.tokens).map_err(AskFailure::Error)?;
    let registry = load_registry(args.vocabulary.as_deref()).map_err(AskFailure::Error)?;
    let render = load_render_config(args.render_config.as_deref()).map_err(AskFailure::Error)?;
    let pipeline = Pipeline::new(registry, render);
    debug!(tokens = tokens.len(), "asking");

    match pipeline.ask(&tokens) {
        Ok(Some(answer)) => Ok(answer),
        Ok(None) => Err(AskFailure::NoAnswer),
        Err(e) => Err(AskFailure::Error(e.to_string())),
    }
}

pub fn run(args: AskArgs) {
    let answer = match answer(&args) {
        Ok(answer) => answer,
        Err(failure) => {
            match &failure {
                AskFailure::NoAnswer => eprintln!("cannot answer"),
                AskFailure::Error(msg) => eprintln!("error: {}", msg),
            }
            std::process::exit(failure.exit_code());
        }
    };

    if args.format == OutputFormat::Json {
        match serde_json::to_string_pretty(&answer) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        }
        return;
    }

    let colors = Colors::new(args.color);
    // Header lines are comments in both output languages.
    let comment = if args.format == OutputFormat::Dot { "//" } else { "#" };
    println!(
        "{}{} template: {}, select: {}, shape: {}{}",
        colors.dim, comment, answer.template, answer.query.select, answer.shape, colors.reset
    );

    match args.format {
        OutputFormat::Sparql | OutputFormat::Json => print!("{}", answer.query.text),
        OutputFormat::Dot => match answer.dot() {
            Ok(dot) => print!("{}", dot),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
    }
}
