//! Match a pattern against tokens and print the captures.

use std::path::PathBuf;

use quiver_lib::engine::{MatchMode, NoopTracer};

use super::input::{
    PatternSource, TokenInput, exit_pattern_failure, load_matcher, load_registry, load_tokens,
};

pub struct MatchArgs {
    pub pattern: PatternSource,
    pub tokens: TokenInput,
    pub prefix: bool,
    pub vocabulary: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    let registry = load_registry(args.vocabulary.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });
    let matcher = load_matcher(&args.pattern, &registry, args.color)
        .unwrap_or_else(|failure| exit_pattern_failure(failure));
    let tokens = load_tokens(&args.tokens).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let mode = if args.prefix {
        MatchMode::Prefix
    } else {
        MatchMode::Full
    };

    match matcher.match_with(&tokens, mode, &mut NoopTracer) {
        Ok(Some(found)) => match serde_json::to_string_pretty(&found) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(2);
            }
        },
        Ok(None) => {
            eprintln!("no match");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    }
}
