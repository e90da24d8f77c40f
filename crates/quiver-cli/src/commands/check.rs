use std::path::PathBuf;

use quiver_lib::pattern::validate;

use super::input::{
    PatternFailure, PatternSource, exit_pattern_failure, load_pattern_text, load_registry,
    parse_pattern,
};

pub struct CheckArgs {
    pub pattern: PatternSource,
    pub vocabulary: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (text, path) = load_pattern_text(&args.pattern).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    if text.trim().is_empty() {
        eprintln!("error: pattern cannot be empty");
        std::process::exit(1);
    }

    let pattern =
        parse_pattern(&text, &path, args.color).unwrap_or_else(|failure| exit_pattern_failure(failure));

    // Particle references only resolve against a registry.
    let pattern = if pattern.references().is_empty() {
        pattern
    } else {
        let registry = load_registry(args.vocabulary.as_deref()).unwrap_or_else(|msg| {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        });
        registry
            .resolve(&pattern)
            .unwrap_or_else(|e| exit_pattern_failure(PatternFailure::Message(e.to_string())))
    };

    if let Err(e) = validate(&pattern) {
        exit_pattern_failure(PatternFailure::Message(e.to_string()));
    }

    // Silent on success (like cargo check)
}
