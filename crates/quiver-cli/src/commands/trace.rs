//! Trace matcher execution for debugging.

use std::path::PathBuf;

use quiver_core::Colors;
use quiver_lib::engine::{FuelLimits, MatchMode, PrintTracer, Verbosity};

use super::input::{
    PatternSource, TokenInput, exit_pattern_failure, load_matcher, load_registry, load_tokens,
};

pub struct TraceArgs {
    pub pattern: PatternSource,
    pub tokens: TokenInput,
    pub prefix: bool,
    pub verbosity: Verbosity,
    pub fuel: u32,
    pub vocabulary: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let registry = load_registry(args.vocabulary.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });
    let matcher = load_matcher(&args.pattern, &registry, args.color)
        .unwrap_or_else(|failure| exit_pattern_failure(failure))
        .with_limits(FuelLimits::new().exec_fuel(args.fuel));
    let tokens = load_tokens(&args.tokens).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let mode = if args.prefix {
        MatchMode::Prefix
    } else {
        MatchMode::Full
    };
    let colors = Colors::new(args.color);
    let mut tracer = PrintTracer::new(matcher.program(), args.verbosity, colors);

    let found = match matcher.match_with(&tokens, mode, &mut tracer) {
        Ok(Some(found)) => {
            tracer.print();
            found
        }
        Ok(None) => {
            tracer.print();
            std::process::exit(1);
        }
        Err(e) => {
            tracer.print();
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    };

    println!("{}---{}", colors.dim, colors.reset);
    match serde_json::to_string_pretty(&found) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}
