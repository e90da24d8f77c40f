//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! across commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Tagged question text (positional): `word/lemma/TAG ...`.
pub fn tokens_text_arg() -> Arg {
    Arg::new("tokens_text")
        .value_name("TOKENS")
        .help("Tagged tokens as word/lemma/TAG items (reads stdin when omitted)")
}

/// Tagged question file (-i/--input).
pub fn tokens_path_arg() -> Arg {
    Arg::new("tokens_path")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("tokens_text")
        .help("Read tagged tokens from a file ('-' for stdin)")
}

/// Tokens are a JSON array (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Tokens are a JSON array of {word, lemma, pos} objects")
}

/// Inline pattern text (-p/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .help("Inline pattern text")
}

/// Pattern file (positional, for `check`).
pub fn pattern_path_arg() -> Arg {
    Arg::new("pattern_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("pattern_text")
        .help("Pattern file")
}

/// Pattern file as a flag (-f/--pattern-file), where the positional slot holds tokens.
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_path")
        .short('f')
        .long("pattern-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with_all(["pattern_text", "template"])
        .help("Read the pattern from a file")
}

/// Registered template to use as the pattern (-t/--template).
pub fn template_arg() -> Arg {
    Arg::new("template")
        .short('t')
        .long("template")
        .value_name("NAME")
        .conflicts_with("pattern_text")
        .help("Use the pattern of a registered template")
}

/// Vocabulary JSON replacing the bundled one (--vocabulary).
pub fn vocabulary_arg() -> Arg {
    Arg::new("vocabulary")
        .long("vocabulary")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Vocabulary JSON (default: bundled DBpedia vocabulary)")
}

/// Render settings JSON replacing the bundled ones (--render-config).
pub fn render_config_arg() -> Arg {
    Arg::new("render_config")
        .long("render-config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Render settings JSON (default: bundled DBpedia prefixes)")
}

/// Output format for `ask` (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("sparql")
        .value_parser(["sparql", "dot", "json"])
        .help("Output format")
}

/// Allow leftover tokens after the match (--prefix).
pub fn prefix_arg() -> Arg {
    Arg::new("prefix")
        .long("prefix")
        .action(ArgAction::SetTrue)
        .help("Match a prefix of the tokens instead of the whole sequence")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}

/// Execution fuel limit (--fuel).
pub fn fuel_arg() -> Arg {
    Arg::new("fuel")
        .long("fuel")
        .value_name("N")
        .default_value("1000000")
        .value_parser(value_parser!(u32))
        .help("Execution fuel limit")
}
