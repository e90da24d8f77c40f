//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use quiver_lib::engine::Verbosity;

use super::ColorChoice;
use crate::commands::ask::{AskArgs, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::input::{PatternSource, TokenInput};
use crate::commands::matching::MatchArgs;
use crate::commands::templates::TemplatesArgs;
use crate::commands::trace::TraceArgs;

pub struct AskParams {
    pub tokens: TokenInput,
    pub format: OutputFormat,
    pub vocabulary: Option<PathBuf>,
    pub render_config: Option<PathBuf>,
    pub color: ColorChoice,
}

impl AskParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tokens: parse_tokens(m),
            format: match m.get_one::<String>("format").map(String::as_str) {
                Some("dot") => OutputFormat::Dot,
                Some("json") => OutputFormat::Json,
                _ => OutputFormat::Sparql,
            },
            vocabulary: m.get_one::<PathBuf>("vocabulary").cloned(),
            render_config: m.get_one::<PathBuf>("render_config").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<AskParams> for AskArgs {
    fn from(p: AskParams) -> Self {
        Self {
            tokens: p.tokens,
            format: p.format,
            vocabulary: p.vocabulary,
            render_config: p.render_config,
            color: p.color.should_colorize(),
        }
    }
}

pub struct MatchParams {
    pub pattern: PatternSource,
    pub tokens: TokenInput,
    pub prefix: bool,
    pub vocabulary: Option<PathBuf>,
    pub color: ColorChoice,
}

impl MatchParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            tokens: parse_tokens(m),
            prefix: m.get_flag("prefix"),
            vocabulary: m.get_one::<PathBuf>("vocabulary").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<MatchParams> for MatchArgs {
    fn from(p: MatchParams) -> Self {
        Self {
            pattern: p.pattern,
            tokens: p.tokens,
            prefix: p.prefix,
            vocabulary: p.vocabulary,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: PatternSource,
    pub tokens: TokenInput,
    pub prefix: bool,
    pub verbose: u8,
    pub fuel: u32,
    pub vocabulary: Option<PathBuf>,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            tokens: parse_tokens(m),
            prefix: m.get_flag("prefix"),
            verbose: m.get_count("verbose"),
            fuel: m.get_one::<u32>("fuel").copied().unwrap_or(1_000_000),
            vocabulary: m.get_one::<PathBuf>("vocabulary").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };
        Self {
            pattern: p.pattern,
            tokens: p.tokens,
            prefix: p.prefix,
            verbosity,
            fuel: p.fuel,
            vocabulary: p.vocabulary,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub pattern: PatternSource,
    pub vocabulary: Option<PathBuf>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: parse_pattern(m),
            vocabulary: m.get_one::<PathBuf>("vocabulary").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            vocabulary: p.vocabulary,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TemplatesParams {
    pub vocabulary: Option<PathBuf>,
    pub color: ColorChoice,
}

impl TemplatesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            vocabulary: m.get_one::<PathBuf>("vocabulary").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TemplatesParams> for TemplatesArgs {
    fn from(p: TemplatesParams) -> Self {
        Self {
            vocabulary: p.vocabulary,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_tokens(m: &ArgMatches) -> TokenInput {
    TokenInput {
        text: m.get_one::<String>("tokens_text").cloned(),
        path: m.get_one::<PathBuf>("tokens_path").cloned(),
        json: m.get_flag("json"),
    }
}

/// Commands declare a required group over their pattern args, so one is always set.
fn parse_pattern(m: &ArgMatches) -> PatternSource {
    if let Some(name) = try_get::<String>(m, "template") {
        return PatternSource::Template(name);
    }
    if let Some(path) = try_get::<PathBuf>(m, "pattern_path") {
        return PatternSource::Path(path);
    }
    PatternSource::Text(try_get::<String>(m, "pattern_text").unwrap_or_default())
}

/// `get_one` for args that only some commands define.
fn try_get<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> Option<T> {
    m.try_get_one::<T>(id).ok().flatten().cloned()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
