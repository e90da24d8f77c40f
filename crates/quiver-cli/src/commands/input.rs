//! Loading tokens, patterns and the registry from CLI inputs.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use quiver_core::{TaggedToken, parse_tagged, parse_tagged_json};
use quiver_lib::Registry;
use quiver_lib::engine::Matcher;
use quiver_lib::expr::Vocabulary;
use quiver_lib::pattern::{Pattern, PatternError};
use quiver_lib::render::RenderConfig;

/// Where the tagged question comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenInput {
    pub text: Option<String>,
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Where the pattern comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSource {
    Text(String),
    Path(PathBuf),
    Template(String),
}

pub fn load_tokens(input: &TokenInput) -> Result<Vec<TaggedToken>, String> {
    let text = match (&input.text, &input.path) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) if path.as_os_str() != "-" => read_file(path)?,
        _ => read_stdin()?,
    };

    let tokens = if input.json {
        parse_tagged_json(&text)
    } else {
        parse_tagged(&text)
    }
    .map_err(|e| format!("invalid tokens: {}", e))?;

    if tokens.is_empty() {
        return Err("no tokens given".to_owned());
    }
    Ok(tokens)
}

/// The bundled DBpedia registry, or one over a vocabulary file.
pub fn load_registry(vocabulary: Option<&Path>) -> Result<Registry, String> {
    let registry = match vocabulary {
        Some(path) => {
            let json = read_file(path)?;
            let vocabulary = Vocabulary::from_json(&json)
                .map_err(|e| format!("invalid vocabulary '{}': {}", path.display(), e))?;
            quiver_dbpedia::registry_with(vocabulary)
        }
        None => quiver_dbpedia::registry(),
    };
    registry.map_err(|e| format!("failed to build registry: {}", e))
}

pub fn load_render_config(path: Option<&Path>) -> Result<RenderConfig, String> {
    match path {
        Some(path) => RenderConfig::from_json(&read_file(path)?)
            .map_err(|e| format!("invalid render config '{}': {}", path.display(), e)),
        None => quiver_dbpedia::render_config()
            .map_err(|e| format!("invalid bundled render config: {}", e)),
    }
}

/// Pattern source text and a display name for diagnostics.
pub fn load_pattern_text(source: &PatternSource) -> Result<(String, String), String> {
    match source {
        PatternSource::Text(text) => Ok((text.clone(), "<pattern>".to_owned())),
        PatternSource::Path(path) => Ok((read_file(path)?, path.display().to_string())),
        PatternSource::Template(name) => Err(format!("`{}` is a template, not pattern text", name)),
    }
}

/// Why a pattern could not be turned into a matcher.
pub enum PatternFailure {
    /// Syntax errors, rendered against the source.
    Diagnostics(String),
    Message(String),
}

/// Build a matcher for `source`, resolving particle references against `registry`.
pub fn load_matcher(
    source: &PatternSource,
    registry: &Registry,
    color: bool,
) -> Result<Matcher, PatternFailure> {
    if let PatternSource::Template(name) = source {
        return registry
            .matcher(name)
            .cloned()
            .ok_or_else(|| PatternFailure::Message(format!("unknown template `{}`", name)));
    }

    let (text, path) = load_pattern_text(source).map_err(PatternFailure::Message)?;
    let pattern = parse_pattern(&text, &path, color)?;
    registry
        .resolve(&pattern)
        .and_then(|resolved| Matcher::new(&resolved))
        .map_err(|e| PatternFailure::Message(e.to_string()))
}

/// Parse pattern text; syntax errors come back rendered.
pub fn parse_pattern(text: &str, path: &str, color: bool) -> Result<Pattern, PatternFailure> {
    Pattern::parse(text).map_err(|e| match &e {
        PatternError::Syntax { diagnostics, .. } => PatternFailure::Diagnostics(
            diagnostics
                .printer(text)
                .path(path)
                .colored(color)
                .render(),
        ),
        _ => PatternFailure::Message(e.to_string()),
    })
}

/// Print a pattern failure and exit with status 1.
pub fn exit_pattern_failure(failure: PatternFailure) -> ! {
    match failure {
        PatternFailure::Diagnostics(rendered) => eprintln!("{}", rendered.trim_end()),
        PatternFailure::Message(msg) => eprintln!("error: {}", msg),
    }
    std::process::exit(1);
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}
