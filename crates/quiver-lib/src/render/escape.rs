//! Term checks and escaping shared by the renderers.

use super::error::RenderError;

fn invalid(term: &str, reason: &'static str) -> RenderError {
    RenderError::InvalidTerm {
        term: term.to_owned(),
        reason,
    }
}

/// Check an IRI or prefixed name (`dbo:manager`) before it is written verbatim.
pub fn check_identifier(term: &str) -> Result<&str, RenderError> {
    if term.is_empty() {
        return Err(invalid(term, "empty identifier"));
    }
    if term.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid(term, "identifier contains whitespace or control characters"));
    }
    if term.starts_with(':') || term.ends_with(':') {
        return Err(invalid(term, "identifier starts or ends with `:`"));
    }
    Ok(term)
}

/// Escape a literal value for a double-quoted SPARQL string.
///
/// Line breaks, tabs and vertical tabs are dropped; any other control
/// character is rejected.
pub fn escape_literal(value: &str) -> Result<String, RenderError> {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' | '\r' | '\t' | '\x0b' => {}
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if c.is_control() => {
                return Err(invalid(value, "literal contains control characters"));
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Escape text for a double-quoted DOT label.
pub fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
