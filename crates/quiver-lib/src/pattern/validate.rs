//! Structural checks run once when a pattern is registered.

use std::collections::BTreeSet;

use quiver_core::utils::is_capture_name;

use super::{Pattern, PatternError};

/// Check that a pattern can be compiled:
///
/// - capture names are well formed and unique along every match path
///   (the same name in different alternation branches is fine)
/// - no repetition body can match the empty sequence
/// - no alternation is empty
///
/// Particle references are not checked here; see [`Pattern::resolve`].
pub fn validate(pattern: &Pattern) -> Result<(), PatternError> {
    capture_names(pattern).map(|_| ())
}

/// Every capture name that can be bound by `pattern`.
fn capture_names(pattern: &Pattern) -> Result<BTreeSet<&str>, PatternError> {
    match pattern {
        Pattern::Lemma(_) | Pattern::Pos(_) | Pattern::Word(_) | Pattern::Any | Pattern::Ref(_) => {
            Ok(BTreeSet::new())
        }
        Pattern::Seq(items) => {
            let mut names = BTreeSet::new();
            for item in items {
                for name in capture_names(item)? {
                    if !names.insert(name) {
                        return Err(duplicate(name));
                    }
                }
            }
            Ok(names)
        }
        Pattern::Alt(branches) => {
            if branches.is_empty() {
                return Err(PatternError::EmptyAlternation);
            }
            let mut names = BTreeSet::new();
            for branch in branches {
                names.extend(capture_names(branch)?);
            }
            Ok(names)
        }
        Pattern::Optional(inner) => capture_names(inner),
        Pattern::Repeat(inner) | Pattern::Star(inner) => {
            if inner.is_nullable() {
                return Err(PatternError::EmptyLoop {
                    pattern: pattern.to_string(),
                });
            }
            capture_names(inner)
        }
        Pattern::Capture { name, inner } => {
            if !is_capture_name(name) {
                return Err(PatternError::InvalidCaptureName { name: name.clone() });
            }
            let mut names = capture_names(inner)?;
            if !names.insert(name.as_str()) {
                return Err(duplicate(name));
            }
            Ok(names)
        }
    }
}

fn duplicate(name: &str) -> PatternError {
    PatternError::DuplicateCapture {
        name: name.to_owned(),
    }
}
