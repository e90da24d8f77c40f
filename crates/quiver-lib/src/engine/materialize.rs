//! Turn the effect log of an accepted run into a [`Match`].

use std::ops::Range;

use indexmap::IndexMap;
use quiver_core::TaggedToken;
use serde::Serialize;

use super::effect::RuntimeEffect;
use super::program::Program;

/// A successful match: the consumed span and the captures bound on the accepted path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match<'t> {
    pub span: Range<usize>,
    pub tokens: &'t [TaggedToken],
    /// Top-level captures in the order they were first opened.
    pub captures: IndexMap<String, Capture<'t>>,
}

/// One named sub-match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Capture<'t> {
    pub name: String,
    pub span: Range<usize>,
    pub tokens: &'t [TaggedToken],
    /// Captures bound inside this one.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub nested: IndexMap<String, Capture<'t>>,
}

impl<'t> Match<'t> {
    pub fn get(&self, name: &str) -> Option<&Capture<'t>> {
        self.captures.get(name)
    }

    /// Follow a path of nested capture names: `["team", "name"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&Capture<'t>> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.captures.get(*first)?, |capture, name| capture.nested.get(*name))
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl<'t> Capture<'t> {
    /// Surface words joined with single spaces.
    pub fn text(&self) -> String {
        join_words(self.tokens)
    }

    pub fn get(&self, name: &str) -> Option<&Capture<'t>> {
        self.nested.get(name)
    }
}

pub(crate) fn join_words(tokens: &[TaggedToken]) -> String {
    tokens
        .iter()
        .map(|t| t.word.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

struct Frame<'t> {
    name: String,
    start: usize,
    children: IndexMap<String, Capture<'t>>,
}

/// Build the capture tree. Effects on an accepted path are well nested; a
/// capture closed more than once (inside a repetition) keeps its last binding.
pub(crate) fn materialize<'t>(
    program: &Program,
    tokens: &'t [TaggedToken],
    end: usize,
    effects: &[RuntimeEffect],
) -> Match<'t> {
    let mut stack: Vec<Frame<'t>> = Vec::new();
    let mut root: IndexMap<String, Capture<'t>> = IndexMap::new();

    for effect in effects {
        match *effect {
            RuntimeEffect::Open(sym, pos) => stack.push(Frame {
                name: program.name(sym).to_owned(),
                start: pos,
                children: IndexMap::new(),
            }),
            RuntimeEffect::Close(_, pos) => {
                let Some(frame) = stack.pop() else {
                    debug_assert!(false, "close without open");
                    continue;
                };
                let capture = Capture {
                    name: frame.name.clone(),
                    span: frame.start..pos,
                    tokens: &tokens[frame.start..pos],
                    nested: frame.children,
                };
                let parent = stack.last_mut().map_or(&mut root, |f| &mut f.children);
                parent.insert(frame.name, capture);
            }
        }
    }

    Match {
        span: 0..end,
        tokens: &tokens[..end],
        captures: root,
    }
}
