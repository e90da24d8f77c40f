//! Token patterns: regular expressions whose alphabet is tagged tokens.
//!
//! A [`Pattern`] is built either with the combinator constructors
//! (`Pattern::lemma("who").then(Pattern::lemma("be"))`) or parsed from text:
//!
//! ```text
//! alt      := seq ('|' seq)*
//! seq      := postfix+
//! postfix  := atom ('?' | '+' | '*')* ('@' name)?
//! atom     := lemma | 'lemma' | <POS> | "word" | Particle | '_' | '(' alt ')'
//! ```
//!
//! Both forms produce the same tree, and [`Display`](std::fmt::Display) prints
//! a tree back in the text form.

mod error;
pub(crate) mod lexer;
mod parser;
mod validate;

#[cfg(test)]
mod pattern_tests;
#[cfg(test)]
mod validate_tests;

use std::fmt;
use std::str::FromStr;

use quiver_core::utils::to_snake_case;

pub use error::PatternError;
pub use validate::validate;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Token whose lemma equals this, ignoring case.
    Lemma(String),
    /// Token whose POS tag equals this exactly.
    Pos(String),
    /// Token whose surface form equals this exactly.
    Word(String),
    /// Any single token.
    Any,
    Seq(Vec<Pattern>),
    /// Ordered choice: earlier branches are tried first.
    Alt(Vec<Pattern>),
    /// Zero or one, greedy.
    Optional(Box<Pattern>),
    /// One or more, greedy.
    Repeat(Box<Pattern>),
    /// Zero or more, greedy.
    Star(Box<Pattern>),
    Capture { name: String, inner: Box<Pattern> },
    /// Registered particle, replaced by a capture of the particle's pattern on resolution.
    Ref(String),
}

impl Pattern {
    pub fn lemma(lemma: impl Into<String>) -> Self {
        Pattern::Lemma(lemma.into())
    }

    /// Sequence of lemmas from a space-separated phrase: `lemmas("who be")`.
    pub fn lemmas(phrase: &str) -> Self {
        Pattern::seq(phrase.split_whitespace().map(Pattern::lemma))
    }

    pub fn pos(tag: impl Into<String>) -> Self {
        Pattern::Pos(tag.into())
    }

    /// Alternation of POS tags: `pos_any(["NN", "NNS"])`.
    pub fn pos_any<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        Pattern::alt(tags.into_iter().map(Pattern::pos))
    }

    pub fn word(word: impl Into<String>) -> Self {
        Pattern::Word(word.into())
    }

    pub fn any() -> Self {
        Pattern::Any
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Pattern::Ref(name.into())
    }

    /// Sequence of the given patterns. Nested sequences are flattened and a
    /// single element is returned as is.
    pub fn seq(items: impl IntoIterator<Item = Pattern>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            match item {
                Pattern::Seq(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            return flat.swap_remove(0);
        }
        Pattern::Seq(flat)
    }

    /// Alternation of the given patterns. Nested alternations are flattened,
    /// which keeps branch order.
    pub fn alt(branches: impl IntoIterator<Item = Pattern>) -> Self {
        let mut flat = Vec::new();
        for branch in branches {
            match branch {
                Pattern::Alt(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            return flat.swap_remove(0);
        }
        Pattern::Alt(flat)
    }

    pub fn then(self, next: Pattern) -> Self {
        Pattern::seq([self, next])
    }

    pub fn or(self, other: Pattern) -> Self {
        Pattern::alt([self, other])
    }

    pub fn optional(self) -> Self {
        Pattern::Optional(Box::new(self))
    }

    pub fn repeat(self) -> Self {
        Pattern::Repeat(Box::new(self))
    }

    pub fn star(self) -> Self {
        Pattern::Star(Box::new(self))
    }

    pub fn capture(self, name: impl Into<String>) -> Self {
        Pattern::Capture {
            name: name.into(),
            inner: Box::new(self),
        }
    }

    /// Parse pattern text.
    pub fn parse(text: &str) -> Result<Pattern, PatternError> {
        let (pattern, diagnostics) = parser::parse(text);
        match pattern {
            Some(pattern) if diagnostics.is_empty() => Ok(pattern),
            _ => Err(PatternError::syntax(text, diagnostics)),
        }
    }

    /// Whether the pattern can match the empty token sequence.
    ///
    /// Unresolved references count as non-nullable: every registered particle
    /// is checked when it is registered.
    pub fn is_nullable(&self) -> bool {
        match self {
            Pattern::Lemma(_) | Pattern::Pos(_) | Pattern::Word(_) | Pattern::Any => false,
            Pattern::Ref(_) => false,
            Pattern::Seq(items) => items.iter().all(Pattern::is_nullable),
            Pattern::Alt(branches) => branches.iter().any(Pattern::is_nullable),
            Pattern::Optional(_) | Pattern::Star(_) => true,
            Pattern::Repeat(inner) => inner.is_nullable(),
            Pattern::Capture { inner, .. } => inner.is_nullable(),
        }
    }

    /// Names of the particles this pattern references, in first-use order.
    pub fn references(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Pattern::Ref(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            Pattern::Seq(items) | Pattern::Alt(items) => {
                for item in items {
                    item.collect_references(out);
                }
            }
            Pattern::Optional(inner)
            | Pattern::Repeat(inner)
            | Pattern::Star(inner)
            | Pattern::Capture { inner, .. } => inner.collect_references(out),
            Pattern::Lemma(_) | Pattern::Pos(_) | Pattern::Word(_) | Pattern::Any => {}
        }
    }

    /// Replace every `Ref(Name)` with a capture named `name` (snake_case)
    /// around the pattern `lookup` returns for it.
    pub fn resolve<'p, F>(&self, lookup: &F) -> Result<Pattern, PatternError>
    where
        F: Fn(&str) -> Option<&'p Pattern>,
    {
        let resolved = match self {
            Pattern::Ref(name) => {
                let Some(target) = lookup(name) else {
                    return Err(PatternError::UndefinedReference { name: name.clone() });
                };
                target.clone().capture(to_snake_case(name))
            }
            Pattern::Seq(items) => Pattern::Seq(
                items
                    .iter()
                    .map(|p| p.resolve(lookup))
                    .collect::<Result<_, _>>()?,
            ),
            Pattern::Alt(branches) => Pattern::Alt(
                branches
                    .iter()
                    .map(|p| p.resolve(lookup))
                    .collect::<Result<_, _>>()?,
            ),
            Pattern::Optional(inner) => Pattern::Optional(Box::new(inner.resolve(lookup)?)),
            Pattern::Repeat(inner) => Pattern::Repeat(Box::new(inner.resolve(lookup)?)),
            Pattern::Star(inner) => Pattern::Star(Box::new(inner.resolve(lookup)?)),
            Pattern::Capture { name, inner } => Pattern::Capture {
                name: name.clone(),
                inner: Box::new(inner.resolve(lookup)?),
            },
            leaf => leaf.clone(),
        };
        Ok(resolved)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

// Binding strength when printing: a child printed at a weaker level than its
// context gets parentheses.
const PREC_ALT: u8 = 0;
const PREC_SEQ: u8 = 1;
const PREC_CAPTURE: u8 = 2;
const PREC_QUANTIFIER: u8 = 3;

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pattern(self, PREC_ALT, f)
    }
}

fn write_pattern(pattern: &Pattern, prec: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let own = match pattern {
        Pattern::Alt(_) => PREC_ALT,
        Pattern::Seq(items) if items.is_empty() => PREC_QUANTIFIER + 1,
        Pattern::Seq(_) => PREC_SEQ,
        Pattern::Capture { .. } => PREC_CAPTURE,
        Pattern::Optional(_) | Pattern::Repeat(_) | Pattern::Star(_) => PREC_QUANTIFIER,
        _ => PREC_QUANTIFIER + 1,
    };
    let wrap = own < prec;
    if wrap {
        f.write_str("(")?;
    }

    match pattern {
        Pattern::Lemma(lemma) => write_lemma(lemma, f)?,
        Pattern::Pos(tag) => write!(f, "<{}>", tag)?,
        Pattern::Word(word) => write_quoted(word, '"', f)?,
        Pattern::Any => f.write_str("_")?,
        Pattern::Ref(name) => f.write_str(name)?,
        Pattern::Seq(items) if items.is_empty() => f.write_str("()")?,
        Pattern::Seq(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_pattern(item, PREC_CAPTURE, f)?;
            }
        }
        Pattern::Alt(branches) => {
            for (i, branch) in branches.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write_pattern(branch, PREC_SEQ, f)?;
            }
        }
        Pattern::Optional(inner) => {
            write_pattern(inner, PREC_QUANTIFIER, f)?;
            f.write_str("?")?;
        }
        Pattern::Repeat(inner) => {
            write_pattern(inner, PREC_QUANTIFIER, f)?;
            f.write_str("+")?;
        }
        Pattern::Star(inner) => {
            write_pattern(inner, PREC_QUANTIFIER, f)?;
            f.write_str("*")?;
        }
        Pattern::Capture { name, inner } => {
            write_pattern(inner, PREC_QUANTIFIER, f)?;
            write!(f, " @{}", name)?;
        }
    }

    if wrap {
        f.write_str(")")?;
    }
    Ok(())
}

fn write_lemma(lemma: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if is_bare_lemma(lemma) {
        f.write_str(lemma)
    } else {
        write_quoted(lemma, '\'', f)
    }
}

fn is_bare_lemma(lemma: &str) -> bool {
    let mut chars = lemma.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '-'))
}

fn write_quoted(text: &str, quote: char, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    use fmt::Write;

    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}
