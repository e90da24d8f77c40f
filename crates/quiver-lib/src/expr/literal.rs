//! Literal payloads of data edges.

use std::fmt;

/// Literal annotation: none, a language tag (`@en`) or a datatype (`^^xsd:gYear`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LiteralTag {
    #[default]
    Plain,
    Language(String),
    Datatype(String),
}

/// A literal value.
///
/// Values are kept as raw bytes because they may come straight from question
/// text; they are checked for UTF-8 only when a query is rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    bytes: Vec<u8>,
    tag: LiteralTag,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            bytes: value.into().into_bytes(),
            tag: LiteralTag::Plain,
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            tag: LiteralTag::Plain,
        }
    }

    pub fn with_tag(mut self, tag: LiteralTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_language(self, language: impl Into<String>) -> Self {
        self.with_tag(LiteralTag::Language(language.into()))
    }

    pub fn with_datatype(self, datatype: impl Into<String>) -> Self {
        self.with_tag(LiteralTag::Datatype(datatype.into()))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn tag(&self) -> &LiteralTag {
        &self.tag
    }

    /// The value as UTF-8, or the byte offset where decoding fails.
    pub fn to_utf8(&self) -> Result<&str, usize> {
        std::str::from_utf8(&self.bytes).map_err(|e| e.valid_up_to())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.bytes))?;
        match &self.tag {
            LiteralTag::Plain => Ok(()),
            LiteralTag::Language(lang) => write!(f, "@{}", lang),
            LiteralTag::Datatype(dt) => write!(f, "^^{}", dt),
        }
    }
}
