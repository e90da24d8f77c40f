//! Tagged tokens: the alphabet the matcher runs over.
//!
//! Tokens come from an external POS tagger. Two interchange forms are accepted:
//! - text: whitespace-separated `word/lemma/TAG` items, e.g. `Who/who/WP is/be/VBZ`
//! - JSON: `[{"word": "Who", "lemma": "who", "pos": "WP"}, ...]`

use serde::{Deserialize, Serialize};

/// One token of a tagged question. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form as it appeared in the question.
    pub word: String,
    /// Dictionary form chosen by the tagger.
    pub lemma: String,
    /// Part-of-speech tag (Penn Treebank tags in practice).
    pub pos: String,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, lemma: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            lemma: lemma.into(),
            pos: pos.into(),
        }
    }

    /// Lemma comparison ignores case; taggers disagree on capitalized lemmas.
    pub fn lemma_is(&self, lemma: &str) -> bool {
        self.lemma.eq_ignore_ascii_case(lemma)
            || (!self.lemma.is_ascii() && self.lemma.to_lowercase() == lemma.to_lowercase())
    }

    /// POS comparison is exact.
    #[inline]
    pub fn pos_is(&self, pos: &str) -> bool {
        self.pos == pos
    }

    /// Surface comparison is exact.
    #[inline]
    pub fn word_is(&self, word: &str) -> bool {
        self.word == word
    }
}

impl std::fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.word, self.lemma, self.pos)
    }
}

/// Errors from reading tagged tokens.
#[derive(Debug, thiserror::Error)]
pub enum TokenParseError {
    #[error("item {index} `{item}` is not in word/lemma/TAG form")]
    MalformedItem { index: usize, item: String },

    #[error("item {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse whitespace-separated `word/lemma/TAG` items.
///
/// Items are split from the right so a word may itself contain `/`.
pub fn parse_tagged(text: &str) -> Result<Vec<TaggedToken>, TokenParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, item)| parse_item(index, item))
        .collect()
}

fn parse_item(index: usize, item: &str) -> Result<TaggedToken, TokenParseError> {
    let mut parts = item.rsplitn(3, '/');
    let (Some(pos), Some(lemma), Some(word)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TokenParseError::MalformedItem {
            index,
            item: item.to_owned(),
        });
    };

    for (field, value) in [("word", word), ("lemma", lemma), ("tag", pos)] {
        if value.is_empty() {
            return Err(TokenParseError::EmptyField { index, field });
        }
    }

    Ok(TaggedToken::new(word, lemma, pos))
}

/// Parse a JSON array of tokens.
pub fn parse_tagged_json(json: &str) -> Result<Vec<TaggedToken>, TokenParseError> {
    let tokens: Vec<TaggedToken> = serde_json::from_str(json)?;
    for (index, token) in tokens.iter().enumerate() {
        if token.pos.is_empty() {
            return Err(TokenParseError::EmptyField { index, field: "tag" });
        }
    }
    Ok(tokens)
}
