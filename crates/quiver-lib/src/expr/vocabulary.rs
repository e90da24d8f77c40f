//! Domain vocabulary: concept names mapped to RDF identifiers.
//!
//! Vocabulary is data, loaded from JSON:
//!
//! ```json
//! {
//!   "language": "en",
//!   "keyword": { "relation": "rdfs:label", "language": "en" },
//!   "concepts": {
//!     "team": { "kind": "type", "identifier": "dbo:SoccerClub" },
//!     "manager_of": { "kind": "relation", "identifier": "dbo:manager", "reversed": true },
//!     "name": { "kind": "data_relation", "identifier": "foaf:name", "language": "en" }
//!   }
//! }
//! ```
//!
//! Templates and particles build graphs only through [`Vocabulary`], so every
//! identifier in a rendered query comes from configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::graph::{ExpressionGraph, Relation};
use super::literal::{Literal, LiteralTag};

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("concept `{concept}` has no identifier")]
    MissingIdentifier { concept: String },

    #[error("concept `{concept}` sets both a language and a datatype")]
    ConflictingLiteralTags { concept: String },

    #[error("unknown concept `{concept}`")]
    UnknownConcept { concept: String },

    #[error("concept `{concept}` is a {actual}, expected a {expected}")]
    WrongKind {
        concept: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("vocabulary has no keyword relation")]
    NoKeyword,
}

fn default_language() -> String {
    "en".to_owned()
}

/// Vocabulary file as written.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub keyword: Option<KeywordConfig>,
    pub concepts: IndexMap<String, ConceptConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default)]
    pub relation: String,
    /// Language of keyword literals; defaults to the vocabulary language.
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConceptConfig {
    Type {
        #[serde(default)]
        identifier: String,
    },
    Relation {
        #[serde(default)]
        identifier: String,
        #[serde(default)]
        reversed: bool,
    },
    DataRelation {
        #[serde(default)]
        identifier: String,
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        datatype: Option<String>,
    },
}

/// A validated vocabulary entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Concept {
    Type(String),
    Relation { identifier: String, reversed: bool },
    DataRelation { identifier: String, tag: LiteralTag },
}

impl Concept {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Concept::Type(_) => "type",
            Concept::Relation { .. } => "relation",
            Concept::DataRelation { .. } => "data relation",
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Concept::Type(id) => id,
            Concept::Relation { identifier, .. } | Concept::DataRelation { identifier, .. } => {
                identifier
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Keyword {
    relation: String,
    tag: LiteralTag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    language: String,
    keyword: Option<Keyword>,
    concepts: IndexMap<String, Concept>,
}

impl Vocabulary {
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let config: VocabularyConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    pub fn from_config(config: VocabularyConfig) -> Result<Self, VocabularyError> {
        let mut concepts = IndexMap::with_capacity(config.concepts.len());
        for (name, entry) in config.concepts {
            let missing = || VocabularyError::MissingIdentifier {
                concept: name.clone(),
            };
            let concept = match entry {
                ConceptConfig::Type { identifier } => {
                    if identifier.is_empty() {
                        return Err(missing());
                    }
                    Concept::Type(identifier)
                }
                ConceptConfig::Relation {
                    identifier,
                    reversed,
                } => {
                    if identifier.is_empty() {
                        return Err(missing());
                    }
                    Concept::Relation {
                        identifier,
                        reversed,
                    }
                }
                ConceptConfig::DataRelation {
                    identifier,
                    language,
                    datatype,
                } => {
                    if identifier.is_empty() {
                        return Err(missing());
                    }
                    let tag = match (language, datatype) {
                        (Some(_), Some(_)) => {
                            return Err(VocabularyError::ConflictingLiteralTags {
                                concept: name.clone(),
                            });
                        }
                        (Some(language), None) => LiteralTag::Language(language),
                        (None, Some(datatype)) => LiteralTag::Datatype(datatype),
                        (None, None) => LiteralTag::Plain,
                    };
                    Concept::DataRelation { identifier, tag }
                }
            };
            concepts.insert(name, concept);
        }

        let keyword = match config.keyword {
            None => None,
            Some(k) if k.relation.is_empty() => {
                return Err(VocabularyError::MissingIdentifier {
                    concept: "keyword".to_owned(),
                });
            }
            Some(k) => Some(Keyword {
                relation: k.relation,
                tag: LiteralTag::Language(k.language.unwrap_or_else(|| config.language.clone())),
            }),
        };

        Ok(Self {
            language: config.language,
            keyword,
            concepts,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn contains(&self, concept: &str) -> bool {
        self.concepts.contains_key(concept)
    }

    pub fn concepts(&self) -> impl Iterator<Item = (&str, &Concept)> {
        self.concepts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn concept(&self, name: &str) -> Result<&Concept, VocabularyError> {
        self.concepts
            .get(name)
            .ok_or_else(|| VocabularyError::UnknownConcept {
                concept: name.to_owned(),
            })
    }

    fn wrong_kind(name: &str, expected: &'static str, actual: &Concept) -> VocabularyError {
        VocabularyError::WrongKind {
            concept: name.to_owned(),
            expected,
            actual: actual.kind_name(),
        }
    }

    /// A fresh variable constrained to the type `concept`.
    pub fn is(&self, concept: &str) -> Result<ExpressionGraph, VocabularyError> {
        match self.concept(concept)? {
            Concept::Type(identifier) => Ok(ExpressionGraph::variable([identifier.as_str()])),
            other => Err(Self::wrong_kind(concept, "type", other)),
        }
    }

    /// A new head standing in relation `concept` to `graph`'s head.
    pub fn relate(
        &self,
        concept: &str,
        graph: ExpressionGraph,
    ) -> Result<ExpressionGraph, VocabularyError> {
        match self.concept(concept)? {
            Concept::Relation {
                identifier,
                reversed,
            } => Ok(graph.relate(Relation::fixed(identifier.as_str()), *reversed)),
            other => Err(Self::wrong_kind(concept, "relation", other)),
        }
    }

    /// A fresh variable whose data relation `concept` has the value `value`.
    pub fn has(&self, concept: &str, value: &str) -> Result<ExpressionGraph, VocabularyError> {
        self.has_bytes(concept, value.as_bytes())
    }

    /// Like [`Vocabulary::has`] for values that are not known to be UTF-8.
    pub fn has_bytes(&self, concept: &str, value: &[u8]) -> Result<ExpressionGraph, VocabularyError> {
        match self.concept(concept)? {
            Concept::DataRelation { identifier, tag } => {
                let mut graph = ExpressionGraph::new();
                let head = graph.head();
                let literal = Literal::from_bytes(value).with_tag(tag.clone());
                graph.add_literal(head, Relation::fixed(identifier.as_str()), literal);
                Ok(graph)
            }
            other => Err(Self::wrong_kind(concept, "data relation", other)),
        }
    }

    /// A fresh variable labeled with `value` through the keyword relation.
    pub fn keyword(&self, value: &str) -> Result<ExpressionGraph, VocabularyError> {
        let keyword = self.keyword.as_ref().ok_or(VocabularyError::NoKeyword)?;
        let mut graph = ExpressionGraph::new();
        let head = graph.head();
        let literal = Literal::new(value).with_tag(keyword.tag.clone());
        graph.add_literal(head, Relation::fixed(keyword.relation.as_str()), literal);
        Ok(graph)
    }
}
