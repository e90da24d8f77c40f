use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Settings for query rendering, loaded from JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// `PREFIX` lines, in file order. The empty key is the default prefix (`PREFIX :`).
    pub prefixes: IndexMap<String, String>,
    /// Predicate used for type constraints.
    pub type_relation: String,
    /// Indentation of triple patterns inside `WHERE`.
    pub indent: String,
    /// Select every variable (`*`) instead of the target only.
    pub full_select: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefixes: IndexMap::new(),
            type_relation: "rdf:type".to_owned(),
            indent: "  ".to_owned(),
            full_select: false,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_prefix(mut self, name: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.insert(name.into(), iri.into());
        self
    }

    pub fn full_select(mut self, value: bool) -> Self {
        self.full_select = value;
        self
    }
}
