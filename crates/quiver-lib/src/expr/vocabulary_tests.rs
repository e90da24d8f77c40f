use indoc::indoc;

use super::{Concept, LiteralTag, Vocabulary, VocabularyError};
use crate::render::{RenderConfig, sparql};

const SOCCER: &str = indoc! {r#"
    {
      "keyword": { "relation": "rdfs:label" },
      "concepts": {
        "person": { "kind": "type", "identifier": "foaf:Person" },
        "team": { "kind": "type", "identifier": "dbo:SoccerClub" },
        "manager_of": { "kind": "relation", "identifier": "dbo:manager", "reversed": true },
        "name_of": { "kind": "relation", "identifier": "foaf:name", "reversed": true },
        "name": { "kind": "data_relation", "identifier": "foaf:name", "language": "en" },
        "founded": { "kind": "data_relation", "identifier": "dbo:formationYear", "datatype": "xsd:gYear" },
        "short_name": { "kind": "data_relation", "identifier": "dbp:shortName" }
      }
    }
"#};

fn vocabulary() -> Vocabulary {
    Vocabulary::from_json(SOCCER).unwrap()
}

fn render(graph: &crate::expr::ExpressionGraph) -> String {
    sparql::render(graph, graph.head(), &RenderConfig::default())
        .unwrap()
        .text
}

#[test]
fn loads_concepts_in_file_order() {
    let vocab = vocabulary();
    let names: Vec<_> = vocab.concepts().map(|(name, _)| name).collect();
    assert_eq!(names[..3], ["person", "team", "manager_of"]);
    assert_eq!(vocab.language(), "en");
    assert_eq!(
        vocab.concept("founded").unwrap(),
        &Concept::DataRelation {
            identifier: "dbo:formationYear".to_owned(),
            tag: LiteralTag::Datatype("xsd:gYear".to_owned()),
        }
    );
}

#[test]
fn manager_of_team() {
    let vocab = vocabulary();
    let team = vocab
        .is("team")
        .unwrap()
        .combine(vocab.has("name", "Real Madrid").unwrap());
    let manager = vocab
        .is("person")
        .unwrap()
        .combine(vocab.relate("manager_of", team).unwrap());
    let name = vocab.relate("name_of", manager).unwrap();

    insta::assert_snapshot!(render(&name), @r#"
    SELECT DISTINCT ?x2 WHERE {
      ?x0 rdf:type foaf:Person.
      ?x0 foaf:name ?x2.
      ?x1 rdf:type dbo:SoccerClub.
      ?x1 foaf:name "Real Madrid"@en.
      ?x1 dbo:manager ?x0.
    }
    "#);
}

#[test]
fn keyword_and_datatype_literals() {
    let vocab = vocabulary();
    insta::assert_snapshot!(render(&vocab.keyword("La Liga").unwrap()), @r#"
    SELECT DISTINCT ?x0 WHERE {
      ?x0 rdfs:label "La Liga"@en.
    }
    "#);
    insta::assert_snapshot!(render(&vocab.has("founded", "1902").unwrap()), @r#"
    SELECT DISTINCT ?x0 WHERE {
      ?x0 dbo:formationYear "1902"^^xsd:gYear.
    }
    "#);
    insta::assert_snapshot!(render(&vocab.has("short_name", "Barça").unwrap()), @r#"
    SELECT DISTINCT ?x0 WHERE {
      ?x0 dbp:shortName "Barça".
    }
    "#);
}

#[test]
fn unknown_concept() {
    let err = vocabulary().is("stadium").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"unknown concept `stadium`");
}

#[test]
fn wrong_kind() {
    let err = vocabulary().is("manager_of").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"concept `manager_of` is a relation, expected a type");
}

#[test]
fn missing_identifier() {
    let err = Vocabulary::from_json(r#"{"concepts": {"team": {"kind": "type"}}}"#).unwrap_err();
    assert!(matches!(err, VocabularyError::MissingIdentifier { ref concept } if concept == "team"));
}

#[test]
fn conflicting_literal_tags() {
    let json = r#"{"concepts": {"year": {
        "kind": "data_relation", "identifier": "dbo:year", "language": "en", "datatype": "xsd:gYear"
    }}}"#;
    let err = Vocabulary::from_json(json).unwrap_err();
    assert!(matches!(err, VocabularyError::ConflictingLiteralTags { .. }));
}

#[test]
fn keyword_requires_configuration() {
    let vocab = Vocabulary::from_json(r#"{"concepts": {}}"#).unwrap();
    assert!(matches!(vocab.keyword("x"), Err(VocabularyError::NoKeyword)));
}

#[test]
fn invalid_json() {
    let err = Vocabulary::from_json("{").unwrap_err();
    assert!(matches!(err, VocabularyError::Json(_)));
}
