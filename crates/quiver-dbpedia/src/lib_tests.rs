use indoc::indoc;
use quiver_core::parse_tagged;
use quiver_lib::expr::Vocabulary;
use quiver_lib::registry::{DispatchError, InterpretError, ResultShape};
use quiver_lib::render::{RenderConfig, RenderError, sparql};

use super::*;

/// Template name, shape and query text without the prefix preamble.
fn ask(question: &str) -> Option<(String, ResultShape, String)> {
    let registry = registry().unwrap();
    let tokens = parse_tagged(question).unwrap();
    let dispatch = registry.dispatch(&tokens).unwrap()?;
    let interpretation = dispatch.interpretation;
    let query = sparql::render(
        &interpretation.graph,
        interpretation.target,
        &RenderConfig::default(),
    )
    .unwrap();
    Some((
        dispatch.template.name().to_owned(),
        interpretation.shape,
        query.text,
    ))
}

#[test]
fn bundled_configuration_loads() {
    let registry = registry().unwrap();
    let names: Vec<_> = registry.templates().map(|t| t.name()).collect();
    assert_eq!(
        names,
        [
            "chairman",
            "ground",
            "manager",
            "most_wins",
            "roster",
            "league",
            "founded_in",
            "managed_team"
        ]
    );
    assert_eq!(render_config().unwrap().prefixes.len(), 12);
}

#[test]
fn manager_of_real_madrid() {
    let pipeline = pipeline().unwrap();
    let tokens = parse_tagged(
        "Who/who/WP is/be/VBZ the/the/DT manager/manager/NN of/of/IN Real/real/NNP Madrid/madrid/NNP ?/?/.",
    )
    .unwrap();
    let answer = pipeline.ask(&tokens).unwrap().unwrap();

    assert_eq!(answer.template, "manager");
    assert_eq!(answer.shape, ResultShape::Literal);
    insta::assert_snapshot!(answer.query.text, @r#"
    PREFIX owl: <http://www.w3.org/2002/07/owl#>
    PREFIX xsd: <http://www.w3.org/2001/XMLSchema#>
    PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>
    PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
    PREFIX foaf: <http://xmlns.com/foaf/0.1/>
    PREFIX skos: <http://www.w3.org/2004/02/skos/core#>
    PREFIX : <http://dbpedia.org/resource/>
    PREFIX dbpedia: <http://dbpedia.org/>
    PREFIX dbpprop: <http://dbpedia.org/property/>
    PREFIX dbpedia-owl: <http://dbpedia.org/ontology/>
    PREFIX dbo: <http://dbpedia.org/ontology/>
    PREFIX dbp: <http://dbpedia.org/property/>

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
fn who_manages() {
    let (template, _, text) =
        ask("who/who/WP manages/manage/VBZ Barcelona/barcelona/NNP ?/?/.").unwrap();
    assert_eq!(template, "manager");
    assert!(text.contains("?x1 foaf:name \"Barcelona\"@en."));
    assert!(text.contains("?x1 dbo:manager ?x0."));
}

#[test]
fn roster_is_an_enumeration() {
    let (template, shape, text) =
        ask("Real/real/NNP Madrid/madrid/NNP players/player/NNS").unwrap();
    assert_eq!(template, "roster");
    assert_eq!(shape, ResultShape::Enum);
    insta::assert_snapshot!(text, @r#"
    SELECT DISTINCT ?x2 WHERE {
      ?x0 rdf:type dbo:CareerStation.
      ?x0 dbo:team ?x1.
      ?x0 rdfs:label ?x2.
      ?x1 rdf:type dbo:SoccerClub.
      ?x1 foaf:name "Real Madrid"@en.
    }
    "#);

    let (template, ..) =
        ask("who/who/WP plays/play/VBZ for/for/IN the/the/DT Arsenal/arsenal/NNP ?/?/.").unwrap();
    assert_eq!(template, "roster");
}

#[test]
fn chairman_both_forms() {
    let (template, shape, text) = ask(indoc! {"
        Who/who/WP is/be/VBZ the/the/DT Barcelona/barcelona/NNP chairman/chairman/NN ?/?/.
    "})
    .unwrap();
    assert_eq!(template, "chairman");
    assert_eq!(shape, ResultShape::Literal);
    insta::assert_snapshot!(text, @r#"
    SELECT DISTINCT ?x2 WHERE {
      ?x0 rdf:type foaf:Person.
      ?x0 foaf:name ?x2.
      ?x1 rdf:type dbo:SoccerClub.
      ?x1 foaf:name "Barcelona"@en.
      ?x1 dbo:chairman ?x0.
    }
    "#);

    let (template, ..) = ask(indoc! {"
        Who/who/WP is/be/VBZ the/the/DT chairman/chairman/NN of/of/IN Barcelona/barcelona/NNP
    "})
    .unwrap();
    assert_eq!(template, "chairman");
}

#[test]
fn ground_of_team() {
    let (template, _, text) = ask(indoc! {"
        Which/which/WDT is/be/VBZ the/the/DT ground/ground/NN of/of/IN Arsenal/arsenal/NNP ?/?/.
    "})
    .unwrap();
    assert_eq!(template, "ground");
    assert!(text.contains("?x0 rdf:type dbo:Place."));
    assert!(text.contains("?x1 dbo:ground ?x0."));
}

#[test]
fn most_wins_of_league() {
    let (template, _, text) = ask(indoc! {"
        Who/who/WP won/win/VBD more/more/JJR La/la/NNP Liga/liga/NNP titles/title/NNS ?/?/.
    "})
    .unwrap();
    assert_eq!(template, "most_wins");
    insta::assert_snapshot!(text, @r#"
    SELECT DISTINCT ?x2 WHERE {
      ?x0 rdf:type dbo:SoccerClub.
      ?x0 foaf:name ?x2.
      ?x1 rdf:type dbo:SoccerLeague.
      ?x1 rdfs:label "La Liga"@en.
      ?x1 dbp:mostSuccessfulClub ?x0.
    }
    "#);

    let (template, _, text) = ask(indoc! {"
        Who/who/WP won/win/VBD more/more/JJR of/of/IN Premier/premier/NNP League/league/NNP
    "})
    .unwrap();
    assert_eq!(template, "most_wins");
    assert!(text.contains("\"Premier League\"@en"));
}

#[test]
fn league_of_team() {
    let (template, shape, text) = ask(indoc! {"
        Which/which/WDT league/league/NN does/do/VBZ Real/real/NNP Madrid/madrid/NNP
        play/play/VB in/in/IN ?/?/.
    "})
    .unwrap();
    assert_eq!(template, "league");
    assert_eq!(shape, ResultShape::Literal);
    insta::assert_snapshot!(text, @r#"
    SELECT DISTINCT ?x2 WHERE {
      ?x0 rdf:type dbo:SoccerLeague.
      ?x0 rdfs:label ?x2.
      ?x1 rdf:type dbo:SoccerClub.
      ?x1 foaf:name "Real Madrid"@en.
      ?x1 dbo:league ?x0.
    }
    "#);
}

#[test]
fn founded_in_year() {
    let (template, shape, text) = ask(indoc! {"
        Which/which/WDT teams/team/NNS were/be/VBD founded/found/VBN in/in/IN 1902/1902/CD ?/?/.
    "})
    .unwrap();
    assert_eq!(template, "founded_in");
    assert_eq!(shape, ResultShape::Enum);
    insta::assert_snapshot!(text, @r#"
    SELECT DISTINCT ?x1 WHERE {
      ?x0 rdf:type dbo:SoccerClub.
      ?x0 dbo:formationYear "1902"^^xsd:gYear.
      ?x0 foaf:name ?x1.
    }
    "#);
}

#[test]
fn founded_in_rejects_words() {
    let registry = registry().unwrap();
    let tokens = parse_tagged(
        "Which/which/WDT teams/team/NNS were/be/VBD founded/found/VBN in/in/IN nineteen/nineteen/CD",
    )
    .unwrap();
    let err = registry.interpret(&tokens).unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Interpret {
            source: InterpretError::Invalid(_),
            ..
        }
    ));
}

#[test]
fn team_managed_by() {
    let (template, _, text) = ask(indoc! {"
        Which/which/WDT team/team/NN does/do/VBZ Jose/jose/NNP Mourinho/mourinho/NNP
        manage/manage/VB ?/?/.
    "})
    .unwrap();
    assert_eq!(template, "managed_team");
    insta::assert_snapshot!(text, @r#"
    SELECT DISTINCT ?x2 WHERE {
      ?x0 rdf:type dbo:SoccerClub.
      ?x0 dbo:manager ?x1.
      ?x0 foaf:name ?x2.
      ?x1 rdf:type dbo:SportsManager.
      ?x1 rdfs:label "Jose Mourinho"@en.
    }
    "#);
}

#[test]
fn unknown_question() {
    assert_eq!(
        ask("What/what/WP time/time/NN is/be/VBZ it/it/PRP ?/?/."),
        None
    );
}

#[test]
fn invalid_utf8_name_fails_to_render() {
    let vocabulary = vocabulary().unwrap();
    let graph = vocabulary
        .is("team")
        .unwrap()
        .combine(vocabulary.has_bytes("name", b"Caf\xe9").unwrap());
    let err = sparql::render(&graph, graph.head(), &render_config().unwrap()).unwrap_err();
    assert_eq!(err, RenderError::Encoding { offset: 3 });
}

#[test]
fn replacement_vocabulary_must_cover_templates() {
    let vocabulary = Vocabulary::from_json(indoc! {r#"
        {
          "concepts": {
            "person": { "kind": "type", "identifier": "foaf:Person" }
          }
        }
    "#})
    .unwrap();
    let err = registry_with(vocabulary).unwrap_err();
    insta::assert_snapshot!(err, @"`Team` uses unknown concept `team`");
}
