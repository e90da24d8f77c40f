//! Question templates, in dispatch order.

use quiver_lib::expr::{ExpressionGraph, Vocabulary};
use quiver_lib::pattern::PatternError;
use quiver_lib::registry::{Bindings, InterpretError, Interpretation, Template};

pub fn templates() -> Result<Vec<Template>, PatternError> {
    Ok(vec![
        Template::parse(
            "chairman",
            "(who be <DT> chairman of Team | who be Team chairman) <.>?",
            chairman,
        )?
        .uses(&["person", "chairman_of", "name_of"]),
        Template::parse(
            "ground",
            "(which be <DT> ground of Team | which be Team ground) <.>?",
            ground,
        )?
        .uses(&["place", "ground_of", "name_of"]),
        Template::parse(
            "manager",
            "(who be <DT> manager of Team | who manage Team) <.>?",
            manager,
        )?
        .uses(&["person", "manager_of", "name_of"]),
        Template::parse(
            "most_wins",
            "(who win more League title | who win more of? League) <.>?",
            most_wins,
        )?
        .uses(&["team", "most_successful_of", "name_of"]),
        Template::parse("roster", "(Team player | who play for Team) <.>?", roster)?
            .uses(&["career_station", "is_team_of", "label_of"]),
        Template::parse("league", "which league do Team play in <.>?", league)?
            .uses(&["league", "league_of", "label_of"]),
        Template::parse(
            "founded_in",
            "which team be found in (<CD> @year) <.>?",
            founded_in,
        )?
        .uses(&["team", "founded", "name_of"]),
        Template::parse(
            "managed_team",
            "which team do Manager manage <.>?",
            managed_team,
        )?
        .uses(&["team", "managed_by", "name_of"]),
    ])
}

/// A person standing in `relation` to the captured team, by name.
fn person_of_team(
    b: &Bindings<'_>,
    v: &Vocabulary,
    relation: &str,
) -> Result<ExpressionGraph, InterpretError> {
    let person = v.is("person")?.combine(v.relate(relation, b.graph("team")?)?);
    Ok(v.relate("name_of", person)?)
}

fn chairman(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    Ok(Interpretation::literal(person_of_team(b, v, "chairman_of")?))
}

fn manager(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    Ok(Interpretation::literal(person_of_team(b, v, "manager_of")?))
}

fn ground(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    let ground = v.is("place")?.combine(v.relate("ground_of", b.graph("team")?)?);
    Ok(Interpretation::literal(v.relate("name_of", ground)?))
}

fn most_wins(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    let team = v
        .is("team")?
        .combine(v.relate("most_successful_of", b.graph("league")?)?);
    Ok(Interpretation::literal(v.relate("name_of", team)?))
}

fn roster(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    let station = v
        .is("career_station")?
        .combine(v.relate("is_team_of", b.graph("team")?)?);
    Ok(Interpretation::enumeration(v.relate("label_of", station)?))
}

fn league(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    let league = v.is("league")?.combine(v.relate("league_of", b.graph("team")?)?);
    Ok(Interpretation::literal(v.relate("label_of", league)?))
}

/// The year is kept as text; only its form is checked.
fn founded_in(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    let year = b.text("year")?;
    if year.len() != 4 || !year.bytes().all(|c| c.is_ascii_digit()) {
        return Err(InterpretError::Invalid(format!("`{year}` is not a year")));
    }
    let teams = v.is("team")?.combine(v.has("founded", year)?);
    Ok(Interpretation::enumeration(v.relate("name_of", teams)?))
}

fn managed_team(b: &Bindings<'_>, v: &Vocabulary) -> Result<Interpretation, InterpretError> {
    let team = v
        .is("team")?
        .combine(v.relate("managed_by", b.graph("manager")?)?);
    Ok(Interpretation::literal(v.relate("name_of", team)?))
}
