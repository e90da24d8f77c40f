//! Noun phrases naming teams, managers and leagues.

use quiver_lib::expr::{ExpressionGraph, Vocabulary};
use quiver_lib::pattern::PatternError;
use quiver_lib::registry::{Bindings, InterpretError, Particle};

/// One or more nouns of any kind.
pub const NOUNS: &str = "(<NN> | <NNS> | <NNP> | <NNPS>)+";

pub fn particles() -> Result<Vec<Particle>, PatternError> {
    Ok(vec![
        Particle::parse("Team", &format!("<DT>? {NOUNS} @name"), team)?
            .uses(&["team", "name"]),
        Particle::parse("Manager", NOUNS, manager)?.uses(&["manager"]),
        Particle::parse("League", NOUNS, league)?.uses(&["league"]),
    ])
}

/// A club by its English name. A leading determiner is not part of the name.
fn team(b: &Bindings<'_>, v: &Vocabulary) -> Result<ExpressionGraph, InterpretError> {
    Ok(v.is("team")?.combine(v.has("name", b.text("name")?)?))
}

fn manager(b: &Bindings<'_>, v: &Vocabulary) -> Result<ExpressionGraph, InterpretError> {
    Ok(v.is("manager")?.combine(v.keyword(&b.words())?))
}

fn league(b: &Bindings<'_>, v: &Vocabulary) -> Result<ExpressionGraph, InterpretError> {
    Ok(v.is("league")?.combine(v.keyword(&b.words())?))
}
