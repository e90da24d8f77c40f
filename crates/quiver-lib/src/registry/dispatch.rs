//! Registry construction and question dispatch.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use quiver_core::TaggedToken;
use quiver_core::utils::to_snake_case;
use tracing::{debug, info, trace};

use super::bindings::{Binding, Bindings};
use super::error::{DispatchError, RegistryError};
use super::template::{Interpretation, Particle, Template};
use crate::engine::{Capture, FuelLimits, Matcher};
use crate::expr::Vocabulary;
use crate::pattern::{Pattern, PatternError, validate};

/// Collects particles and templates, then checks them all at once in [`RegistryBuilder::build`].
///
/// Particles may reference particles registered before them. Templates may
/// reference any particle.
#[derive(Debug)]
pub struct RegistryBuilder {
    vocabulary: Vocabulary,
    particles: Vec<Particle>,
    templates: Vec<Template>,
    limits: FuelLimits,
}

impl RegistryBuilder {
    pub fn particle(mut self, particle: Particle) -> Self {
        self.particles.push(particle);
        self
    }

    /// Templates are tried in the order they are added.
    pub fn template(mut self, template: Template) -> Self {
        self.templates.push(template);
        self
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        let RegistryBuilder {
            vocabulary,
            particles,
            templates,
            limits,
        } = self;

        let mut resolved: IndexMap<String, Pattern> = IndexMap::new();
        let mut by_capture: HashMap<String, usize> = HashMap::new();
        let mut compiled = Vec::with_capacity(particles.len());

        for particle in particles {
            let name = particle.name().to_owned();
            let capture = to_snake_case(&name);
            if resolved.contains_key(&name) || by_capture.contains_key(&capture) {
                return Err(RegistryError::DuplicateParticle(name));
            }
            check_concepts(&vocabulary, &name, particle.concepts())?;
            check_shadowing(&name, particle.pattern(), &by_capture, &compiled)?;
            check_shadowed_by(&name, &capture, &compiled)?;

            let pattern = particle
                .pattern()
                .resolve(&|r: &str| resolved.get(r))
                .and_then(|p| validate(&p).map(|()| p))
                .map_err(pattern_error(&name))?;

            debug!(particle = %name, pattern = %pattern, "particle resolved");
            by_capture.insert(capture, compiled.len());
            resolved.insert(name, pattern);
            compiled.push(particle);
        }

        let mut names = HashSet::new();
        let mut entries = Vec::with_capacity(templates.len());
        for template in templates {
            let name = template.name().to_owned();
            if !names.insert(name.clone()) {
                return Err(RegistryError::DuplicateTemplate(name));
            }
            check_concepts(&vocabulary, &name, template.concepts())?;
            check_shadowing(&name, template.pattern(), &by_capture, &compiled)?;

            let matcher = template
                .pattern()
                .resolve(&|r: &str| resolved.get(r))
                .and_then(|p| Matcher::new(&p))
                .map_err(pattern_error(&name))?
                .with_limits(limits);

            debug!(template = %name, instructions = matcher.program().len(), "template compiled");
            entries.push(Entry { template, matcher });
        }

        info!(
            templates = entries.len(),
            particles = compiled.len(),
            "registry built"
        );

        Ok(Registry {
            vocabulary,
            particles: compiled,
            resolved,
            by_capture,
            templates: entries,
        })
    }
}

fn pattern_error(owner: &str) -> impl FnOnce(PatternError) -> RegistryError + '_ {
    move |source| RegistryError::Pattern {
        owner: owner.to_owned(),
        source,
    }
}

fn check_concepts(
    vocabulary: &Vocabulary,
    owner: &str,
    concepts: &[String],
) -> Result<(), RegistryError> {
    match concepts.iter().find(|c| !vocabulary.contains(c)) {
        Some(concept) => Err(RegistryError::UnknownConcept {
            owner: owner.to_owned(),
            concept: concept.clone(),
        }),
        None => Ok(()),
    }
}

/// An explicit capture named like a particle's capture would be read as that particle.
fn check_shadowing(
    owner: &str,
    pattern: &Pattern,
    by_capture: &HashMap<String, usize>,
    particles: &[Particle],
) -> Result<(), RegistryError> {
    let mut captures = Vec::new();
    explicit_captures(pattern, &mut captures);
    for capture in captures {
        if let Some(&index) = by_capture.get(capture) {
            return Err(RegistryError::CaptureShadowsParticle {
                owner: owner.to_owned(),
                capture: capture.to_owned(),
                particle: particles[index].name().to_owned(),
            });
        }
    }
    Ok(())
}

/// A new particle must not take the name of a capture inside an earlier particle.
fn check_shadowed_by(
    particle: &str,
    capture: &str,
    earlier: &[Particle],
) -> Result<(), RegistryError> {
    for owner in earlier {
        let mut captures = Vec::new();
        explicit_captures(owner.pattern(), &mut captures);
        if captures.contains(&capture) {
            return Err(RegistryError::CaptureShadowsParticle {
                owner: owner.name().to_owned(),
                capture: capture.to_owned(),
                particle: particle.to_owned(),
            });
        }
    }
    Ok(())
}

fn explicit_captures<'p>(pattern: &'p Pattern, out: &mut Vec<&'p str>) {
    match pattern {
        Pattern::Capture { name, inner } => {
            out.push(name);
            explicit_captures(inner, out);
        }
        Pattern::Seq(items) | Pattern::Alt(items) => {
            for item in items {
                explicit_captures(item, out);
            }
        }
        Pattern::Optional(inner) | Pattern::Repeat(inner) | Pattern::Star(inner) => {
            explicit_captures(inner, out)
        }
        Pattern::Lemma(_)
        | Pattern::Pos(_)
        | Pattern::Word(_)
        | Pattern::Any
        | Pattern::Ref(_) => {}
    }
}

#[derive(Debug)]
struct Entry {
    template: Template,
    matcher: Matcher,
}

/// The template that answered a question and its interpretation.
#[derive(Debug)]
pub struct Dispatch<'r> {
    pub template: &'r Template,
    pub interpretation: Interpretation,
}

/// Immutable set of compiled templates over one vocabulary.
///
/// Built once at startup and shared; answering a question does not mutate it.
#[derive(Debug)]
pub struct Registry {
    vocabulary: Vocabulary,
    particles: Vec<Particle>,
    resolved: IndexMap<String, Pattern>,
    by_capture: HashMap<String, usize>,
    templates: Vec<Entry>,
}

impl Registry {
    pub fn builder(vocabulary: Vocabulary) -> RegistryBuilder {
        RegistryBuilder {
            vocabulary,
            particles: Vec::new(),
            templates: Vec::new(),
            limits: FuelLimits::default(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Templates in dispatch order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter().map(|e| &e.template)
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates().find(|t| t.name() == name)
    }

    /// Compiled matcher of the template `name`.
    pub fn matcher(&self, name: &str) -> Option<&Matcher> {
        self.templates
            .iter()
            .find(|e| e.template.name() == name)
            .map(|e| &e.matcher)
    }

    /// Resolve particle references in an ad-hoc pattern against this registry.
    pub fn resolve(&self, pattern: &Pattern) -> Result<Pattern, PatternError> {
        pattern.resolve(&|r: &str| self.resolved.get(r))
    }

    /// Interpret a question. `Ok(None)` when no template matches it.
    pub fn interpret(
        &self,
        tokens: &[TaggedToken],
    ) -> Result<Option<Interpretation>, DispatchError> {
        Ok(self.dispatch(tokens)?.map(|d| d.interpretation))
    }

    /// Like [`Registry::interpret`], also reporting which template answered.
    pub fn dispatch(&self, tokens: &[TaggedToken]) -> Result<Option<Dispatch<'_>>, DispatchError> {
        for entry in &self.templates {
            let name = entry.template.name();
            let found = entry
                .matcher
                .match_tokens(tokens)
                .map_err(|source| DispatchError::Runtime {
                    template: name.to_owned(),
                    source,
                })?;
            let Some(found) = found else {
                trace!(template = %name, "no match");
                continue;
            };

            debug!(template = %name, captures = found.captures.len(), "template matched");
            let bindings = self.bind(found.tokens, &found.captures)?;
            let interpretation = entry
                .template
                .interpret(&bindings, &self.vocabulary)
                .map_err(|source| DispatchError::Interpret {
                    template: name.to_owned(),
                    source,
                })?;
            return Ok(Some(Dispatch {
                template: &entry.template,
                interpretation,
            }));
        }

        debug!(tokens = tokens.len(), "no template matched");
        Ok(None)
    }

    /// Bind captures, interpreting particles innermost first.
    fn bind<'t>(
        &self,
        tokens: &'t [TaggedToken],
        captures: &IndexMap<String, Capture<'t>>,
    ) -> Result<Bindings<'t>, DispatchError> {
        let mut values = IndexMap::new();
        self.collect(captures, &mut values)?;
        Ok(Bindings::new(tokens, values))
    }

    fn collect(
        &self,
        captures: &IndexMap<String, Capture<'_>>,
        values: &mut IndexMap<String, Binding>,
    ) -> Result<(), DispatchError> {
        for (name, capture) in captures {
            let Some(&index) = self.by_capture.get(name) else {
                values.insert(
                    name.clone(),
                    Binding {
                        text: capture.text(),
                        graph: None,
                    },
                );
                self.collect(&capture.nested, values)?;
                continue;
            };

            let particle = &self.particles[index];
            let inner = self.bind(capture.tokens, &capture.nested)?;
            let graph = particle
                .interpret(&inner, &self.vocabulary)
                .map_err(|source| DispatchError::Particle {
                    particle: particle.name().to_owned(),
                    source,
                })?;
            trace!(particle = %particle.name(), text = %inner.words(), "particle interpreted");
            values.insert(
                name.clone(),
                Binding {
                    text: capture.text(),
                    graph: Some(graph),
                },
            );
        }
        Ok(())
    }
}
