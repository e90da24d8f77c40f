//! List registered templates and particles.

use std::path::PathBuf;

use quiver_core::Colors;
use quiver_lib::Registry;

use super::input::load_registry;

pub struct TemplatesArgs {
    pub vocabulary: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: TemplatesArgs) {
    let registry = load_registry(args.vocabulary.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });
    print!("{}", listing(&registry, Colors::new(args.color)));
}

/// Templates in dispatch order, then particles.
pub fn listing(registry: &Registry, colors: Colors) -> String {
    let width = registry
        .templates()
        .map(|t| t.name().len())
        .chain(registry.particles().map(|p| p.name().len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for template in registry.templates() {
        let name = colors.paint(colors.name, format!("{:<width$}", template.name()));
        out.push_str(&format!("{}  {}\n", name, template.pattern()));
    }
    // Particles dimmed.
    for particle in registry.particles() {
        let name = colors.paint(colors.dim, format!("{:<width$}", particle.name()));
        out.push_str(&format!("{}  {}\n", name, particle.pattern()));
    }
    out
}
