//! Template registry and dispatcher.
//!
//! A [`Registry`] holds particles (named sub-patterns such as `Team`) and
//! templates (whole-question patterns) over one [`Vocabulary`](crate::expr::Vocabulary).
//! Questions are matched against templates in registration order; the first
//! full match is interpreted, particles innermost first.

mod bindings;
mod dispatch;
mod error;
mod pipeline;
mod template;


pub use bindings::{Binding, Bindings};
pub use dispatch::{Dispatch, Registry, RegistryBuilder};
pub use error::{DispatchError, InterpretError, RegistryError};
pub use pipeline::{Answer, Pipeline};
pub use template::{Interpretation, Particle, ParticleFn, ResultShape, Template, TemplateFn};
