//! Effect log: capture boundaries recorded while the VM runs.
//!
//! Effects are appended in execution order and truncated back to a checkpoint's
//! watermark on backtrack, so after `Accept` the log holds exactly the effects of
//! the successful path.

use quiver_core::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeEffect {
    /// Capture opened before the token at this position.
    Open(Symbol, usize),
    /// Capture closed before the token at this position (exclusive end).
    Close(Symbol, usize),
}

#[derive(Clone, Debug, Default)]
pub struct EffectLog {
    effects: Vec<RuntimeEffect>,
}

impl EffectLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, effect: RuntimeEffect) {
        self.effects.push(effect);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    #[inline]
    pub fn truncate(&mut self, watermark: usize) {
        self.effects.truncate(watermark);
    }

    pub fn as_slice(&self) -> &[RuntimeEffect] {
        &self.effects
    }
}
