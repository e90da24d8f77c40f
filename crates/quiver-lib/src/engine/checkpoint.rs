//! Checkpoints for backtracking.
//!
//! When the VM reaches a `Split`, it saves a checkpoint for the secondary
//! branch. On failure, it restores the most recent checkpoint and continues.

use super::program::Addr;

#[derive(Clone, Copy, Debug)]
pub struct Checkpoint {
    /// Resume point.
    pub ip: Addr,
    /// Token position to resume at.
    pub pos: usize,
    /// Effect log length at checkpoint.
    pub effect_watermark: usize,
}

#[derive(Debug, Default)]
pub struct CheckpointStack {
    stack: Vec<Checkpoint>,
}

impl CheckpointStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.stack.push(checkpoint);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.stack.pop()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
