//! Backtracking virtual machine for compiled token patterns.

use quiver_core::TaggedToken;

use super::checkpoint::{Checkpoint, CheckpointStack};
use super::effect::{EffectLog, RuntimeEffect};
use super::error::RuntimeError;
use super::program::{Addr, Instruction, Program};
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for matching.
#[derive(Clone, Copy, Debug)]
pub struct FuelLimits {
    /// Maximum total steps (default: 1,000,000).
    pub(crate) exec_fuel: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
}

/// Whether `Accept` requires the whole input to be consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Template matching: leftover tokens are a failure.
    #[default]
    Full,
    /// The first accepted prefix wins. Diagnostics tooling only.
    Prefix,
}

/// Successful run: end position of the match plus the effects on the accepted path.
#[derive(Debug)]
pub struct Accepted {
    pub end: usize,
    pub effects: EffectLog,
}

/// Virtual machine state for one run.
pub struct VM<'t> {
    tokens: &'t [TaggedToken],
    ip: Addr,
    pos: usize,
    checkpoints: CheckpointStack,
    effects: EffectLog,
    exec_fuel: u32,
    limits: FuelLimits,
    mode: MatchMode,
}

/// Outcome of one instruction.
enum Step {
    Continue,
    Accept,
    /// No checkpoint left to resume from.
    Exhausted,
}

impl<'t> VM<'t> {
    pub fn new(tokens: &'t [TaggedToken], limits: FuelLimits, mode: MatchMode) -> Self {
        Self {
            tokens,
            ip: 0,
            pos: 0,
            checkpoints: CheckpointStack::new(),
            effects: EffectLog::new(),
            exec_fuel: limits.get_exec_fuel(),
            limits,
            mode,
        }
    }

    /// Run the program with `NoopTracer`, which is optimized away.
    pub fn execute(self, program: &Program) -> Result<Option<Accepted>, RuntimeError> {
        self.execute_with(program, &mut NoopTracer)
    }

    /// Run the program, reporting every step to `tracer`.
    pub fn execute_with<T: Tracer>(
        mut self,
        program: &Program,
        tracer: &mut T,
    ) -> Result<Option<Accepted>, RuntimeError> {
        loop {
            if self.exec_fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            self.exec_fuel -= 1;

            let instr = program.get(self.ip);
            tracer.trace_instruction(self.ip, instr);

            let step = match instr {
                Instruction::Token(test) => match self.tokens.get(self.pos) {
                    Some(token) if test.matches(token) => {
                        tracer.trace_token_success(self.pos, token);
                        self.pos += 1;
                        self.ip += 1;
                        Step::Continue
                    }
                    token => {
                        tracer.trace_token_failure(self.pos, token);
                        self.backtrack(tracer)
                    }
                },
                Instruction::Split { primary, secondary } => {
                    self.checkpoints.push(Checkpoint {
                        ip: *secondary,
                        pos: self.pos,
                        effect_watermark: self.effects.len(),
                    });
                    tracer.trace_checkpoint_created(*secondary, self.pos);
                    self.ip = *primary;
                    Step::Continue
                }
                Instruction::Jump(target) => {
                    self.ip = *target;
                    Step::Continue
                }
                Instruction::Open(sym) => {
                    self.emit_effect(RuntimeEffect::Open(*sym, self.pos), tracer);
                    Step::Continue
                }
                Instruction::Close(sym) => {
                    self.emit_effect(RuntimeEffect::Close(*sym, self.pos), tracer);
                    Step::Continue
                }
                Instruction::Accept => {
                    let remaining = self.tokens.len() - self.pos;
                    if self.mode == MatchMode::Full && remaining > 0 {
                        tracer.trace_reject_leftover(self.pos, remaining);
                        self.backtrack(tracer)
                    } else {
                        tracer.trace_accept(self.pos);
                        Step::Accept
                    }
                }
            };

            match step {
                Step::Continue => continue,
                Step::Accept => {
                    return Ok(Some(Accepted {
                        end: self.pos,
                        effects: self.effects,
                    }));
                }
                Step::Exhausted => return Ok(None),
            }
        }
    }

    fn emit_effect<T: Tracer>(&mut self, effect: RuntimeEffect, tracer: &mut T) {
        self.effects.push(effect);
        tracer.trace_effect(&effect);
        self.ip += 1;
    }

    fn backtrack<T: Tracer>(&mut self, tracer: &mut T) -> Step {
        let Some(cp) = self.checkpoints.pop() else {
            return Step::Exhausted;
        };
        tracer.trace_backtrack();
        self.ip = cp.ip;
        self.pos = cp.pos;
        self.effects.truncate(cp.effect_watermark);
        Step::Continue
    }
}
