//! Thompson construction: pattern tree to flat instruction program.
//!
//! Each construct emits a fragment with a single entry (the first emitted
//! instruction) and a single exit (the next free address). Forward jumps are
//! emitted with a placeholder target and patched once the exit is known.
//!
//! Preference order is encoded in `Split`: `primary` is tried first, so greedy
//! quantifiers put the loop body in `primary` and alternation puts the earlier
//! branch there.

use quiver_core::Interner;

use super::program::{Addr, Instruction, Program, TokenTest};
use crate::pattern::{Pattern, PatternError};

/// Compile a validated, fully resolved pattern.
pub fn compile(pattern: &Pattern) -> Result<Program, PatternError> {
    let mut compiler = Compiler::default();
    compiler.emit(pattern)?;
    compiler.push(Instruction::Accept);
    Ok(Program {
        instructions: compiler.instructions,
        names: compiler.names,
    })
}

#[derive(Default)]
struct Compiler {
    instructions: Vec<Instruction>,
    names: Interner,
}

const PLACEHOLDER: Addr = Addr::MAX;

impl Compiler {
    fn here(&self) -> Addr {
        self.instructions.len()
    }

    fn push(&mut self, instr: Instruction) -> Addr {
        let addr = self.here();
        self.instructions.push(instr);
        addr
    }

    fn patch_jump(&mut self, at: Addr, target: Addr) {
        match &mut self.instructions[at] {
            Instruction::Jump(t) => *t = target,
            other => unreachable!("patch_jump on {:?}", other),
        }
    }

    fn patch_secondary(&mut self, at: Addr, target: Addr) {
        match &mut self.instructions[at] {
            Instruction::Split { secondary, .. } => *secondary = target,
            other => unreachable!("patch_secondary on {:?}", other),
        }
    }

    fn emit(&mut self, pattern: &Pattern) -> Result<(), PatternError> {
        match pattern {
            Pattern::Lemma(lemma) => {
                self.push(Instruction::Token(TokenTest::Lemma(lemma.clone())));
            }
            Pattern::Pos(pos) => {
                self.push(Instruction::Token(TokenTest::Pos(pos.clone())));
            }
            Pattern::Word(word) => {
                self.push(Instruction::Token(TokenTest::Word(word.clone())));
            }
            Pattern::Any => {
                self.push(Instruction::Token(TokenTest::Any));
            }
            Pattern::Ref(name) => {
                return Err(PatternError::UndefinedReference { name: name.clone() });
            }
            Pattern::Seq(items) => {
                for item in items {
                    self.emit(item)?;
                }
            }
            Pattern::Alt(branches) => self.emit_alt(branches)?,
            Pattern::Optional(inner) => {
                //   split L1, L2
                // L1: inner
                // L2:
                let split = self.push(Instruction::Split {
                    primary: self.here() + 1,
                    secondary: PLACEHOLDER,
                });
                self.emit(inner)?;
                let end = self.here();
                self.patch_secondary(split, end);
            }
            Pattern::Repeat(inner) => {
                // L1: inner
                //     split L1, L2
                // L2:
                let start = self.here();
                self.emit(inner)?;
                let next = self.here() + 1;
                self.push(Instruction::Split {
                    primary: start,
                    secondary: next,
                });
            }
            Pattern::Star(inner) => {
                // L1: split L2, L3
                // L2: inner
                //     jump L1
                // L3:
                let split = self.push(Instruction::Split {
                    primary: self.here() + 1,
                    secondary: PLACEHOLDER,
                });
                self.emit(inner)?;
                self.push(Instruction::Jump(split));
                let end = self.here();
                self.patch_secondary(split, end);
            }
            Pattern::Capture { name, inner } => {
                let symbol = self.names.intern(name);
                self.push(Instruction::Open(symbol));
                self.emit(inner)?;
                self.push(Instruction::Close(symbol));
            }
        }
        Ok(())
    }

    //     split L1, S2
    // L1: branch 1
    //     jump END
    // S2: split L2, L3
    // L2: branch 2
    //     jump END
    // L3: branch 3
    // END:
    fn emit_alt(&mut self, branches: &[Pattern]) -> Result<(), PatternError> {
        let Some((last, init)) = branches.split_last() else {
            return Err(PatternError::EmptyAlternation);
        };

        let mut exits = Vec::with_capacity(init.len());
        for branch in init {
            let split = self.push(Instruction::Split {
                primary: self.here() + 1,
                secondary: PLACEHOLDER,
            });
            self.emit(branch)?;
            exits.push(self.push(Instruction::Jump(PLACEHOLDER)));
            let next = self.here();
            self.patch_secondary(split, next);
        }
        self.emit(last)?;

        let end = self.here();
        for exit in exits {
            self.patch_jump(exit, end);
        }
        Ok(())
    }
}
