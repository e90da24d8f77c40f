//! Instruction set of the token VM.

use std::fmt;

use quiver_core::{Interner, Symbol, TaggedToken};

/// Test applied to the token under the cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenTest {
    Lemma(String),
    Pos(String),
    Word(String),
    Any,
}

impl TokenTest {
    #[inline]
    pub fn matches(&self, token: &TaggedToken) -> bool {
        match self {
            TokenTest::Lemma(lemma) => token.lemma_is(lemma),
            TokenTest::Pos(pos) => token.pos_is(pos),
            TokenTest::Word(word) => token.word_is(word),
            TokenTest::Any => true,
        }
    }
}

impl fmt::Display for TokenTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenTest::Lemma(lemma) => write!(f, "lemma {}", lemma),
            TokenTest::Pos(pos) => write!(f, "pos <{}>", pos),
            TokenTest::Word(word) => write!(f, "word {:?}", word),
            TokenTest::Any => f.write_str("any"),
        }
    }
}

/// Instruction addresses are indices into [`Program::instructions`].
pub type Addr = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Consume one token if it passes the test, otherwise backtrack.
    Token(TokenTest),
    /// Continue at `primary`; on failure retry from `secondary` at the same position.
    Split { primary: Addr, secondary: Addr },
    Jump(Addr),
    /// Record the start of a capture at the current position.
    Open(Symbol),
    /// Record the end of a capture at the current position.
    Close(Symbol),
    Accept,
}

/// Compiled pattern: a flat instruction list plus the capture names it refers to.
#[derive(Clone, Debug)]
pub struct Program {
    pub(crate) instructions: Vec<Instruction>,
    pub(crate) names: Interner,
}

impl Program {
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[inline]
    pub fn get(&self, addr: Addr) -> &Instruction {
        &self.instructions[addr]
    }

    pub fn names(&self) -> &Interner {
        &self.names
    }

    /// Name of a capture symbol. Symbols always come from this program's interner.
    pub fn name(&self, symbol: Symbol) -> &str {
        self.names.resolve(symbol)
    }

    /// Human-readable listing, one instruction per line.
    pub fn dump(&self) -> String {
        let width = self.instructions.len().saturating_sub(1).to_string().len();
        let mut out = String::new();
        for (addr, instr) in self.instructions.iter().enumerate() {
            out.push_str(&format!("{:>width$}  {}\n", addr, self.format_instruction(instr)));
        }
        out
    }

    pub(crate) fn format_instruction(&self, instr: &Instruction) -> String {
        match instr {
            Instruction::Token(test) => test.to_string(),
            Instruction::Split { primary, secondary } => {
                format!("split {} | {}", primary, secondary)
            }
            Instruction::Jump(target) => format!("jump {}", target),
            Instruction::Open(sym) => format!("open @{}", self.name(*sym)),
            Instruction::Close(sym) => format!("close @{}", self.name(*sym)),
            Instruction::Accept => "accept".to_owned(),
        }
    }
}
