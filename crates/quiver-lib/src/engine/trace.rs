//! Tracing infrastructure for debugging VM execution.
//!
//! The tracer is a zero-cost abstraction: `NoopTracer` methods are
//! `#[inline(always)]` empty functions, so the compiler removes every tracer
//! call from the default matching path. Tracing-only state (like which
//! address a backtrack resumes at) lives in the tracer, not in the VM.

use quiver_core::{Colors, TaggedToken};

use super::effect::RuntimeEffect;
use super::program::{Addr, Instruction, Program};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Token tests, backtracks and the final accept. Surface words only.
    #[default]
    Default,
    /// (-v): also control-flow instructions and capture effects.
    Verbose,
    /// (-vv): tokens shown as `word/lemma/TAG`.
    VeryVerbose,
}

/// Tracer trait for VM execution instrumentation.
///
/// Each method is called at a specific point during execution:
/// - `trace_instruction` - before executing an instruction
/// - `trace_token_success/failure` - after a token test
/// - `trace_effect` - after recording a capture boundary
/// - `trace_checkpoint_created` - when a `Split` saves its secondary branch
/// - `trace_backtrack` - when restoring a checkpoint
/// - `trace_accept` / `trace_reject_leftover` - at `Accept`
pub trait Tracer {
    fn trace_instruction(&mut self, ip: Addr, instr: &Instruction);

    fn trace_token_success(&mut self, pos: usize, token: &TaggedToken);

    /// `token` is `None` when the input is exhausted.
    fn trace_token_failure(&mut self, pos: usize, token: Option<&TaggedToken>);

    fn trace_effect(&mut self, effect: &RuntimeEffect);

    fn trace_checkpoint_created(&mut self, resume: Addr, pos: usize);

    fn trace_backtrack(&mut self);

    fn trace_accept(&mut self, pos: usize);

    /// `Accept` reached with tokens left over in full-sequence mode.
    fn trace_reject_leftover(&mut self, pos: usize, remaining: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _ip: Addr, _instr: &Instruction) {}

    #[inline(always)]
    fn trace_token_success(&mut self, _pos: usize, _token: &TaggedToken) {}

    #[inline(always)]
    fn trace_token_failure(&mut self, _pos: usize, _token: Option<&TaggedToken>) {}

    #[inline(always)]
    fn trace_effect(&mut self, _effect: &RuntimeEffect) {}

    #[inline(always)]
    fn trace_checkpoint_created(&mut self, _resume: Addr, _pos: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self) {}

    #[inline(always)]
    fn trace_accept(&mut self, _pos: usize) {}

    #[inline(always)]
    fn trace_reject_leftover(&mut self, _pos: usize, _remaining: usize) {}
}

const MATCH_SUCCESS: &str = "●";
const MATCH_FAILURE: &str = "○";
const EPSILON: &str = "ε";
const EFFECT: &str = "⬥";
const BACKTRACK: &str = "❮❮❮";
const ACCEPT: &str = "✓";

/// Tracer that collects a human-readable execution trace.
pub struct PrintTracer<'p> {
    program: &'p Program,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Parallel stack of checkpoint resume points (for backtrack display).
    checkpoints: Vec<(Addr, usize)>,
    /// Token instruction awaiting its success/failure line.
    pending: Option<(Addr, String)>,
    step_width: usize,
}

impl<'p> PrintTracer<'p> {
    pub fn new(program: &'p Program, verbosity: Verbosity, colors: Colors) -> Self {
        let step_width = program.len().saturating_sub(1).to_string().len();
        Self {
            program,
            verbosity,
            colors,
            lines: Vec::new(),
            checkpoints: Vec::new(),
            pending: None,
            step_width,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All trace lines joined with newlines.
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn add_instruction(&mut self, ip: Addr, symbol: &str, content: &str) {
        self.lines
            .push(format!("  {:0sw$} {} {}", ip, symbol, content, sw = self.step_width));
    }

    /// Sub-line: blank step area, symbol, content.
    fn add_subline(&mut self, symbol: &str, content: &str) {
        let step_area = 2 + self.step_width;
        self.lines
            .push(format!("{:step_area$} {} {}", "", symbol, content));
    }

    fn token_text(&self, token: &TaggedToken) -> String {
        let text = if self.verbosity >= Verbosity::VeryVerbose {
            token.to_string()
        } else {
            token.word.clone()
        };
        self.colors.paint(self.colors.token, text)
    }

    fn take_pending(&mut self) -> (Addr, String) {
        self.pending.take().unwrap_or_default()
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_instruction(&mut self, ip: Addr, instr: &Instruction) {
        match instr {
            Instruction::Token(test) => self.pending = Some((ip, test.to_string())),
            Instruction::Accept => {}
            _ if self.verbosity >= Verbosity::Verbose => {
                let content = self.program.format_instruction(instr);
                self.add_instruction(ip, EPSILON, &content);
            }
            _ => {}
        }
    }

    fn trace_token_success(&mut self, pos: usize, token: &TaggedToken) {
        let (ip, test) = self.take_pending();
        let content = format!("{}  {} {}", test, pos, self.token_text(token));
        self.add_instruction(ip, MATCH_SUCCESS, &content);
    }

    fn trace_token_failure(&mut self, pos: usize, token: Option<&TaggedToken>) {
        let (ip, test) = self.take_pending();
        let text = token.map_or_else(|| "∅".to_owned(), |t| self.token_text(t));
        let content = format!("{}  {} {}", test, pos, text);
        let symbol = self.colors.paint(self.colors.failure, MATCH_FAILURE);
        self.add_instruction(ip, &symbol, &content);
    }

    fn trace_effect(&mut self, effect: &RuntimeEffect) {
        if self.verbosity < Verbosity::Verbose {
            return;
        }
        let c = self.colors;
        let content = match *effect {
            RuntimeEffect::Open(sym, pos) => {
                format!("open {}@{}{} at {}", c.name, self.program.name(sym), c.reset, pos)
            }
            RuntimeEffect::Close(sym, pos) => {
                format!("close {}@{}{} at {}", c.name, self.program.name(sym), c.reset, pos)
            }
        };
        self.add_subline(EFFECT, &content);
    }

    fn trace_checkpoint_created(&mut self, resume: Addr, pos: usize) {
        self.checkpoints.push((resume, pos));
    }

    fn trace_backtrack(&mut self) {
        let Some((resume, pos)) = self.checkpoints.pop() else {
            return;
        };
        let c = self.colors;
        self.lines.push(format!(
            "  {}{} {:0sw$} at {}{}",
            c.dim,
            BACKTRACK,
            resume,
            pos,
            c.reset,
            sw = self.step_width
        ));
    }

    fn trace_accept(&mut self, pos: usize) {
        let c = self.colors;
        self.lines
            .push(format!("  {}{} accept at {}{}", c.token, ACCEPT, pos, c.reset));
    }

    fn trace_reject_leftover(&mut self, pos: usize, remaining: usize) {
        let c = self.colors;
        self.lines.push(format!(
            "  {}{} accept at {}, {} left over{}",
            c.failure, MATCH_FAILURE, pos, remaining, c.reset
        ));
    }
}
