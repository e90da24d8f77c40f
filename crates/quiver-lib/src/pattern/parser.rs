//! Recursive-descent parser for pattern text.
//!
//! The parser never stops at the first problem: every error is recorded in
//! [`Diagnostics`] and parsing resumes at the next token it understands. A
//! pattern tree is only handed out when no diagnostics were raised.

use std::ops::Range;

use quiver_core::utils::is_capture_name;

use super::Pattern;
use super::lexer::{Token, TokenKind, lex, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Nesting limit for parenthesized groups.
const MAX_DEPTH: u32 = 256;

pub(crate) fn parse(source: &str) -> (Option<Pattern>, Diagnostics) {
    let tokens = lex(source)
        .into_iter()
        .filter(|t| !t.kind.is_trivia())
        .collect();
    let mut parser = Parser::new(source, tokens);
    let pattern = parser.parse_root();
    (pattern, parser.diagnostics)
}

struct Parser<'src> {
    source: &'src str,
    /// Non-trivia tokens only.
    tokens: Vec<Token>,
    pos: usize,
    depth: u32,
    /// Set once the nesting limit is hit; enclosing groups stop reporting.
    aborted: bool,
    diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            aborted: false,
            diagnostics: Diagnostics::new(),
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    fn current_span(&self) -> Range<usize> {
        self.tokens
            .get(self.pos)
            .map_or(self.source.len()..self.source.len(), |t| t.span.clone())
    }

    fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    fn bump(&mut self) {
        assert!(self.pos < self.tokens.len(), "bump called at EOF");
        self.pos += 1;
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_root(&mut self) -> Option<Pattern> {
        let pattern = self.parse_alt();

        // Anything left over is a stray `)`; report it and keep going so later
        // errors are still found.
        while let Some(kind) = self.current() {
            debug_assert_eq!(kind, TokenKind::ParenClose);
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::UnexpectedGroupClose, span)
                .emit();
            self.bump();
            let _ = self.parse_alt();
        }

        pattern
    }

    fn parse_alt(&mut self) -> Option<Pattern> {
        let mut branches = vec![self.parse_seq()];
        while self.at(TokenKind::Pipe) {
            let pipe = self.current_span();
            self.bump();
            if !self.at_seq_content() {
                self.diagnostics
                    .report(DiagnosticKind::ExpectedPattern, self.current_span())
                    .message("after `|`")
                    .related_to("alternative starts here", pipe)
                    .emit();
                branches.push(None);
                continue;
            }
            branches.push(self.parse_seq());
        }

        let branches: Option<Vec<Pattern>> = branches.into_iter().collect();
        branches.map(Pattern::alt)
    }

    /// Tokens that `parse_seq` consumes, either as content or as errors.
    fn at_seq_content(&self) -> bool {
        matches!(self.current(), Some(kind) if kind != TokenKind::Pipe && kind != TokenKind::ParenClose)
    }

    fn parse_seq(&mut self) -> Option<Pattern> {
        let mut items = Vec::new();
        let mut ok = true;
        let mut consumed = false;

        while let Some(kind) = self.current() {
            if kind.starts_atom() {
                consumed = true;
                match self.parse_postfix() {
                    Some(item) => items.push(item),
                    None => ok = false,
                }
                continue;
            }

            let span = self.current_span();
            match kind {
                TokenKind::CaptureName => {
                    self.diagnostics
                        .report(DiagnosticKind::CaptureWithoutTarget, span)
                        .emit();
                }
                TokenKind::Question | TokenKind::Plus | TokenKind::Star => {
                    let text = self.current_text();
                    self.diagnostics
                        .report(DiagnosticKind::UnexpectedToken, span)
                        .message(text)
                        .hint("quantifiers follow the pattern they repeat: `<NN>+`")
                        .emit();
                }
                TokenKind::Garbage => {
                    let text = self.current_text();
                    self.diagnostics
                        .report(DiagnosticKind::UnexpectedToken, span)
                        .message(text)
                        .emit();
                }
                _ => break,
            }
            consumed = true;
            ok = false;
            self.bump();
        }

        if !consumed {
            self.diagnostics
                .report(DiagnosticKind::ExpectedPattern, self.current_span())
                .emit();
            return None;
        }

        ok.then(|| Pattern::seq(items))
    }

    fn parse_postfix(&mut self) -> Option<Pattern> {
        let mut pattern = self.parse_atom();

        while let Some(kind) = self.current() {
            if !kind.is_quantifier() {
                break;
            }
            self.bump();
            pattern = pattern.map(|p| match kind {
                TokenKind::Question => p.optional(),
                TokenKind::Plus => p.repeat(),
                _ => p.star(),
            });
        }

        if self.at(TokenKind::CaptureName) {
            let span = self.current_span();
            let name = &self.current_text()[1..];
            self.bump();

            if name.is_empty() {
                self.diagnostics
                    .report(DiagnosticKind::ExpectedCaptureName, span)
                    .emit();
                return None;
            }
            if !is_capture_name(name) {
                self.diagnostics
                    .report(DiagnosticKind::CaptureNameInvalid, span)
                    .message(name)
                    .emit();
                return None;
            }
            pattern = pattern.map(|p| p.capture(name));
        }

        pattern
    }

    fn parse_atom(&mut self) -> Option<Pattern> {
        let span = self.current_span();
        let text = self.current_text();
        let kind = self.current()?;

        if kind == TokenKind::ParenOpen {
            return self.parse_group();
        }
        self.bump();

        match kind {
            TokenKind::Id => {
                let starts_upper = text.starts_with(|c: char| c.is_ascii_uppercase());
                Some(if starts_upper {
                    Pattern::reference(text)
                } else {
                    Pattern::lemma(text)
                })
            }
            TokenKind::Underscore => Some(Pattern::any()),
            TokenKind::PosTag => {
                let tag = &text[1..text.len() - 1];
                if tag.is_empty() {
                    self.diagnostics
                        .report(DiagnosticKind::EmptyPosTag, span)
                        .emit();
                    return None;
                }
                Some(Pattern::pos(tag))
            }
            TokenKind::PosTagUnclosed => {
                self.diagnostics
                    .report(DiagnosticKind::UnclosedPosTag, span)
                    .emit();
                None
            }
            TokenKind::DoubleString => Some(Pattern::word(unescape(&text[1..text.len() - 1]))),
            TokenKind::SingleString => Some(Pattern::lemma(unescape(&text[1..text.len() - 1]))),
            TokenKind::StringUnclosed => {
                self.diagnostics
                    .report(DiagnosticKind::UnclosedString, span)
                    .emit();
                None
            }
            _ => unreachable!("parse_atom called on {:?}", kind),
        }
    }

    fn parse_group(&mut self) -> Option<Pattern> {
        let open = self.current_span();

        if self.depth >= MAX_DEPTH {
            self.diagnostics
                .report(DiagnosticKind::NestingTooDeep, open.start..self.source.len())
                .emit();
            self.pos = self.tokens.len();
            self.aborted = true;
            return None;
        }

        self.bump();

        if self.at(TokenKind::ParenClose) {
            let close = self.current_span();
            self.bump();
            self.diagnostics
                .report(DiagnosticKind::EmptyGroup, open.start..close.end)
                .emit();
            return None;
        }

        self.depth += 1;
        let inner = self.parse_alt();
        self.depth -= 1;

        if !self.eat(TokenKind::ParenClose) {
            if self.aborted {
                return None;
            }
            self.diagnostics
                .report(DiagnosticKind::UnclosedGroup, self.current_span())
                .related_to("group opened here", open)
                .emit();
            return None;
        }

        inner
    }
}

/// Resolve backslash escapes inside a quoted atom.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
