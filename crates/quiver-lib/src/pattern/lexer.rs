//! Lexer for the pattern text syntax.
//!
//! Produces span-based tokens without storing text; text is sliced from source only when needed.
//! Consecutive unrecognized characters are coalesced into a single `Garbage` token.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("|")]
    Pipe,

    #[token("?")]
    Question,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("_")]
    Underscore,

    /// `@name`, also a bare `@` so the parser can report the missing name
    #[regex(r"@[A-Za-z0-9_.\-]*")]
    CaptureName,

    /// Lemma (lowercase start) or particle reference (uppercase start)
    #[regex(r"[a-zA-Z][a-zA-Z0-9_'\-]*")]
    Id,

    #[regex(r"<[^<>\s]*>")]
    PosTag,

    #[regex(r"<[^<>\s]*")]
    PosTagUnclosed,

    /// Exact surface form: `"Madrid"`
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    DoubleString,

    /// Quoted lemma, for lemmas that are not bare identifiers: `'.'`
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    SingleString,

    #[regex(r#""(?:[^"\\]|\\.)*"#)]
    #[regex(r"'(?:[^'\\]|\\.)*")]
    StringUnclosed,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// Consecutive unrecognized characters coalesced into one token
    Garbage,
}

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineComment)
    }

    /// Tokens that can begin an atom.
    #[inline]
    pub fn starts_atom(self) -> bool {
        matches!(
            self,
            TokenKind::Id
                | TokenKind::PosTag
                | TokenKind::PosTagUnclosed
                | TokenKind::DoubleString
                | TokenKind::SingleString
                | TokenKind::StringUnclosed
                | TokenKind::Underscore
                | TokenKind::ParenOpen
        )
    }

    #[inline]
    pub fn is_quantifier(self) -> bool {
        matches!(self, TokenKind::Question | TokenKind::Plus | TokenKind::Star)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(TokenKind::Garbage, start..end));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
                }
                break;
            }
        }
    }

    tokens
}

#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[token.span.clone()]
}
