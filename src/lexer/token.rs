//! Token definitions for type expressions.

use std::fmt;

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering a single character at `pos`.
    pub fn char_at(pos: usize, c: char) -> Self {
        Self::new(pos, pos + c.len_utf8())
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A token with its span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

/// Tokens of a type expression. Parentheses are not tokens: they become
/// groups in the paren tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    /// Any other run of characters.
    Ident(String),
}

impl Token {
    pub fn is_arrow(&self) -> bool {
        matches!(self, Token::Arrow)
    }

    pub fn is_fat_arrow(&self) -> bool {
        matches!(self, Token::FatArrow)
    }

    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Token::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Arrow => write!(f, "->"),
            Token::FatArrow => write!(f, "=>"),
            Token::Ident(name) => write!(f, "{}", name),
        }
    }
}
