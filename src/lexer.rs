//! Lexer for the bracketed-decimal noun notation.
//!
//! The whole token vocabulary is `[`, `]`, and decimal atoms, so the
//! token enum lives here rather than in its own module.

use crate::error::{ParseError, ParseErrorKind};
use crate::span::{Span, Spanned};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lexeme {
    LBracket,
    RBracket,
    /// A decimal atom literal.
    Atom(u64),
    Eof,
}

pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
        }
    }

    /// Tokenize the whole input, stopping at the first invalid byte or
    /// out-of-range literal.
    pub fn tokenize(mut self) -> Result<Vec<Spanned<Lexeme>>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let is_eof = tok.node == Lexeme::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Spanned<Lexeme>, ParseError> {
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        if self.pos >= self.source.len() {
            return Ok(self.make_token(Lexeme::Eof, self.pos, self.pos));
        }

        let start = self.pos;
        match self.source[self.pos] {
            b'[' => {
                self.pos += 1;
                Ok(self.make_token(Lexeme::LBracket, start, self.pos))
            }
            b']' => {
                self.pos += 1;
                Ok(self.make_token(Lexeme::RBracket, start, self.pos))
            }
            c if c.is_ascii_digit() => self.scan_atom(start),
            _ => {
                self.pos += 1;
                Err(ParseError::new(
                    ParseErrorKind::InvalidToken,
                    Span::new(start as u32, self.pos as u32),
                ))
            }
        }
    }

    fn scan_atom(&mut self, start: usize) -> Result<Spanned<Lexeme>, ParseError> {
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        // Digits are ASCII, so the slice is valid UTF-8
        let text = std::str::from_utf8(&self.source[start..self.pos]).unwrap();
        let span = Span::new(start as u32, self.pos as u32);
        // A literal past u64::MAX is not a representable atom
        match text.parse::<u64>() {
            Ok(value) => Ok(Spanned::new(Lexeme::Atom(value), span)),
            Err(_) => Err(ParseError::new(ParseErrorKind::InvalidToken, span)),
        }
    }

    fn make_token(&self, node: Lexeme, start: usize, end: usize) -> Spanned<Lexeme> {
        Spanned::new(node, Span::new(start as u32, end as u32))
    }
}
