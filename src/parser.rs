//! Recursive-descent parser for the noun notation.
//!
//! Grammar: `noun := atom | '[' noun noun+ ']'`. A bracketed group of
//! three or more elements folds right: `[a b c]` parses as `[a [b c]]`,
//! recursively for longer lists.

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexeme, Lexer};
use crate::noun::Noun;
use crate::span::{Span, Spanned};

pub(crate) struct Parser {
    tokens: Vec<Spanned<Lexeme>>,
    pos: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Spanned<Lexeme>>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the token stream as a single noun covering the whole input.
    pub(crate) fn parse(mut self) -> Result<Noun, ParseError> {
        let noun = self.parse_noun()?;
        match self.current() {
            Lexeme::Eof => Ok(noun),
            Lexeme::RBracket => Err(self.error_here(ParseErrorKind::UnmatchedBrackets)),
            _ => Err(self.error_here(ParseErrorKind::InvalidToken)),
        }
    }

    fn parse_noun(&mut self) -> Result<Noun, ParseError> {
        match self.current() {
            Lexeme::Atom(value) => {
                self.advance();
                Ok(Noun::atom(value))
            }
            Lexeme::LBracket => self.parse_cell(),
            Lexeme::RBracket => Err(self.error_here(ParseErrorKind::UnmatchedBrackets)),
            Lexeme::Eof => Err(self.error_here(ParseErrorKind::InvalidToken)),
        }
    }

    fn parse_cell(&mut self) -> Result<Noun, ParseError> {
        let open = self.current_span();
        self.advance(); // consume '['

        if self.current() == Lexeme::RBracket {
            let span = open.merge(self.current_span());
            return Err(ParseError::new(ParseErrorKind::EmptyCell, span));
        }

        let mut elements = Vec::new();
        loop {
            match self.current() {
                Lexeme::RBracket => break,
                // Ran off the end with the bracket still open
                Lexeme::Eof => {
                    return Err(ParseError::new(ParseErrorKind::UnmatchedBrackets, open));
                }
                _ => elements.push(self.parse_noun()?),
            }
        }
        let close = self.current_span();
        self.advance(); // consume ']'

        if elements.len() < 2 {
            return Err(ParseError::new(
                ParseErrorKind::TooFewElements,
                open.merge(close),
            ));
        }

        // Right fold: [a b c] == [a [b c]]
        let mut noun = elements.pop().unwrap();
        while let Some(head) = elements.pop() {
            noun = Noun::cell(head, noun);
        }
        Ok(noun)
    }

    fn current(&self) -> Lexeme {
        self.tokens[self.pos].node
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn advance(&mut self) {
        // The token stream always ends in Eof; never step past it
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn error_here(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.current_span())
    }
}

/// Parse noun notation into a [`Noun`].
pub fn parse(source: &str) -> Result<Noun, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse()
}
