//! Error taxonomy: parse failures carry a source span, evaluation
//! failures describe which reduction rule had no match.
//!
//! No component recovers or retries internally — reduction is
//! deterministic, so every error propagates unchanged to the caller of
//! `parse` / `reduce` / `fas` / `hax`.

use crate::diagnostic::Diagnostic;
use crate::span::Span;
use thiserror::Error;

/// Why a piece of notation failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unmatched brackets")]
    UnmatchedBrackets,
    #[error("a cell needs at least two elements")]
    TooFewElements,
    #[error("empty cell")]
    EmptyCell,
    #[error("not an atom or cell")]
    InvalidToken,
}

/// A parse failure, located in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Bridge into the ariadne-backed renderer.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.to_string(), self.span);
        match self.kind {
            ParseErrorKind::UnmatchedBrackets => {
                diag.with_help("every '[' must be closed by a matching ']'".to_string())
            }
            ParseErrorKind::TooFewElements | ParseErrorKind::EmptyCell => {
                diag.with_help("a cell is a pair, e.g. [1 2]; longer lists nest right".to_string())
            }
            ParseErrorKind::InvalidToken => {
                diag.with_help("a noun is a decimal atom or a bracketed cell".to_string())
            }
        }
    }
}

/// Why a reduction got stuck.
///
/// `AtomOverflow` is the declared bound on this implementation's atoms:
/// incrementing past `u64::MAX` fails rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expected a cell, got an atom")]
    NotACell,
    #[error("{0}")]
    TypeMismatch(&'static str),
    #[error("tree address 0 is undefined")]
    InvalidAddress,
    #[error("unsupported opcode {0}")]
    UnsupportedOpcode(u64),
    #[error("increment overflowed the 64-bit atom bound")]
    AtomOverflow,
}
