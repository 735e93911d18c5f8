//! An interpreter for the six-opcode Nock combinator calculus.
//!
//! Everything is a [`Noun`]: an atom (a `u64` natural) or a cell (an
//! ordered pair of nouns). A reduction takes a subject noun and a
//! formula noun and rewrites `*[subject formula]` to a result noun.
//!
//! ```
//! use nock::Noun;
//!
//! // *[[1 2] [0 3]] — slot 3 of the subject
//! let subject = nock::parse("[1 2]").unwrap();
//! let formula = nock::parse("[0 3]").unwrap();
//! assert_eq!(nock::reduce(&subject, &formula).unwrap(), Noun::atom(2));
//! assert_eq!(nock::render(&subject), "[1 2]");
//! ```

pub mod diagnostic;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod noun;
pub mod parser;
pub mod span;

pub use error::{EvalError, ParseError, ParseErrorKind};
pub use eval::{Evaluator, Step, Trace};
pub use noun::Noun;
pub use span::Span;

pub use eval::{fas, hax, lus, reduce, tis, wut};
pub use parser::parse;

/// Render a noun in the canonical notation: `N` for atoms, `[H T]` for
/// cells — always exactly two elements per bracket pair, never the
/// multi-element input sugar.
pub fn render(noun: &Noun) -> String {
    noun.to_string()
}
