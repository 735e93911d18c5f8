//! The noun — the universal value of the Nock calculus.
//!
//! All data is a noun: either an atom (an unsigned integer) or a cell
//! (an ordered pair of nouns). Formulas and subjects are not distinct
//! types; a formula is just a noun interpreted as a program.

use std::fmt;

/// A Nock noun: atom or cell.
///
/// Nouns are immutable once constructed. Atoms are bounded at `u64`;
/// this is a declared implementation limit, not arbitrary precision
/// (see `EvalError::AtomOverflow` for the increment-at-bound behavior).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Noun {
    /// An atom — a natural number.
    Atom(u64),
    /// A cell — an ordered pair `[head tail]`.
    Cell(Box<Noun>, Box<Noun>),
}

impl Noun {
    /// Create an atom noun.
    pub fn atom(value: u64) -> Self {
        Noun::Atom(value)
    }

    /// Create a cell noun `[a b]`.
    pub fn cell(head: Noun, tail: Noun) -> Self {
        Noun::Cell(Box::new(head), Box::new(tail))
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Noun::Atom(_))
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Noun::Cell(_, _))
    }

    /// The head and tail of a cell, or `None` for an atom.
    pub fn as_cell(&self) -> Option<(&Noun, &Noun)> {
        match self {
            Noun::Cell(head, tail) => Some((head, tail)),
            Noun::Atom(_) => None,
        }
    }

    /// The value of an atom, or `None` for a cell.
    pub fn as_atom(&self) -> Option<u64> {
        match self {
            Noun::Atom(value) => Some(*value),
            Noun::Cell(_, _) => None,
        }
    }

    /// Formula: `[0 axis]` — slot lookup in the subject tree.
    pub fn slot(axis: u64) -> Self {
        Noun::cell(Noun::atom(0), Noun::atom(axis))
    }

    /// Formula: `[1 constant]` — produce a constant, ignore the subject.
    pub fn constant(value: Noun) -> Self {
        Noun::cell(Noun::atom(1), value)
    }

    /// Formula: `[2 subject formula]` — evaluate formula against subject.
    pub fn evaluate(subject: Noun, formula: Noun) -> Self {
        Noun::cell(Noun::atom(2), Noun::cell(subject, formula))
    }

    /// Formula: `[3 formula]` — cell test (0 if cell, 1 if atom).
    pub fn cell_test(formula: Noun) -> Self {
        Noun::cell(Noun::atom(3), formula)
    }

    /// Formula: `[4 formula]` — increment an atom result.
    pub fn increment(formula: Noun) -> Self {
        Noun::cell(Noun::atom(4), formula)
    }

    /// Formula: `[5 a b]` — structural equality test.
    pub fn equals(a: Noun, b: Noun) -> Self {
        Noun::cell(Noun::atom(5), Noun::cell(a, b))
    }

    /// Formula: `[6 cond then else]` — conditional branch.
    pub fn branch(cond: Noun, then: Noun, els: Noun) -> Self {
        Noun::cell(Noun::atom(6), Noun::cell(cond, Noun::cell(then, els)))
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Noun::Atom(v) => write!(f, "{}", v),
            Noun::Cell(h, t) => write!(f, "[{} {}]", h, t),
        }
    }
}
