//! The reduction engine — `*` (nock) and the operators it composes.
//!
//! Reduction is purely functional: every rule is a function of its noun
//! arguments, recursion depth is bounded only by formula nesting, and a
//! failing sub-reduction aborts the whole enclosing reduction. The engine
//! is silent by default; attach a [`Trace`] to observe each step.
//!
//! Supported formula shapes:
//!
//! - `*[a [b c] d]` — autocons: both formulas against the same subject
//! - `*[a 0 b]` — slot: `/[b a]`
//! - `*[a 1 b]` — constant: `b`
//! - `*[a 2 b c]` — evaluate: `*[*[a b] *[a c]]`
//! - `*[a 3 b]` — cell test: `?*[a b]`
//! - `*[a 4 b]` — increment: `+*[a b]`
//! - `*[a 5 b c]` — equality: `=[*[a b] *[a c]]`
//! - `*[a 6 b c d]` — branch, via the macro expansion
//!
//! Opcodes past 6 (compose, push, invoke, edit, hint) are out of scope
//! and fail with `UnsupportedOpcode`.

use crate::error::EvalError;
use crate::noun::Noun;

/// One observable step of a reduction.
#[derive(Clone, Copy, Debug)]
pub enum Step<'a> {
    /// `*[subject formula]` was entered.
    Reduce {
        subject: &'a Noun,
        formula: &'a Noun,
    },
    /// `/[axis tree]` was entered.
    Fas { axis: &'a Noun, tree: &'a Noun },
    /// `#[axis replacement tree]` was entered.
    Hax {
        axis: &'a Noun,
        replacement: &'a Noun,
        tree: &'a Noun,
    },
    /// `?noun` was computed.
    Wut(&'a Noun),
    /// `+noun` was computed.
    Lus(&'a Noun),
    /// `=[a b]` was computed.
    Tis(&'a Noun, &'a Noun),
    /// The rewrite rule that fired, in calculus notation.
    Rule(&'static str),
}

/// Observer hook for reduction steps.
///
/// The engine itself never prints; callers that want the classic
/// step-by-step trace attach an implementation of this trait.
pub trait Trace {
    fn step(&mut self, step: &Step<'_>);
}

/// The interpreter. Holds nothing but the optional trace hook, so a
/// fresh one per call is free.
pub struct Evaluator<'a> {
    trace: Option<&'a mut dyn Trace>,
}

impl Default for Evaluator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Evaluator<'a> {
    pub fn new() -> Self {
        Self { trace: None }
    }

    pub fn with_trace(trace: &'a mut dyn Trace) -> Self {
        Self { trace: Some(trace) }
    }

    fn emit(&mut self, step: Step<'_>) {
        if let Some(trace) = self.trace.as_mut() {
            trace.step(&step);
        }
    }

    fn rule(&mut self, rule: &'static str) {
        self.emit(Step::Rule(rule));
    }

    /// `*` — reduce `formula` against `subject`.
    pub fn reduce(&mut self, subject: &Noun, formula: &Noun) -> Result<Noun, EvalError> {
        self.emit(Step::Reduce { subject, formula });

        // A formula is always a cell: opcode-or-subformula plus argument.
        let (head, tail) = formula.as_cell().ok_or(EvalError::NotACell)?;

        let opcode = match head {
            // Autocons: a cell head is a formula in its own right; both
            // formulas apply to the same subject and the results pair up.
            Noun::Cell(_, _) => {
                self.rule("*[a [b c] d] -> [*[a b c] *[a d]]");
                let left = self.reduce(subject, head)?;
                let right = self.reduce(subject, tail)?;
                return Ok(Noun::cell(left, right));
            }
            Noun::Atom(op) => *op,
        };

        match opcode {
            0 => {
                self.rule("*[a 0 b] -> /[b a]");
                self.fas(tail, subject)
            }
            1 => {
                self.rule("*[a 1 b] -> b");
                Ok(tail.clone())
            }
            2 => {
                let (b, c) = tail
                    .as_cell()
                    .ok_or(EvalError::TypeMismatch("opcode 2 expects a [b c] argument"))?;
                self.rule("*[a 2 b c] -> *[*[a b] *[a c]]");
                let new_subject = self.reduce(subject, b)?;
                let new_formula = self.reduce(subject, c)?;
                self.reduce(&new_subject, &new_formula)
            }
            3 => {
                self.rule("*[a 3 b] -> ?*[a b]");
                let result = self.reduce(subject, tail)?;
                Ok(self.wut(&result))
            }
            4 => {
                self.rule("*[a 4 b] -> +*[a b]");
                let result = self.reduce(subject, tail)?;
                self.lus(&result)
            }
            5 => {
                let (b, c) = tail
                    .as_cell()
                    .ok_or(EvalError::TypeMismatch("opcode 5 expects a [b c] argument"))?;
                self.rule("*[a 5 b c] -> =[*[a b] *[a c]]");
                let left = self.reduce(subject, b)?;
                let right = self.reduce(subject, c)?;
                Ok(self.tis(&left, &right))
            }
            6 => {
                let (cond, branches) = tail.as_cell().ok_or(EvalError::TypeMismatch(
                    "opcode 6 expects a [cond then else] argument",
                ))?;
                if branches.is_atom() {
                    return Err(EvalError::TypeMismatch(
                        "opcode 6 expects a [cond then else] argument",
                    ));
                }
                self.rule("*[a 6 b c d] -> *[a *[[c d] 0 *[[2 3] 0 *[a 4 4 b]]]]");
                // The macro expansion: bump the 0/1 condition to an axis
                // into [2 3], pick the branch formula by that axis, then
                // reduce the picked branch against the original subject.
                // A non-boolean condition dies in the axis pick.
                let bumped = self.reduce(
                    subject,
                    &Noun::increment(Noun::increment(cond.clone())),
                )?;
                let pick = self.reduce(
                    &Noun::cell(Noun::atom(2), Noun::atom(3)),
                    &Noun::cell(Noun::atom(0), bumped),
                )?;
                let branch = self.reduce(branches, &Noun::cell(Noun::atom(0), pick))?;
                self.reduce(subject, &branch)
            }
            op => Err(EvalError::UnsupportedOpcode(op)),
        }
    }

    /// `/` — read the subtree of `tree` at `axis`.
    ///
    /// Axis 1 is the whole tree; `2n` descends into the head, `2n+1`
    /// into the tail. Axis 0 is undefined.
    pub fn fas(&mut self, axis: &Noun, tree: &Noun) -> Result<Noun, EvalError> {
        self.emit(Step::Fas { axis, tree });

        let axis = axis
            .as_atom()
            .ok_or(EvalError::TypeMismatch("address must be an atom"))?;

        match axis {
            0 => Err(EvalError::InvalidAddress),
            1 => {
                self.rule("/[1 a] -> a");
                Ok(tree.clone())
            }
            2 => {
                self.rule("/[2 a b] -> a");
                tree.as_cell()
                    .map(|(head, _)| head.clone())
                    .ok_or(EvalError::NotACell)
            }
            3 => {
                self.rule("/[3 a b] -> b");
                tree.as_cell()
                    .map(|(_, tail)| tail.clone())
                    .ok_or(EvalError::NotACell)
            }
            n if n % 2 == 0 => {
                self.rule("/[(a + a) b] -> /[2 /[a b]]");
                let inner = self.fas(&Noun::atom(n / 2), tree)?;
                self.fas(&Noun::atom(2), &inner)
            }
            n => {
                self.rule("/[(a + a + 1) b] -> /[3 /[a b]]");
                let inner = self.fas(&Noun::atom(n / 2), tree)?;
                self.fas(&Noun::atom(3), &inner)
            }
        }
    }

    /// `#` — a copy of `tree` with the subtree at `axis` replaced.
    ///
    /// The edit recurses toward the root: at each level the untouched
    /// sibling is read back with `fas` and paired with the replacement.
    pub fn hax(
        &mut self,
        axis: &Noun,
        replacement: &Noun,
        tree: &Noun,
    ) -> Result<Noun, EvalError> {
        self.emit(Step::Hax {
            axis,
            replacement,
            tree,
        });

        let axis = axis
            .as_atom()
            .ok_or(EvalError::TypeMismatch("address must be an atom"))?;

        match axis {
            0 => Err(EvalError::InvalidAddress),
            1 => {
                self.rule("#[1 a b] -> a");
                Ok(replacement.clone())
            }
            n if n % 2 == 0 => {
                self.rule("#[(a + a) b c] -> #[a [b /[(a + a + 1) c]] c]");
                let sibling = self.fas(&Noun::atom(n + 1), tree)?;
                self.hax(
                    &Noun::atom(n / 2),
                    &Noun::cell(replacement.clone(), sibling),
                    tree,
                )
            }
            n => {
                self.rule("#[(a + a + 1) b c] -> #[a [/[(a + a) c] b] c]");
                let sibling = self.fas(&Noun::atom(n - 1), tree)?;
                self.hax(
                    &Noun::atom(n / 2),
                    &Noun::cell(sibling, replacement.clone()),
                    tree,
                )
            }
        }
    }

    /// `?` — cell test: 0 for a cell, 1 for an atom. Total.
    pub fn wut(&mut self, noun: &Noun) -> Noun {
        self.emit(Step::Wut(noun));
        if noun.is_cell() {
            Noun::atom(0)
        } else {
            Noun::atom(1)
        }
    }

    /// `+` — successor of an atom. Cells have no successor, and the
    /// successor of `u64::MAX` is past the atom bound.
    pub fn lus(&mut self, noun: &Noun) -> Result<Noun, EvalError> {
        self.emit(Step::Lus(noun));
        match noun {
            Noun::Atom(value) => value
                .checked_add(1)
                .map(Noun::Atom)
                .ok_or(EvalError::AtomOverflow),
            Noun::Cell(_, _) => Err(EvalError::TypeMismatch("+ is undefined on cells")),
        }
    }

    /// `=` — deep structural equality: 0 if equal, 1 if not. Total.
    pub fn tis(&mut self, a: &Noun, b: &Noun) -> Noun {
        self.emit(Step::Tis(a, b));
        if a == b {
            Noun::atom(0)
        } else {
            Noun::atom(1)
        }
    }
}

/// `*[subject formula]` without tracing.
pub fn reduce(subject: &Noun, formula: &Noun) -> Result<Noun, EvalError> {
    Evaluator::new().reduce(subject, formula)
}

/// `/[axis tree]` without tracing.
pub fn fas(axis: &Noun, tree: &Noun) -> Result<Noun, EvalError> {
    Evaluator::new().fas(axis, tree)
}

/// `#[axis replacement tree]` without tracing.
pub fn hax(axis: &Noun, replacement: &Noun, tree: &Noun) -> Result<Noun, EvalError> {
    Evaluator::new().hax(axis, replacement, tree)
}

/// `?noun` without tracing.
pub fn wut(noun: &Noun) -> Noun {
    Evaluator::new().wut(noun)
}

/// `+noun` without tracing.
pub fn lus(noun: &Noun) -> Result<Noun, EvalError> {
    Evaluator::new().lus(noun)
}

/// `=[a b]` without tracing.
pub fn tis(a: &Noun, b: &Noun) -> Noun {
    Evaluator::new().tis(a, b)
}
