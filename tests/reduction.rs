//! End-to-end scenarios through the public surface: text in, noun out.

use nock::{EvalError, Noun, ParseErrorKind};
use pretty_assertions::assert_eq;

/// Helper: parse both nouns and reduce.
fn eval(subject: &str, formula: &str) -> Result<Noun, EvalError> {
    let subject = nock::parse(subject).expect("subject should parse");
    let formula = nock::parse(formula).expect("formula should parse");
    nock::reduce(&subject, &formula)
}

// ── notation ──

#[test]
fn test_parse_pair() {
    assert_eq!(
        nock::parse("[1 2]").unwrap(),
        Noun::cell(Noun::atom(1), Noun::atom(2))
    );
}

#[test]
fn test_parse_list_sugar_folds_right() {
    assert_eq!(
        nock::parse("[1 2 3]").unwrap(),
        Noun::cell(Noun::atom(1), Noun::cell(Noun::atom(2), Noun::atom(3)))
    );
    assert_eq!(
        nock::parse("[1 2 3]").unwrap(),
        nock::parse("[1 [2 3]]").unwrap()
    );
}

#[test]
fn test_parse_rejects_single_element_cell() {
    let err = nock::parse("[1]").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooFewElements);
}

#[test]
fn test_render_inverts_parse() {
    for text in ["42", "[1 2]", "[1 [2 3]]", "[[4 5] [6 [14 15]]]"] {
        let noun = nock::parse(text).unwrap();
        assert_eq!(nock::render(&noun), text);
        assert_eq!(nock::parse(&nock::render(&noun)).unwrap(), noun);
    }
}

// ── reduction ──

#[test]
fn test_slot_lookup() {
    assert_eq!(eval("[1 2]", "[0 3]").unwrap(), Noun::atom(2));
    assert_eq!(eval("[[4 5] [6 14 15]]", "[0 7]").unwrap(), nock::parse("[14 15]").unwrap());
}

#[test]
fn test_increment_slot() {
    assert_eq!(eval("41", "[4 0 1]").unwrap(), Noun::atom(42));
}

#[test]
fn test_cell_test_of_slot() {
    // *[0 [3 [0 1]]]: slot 1 of an atom subject is an atom, ? gives 1
    assert_eq!(eval("0", "[3 0 1]").unwrap(), Noun::atom(1));
}

#[test]
fn test_equality_of_slots() {
    assert_eq!(eval("[42 42]", "[5 [0 2] [0 3]]").unwrap(), Noun::atom(0));
    assert_eq!(eval("[42 43]", "[5 [0 2] [0 3]]").unwrap(), Noun::atom(1));
}

#[test]
fn test_branch_selects_and_reduces() {
    assert_eq!(eval("42", "[6 [1 0] [4 0 1] [1 233]]").unwrap(), Noun::atom(43));
    assert_eq!(eval("42", "[6 [1 1] [4 0 1] [1 233]]").unwrap(), Noun::atom(233));
}

#[test]
fn test_branch_condition_from_subject() {
    // Condition reads slot 2; [0 x] subjects pick the then/else branch
    assert_eq!(eval("[0 7]", "[6 [0 2] [0 3] [1 99]]").unwrap(), Noun::atom(7));
    assert_eq!(eval("[1 7]", "[6 [0 2] [0 3] [1 99]]").unwrap(), Noun::atom(99));
}

#[test]
fn test_autocons_builds_pairs() {
    // Swap a pair: *[[1 2] [[0 3] [0 2]]] -> [2 1]
    assert_eq!(eval("[1 2]", "[[0 3] [0 2]]").unwrap(), nock::parse("[2 1]").unwrap());
}

#[test]
fn test_evaluate_composes() {
    // *[1 [2 [1 1] [1 [1 7]]]]: build subject 1 and formula [1 7], run them
    assert_eq!(eval("1", "[2 [1 1] [1 [1 7]]]").unwrap(), Noun::atom(7));
}

#[test]
fn test_unsupported_opcode() {
    assert_eq!(eval("0", "[9 0]"), Err(EvalError::UnsupportedOpcode(9)));
    assert_eq!(eval("0", "[8 [1 2] [0 1]]"), Err(EvalError::UnsupportedOpcode(8)));
}

#[test]
fn test_atom_formula_fails() {
    assert_eq!(eval("[1 2]", "3"), Err(EvalError::NotACell));
}
