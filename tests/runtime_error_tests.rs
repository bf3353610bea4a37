// tests/runtime_error_tests.rs
// Error taxonomy and propagation rules: errors are values, the first error
// by position wins, and nothing is re-wrapped on the way out.

use lispy::run;
use pretty_assertions::assert_eq;

#[test]
fn division_by_zero() {
    assert_eq!(run("(/ 5 0)"), "Error: Division by zero!");
    assert_eq!(run("(% 5 0)"), "Error: Division by zero!");
}

#[test]
fn division_by_zero_propagates_from_any_position() {
    assert_eq!(run("(+ 1 (/ 5 0) 2)"), "Error: Division by zero!");
    assert_eq!(run("(* (/ 5 0) 3)"), "Error: Division by zero!");
    assert_eq!(run("(- 1 2 (/ 5 0))"), "Error: Division by zero!");
}

#[test]
fn division_by_zero_stops_the_fold_before_later_operands() {
    // The trailing operands are discarded, not folded.
    assert_eq!(run("(/ 8 0 2)"), "Error: Division by zero!");
}

#[test]
fn non_number_operands_are_rejected() {
    assert_eq!(run("(+ 1 ())"), "Error: Cannot operate on non-number!");
    // `(+)` evaluates to the symbol `+`, which is not a number.
    assert_eq!(run("(+ 1 (+))"), "Error: Cannot operate on non-number!");
}

#[test]
fn non_symbol_head_is_rejected() {
    assert_eq!(run("(1 2 3)"), "Error: S-expression does not start with symbol!");
    assert_eq!(run("(() 1 2)"), "Error: S-expression does not start with symbol!");
}

#[test]
fn first_error_by_position_wins() {
    // The child list errors before the division does.
    assert_eq!(
        run("(+ (1 2) (/ 1 0))"),
        "Error: S-expression does not start with symbol!"
    );
    assert_eq!(run("(+ (/ 1 0) (1 2))"), "Error: Division by zero!");
}

#[test]
fn out_of_range_literals_error_during_reading() {
    assert_eq!(run("99999999999999999999"), "Error: invalid number");
    assert_eq!(run("(+ 1 99999999999999999999)"), "Error: invalid number");
}

#[test]
fn errors_propagate_unchanged_through_nesting() {
    assert_eq!(run("(+ 1 (* 2 (- 3 (/ 4 0))))"), "Error: Division by zero!");
}

#[test]
fn parse_failures_render_the_grammar_diagnostic() {
    let msg = run("(+ 1");
    assert!(msg.contains("expected"), "unexpected diagnostic: {}", msg);

    let msg = run("(+ 1 foo)");
    assert!(msg.contains("expected"), "unexpected diagnostic: {}", msg);
}

#[test]
fn a_bad_line_does_not_poison_the_next_one() {
    assert!(run("(+ 1").contains("expected"));
    assert_eq!(run("(+ 1 2)"), "3");
}
