use super::Rule;
use crate::runtime::values::Value;
use pest::iterators::{Pair, Pairs};

/// Convert a parsed program into its root expression.
///
/// The root collects every top-level expression into one `Sexpr`, so `5`
/// reads as `(5)` and reduces back to `5` through the evaluator's
/// single-child rule, while empty input reads as `()`.
pub fn read_program(mut pairs: Pairs<Rule>) -> Value {
    let mut root = Value::sexpr();
    let program = match pairs.next() {
        Some(pair) => pair,
        None => return root,
    };
    for pair in program.into_inner() {
        // EOI is a structural artifact of the anchored grammar, not content.
        if pair.as_rule() == Rule::EOI {
            continue;
        }
        root.push(read_value(pair));
    }
    root
}

/// Convert one parse-tree node into a `Value`, recursively.
pub fn read_value(pair: Pair<Rule>) -> Value {
    match pair.as_rule() {
        Rule::number => read_number(&pair),
        Rule::symbol => Value::symbol(pair.as_str()),
        Rule::sexpr => {
            let mut list = Value::sexpr();
            for child in pair.into_inner() {
                list.push(read_value(child));
            }
            list
        }
        // The grammar produces no other named rules below `program`.
        other => Value::error(format!("unexpected parse node: {:?}", other)),
    }
}

fn read_number(pair: &Pair<Rule>) -> Value {
    // str::parse rejects out-of-range literals, so the representable
    // range is exactly i64.
    match pair.as_str().parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => Value::error("invalid number"),
    }
}
