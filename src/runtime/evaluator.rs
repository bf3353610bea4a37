// Recursive evaluator: reduces an s-expression tree to a number or an error.
// Every function here consumes its argument; whatever is not returned is
// dropped, so error paths cannot leak partial trees.

use crate::runtime::values::Value;

/// Evaluate a value, consuming it. Everything except an s-expression
/// evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(cell) => eval_sexpr(cell),
        other => other,
    }
}

fn eval_sexpr(cell: Vec<Value>) -> Value {
    // Evaluate children left to right.
    let mut cell: Vec<Value> = cell.into_iter().map(eval).collect();

    // First error by position wins; its siblings go down with the container.
    if let Some(i) = cell.iter().position(Value::is_err) {
        return cell.swap_remove(i);
    }

    // The empty expression evaluates to itself.
    if cell.is_empty() {
        return Value::Sexpr(cell);
    }

    // A single child passes through and the wrapper is discarded. This is
    // also how `(+)` reduces to the bare symbol `+`.
    if cell.len() == 1 {
        return cell.remove(0);
    }

    let head = cell.remove(0);
    match head {
        Value::Symbol(op) => apply_op(cell, &op),
        _ => Value::error("S-expression does not start with symbol!"),
    }
}

/// Fold the operands under one operator, left to right.
fn apply_op(mut args: Vec<Value>, op: &str) -> Value {
    if !args.iter().all(|v| matches!(v, Value::Number(_))) {
        return Value::error("Cannot operate on non-number!");
    }

    let mut acc = match args.remove(0) {
        Value::Number(n) => n,
        _ => unreachable!("operands checked above"),
    };

    // Unary negation: `-` applied to a single operand.
    if op == "-" && args.is_empty() {
        return Value::number(acc.wrapping_neg());
    }

    for arg in args {
        let y = match arg {
            Value::Number(n) => n,
            _ => unreachable!("operands checked above"),
        };
        acc = match op {
            "+" => acc.wrapping_add(y),
            "-" => acc.wrapping_sub(y),
            "*" => acc.wrapping_mul(y),
            // Truncating division/remainder; the zero guard covers both
            // since `i64 % 0` panics just like `i64 / 0`. The wrapping
            // forms also absorb `i64::MIN / -1`.
            "/" | "%" => {
                if y == 0 {
                    return Value::error("Division by zero!");
                }
                if op == "/" {
                    acc.wrapping_div(y)
                } else {
                    acc.wrapping_rem(y)
                }
            }
            _ => return Value::error(format!("Unknown operator: {}", op)),
        };
    }

    Value::number(acc)
}
