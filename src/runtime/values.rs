// Value model for the lispy calculator.
// Parsed expressions and evaluation results share this one type; errors are
// values too, so they can ride the same tree they replace.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// 64-bit integer; arithmetic wraps at the i64 boundary.
    Number(i64),
    /// Operator name, produced by the reader and consumed by the evaluator.
    Symbol(String),
    /// Ordered list of owned children; the only recursive variant.
    Sexpr(Vec<Value>),
    /// Terminal evaluation error; propagates to the top unchanged.
    Error(String),
}

impl Value {
    pub fn number(n: i64) -> Value {
        Value::Number(n)
    }

    pub fn symbol(name: impl Into<String>) -> Value {
        Value::Symbol(name.into())
    }

    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    /// An expression with zero children.
    pub fn sexpr() -> Value {
        Value::Sexpr(Vec::new())
    }

    /// Append a child, taking ownership of it.
    ///
    /// The reader and evaluator only ever call this on `Sexpr`; calling it
    /// on a leaf is a logic error.
    pub fn push(&mut self, child: Value) {
        match self {
            Value::Sexpr(cell) => cell.push(child),
            _ => unreachable!("push on non-expression value"),
        }
    }

    /// Remove and return the child at `index`, shifting the remaining
    /// children left so their order is preserved.
    pub fn pop(&mut self, index: usize) -> Value {
        match self {
            Value::Sexpr(cell) => cell.remove(index),
            _ => unreachable!("pop on non-expression value"),
        }
    }

    /// Remove the child at `index` and drop the rest of the expression.
    pub fn take(self, index: usize) -> Value {
        match self {
            Value::Sexpr(mut cell) => cell.remove(index),
            _ => unreachable!("take on non-expression value"),
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Symbol(_) => "symbol",
            Value::Sexpr(_) => "s-expression",
            Value::Error(_) => "error",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Error(e) => write!(f, "Error: {}", e),
            Value::Sexpr(cell) => {
                let items: Vec<String> = cell.iter().map(|v| v.to_string()).collect();
                write!(f, "({})", items.join(" "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_preserve_order() {
        let mut expr = Value::sexpr();
        expr.push(Value::number(1));
        expr.push(Value::symbol("+"));
        expr.push(Value::number(2));

        assert_eq!(expr.pop(1), Value::symbol("+"));
        assert_eq!(expr, Value::Sexpr(vec![Value::number(1), Value::number(2)]));
    }

    #[test]
    fn take_discards_the_container() {
        let mut expr = Value::sexpr();
        expr.push(Value::number(10));
        expr.push(Value::error("boom"));
        expr.push(Value::number(20));

        assert_eq!(expr.take(1), Value::error("boom"));
    }

    #[test]
    fn display_renders_nested_expressions() {
        let mut inner = Value::sexpr();
        inner.push(Value::symbol("*"));
        inner.push(Value::number(2));
        inner.push(Value::number(3));

        let mut outer = Value::sexpr();
        outer.push(Value::symbol("+"));
        outer.push(Value::number(1));
        outer.push(inner);

        assert_eq!(outer.to_string(), "(+ 1 (* 2 3))");
        assert_eq!(Value::sexpr().to_string(), "()");
        assert_eq!(Value::error("invalid number").to_string(), "Error: invalid number");
    }
}
