// Runtime module: the value model and the recursive evaluator.

pub mod evaluator;
pub mod values;

pub use evaluator::eval;
pub use values::Value;

use crate::parser;

/// Run one line of input through the whole pipeline: parse, read, eval,
/// print. Parse failures render the grammar diagnostic instead.
///
/// Stateless: there are no bindings and no environment, so every call
/// builds and consumes an independent value tree.
pub fn run(line: &str) -> String {
    match parser::parse(line) {
        Ok(pairs) => eval(parser::read_program(pairs)).to_string(),
        Err(e) => e.to_string(),
    }
}
