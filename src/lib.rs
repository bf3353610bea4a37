// Lispy - a minimal interactive s-expression calculator.
// Pipeline: input text -> pest parse tree -> Value -> eval -> printed Value.

pub mod input_handling;
pub mod parser;
pub mod runtime;

// Re-export the key components so the binary and tests can reach them
// without spelling out the module paths.
pub use parser::{parse, parse_expression, read_program, read_value, ParseError};
pub use runtime::{eval, run, Value};
