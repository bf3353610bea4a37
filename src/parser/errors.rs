use super::Rule;
use thiserror::Error;

/// Errors produced while turning source text into a parse tree.
///
/// Evaluation errors never appear here; those travel through the value
/// model as `Value::Error`. This type only covers the grammar boundary.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Grammar error from pest, rendered with pest's own span/caret
    /// formatting so the REPL can print it verbatim.
    #[error("{0}")]
    Pest(#[from] pest::error::Error<Rule>),

    /// The input contained no expression at all.
    #[error("no expression found in input")]
    EmptyInput,
}
