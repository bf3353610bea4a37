use pest::iterators::{Pair, Pairs};
use pest::Parser;

// Declare submodules
pub mod errors;
pub mod reader;

// Import items from submodules
pub use errors::ParseError;
pub use reader::{read_program, read_value};

// Define the parser struct using the grammar file
#[derive(pest_derive::Parser)]
#[grammar = "lispy.pest"] // Path relative to src/
pub struct LispyParser;

// --- Main Parsing Functions ---

/// Parse a full program: zero or more expressions anchored to the whole
/// input. The returned pairs hold a single `program` node.
pub fn parse(input: &str) -> Result<Pairs<'_, Rule>, ParseError> {
    LispyParser::parse(Rule::program, input).map_err(ParseError::from)
}

/// Parse a single expression (useful for tests and simple evaluation).
///
/// `expr` is a silent rule, so the pair returned is the concrete
/// number/symbol/sexpr node. Trailing input past the first expression is
/// ignored here; use [`parse`] for whole-input anchoring.
pub fn parse_expression(input: &str) -> Result<Pair<'_, Rule>, ParseError> {
    let mut pairs = LispyParser::parse(Rule::expr, input).map_err(ParseError::from)?;
    pairs.next().ok_or(ParseError::EmptyInput)
}
