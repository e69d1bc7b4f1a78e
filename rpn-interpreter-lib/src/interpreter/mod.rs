pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
mod program;
mod token;

pub use error::{EvalError, LineError, ParseError, ParseErrorKind};
pub use operator::{BinaryOperator, UnknownOperator};
pub use program::Program;
pub use token::Token;

use crate::interpreter::evaluator::evaluate;
use crate::interpreter::parser::parse_program;
use log::debug;

/// Parses and evaluates a single line of postfix arithmetic.
///
/// # Arguments
///
/// * `line`: Space separated numbers and operators, e.g. `3 4 +`.
///
/// returns: The value the line evaluates to.
///
/// # Examples
///
/// ```
/// use rpn_interpreter::interpreter::interpret;
///
/// assert_eq!(interpret("3 4 - 5 +"), Ok(4.0));
/// assert!(interpret("3 four +").is_err());
/// ```
pub fn interpret(line: &str) -> Result<f64, LineError> {
    let program = parse_program(line)?;
    debug!("prog: {}", program);
    let value = evaluate(program)?;
    Ok(value)
}
