use crate::interpreter::program::Program;
use std::fmt;
use std::fmt::Formatter;

pub const BAD_TOKEN_MESSAGE: &str = "Bad token, not one of +, -, *, /";
pub const BINOP_ON_STACK_MESSAGE: &str = "Just a binop on the stack.";
pub const EMPTY_STACK_MESSAGE: &str = "Empty stack!";

/// Every error message an interpreter's output may contain.
///
/// Operand underflow is reported as an empty stack, so the binop message is
/// never printed here but is still accepted in output.
pub const ERROR_MESSAGES: [&str; 3] = [
    BAD_TOKEN_MESSAGE,
    BINOP_ON_STACK_MESSAGE,
    EMPTY_STACK_MESSAGE,
];

/// Why a single token could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Neither an operator nor a number. Holds the offending text.
    BadToken(String),
}

impl ParseErrorKind {
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::BadToken(_) => BAD_TOKEN_MESSAGE,
        }
    }
}

/// A line that could not be parsed, along with how far parsing got.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Everything successfully parsed before the bad token.
    pub parsed: Program,
    /// The tokens after the bad token, which were never looked at.
    pub rest: Vec<String>,
}

/// A program that could not be evaluated to a single value.
///
/// Both variants keep what was left of the program when evaluation stopped.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator was reached with fewer than two operands on the stack.
    /// The remaining program starts with that operator.
    /// Reported with the same message as [`EvalError::EmptyStack`].
    InsufficientOperands { remaining: Program },
    /// The program was exhausted without leaving a value on the stack.
    EmptyStack { remaining: Program },
}

impl EvalError {
    pub fn message(&self) -> &'static str {
        match self {
            EvalError::InsufficientOperands { .. } | EvalError::EmptyStack { .. } => {
                EMPTY_STACK_MESSAGE
            }
        }
    }

    pub fn remaining(&self) -> &Program {
        match self {
            EvalError::InsufficientOperands { remaining } | EvalError::EmptyStack { remaining } => {
                remaining
            }
        }
    }
}

/// Why a single line of input failed.
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    Parse(ParseError),
    Eval(EvalError),
}

impl LineError {
    pub fn message(&self) -> &'static str {
        match self {
            LineError::Parse(error) => error.kind.message(),
            LineError::Eval(error) => error.message(),
        }
    }
}

impl From<ParseError> for LineError {
    fn from(error: ParseError) -> Self {
        LineError::Parse(error)
    }
}

impl From<EvalError> for LineError {
    fn from(error: EvalError) -> Self {
        LineError::Eval(error)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ParseErrorKind {}

impl std::error::Error for ParseError {}

impl std::error::Error for EvalError {}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineError::Parse(error) => Some(error),
            LineError::Eval(error) => Some(error),
        }
    }
}
