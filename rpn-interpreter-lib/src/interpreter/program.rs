use crate::interpreter::error::ParseError;
use crate::interpreter::parser::parse_program;
use crate::interpreter::token::Token;
use itertools::Itertools;
use std::collections::VecDeque;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// An ordered sequence of tokens, evaluated left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program(Vec<Token>);

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn push(&mut self, token: Token) {
        self.0.push(token)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Token>> for Program {
    fn from(tokens: Vec<Token>) -> Self {
        Program(tokens)
    }
}

impl From<VecDeque<Token>> for Program {
    fn from(tokens: VecDeque<Token>) -> Self {
        Program(tokens.into())
    }
}

impl From<Program> for VecDeque<Token> {
    fn from(program: Program) -> Self {
        program.0.into()
    }
}

impl FromIterator<Token> for Program {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Program(iter.into_iter().collect())
    }
}

impl IntoIterator for Program {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Renders the program as a line that parses back into the same program.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(" "))
    }
}

impl str::FromStr for Program {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Program, Self::Err> {
        parse_program(line)
    }
}
