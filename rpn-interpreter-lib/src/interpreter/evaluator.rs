use crate::interpreter::error::EvalError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::program::Program;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;
use std::collections::VecDeque;
use std::fmt;
use std::fmt::Formatter;

/// Evaluates a program to a single value.
///
/// Operators take their right operand from the top of the stack and their
/// left operand from beneath it, so `3 4 -` is `3 - 4`.
///
/// # Arguments
///
/// * `program`: The program to run. It is consumed by the evaluation.
///
/// returns: The value on top of the stack once the program is exhausted.
///
/// # Examples
///
/// ```
/// use rpn_interpreter::interpreter::evaluator::evaluate;
/// use rpn_interpreter::interpreter::parser::parse_program;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let program = parse_program("3 4 5 * -")?;
/// assert_eq!(evaluate(program)?, -17.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(program: Program) -> Result<f64, EvalError> {
    let mut evaluator = Evaluator::new(program);
    debug!("eval: {}", evaluator);
    while evaluator.step()? == Progress::Running {}
    evaluator.finish()
}

/// Whether there is anything left to evaluate after a step.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Progress {
    Running,
    Exhausted,
}

/// Sole owner of the evaluation state: what is left of the program,
/// and the operand stack (top at the end).
#[derive(Debug, Clone)]
pub struct Evaluator {
    remaining: VecDeque<Token>,
    stack: Vec<f64>,
}

impl Evaluator {
    pub fn new(program: Program) -> Evaluator {
        Evaluator {
            remaining: program.into(),
            stack: Vec::new(),
        }
    }

    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// Executes the next token of the program.
    ///
    /// On an operator without two operands, the operator is put back in
    /// front of the remaining program before failing.
    pub fn step(&mut self) -> Result<Progress, EvalError> {
        debug!("step: {}", self);
        match self.remaining.pop_front() {
            None => {}
            Some(Token::Number(value)) => self.stack.push(value),
            Some(Token::Operator(operator)) => self.apply(operator)?,
        }
        if self.remaining.is_empty() {
            Ok(Progress::Exhausted)
        } else {
            Ok(Progress::Running)
        }
    }

    fn apply(&mut self, operator: BinaryOperator) -> Result<(), EvalError> {
        let operands = self.stack.pop().zip(self.stack.pop());
        match operands {
            Some((right, left)) => {
                self.stack.push(operator.evaluate(left, right));
                Ok(())
            }
            None => {
                self.remaining.push_front(Token::Operator(operator));
                Err(EvalError::InsufficientOperands {
                    remaining: std::mem::take(&mut self.remaining).into(),
                })
            }
        }
    }

    /// Takes the result off the top of the stack.
    pub fn finish(mut self) -> Result<f64, EvalError> {
        match self.stack.pop() {
            Some(value) => {
                debug!("done: {}", value);
                Ok(value)
            }
            None => Err(EvalError::EmptyStack {
                remaining: self.remaining.into(),
            }),
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step{{[{}], [{}]}}",
            self.remaining.iter().format(","),
            self.stack.iter().rev().format(",")
        )
    }
}
