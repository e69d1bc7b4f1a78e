use crate::interpreter::error::ParseErrorKind;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A classified part of a program: either an operand or an operator.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Token::Number(value)
    }
}

impl From<BinaryOperator> for Token {
    fn from(operator: BinaryOperator) -> Self {
        Token::Operator(operator)
    }
}

impl str::FromStr for Token {
    type Err = ParseErrorKind;

    /// Operators take priority, so `-` is always subtraction and never a sign.
    fn from_str(input: &str) -> Result<Token, Self::Err> {
        if let Some(operator) = BinaryOperator::from_symbol(input) {
            return Ok(Token::Operator(operator));
        }
        match parse_number_prefix(input) {
            Some(value) => Ok(Token::Number(value)),
            None => Err(ParseErrorKind::BadToken(input.to_string())),
        }
    }
}

/// Parses the longest decimal number at the start of `text`,
/// ignoring leading whitespace and anything after the number.
///
/// Accepts an optional sign, digits with an optional fraction (`1.`, `.5`),
/// and an exponent only when it has digits (`1e` reads as `1`).
/// Values that overflow to infinity are rejected.
pub(crate) fn parse_number_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
