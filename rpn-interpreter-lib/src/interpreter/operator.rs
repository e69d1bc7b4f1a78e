use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Returned when a token is not one of the recognized operator symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Add,
        BinaryOperator::Subtract,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
    ];

    /// Classifies a token as an operator.
    ///
    /// Only an exact match of `+`, `-`, `*` or `/` is an operator,
    /// anything else (surrounding whitespace included) yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn_interpreter::interpreter::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol("*"), Some(BinaryOperator::Multiply));
    /// assert_eq!(BinaryOperator::from_symbol("_"), None);
    /// ```
    pub fn from_symbol(token: &str) -> Option<BinaryOperator> {
        match token {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }

    /// Applies the operator as `left <op> right`.
    ///
    /// Division by zero follows IEEE-754 and produces an infinity or NaN.
    pub fn evaluate(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl str::FromStr for BinaryOperator {
    type Err = UnknownOperator;

    fn from_str(token: &str) -> Result<BinaryOperator, Self::Err> {
        BinaryOperator::from_symbol(token).ok_or_else(|| UnknownOperator(token.to_string()))
    }
}

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not one of +, -, *, /", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn every_operator_symbol_classifies_to_itself() {
        for operator in BinaryOperator::ALL {
            assert_eq!(BinaryOperator::from_symbol(operator.symbol()), Some(operator));
        }
    }

    #[parameterized(token = { "_", "", " +", "+ ", "++", "x", "^", "0" })]
    fn non_operator_tokens_are_not_classified(token: &str) {
        assert_eq!(BinaryOperator::from_symbol(token), None)
    }

    #[test]
    fn from_str_reports_unknown_token() {
        let error = "%".parse::<BinaryOperator>().unwrap_err();
        assert_eq!(error, UnknownOperator("%".to_string()))
    }

    #[parameterized(
        operator = {
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
        },
        expected = { 14.0, 6.0, 40.0, 2.5 }
    )]
    fn operator_applies_left_to_right(operator: BinaryOperator, expected: f64) {
        assert_eq!(operator.evaluate(10.0, 4.0), expected)
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(BinaryOperator::Divide.evaluate(1.0, 0.0), f64::INFINITY);
        assert!(BinaryOperator::Divide.evaluate(0.0, 0.0).is_nan());
    }
}
