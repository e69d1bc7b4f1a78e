use crate::interpreter::error::ParseError;
use crate::interpreter::lexer::tokenize;
use crate::interpreter::program::Program;
use crate::interpreter::token::Token;
use log::debug;

/// Parses a line of text into a program.
///
/// Tokens are classified strictly left to right. The first token that is
/// neither an operator nor a number stops parsing; the error keeps what was
/// parsed before it and the tokens after it.
///
/// # Arguments
///
/// * `line`: A single line of space separated tokens, in postfix order.
///
/// returns: The parsed program.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), rpn_interpreter::interpreter::ParseError> {
/// use rpn_interpreter::interpreter::parser::parse_program;
///
/// let program = parse_program("3 4 -")?;
/// assert_eq!(program.to_string(), "3 4 -");
/// # Ok(()) }
/// ```
pub fn parse_program(line: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(line);
    debug!("parse_program: {:?}", tokens);

    let mut parsed = Program::new();
    let mut tokens = tokens.into_iter();
    while let Some(text) = tokens.next() {
        debug!("parse_token: {:?}", text);
        match text.parse::<Token>() {
            Ok(token) => parsed.push(token),
            Err(kind) => {
                return Err(ParseError {
                    kind,
                    parsed,
                    rest: tokens.map(str::to_string).collect(),
                })
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::error::ParseErrorKind;
    use crate::interpreter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_number_is_parsed() {
        assert_eq!(
            parse_program("0").unwrap(),
            Program::from(vec![Token::Number(0.0)])
        )
    }

    #[test]
    fn numbers_are_parsed_in_order() {
        assert_eq!(
            parse_program("0 0").unwrap(),
            Program::from(vec![Token::Number(0.0), Token::Number(0.0)])
        )
    }

    #[test]
    fn numbers_and_operators_keep_their_order() {
        assert_eq!(
            parse_program("0 0 +").unwrap(),
            Program::from(vec![
                Token::Number(0.0),
                Token::Number(0.0),
                Token::Operator(BinaryOperator::Add),
            ])
        )
    }

    #[test]
    fn all_operators_are_parsed() {
        assert_eq!(
            parse_program("+ - * /").unwrap(),
            Program::from(vec![
                Token::Operator(BinaryOperator::Add),
                Token::Operator(BinaryOperator::Subtract),
                Token::Operator(BinaryOperator::Multiply),
                Token::Operator(BinaryOperator::Divide),
            ])
        )
    }

    #[test]
    fn trailing_garbage_after_a_number_is_ignored() {
        assert_eq!(
            parse_program("1.5degrees 2 *").unwrap(),
            Program::from(vec![
                Token::Number(1.5),
                Token::Number(2.0),
                Token::Operator(BinaryOperator::Multiply),
            ])
        )
    }

    #[test]
    fn bad_token_keeps_parsed_prefix_and_drops_itself_from_rest() {
        let error = parse_program("1 2 x 3 +").unwrap_err();

        assert_eq!(
            error,
            ParseError {
                kind: ParseErrorKind::BadToken("x".to_string()),
                parsed: Program::from(vec![Token::Number(1.0), Token::Number(2.0)]),
                rest: vec!["3".to_string(), "+".to_string()],
            }
        )
    }

    #[test]
    fn bad_last_token_leaves_no_rest() {
        let error = parse_program("1 _").unwrap_err();

        assert_eq!(error.parsed, Program::from(vec![Token::Number(1.0)]));
        assert!(error.rest.is_empty());
    }

    #[test]
    fn empty_line_is_a_bad_token() {
        let error = parse_program("").unwrap_err();

        assert_eq!(error.kind, ParseErrorKind::BadToken(String::new()));
        assert!(error.parsed.is_empty());
    }

    #[test]
    fn double_space_is_a_bad_token() {
        let error = parse_program("1  2 +").unwrap_err();

        assert_eq!(error.kind, ParseErrorKind::BadToken(String::new()));
        assert_eq!(error.rest, vec!["2".to_string(), "+".to_string()]);
    }

    #[test]
    fn parsing_stops_at_first_bad_token() {
        let error = parse_program("a b").unwrap_err();

        assert_eq!(error.kind, ParseErrorKind::BadToken("a".to_string()));
        assert_eq!(error.rest, vec!["b".to_string()]);
    }
}
