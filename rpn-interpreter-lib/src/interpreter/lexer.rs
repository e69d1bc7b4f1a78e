/// Splits a line into tokens on single spaces.
///
/// Repeated spaces are not collapsed, so `"1  2"` yields an empty token
/// between the two numbers.
///
/// # Arguments
///
/// * `line`: A single line of text, without any newline character.
///
/// returns: The tokens of the line, in order.
///
/// # Examples
///
/// ```
/// use rpn_interpreter::interpreter::lexer::tokenize;
///
/// assert_eq!(tokenize("1 2 +"), vec!["1", "2", "+"]);
/// ```
pub fn tokenize(line: &str) -> Vec<&str> {
    debug_assert!(!line.contains('\n'), "a line can not contain a newline");
    line.split(' ').collect()
}
