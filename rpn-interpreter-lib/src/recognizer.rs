use crate::interpreter::error::ERROR_MESSAGES;
use anyhow::{Context, Result};
use regex::Regex;

/// A result with two decimals, or a single-digit mantissa in scientific notation.
const NUMBER_PATTERN: &str = r"^-?([0-9]+\.[0-9][0-9]|[0-9]\.[0-9]+e(-|\+)[0-9]+)$";

/// Checks that interpreter output lines have one of the expected shapes.
#[derive(Debug, Clone)]
pub struct Recognizer {
    number: Regex,
    errors: Vec<String>,
}

impl Recognizer {
    pub fn new() -> Result<Recognizer> {
        let number = Regex::new(NUMBER_PATTERN).context("Invalid number pattern")?;
        let errors = ERROR_MESSAGES
            .iter()
            .map(|message| format!("ERROR: {}", message))
            .collect();
        Ok(Recognizer { number, errors })
    }

    /// Returns whether `line` is an empty line, a known error message,
    /// or a formatted number. A trailing newline is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn_interpreter::recognizer::Recognizer;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let recognizer = Recognizer::new()?;
    /// assert!(recognizer.recognize("-17.00\n"));
    /// assert!(!recognizer.recognize("-17"));
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn recognize(&self, line: &str) -> bool {
        let line = line.trim_end_matches('\n');
        line.is_empty()
            || self.errors.iter().any(|error| error == line)
            || self.number.is_match(line)
    }
}
