use crate::interpreter::{interpret, LineError};
use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

/// How many lines a run processed, and how many of them failed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn succeeded(&self) -> bool {
        self.failed == 0
    }

    /// `0` when every line succeeded, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.succeeded() {
            0
        } else {
            1
        }
    }
}

/// Interprets each line of `input`, writing one output line per input line.
///
/// Processing stops at the first empty line; anything after it is ignored.
///
/// # Arguments
///
/// * `input`: The full input text, lines separated by `\n`.
/// * `output`: Where results and error messages are written.
///
/// returns: A summary of the processed lines.
///
/// # Examples
///
/// ```
/// use rpn_interpreter::driver::run;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let mut output = Vec::new();
/// let summary = run("3 4 -\n1 +\n", &mut output)?;
///
/// assert_eq!(String::from_utf8(output)?, "-1.00\nERROR: Empty stack!\n");
/// assert_eq!(summary.exit_code(), 1);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn run(input: &str, output: &mut impl Write) -> Result<Summary> {
    let mut summary = Summary::default();

    for line in input.split('\n') {
        if line.is_empty() {
            break;
        }
        debug!("line: {}", line);
        let result = interpret(line);
        debug!("done: {:?}", result);

        summary.processed += 1;
        let message = match result {
            Ok(value) => format_result(value),
            Err(error) => {
                summary.failed += 1;
                error_message(&error)
            }
        };
        writeln!(output, "{}", message)
            .with_context(|| format!("Failed to write the result of '{}'", line))?;
    }

    debug!("exit: {}", summary.exit_code());
    Ok(summary)
}

/// Formats a value with exactly two decimals, rounding halves away from zero.
///
/// Negative zero is shown as `0.00`, and non-finite values as
/// `NaN`, `Infinity` or `-Infinity`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        format!("{:.2}", 0.0)
    } else if let Some(cents) = halfway_cents(value.abs()) {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    } else {
        format!("{:.2}", value)
    }
}

/// The magnitude in hundredths, rounded up, if it lies exactly halfway
/// between two hundredths. `{:.2}` would round such values to even.
///
/// A binary float is an exact hundredths tie only when it is an odd
/// multiple of 1/8, e.g. `0.125` or `1.375`.
fn halfway_cents(magnitude: f64) -> Option<u64> {
    let eighths = magnitude * 8.0;
    let is_odd_integer = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;
    if is_odd_integer && eighths < 2f64.powi(53) {
        Some((25 * eighths as u64 + 1) / 2)
    } else {
        None
    }
}

pub fn error_message(error: &LineError) -> String {
    format!("ERROR: {}", error)
}
