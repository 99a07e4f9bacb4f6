//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, results are printed as one JSON document per
//! line. Diagnostics (`[debug]`, `warning:`, `error:`) always go to stderr.

use std::fmt::Display;

use serde::Serialize;

use crate::core::luhn::ValidationResult;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a command's result value (always shown).
pub fn value(message: impl Display) {
    println!("{}", message);
}

/// Print a serializable result as a single JSON line.
pub fn json<T: Serialize>(result: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format a validation outcome for a value.
///
/// ```
/// use luhncheck::core::luhn::ValidationResult;
/// use luhncheck::ui::output::format_validation;
///
/// assert_eq!(format_validation("79927398713", &ValidationResult::valid()), "79927398713: valid");
/// ```
pub fn format_validation(value: &str, result: &ValidationResult) -> String {
    match (result.is_valid, result.suggested_digit) {
        (true, _) => format!("{}: valid", value),
        (false, Some(digit)) => format!("{}: invalid (expected check digit {})", value, digit),
        (false, None) => format!("{}: invalid", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CheckDigit;

    #[test]
    fn verbosity_quiet_wins() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn format_invalid_with_suggestion() {
        let result = ValidationResult::invalid(CheckDigit::new(4).unwrap());
        assert_eq!(
            format_validation("12345670", &result),
            "12345670: invalid (expected check digit 4)"
        );
    }

    #[test]
    fn format_invalid_without_suggestion() {
        let result = ValidationResult {
            is_valid: false,
            suggested_digit: None,
        };
        assert_eq!(format_validation("79927398711", &result), "79927398711: invalid");
    }
}
