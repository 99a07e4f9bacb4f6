//! Input gathering and normalization shared by command handlers.

use std::io::{self, BufRead};

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::luhn;
use crate::ui::output;

/// Trim surrounding whitespace and strip configured separators.
///
/// Any other non-digit character is kept so the engine reports it.
pub(crate) fn prepare(ctx: &Context, raw: &str) -> String {
    let value = luhn::normalize(raw.trim(), &ctx.separators);
    if value != raw {
        output::debug(format!("Normalized '{}' to '{}'", raw, value), ctx.verbosity);
    }
    value
}

/// Use the given values, or read them from stdin if none were given.
pub(crate) fn collect(values: Vec<String>) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    read_lines(io::stdin().lock())
}

/// Read one value per line, skipping blank lines.
pub(crate) fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read standard input")?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }

    if values.is_empty() {
        bail!("No numbers given. Pass them as arguments or on standard input.");
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prepare_strips_default_separators() {
        let ctx = Context::default();
        assert_eq!(prepare(&ctx, " 4532 0151-1283 0366\n"), "4532015112830366");
    }

    #[test]
    fn prepare_keeps_other_characters() {
        let ctx = Context::default();
        assert_eq!(prepare(&ctx, "12.34"), "12.34");
    }

    #[test]
    fn prepare_custom_separators() {
        let ctx = Context {
            separators: ".".to_string(),
            ..Context::default()
        };
        assert_eq!(prepare(&ctx, "12.34"), "1234");
        assert_eq!(prepare(&ctx, "12-34"), "12-34");
    }

    #[test]
    fn collect_prefers_arguments() {
        let values = collect(vec!["123".to_string()]).unwrap();
        assert_eq!(values, ["123"]);
    }

    #[test]
    fn read_lines_skips_blank() {
        let values = read_lines(Cursor::new("79927398713\n\n  \n12345674\n")).unwrap();
        assert_eq!(values, ["79927398713", "12345674"]);
    }

    #[test]
    fn read_lines_handles_crlf() {
        let values = read_lines(Cursor::new("79927398713\r\n")).unwrap();
        let ctx = Context::default();
        assert_eq!(prepare(&ctx, &values[0]), "79927398713");
    }

    #[test]
    fn read_lines_empty_is_error() {
        assert!(read_lines(Cursor::new("\n\n")).is_err());
    }
}
