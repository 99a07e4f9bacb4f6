//! strip and checksum commands - Inspect an existing number

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::input;
use crate::cli::Context;
use crate::core::luhn;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct StripReport<'a> {
    value: &'a str,
    result: &'a str,
}

#[derive(Debug, Serialize)]
struct ChecksumReport<'a> {
    value: &'a str,
    checksum: u64,
    is_valid: bool,
}

/// Print a number without its trailing check digit.
pub fn strip(ctx: &Context, value: &str) -> Result<()> {
    let number = input::prepare(ctx, value);
    let payload = luhn::strip_check_digit(&number)
        .with_context(|| format!("Cannot strip check digit from '{}'", value.trim()))?;

    if ctx.json() {
        output::json(&StripReport {
            value: &number,
            result: &payload,
        })?;
    } else {
        output::value(payload);
    }
    Ok(())
}

/// Print the raw Luhn checksum of a number.
pub fn checksum(ctx: &Context, value: &str) -> Result<()> {
    let number = input::prepare(ctx, value);
    let (number, checksum) = luhn::checksum_pass(&number)
        .with_context(|| format!("Cannot compute checksum of '{}'", value.trim()))?;

    if ctx.json() {
        output::json(&ChecksumReport {
            value: number,
            checksum,
            is_valid: checksum % 10 == 0,
        })?;
    } else {
        output::value(checksum);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_requires_two_digits() {
        let err = strip(&Context::default(), "7").unwrap_err();
        assert!(format!("{:#}", err).contains("at least 2 digits"));
    }

    #[test]
    fn strip_ok() {
        assert!(strip(&Context::default(), "79927398713").is_ok());
    }

    #[test]
    fn checksum_rejects_empty() {
        assert!(checksum(&Context::default(), "").is_err());
    }

    #[test]
    fn checksum_report_shape() {
        let report = ChecksumReport {
            value: "79927398713",
            checksum: 70,
            is_valid: true,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "value": "79927398713", "checksum": 70, "is_valid": true })
        );
    }
}
