//! check-digit and generate commands - Produce Luhn check digits

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::input;
use crate::cli::Context;
use crate::core::luhn;
use crate::core::types::CheckDigit;
use crate::ui::output;

#[derive(Debug, Serialize)]
struct CheckDigitReport<'a> {
    value: &'a str,
    check_digit: CheckDigit,
}

#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    value: &'a str,
    result: &'a str,
}

/// Print the check digit for a payload.
pub fn check_digit(ctx: &Context, value: &str) -> Result<()> {
    let payload = input::prepare(ctx, value);
    let digit = luhn::check_digit(&payload)
        .with_context(|| format!("Cannot compute check digit for '{}'", value.trim()))?;
    output::debug(format!("Check digit for {} is {}", payload, digit), ctx.verbosity);

    if ctx.json() {
        output::json(&CheckDigitReport {
            value: &payload,
            check_digit: digit,
        })?;
    } else {
        output::value(digit);
    }
    Ok(())
}

/// Print a payload followed by its check digit.
pub fn generate(ctx: &Context, value: &str) -> Result<()> {
    let payload = input::prepare(ctx, value);
    let full = luhn::append_check_digit(&payload)
        .with_context(|| format!("Cannot generate number from '{}'", value.trim()))?;

    if ctx.json() {
        output::json(&GenerateReport {
            value: &payload,
            result: &full,
        })?;
    } else {
        output::value(full);
    }
    Ok(())
}
