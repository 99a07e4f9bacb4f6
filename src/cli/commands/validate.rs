//! validate and suggest commands - Luhn checks over one or more numbers

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::input;
use crate::cli::{Context, Outcome};
use crate::core::luhn::{self, ValidationResult};
use crate::ui::output;

#[derive(Debug, Serialize)]
struct ValidateReport<'a> {
    value: &'a str,
    is_valid: bool,
}

#[derive(Debug, Serialize)]
struct SuggestReport<'a> {
    value: &'a str,
    #[serde(flatten)]
    result: ValidationResult,
}

/// Check every value, reporting each one.
///
/// Returns `Outcome::Invalid` if any value fails. Malformed input aborts
/// the whole run with an error.
pub fn validate(ctx: &Context, values: Vec<String>) -> Result<Outcome> {
    let values = input::collect(values)?;
    let mut all_valid = true;

    for raw in &values {
        let value = input::prepare(ctx, raw);
        let (_, checksum) = luhn::checksum_pass(&value)
            .with_context(|| format!("Cannot validate '{}'", raw.trim()))?;
        output::debug(format!("Checksum of {} is {}", value, checksum), ctx.verbosity);

        let is_valid = luhn::is_valid(&value)?;
        all_valid &= is_valid;

        if ctx.json() {
            if ctx.verbosity != output::Verbosity::Quiet {
                output::json(&ValidateReport {
                    value: &value,
                    is_valid,
                })?;
            }
        } else {
            let result = ValidationResult {
                is_valid,
                suggested_digit: None,
            };
            output::print(output::format_validation(&value, &result), ctx.verbosity);
        }
    }

    Ok(Outcome::from_validity(all_valid))
}

/// Check every value, suggesting the correct check digit for failures.
pub fn suggest(ctx: &Context, values: Vec<String>) -> Result<Outcome> {
    let values = input::collect(values)?;
    let mut all_valid = true;

    for raw in &values {
        let value = input::prepare(ctx, raw);
        let result = luhn::validate_and_suggest(&value)
            .with_context(|| format!("Cannot check '{}'", raw.trim()))?;
        all_valid &= result.is_valid;

        if let Some(digit) = result.suggested_digit {
            output::debug(
                format!("Suggested check digit for {} is {}", value, digit),
                ctx.verbosity,
            );
        }

        if ctx.json() {
            if ctx.verbosity != output::Verbosity::Quiet {
                output::json(&SuggestReport {
                    value: &value,
                    result,
                })?;
            }
        } else {
            output::print(output::format_validation(&value, &result), ctx.verbosity);
        }
    }

    Ok(Outcome::from_validity(all_valid))
}
