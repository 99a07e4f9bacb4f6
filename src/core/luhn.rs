//! core::luhn
//!
//! The Luhn checksum engine.
//!
//! # Algorithm
//!
//! Digits are indexed from the right, starting at 0. Digits at odd indices
//! are doubled, and 9 is subtracted from any doubled value above 9. The
//! checksum is the sum of all transformed digits; a number is valid when the
//! checksum is a multiple of 10.
//!
//! # Operations
//!
//! - [`checksum_pass`] - The core transform
//! - [`is_valid`] - Luhn validity predicate
//! - [`check_digit`] / [`append_check_digit`] - Check digit generation
//! - [`strip_check_digit`] - Remove a trailing check digit
//! - [`validate_and_suggest`] - Validate, suggesting a correction if invalid
//! - [`normalize`] - Remove grouping separators before checking
//!
//! Every operation is a pure function of its input. Input is rejected, never
//! coerced: empty strings and non-digit characters are errors.
//!
//! # Example
//!
//! ```
//! use luhncheck::core::luhn;
//!
//! assert!(luhn::is_valid("79927398713").unwrap());
//! assert_eq!(luhn::append_check_digit("7992739871").unwrap(), "79927398713");
//! assert_eq!(luhn::strip_check_digit("79927398713").unwrap(), "7992739871");
//! ```

use std::iter;

use serde::{Deserialize, Serialize};

use super::types::{ensure_digits, CheckDigit, LuhnError};

/// Outcome of [`validate_and_suggest`].
///
/// `suggested_digit` is present only when the value is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the value passed the Luhn check.
    pub is_valid: bool,
    /// Check digit that would make the payload valid.
    pub suggested_digit: Option<CheckDigit>,
}

impl ValidationResult {
    /// Result for a value that passed.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            suggested_digit: None,
        }
    }

    /// Result for a value that failed, with the digit that fixes it.
    pub fn invalid(suggested: CheckDigit) -> Self {
        Self {
            is_valid: false,
            suggested_digit: Some(suggested),
        }
    }
}

/// Transform a single digit according to its index from the right.
fn weigh(index: usize, digit: u8) -> u64 {
    let digit = u64::from(digit);
    if index % 2 == 1 {
        let doubled = digit * 2;
        if doubled > 9 {
            doubled - 9
        } else {
            doubled
        }
    } else {
        digit
    }
}

/// Sum transformed digits, given bytes ordered left to right.
///
/// Callers guarantee every byte is an ASCII digit.
fn sum_digits<I>(digits: I) -> u64
where
    I: DoubleEndedIterator<Item = u8>,
{
    digits
        .rev()
        .enumerate()
        .map(|(index, byte)| weigh(index, byte - b'0'))
        .sum()
}

/// Checksum of an already-validated digit string.
pub(crate) fn checksum_of(digits: &str) -> u64 {
    sum_digits(digits.bytes())
}

/// Check digit of an already-validated payload.
///
/// A `'0'` placeholder occupies index 0 so every payload digit gets the
/// parity it will have once the check digit is appended.
pub(crate) fn check_digit_of(payload: &str) -> CheckDigit {
    let checksum = sum_digits(payload.bytes().chain(iter::once(b'0')));
    CheckDigit::from_checksum(checksum)
}

/// Run one pass of the Luhn transform.
///
/// Returns the input unchanged together with its checksum.
///
/// # Errors
///
/// Returns `LuhnError::Empty` for an empty string and `LuhnError::NonDigit`
/// if any character is not an ASCII digit.
///
/// # Example
///
/// ```
/// use luhncheck::core::luhn::checksum_pass;
///
/// let (value, checksum) = checksum_pass("79927398713").unwrap();
/// assert_eq!(value, "79927398713");
/// assert_eq!(checksum, 70);
/// ```
pub fn checksum_pass(value: &str) -> Result<(&str, u64), LuhnError> {
    ensure_digits(value)?;
    Ok((value, checksum_of(value)))
}

/// Check whether `value` passes the Luhn check.
///
/// # Errors
///
/// Fails on empty or non-digit input.
pub fn is_valid(value: &str) -> Result<bool, LuhnError> {
    let (_, checksum) = checksum_pass(value)?;
    Ok(checksum % 10 == 0)
}

/// Compute the check digit for a payload.
///
/// # Errors
///
/// Fails on empty or non-digit input.
///
/// # Example
///
/// ```
/// use luhncheck::core::luhn::check_digit;
///
/// assert_eq!(check_digit("7992739871").unwrap().to_string(), "3");
/// assert_eq!(check_digit("1234567").unwrap().to_string(), "4");
/// ```
pub fn check_digit(value: &str) -> Result<CheckDigit, LuhnError> {
    ensure_digits(value)?;
    Ok(check_digit_of(value))
}

/// Return `value` followed by its check digit.
///
/// The result always satisfies [`is_valid`].
///
/// # Errors
///
/// Fails on empty or non-digit input.
pub fn append_check_digit(value: &str) -> Result<String, LuhnError> {
    let digit = check_digit(value)?;
    let mut out = String::with_capacity(value.len() + 1);
    out.push_str(value);
    out.push(digit.as_char());
    Ok(out)
}

/// Remove the trailing check digit from `value`.
///
/// # Errors
///
/// Returns `LuhnError::TooShort` if `value` has fewer than 2 characters,
/// and `LuhnError::NonDigit` for non-digit input.
pub fn strip_check_digit(value: &str) -> Result<String, LuhnError> {
    let len = value.chars().count();
    if len < 2 {
        return Err(LuhnError::TooShort { len });
    }
    ensure_digits(value)?;

    // All ASCII past this point, so byte slicing is safe.
    Ok(value[..value.len() - 1].to_string())
}

/// Validate `value` and, if it fails, suggest the check digit that fixes it.
///
/// The suggestion treats the last character as the check digit and
/// recomputes it from the remaining payload.
///
/// # Errors
///
/// Fails on empty or non-digit input. An invalid single-digit value has no
/// payload to compute a suggestion from and fails with `LuhnError::TooShort`.
///
/// # Example
///
/// ```
/// use luhncheck::core::luhn::{validate_and_suggest, ValidationResult};
/// use luhncheck::core::types::CheckDigit;
///
/// assert_eq!(validate_and_suggest("79927398713").unwrap(), ValidationResult::valid());
/// assert_eq!(
///     validate_and_suggest("12345670").unwrap(),
///     ValidationResult::invalid(CheckDigit::new(4).unwrap())
/// );
/// ```
pub fn validate_and_suggest(value: &str) -> Result<ValidationResult, LuhnError> {
    if is_valid(value)? {
        return Ok(ValidationResult::valid());
    }

    let payload = strip_check_digit(value)?;
    Ok(ValidationResult::invalid(check_digit_of(&payload)))
}

/// Remove every character in `separators` from `input`.
///
/// Other characters are left in place, so anything that is neither a digit
/// nor a separator is still rejected by the checks that follow.
///
/// ```
/// use luhncheck::core::luhn::normalize;
///
/// assert_eq!(normalize("4532 0151-1283 0366", " -"), "4532015112830366");
/// assert_eq!(normalize("12a", " -"), "12a");
/// ```
pub fn normalize(input: &str, separators: &str) -> String {
    input.chars().filter(|c| !separators.contains(*c)).collect()
}
